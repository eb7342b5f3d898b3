//! Page footer.

use leptos::prelude::*;

use crate::content::{EMAIL, FIRST_NAME, LAST_NAME, SECTION_LINKS, SOCIAL_LINKS};
use crate::util::clock::current_year;
use crate::util::scroll::{scroll_to_section, section_id};

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="footer">
            <div class="section__inner footer__grid">
                <div class="footer__brand">
                    <p class="footer__name">{FIRST_NAME} <span class="nav__dot">"."</span></p>
                    <p class="footer__blurb">"Computer Science student building for the web."</p>
                </div>

                <nav class="footer__links" aria-label="Quick links">
                    {SECTION_LINKS
                        .iter()
                        .map(|link| {
                            let href = link.href;
                            view! {
                                <a
                                    href=href
                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                        ev.prevent_default();
                                        scroll_to_section(section_id(href));
                                    }
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="footer__social">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href target="_blank" rel="noopener noreferrer">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href=format!("mailto:{EMAIL}")>{EMAIL}</a>
                </div>
            </div>

            <p class="footer__copyright">
                {format!("© {year} {FIRST_NAME} {LAST_NAME}. All rights reserved.")}
            </p>
        </footer>
    }
}
