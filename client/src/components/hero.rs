//! Landing section. Reveals on mount rather than on scroll.

use leptos::prelude::*;

use crate::components::reveal::{reveal_style, use_mount_reveal};
use crate::content::{EMAIL, FIRST_NAME, LAST_NAME, ROLE, SOCIAL_LINKS, TAGLINE};
use crate::state::reveal::RevealOptions;
use crate::util::scroll::scroll_to_section;

fn initials() -> String {
    [FIRST_NAME, LAST_NAME].iter().filter_map(|name| name.chars().next()).collect()
}

#[component]
pub fn Hero() -> impl IntoView {
    let revealed = use_mount_reveal();

    view! {
        <section id="hero" class="section hero">
            <div class="hero__backdrop" aria-hidden="true"></div>
            <div class="section__inner hero__grid">
                <div class="hero__text reveal reveal--from-below" class:is-visible=revealed>
                    <p class="section__eyebrow">"<Hello, I'm />"</p>
                    <h1 class="hero__name">
                        {FIRST_NAME} " " <span class="text-gradient">{LAST_NAME}</span>
                    </h1>
                    <p class="hero__role">{ROLE}</p>
                    <p class="hero__tagline">{TAGLINE}</p>

                    <div class="hero__actions">
                        <button class="btn btn--primary" on:click=move |_| scroll_to_section("projects")>
                            "View My Work"
                        </button>
                        <button class="btn btn--outline" on:click=move |_| scroll_to_section("contact")>
                            "Get In Touch"
                        </button>
                    </div>

                    <div class="social-links">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        class="social-links__item"
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.label
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a class="social-links__item" href=format!("mailto:{EMAIL}") aria-label="Email">
                            "Email"
                        </a>
                    </div>
                </div>

                <div
                    class="hero__portrait reveal reveal--from-right"
                    class:is-visible=revealed
                    style=reveal_style(RevealOptions::default().with_delay_ms(300))
                >
                    <div class="hero__photo" role="img" aria-label=format!("{FIRST_NAME} {LAST_NAME}")>
                        {initials()}
                    </div>
                    <div class="hero__badge">
                        <span class="hero__badge-dot"></span>
                        "Available for work"
                    </div>
                    <code class="hero__snippet">"const passion = \"code\";"</code>
                </div>
            </div>
        </section>
    }
}
