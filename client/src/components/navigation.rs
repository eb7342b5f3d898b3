//! Fixed top navigation with section anchors and the theme toggle.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::{FIRST_NAME, SECTION_LINKS};
use crate::util::scroll::{scroll_to_section, section_id};

#[component]
pub fn Navigation() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <header class="nav">
            <nav class="nav__inner">
                <a
                    href="#hero"
                    class="nav__brand"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        scroll_to_section("hero");
                    }
                >
                    {FIRST_NAME}
                    <span class="nav__dot">"."</span>
                </a>

                <ul class="nav__links" class:is-open=move || menu_open.get()>
                    {SECTION_LINKS
                        .iter()
                        .map(|link| {
                            let href = link.href;
                            view! {
                                <li>
                                    <a
                                        class="nav__link"
                                        href=href
                                        on:click=move |ev: leptos::ev::MouseEvent| {
                                            ev.prevent_default();
                                            menu_open.set(false);
                                            scroll_to_section(section_id(href));
                                        }
                                    >
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="nav__actions">
                    <ThemeToggle/>
                    <button
                        class="btn nav__menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>
        </header>
    }
}
