//! Light/dark toggle button, the only writer of the theme mode.

use leptos::prelude::*;

use crate::components::theme_provider::use_theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let is_dark = move || theme.effective.get().is_dark();
    let label = move || if is_dark() { "Switch to light theme" } else { "Switch to dark theme" };

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| theme.toggle()
            title=move || format!("Theme: {}", theme.mode.get())
            aria-label=label
        >
            {move || if is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
