//! Root application component and the server-rendered document shell.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::{
    about::About, contact::Contact, education::Education, footer::Footer, hero::Hero,
    navigation::Navigation, projects::Projects, skills::Skills, theme_provider::provide_theme,
};
use crate::content::{FIRST_NAME, LAST_NAME, ROLE};
use crate::util::theme_root::boot_script;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The inline boot script runs before first paint so the persisted theme is
/// applied before any content shows.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=boot_script()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Page shell. Owns the single theme store for the page lifetime.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_theme();

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=format!("{FIRST_NAME} {LAST_NAME} | Portfolio")/>
        <Meta name="description" content=format!("{FIRST_NAME} {LAST_NAME}, {ROLE}.")/>

        <Navigation/>
        <main>
            <Hero/>
            <About/>
            <Education/>
            <Skills/>
            <Projects/>
            <Contact/>
        </main>
        <Footer/>
    }
}
