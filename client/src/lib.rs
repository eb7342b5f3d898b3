//! # client
//!
//! Leptos + WASM frontend for the single-page portfolio.
//!
//! The crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Its two stateful parts, the theme preference store and the
//! per-section reveal controllers, live in `state` as plain Rust behind
//! trait seams; `util` holds the browser adapters for those seams and
//! `components` binds both to the page.

pub mod app;
pub mod components;
pub mod content;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
