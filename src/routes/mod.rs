//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page is rendered by Leptos SSR at `/`. Compiled client assets are served
//! from the Leptos site root under `/pkg`, and everything else falls through
//! to the static asset directory.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Health probe plus static assets. Independent of Leptos configuration.
pub fn base_routes(site_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(site_dir).append_index_html_on_directories(false))
}

/// Full application router built from the `[package.metadata.leptos]` config.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    Ok(app_with_options(config, conf.leptos_options))
}

/// SSR page + `/pkg` + static fallback for explicit Leptos options.
pub fn app_with_options(config: &ServerConfig, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    leptos_router
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(base_routes(&config.site_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
