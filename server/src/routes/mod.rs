//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the health check, Leptos SSR rendering, and the
//! compiled WASM/CSS assets under a single Axum router. Every route shares
//! the gzip and request-trace layers.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};


/// Routes that do not depend on the Leptos build.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Leptos SSR frontend plus static assets at `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = config
        .site_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(leptos_options.site_root.as_ref()));
    tracing::info!(site_root = %site_root.display(), "serving static assets");

    Ok(with_layers(
        base_routes()
            .merge(leptos_router)
            .nest_service("/pkg", ServeDir::new(site_root.join("pkg"))),
    ))
}

/// Gzip responses and emit a tracing span per request.
pub fn with_layers(router: Router) -> Router {
    router.layer(CompressionLayer::new()).layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
