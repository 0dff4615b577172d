//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the small JSON API and stitches it with Leptos SSR
//! rendering under a single Axum router. The route guard runs inside the
//! Leptos render, so protected pages never need an Axum-level check.

pub mod session;

use std::path::PathBuf;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use client::app::{App, shell};
use client::config::RuntimeConfig;
use client::net::types::ApiResponse;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/config", get(runtime_config))
        .route("/api/session", get(session::current).delete(session::clear))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// API routes + Leptos SSR app + static `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let runtime = state.config.runtime.clone();

    let routes = generate_route_list({
        let runtime = runtime.clone();
        move || view! { <App config=runtime.clone()/> }
    });

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone(), runtime.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

/// `GET /api/config`: the public runtime config the browser app runs with.
async fn runtime_config(State(state): State<AppState>) -> Json<ApiResponse<RuntimeConfig>> {
    Json(ApiResponse::success("", state.config.runtime.clone()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
