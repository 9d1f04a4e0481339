//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it together with Leptos SSR
//! rendering under a single Axum router. Every server-rendered page passes
//! through the session gate; API routes authenticate per handler through the
//! `AuthUser` extractor.

pub mod auth;
pub mod gate;
pub mod projects;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::middleware;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use client::net::types::User;
use client::state::auth::AuthState;

use crate::services::session::SessionUser;
use crate::state::AppState;

/// JSON API routes.
pub(crate) fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/dev-session", post(auth::dev_session))
        .route("/api/projects", get(projects::list_projects).post(projects::create_project))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Wrap server-rendered pages in the session gate.
pub(crate) fn gated(pages: Router, state: AppState) -> Router {
    pages.layer(middleware::from_fn_with_state(state, gate::require_session))
}

/// API routes + gated Leptos SSR pages + static `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let pages = Router::new()
        .leptos_routes_with_context(&leptos_options, routes, provide_session_context, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(gated(pages, state.clone())
        .merge(api_routes(state))
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Client auth state for a caller the session gate let through.
pub(crate) fn signed_in_auth_state(user: &SessionUser) -> AuthState {
    AuthState {
        user: Some(User {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            image: user.image.clone(),
        }),
        loading: false,
    }
}

/// Runs inside each SSR render. When the gate attached a [`SessionUser`] to
/// the request, the app starts signed in instead of pending.
pub(crate) fn provide_session_context() {
    let user = use_context::<Parts>().and_then(|parts| parts.extensions.get::<SessionUser>().cloned());
    if let Some(user) = user {
        provide_context(signed_in_auth_state(&user));
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
