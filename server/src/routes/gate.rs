//! Session gate middleware for server-rendered pages.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use super::auth::{POST_SIGN_IN_PATH, session_token};
use crate::services::gate::{self, RenderDecision};
use crate::state::AppState;

/// Gate protected paths on a live session before anything renders.
///
/// Callers without a session get a single temporary redirect to the sign-in
/// page. Callers with one continue with their [`SessionUser`] attached as a
/// request extension. A signed-in caller asking for the sign-in page is sent
/// to the dashboard instead.
///
/// [`SessionUser`]: crate::services::session::SessionUser
pub async fn require_session(State(state): State<AppState>, jar: CookieJar, mut req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();

    if path == gate::SIGN_IN_PATH {
        if gate::resolve_session(state.sessions.as_ref(), session_token(&jar)).await.is_some() {
            return Redirect::temporary(POST_SIGN_IN_PATH).into_response();
        }
        return next.run(req).await;
    }

    if !gate::is_protected_path(&path) {
        return next.run(req).await;
    }

    let session = gate::resolve_session(state.sessions.as_ref(), session_token(&jar)).await;
    let decision = gate::guard(session);
    tracing::debug!(%path, logged_in = decision.is_logged_in(), "session gate");
    match decision {
        RenderDecision::Render { user } => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        RenderDecision::Redirect { to } => Redirect::temporary(to).into_response(),
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
