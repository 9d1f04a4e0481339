//! Auth routes: current user, logout, development sign-in.

use axum::Form;
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::services::session::{self, SessionUser};
use crate::services::user::{self, NewUser};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

/// Where a fresh session lands.
pub(crate) const POST_SIGN_IN_PATH: &str = "/dashboard";

/// Session token from the request cookies, if any.
pub(crate) fn session_token(jar: &CookieJar) -> Option<&str> {
    jar.get(COOKIE_NAME)
        .map(Cookie::value)
        .filter(|t| !t.is_empty())
}

pub(crate) fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

pub(crate) fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = session_token(&jar).ok_or(StatusCode::UNAUTHORIZED)?;

        let app_state = AppState::from_ref(state);
        let user = app_state
            .sessions
            .current_session(token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/me`: return current user.
pub async fn me(auth: AuthUser) -> Json<SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: end the session named by the cookie, if any, and
/// clear the cookie. A missing, expired or already-ended session still
/// answers 204 so the browser always ends up signed out.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(token) = session_token(&jar) {
        if let Err(e) = state.sessions.end_session(token).await {
            tracing::error!(error = %e, "session delete failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    }
    tracing::info!("signed out");

    let jar = jar.add(cleared_session_cookie(state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT).into_response()
}

#[derive(Debug, Deserialize)]
pub struct DevSessionForm {
    pub email: String,
    #[serde(default)]
    pub name: String,
}

/// `POST /api/auth/dev-session`: sign in as any email without an identity
/// provider.
///
/// Enabled only when `DEV_AUTH_BYPASS=true`.
pub async fn dev_session(State(state): State<AppState>, Form(form): Form<DevSessionForm>) -> Response {
    if !state.config.dev_auth_bypass {
        return StatusCode::NOT_FOUND.into_response();
    }

    let Some(email) = user::normalize_email(&form.email) else {
        return (StatusCode::BAD_REQUEST, "invalid email").into_response();
    };
    let profile = NewUser { name: user::display_name(&form.name, &email), email, image: None };

    let user_id = match user::upsert_user(&state.pool, &profile).await {
        Ok(id) => id,
        Err(e) => {
            tracing::error!(error = %e, "user upsert failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create user").into_response();
        }
    };

    let token = match session::create_session(&state.pool, user_id).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create session").into_response();
        }
    };
    tracing::info!(%user_id, "dev session created");

    let jar = CookieJar::new().add(session_cookie(token, state.config.cookie_secure));
    (jar, Redirect::to(POST_SIGN_IN_PATH)).into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
