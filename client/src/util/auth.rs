//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server gate already refuses protected pages without a session. These
//! helpers repeat the check in the browser so a session that ends while the
//! page is open (logout, expiry) takes the user back to sign-in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::toast::Notice;

pub const SIGN_IN_PATH: &str = "/signin";
pub const LOGOUT_SUCCESS_MESSAGE: &str = "Logged out successfully!";

/// True once auth has loaded and no user is present.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to the sign-in page whenever [`should_redirect_unauth`] holds.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(SIGN_IN_PATH, NavigateOptions::default());
        }
    });
}

/// Result of one logout click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoutOutcome {
    pub signed_out: bool,
    pub notice: Notice,
}

/// Call `sign_out` exactly once and describe the result as one notice.
pub async fn run_logout<F, Fut>(sign_out: F) -> LogoutOutcome
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    match sign_out().await {
        Ok(()) => LogoutOutcome { signed_out: true, notice: Notice::success(LOGOUT_SUCCESS_MESSAGE) },
        Err(e) => LogoutOutcome { signed_out: false, notice: Notice::error(format!("Logout failed: {e}")) },
    }
}
