//! Session gate for protected dashboard pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate runs before Leptos renders a protected route. Its decision is a
//! pure function of the resolved session, so no protected markup is produced
//! for a caller without one. Session lookup goes through [`SessionProvider`]
//! so the gate can be exercised without a database.

use sqlx::PgPool;

use super::session::{self, SessionUser};

/// Where unauthenticated callers are sent.
pub const SIGN_IN_PATH: &str = "/signin";

/// Route prefixes that require a session. A prefix matches itself and any
/// path below it.
const PROTECTED_PREFIXES: &[&str] = &["/dashboard", "/files", "/help", "/settings"];

/// Capability to resolve a session token into a user and to end it.
#[async_trait::async_trait]
pub trait SessionProvider: Send + Sync {
    /// Look up the user for `token`. `Ok(None)` means no live session.
    ///
    /// # Errors
    ///
    /// Returns the backing store's error if the lookup itself fails.
    async fn current_session(&self, token: &str) -> Result<Option<SessionUser>, sqlx::Error>;

    /// End the session for `token`. Ending an unknown or expired session
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns the backing store's error if the delete itself fails.
    async fn end_session(&self, token: &str) -> Result<(), sqlx::Error>;
}

/// Postgres-backed session provider.
#[derive(Clone)]
pub struct PgSessionProvider {
    pool: PgPool,
}

impl PgSessionProvider {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl SessionProvider for PgSessionProvider {
    async fn current_session(&self, token: &str) -> Result<Option<SessionUser>, sqlx::Error> {
        session::validate_session(&self.pool, token).await
    }

    async fn end_session(&self, token: &str) -> Result<(), sqlx::Error> {
        session::delete_session(&self.pool, token).await
    }
}

/// Outcome of gating one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderDecision {
    /// Render the protected content for this user.
    Render { user: SessionUser },
    /// Send the caller elsewhere without rendering anything.
    Redirect { to: &'static str },
}

impl RenderDecision {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::Render { .. })
    }
}

/// Decide whether protected content may render.
#[must_use]
pub fn guard(session: Option<SessionUser>) -> RenderDecision {
    match session {
        Some(user) => RenderDecision::Render { user },
        None => RenderDecision::Redirect { to: SIGN_IN_PATH },
    }
}

/// Resolve the caller's session. Missing tokens and failed lookups both
/// resolve to `None`.
pub async fn resolve_session(provider: &dyn SessionProvider, token: Option<&str>) -> Option<SessionUser> {
    let token = token.filter(|t| !t.is_empty())?;
    match provider.current_session(token).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(error = %e, "session lookup failed; treating caller as signed out");
            None
        }
    }
}

/// Whether `path` belongs to the gated dashboard area.
#[must_use]
pub fn is_protected_path(path: &str) -> bool {
    PROTECTED_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
