//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the dashboard layout to gate the sidebar and to coordinate the
//! client-side sign-in redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// Serializable so a server render can hand its resolved state to hydration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State before the session check has answered.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        !self.loading && self.user.is_some()
    }
}
