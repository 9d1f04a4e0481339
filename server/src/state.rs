//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers and the session gate via the
//! `State` extractor. The session provider is held behind a trait object so
//! gate and extractor behavior can be exercised without Postgres.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ServerConfig;
use crate::services::gate::{PgSessionProvider, SessionProvider};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub sessions: Arc<dyn SessionProvider>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State backed by the Postgres session provider.
    #[must_use]
    pub fn new(pool: PgPool, config: ServerConfig) -> Self {
        let sessions = Arc::new(PgSessionProvider::new(pool.clone()));
        Self { pool, sessions, config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
