//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::{JwtTokenVerifier, SessionService};
use crate::config::SiteConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; owns the connection pool and the session
/// verification service.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    pool: PgPool,
    tokens: Arc<JwtTokenVerifier>,
    sessions: SessionService,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: SiteConfig, pool: PgPool) -> Self {
        let tokens = Arc::new(JwtTokenVerifier::new(&config.session_secret));
        let sessions = SessionService::new(tokens.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                tokens,
                sessions,
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the token issuer.
    #[must_use]
    pub fn tokens(&self) -> &JwtTokenVerifier {
        &self.inner.tokens
    }

    /// Get a reference to the session verification service.
    #[must_use]
    pub fn sessions(&self) -> &SessionService {
        &self.inner.sessions
    }
}
