//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared resources cloned into every handler through Axum's state extraction.
///
/// `DatabaseConnection` is a pool handle, so clones share the same connections.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Whether `POST /api/auth/login` may place a user into the session without an
    /// external identity provider.
    pub dev_login: bool,
}

impl AppState {
    pub fn new(db: DatabaseConnection, dev_login: bool) -> Self {
        Self { db, dev_login }
    }
}
