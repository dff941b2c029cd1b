//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds the database connection pool and
//! the validation rules applied to incoming payloads.

use sea_orm::DatabaseConnection;

use crate::server::validation::ValidationRules;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `ValidationRules` is a small `Copy` value
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Limits applied when validating registration and loading payloads.
    pub rules: ValidationRules,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `rules` - Validation limits for request payloads
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, rules: ValidationRules) -> Self {
        Self { db, rules }
    }
}
