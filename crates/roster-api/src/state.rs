//! Shared application state for the student API.

use std::sync::Arc;

use roster_db::SqlitePool;

use crate::store::StudentStore;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Debug)]
pub struct AppState {
    /// The in-memory student registry every handler works against.
    pub store: StudentStore,
    /// Database handle opened at startup. Held, never queried.
    pub database: Option<SqlitePool>,
}

impl AppState {
    /// Create application state with an empty store and no database.
    pub fn new() -> Self {
        Self {
            store: StudentStore::new(),
            database: None,
        }
    }

    /// Create application state holding an open database handle.
    pub fn with_database(database: SqlitePool) -> Self {
        Self {
            store: StudentStore::new(),
            database: Some(database),
        }
    }

    /// Convenience for wrapping in an [`Arc`].
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
