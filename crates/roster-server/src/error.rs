//! Error types for the Roster server binary.
//!
//! [`StartupError`] wraps every failure that can stop the service from
//! coming up. Any of them is fatal: `main` logs it and exits.

/// Top-level startup error.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// The database could not be opened or its schema created.
    #[error("database error: {source}")]
    Database {
        /// The underlying data layer error.
        #[from]
        source: roster_db::DbError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: roster_api::ServerError,
    },
}
