//! `SQLite` connection handling.
//!
//! Uses [`sqlx`] with runtime query construction (not compile-time
//! checked) so no live database is needed at build time. The database
//! file is created on first open.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::DbError;

/// Path that selects a private in-memory database instead of a file.
pub const IN_MEMORY: &str = ":memory:";

/// Default database file, relative to the working directory.
const DEFAULT_PATH: &str = "./students.db";

/// Default maximum number of connections in the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 1;

/// Default connection timeout in seconds.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// DDL for the `students` table.
pub const STUDENTS_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    age INTEGER,
    email TEXT
)";

/// Configuration for the `SQLite` connection pool.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Database file path, or [`IN_MEMORY`].
    pub path: String,
    /// Maximum number of connections in the pool.
    pub max_connections: u32,
    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl SqliteConfig {
    /// Create a new configuration for the given database path.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_owned(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Configuration for a private in-memory database.
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY)
    }

    /// Set the maximum number of connections.
    #[must_use]
    pub const fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    fn connect_options(&self) -> Result<SqliteConnectOptions, DbError> {
        if self.path.is_empty() {
            return Err(DbError::Config("database path is empty".to_owned()));
        }
        if self.path == IN_MEMORY {
            return SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::Config(format!("Invalid in-memory options: {e}")));
        }
        Ok(SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true))
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

/// Connection pool handle to `SQLite`.
#[derive(Clone, Debug)]
pub struct SqlitePool {
    pool: sqlx::SqlitePool,
}

impl SqlitePool {
    /// Open the database described by `config`, creating the file if needed.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Config`] for an empty path, or
    /// [`DbError::Sqlite`] if the file cannot be opened.
    pub async fn connect(config: &SqliteConfig) -> Result<Self, DbError> {
        let connect_options = config.connect_options()?;

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect_with(connect_options)
            .await?;

        tracing::info!(
            path = config.path,
            max_connections = config.max_connections,
            "Opened SQLite database"
        );

        Ok(Self { pool })
    }

    /// Create the `students` table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the DDL fails.
    pub async fn init_schema(&self) -> Result<(), DbError> {
        sqlx::query(STUDENTS_SCHEMA).execute(&self.pool).await?;
        tracing::info!("Database schema ready");
        Ok(())
    }

    /// Return a reference to the underlying [`sqlx::SqlitePool`].
    pub const fn pool(&self) -> &sqlx::SqlitePool {
        &self.pool
    }

    /// Close all connections in the pool gracefully.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("SQLite pool closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_students_db() {
        let config = SqliteConfig::default();
        assert_eq!(config.path, "./students.db");
        assert_eq!(config.max_connections, 1);
    }

    #[test]
    fn builder_overrides() {
        let config = SqliteConfig::new("x.db")
            .with_max_connections(4)
            .with_connect_timeout(Duration::from_secs(1));
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
    }

    #[test]
    fn empty_path_is_a_config_error() {
        let result = SqliteConfig::new("").connect_options();
        assert!(matches!(result, Err(DbError::Config(_))));
    }
}
