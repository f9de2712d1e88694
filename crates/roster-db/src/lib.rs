//! Data layer for the Roster student service (`SQLite`).
//!
//! The service opens a `SQLite` database at startup and makes sure the
//! `students` table exists. Student CRUD is served entirely from memory;
//! this handle is held for the life of the process but no request path
//! reads or writes it.
//!
//! # Modules
//!
//! - [`sqlite`] -- Connection pool, configuration, and schema bootstrap
//! - [`error`] -- Shared error types

pub mod error;
pub mod sqlite;

// Re-export primary types for convenience.
pub use error::DbError;
pub use sqlite::{IN_MEMORY, STUDENTS_SCHEMA, SqliteConfig, SqlitePool};
