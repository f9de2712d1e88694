//! Student REST API for the Roster service.
//!
//! This crate provides an Axum HTTP server that exposes CRUD endpoints
//! for a single `Student` resource plus a one-line summary endpoint.
//!
//! # Architecture
//!
//! Every request runs on its own Tokio task against one shared
//! [`StudentStore`]: a map from id to student and a next-id counter
//! behind a single read-write lock. Mutations take the write lock, reads
//! take the read lock, and the lock is never held while encoding JSON.
//!
//! The `SQLite` handle in [`AppState`] is opened at startup and kept alive
//! for the life of the process. No handler touches it.
//!
//! [`StudentStore`]: store::StudentStore

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod store;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, bind, serve, start_server};
pub use state::AppState;
pub use store::StudentStore;
