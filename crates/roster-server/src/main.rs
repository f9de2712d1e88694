//! Roster student service entry point.
//!
//! Wires together configuration, the `SQLite` handle, and the student
//! HTTP API, then serves until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `roster-config.yaml` (defaults if absent)
//! 3. Open the `SQLite` database and create the `students` table
//! 4. Bind the listen socket (port 8080 by default)
//! 5. Serve requests until shutdown, then close the database
//!
//! A failure in steps 2-4 is logged and terminates the process.

mod config;
mod error;

use std::sync::Arc;

use roster_api::AppState;
use roster_db::SqlitePool;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;
use crate::error::StartupError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if any startup step fails or the server stops with a
/// fatal error.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("roster-server starting");

    if let Err(e) = run().await {
        error!(error = %e, "roster-server terminated");
        return Err(e.into());
    }

    info!("roster-server shutdown complete");
    Ok(())
}

/// Run the startup sequence and serve until shutdown.
async fn run() -> Result<(), StartupError> {
    // 2. Load configuration.
    let config = ServiceConfig::load()?;
    info!(
        host = config.server.host,
        port = config.server.port,
        database_path = config.database.path,
        generation_url = config.generation.base_url,
        generation_model = config.generation.model,
        "Configuration loaded"
    );

    // 3. Open the database and make sure the schema exists.
    let database = SqlitePool::connect(&config.sqlite_config()).await?;
    database.init_schema().await?;

    // 4. Bind before serving so a busy port fails fast.
    let listener = roster_api::bind(&config.server_config()).await?;

    // 5. Serve.
    let state = Arc::new(AppState::with_database(database.clone()));
    let served = roster_api::serve(listener, state).await;

    database.close().await;
    served?;
    Ok(())
}
