//! # Todo Server
//!
//! A shared to-do list backend implemented in Rust.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool (with a startup connectivity check)
//! - HTTP server

use anyhow::Result;
use tracing::info;

use todo_server::config::Settings;
use todo_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    todo_server::telemetry::init_tracing();

    info!("Starting Todo Server...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application; build fails fast when the store
    // cannot be pinged
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
