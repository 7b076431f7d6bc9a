//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::MySqlPool;
use tokio::net::TcpListener;

use crate::config::Settings;
use crate::infrastructure::database;
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: MySqlPool,
    pub settings: Arc<Settings>,
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
    pool: MySqlPool,
}

impl Application {
    /// Build the application from settings.
    ///
    /// Verifies store connectivity before binding; the process must not
    /// start listening against a store it cannot ping.
    pub async fn build(settings: Settings) -> Result<Self> {
        // Create database pool and verify connectivity
        let db = database::create_pool(&settings.database)
            .await
            .context("Failed to open database connection pool")?;
        database::ping(&db).await.context("Cannot ping database")?;
        tracing::info!("Database connection pool created");

        // Create app state
        let state = AppState {
            db: db.clone(),
            settings: Arc::new(settings.clone()),
        };

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        // Bind to address
        let addr: SocketAddr = settings
            .server_addr()
            .parse()
            .context("Invalid server bind address")?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self {
            listener,
            router,
            pool: db,
        })
    }

    /// Run the server until interrupted, then drain the pool
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        self.pool.close().await;
        tracing::info!("Connection pool drained");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
