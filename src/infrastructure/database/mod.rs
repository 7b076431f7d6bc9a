//! Database Module
//!
//! MySQL connection pool, connectivity checks, and transaction management.

pub mod unit_of_work;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;
use std::time::Duration;

use crate::config::DatabaseSettings;

pub use unit_of_work::with_transaction;

/// Create a MySQL connection pool
pub async fn create_pool(settings: &DatabaseSettings) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout))
        .connect_with(connect_options(settings))
        .await
}

/// Create a pool without establishing connections up front.
///
/// Used by tests that exercise the HTTP surface without a live database.
pub fn create_lazy_pool(settings: &DatabaseSettings) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout))
        .connect_lazy_with(connect_options(settings))
}

/// Verify connectivity with a round trip to the store.
pub async fn ping(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

fn connect_options(settings: &DatabaseSettings) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.username)
        .password(&settings.password)
        .database(&settings.database)
}
