//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port, static assets)
    pub server: ServerSettings,

    /// Database configuration (MySQL)
    pub database: DatabaseSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,

    /// Directory of static frontend assets served at the root path
    pub static_dir: String,
}

/// MySQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database server host
    pub host: String,

    /// Database server port
    pub port: u16,

    /// Database user
    pub username: String,

    /// Database password
    pub password: String,

    /// Database name
    pub database: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env)
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. Built-in defaults (port 3000, database `todo` on localhost:3306,
    ///    pool capacity 4)
    /// 2. config/default.toml and config/{RUN_ENV}.toml
    /// 3. `APP__`-prefixed environment variables
    /// 4. Named environment variables (`PORT`, `DB_HOST`, `DB_PORT`,
    ///    `DB_USER`, `DB_PASSWORD`)
    /// 5. First CLI argument, which overrides the listening port
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        // An unparsable port argument falls through to PORT / the default
        let cli_port = std::env::args()
            .nth(1)
            .filter(|arg| arg.parse::<u16>().is_ok());

        Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.static_dir", "static")?
            .set_default("database.host", "localhost")?
            .set_default("database.port", 3306)?
            .set_default("database.username", "root")?
            .set_default("database.password", "")?
            .set_default("database.database", "todo")?
            .set_default("database.max_connections", 4)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("cors.allowed_origins", vec!["http://localhost:3000"])?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            // APP__SERVER__PORT=3000 -> server.port = 3000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("database.host", std::env::var("DB_HOST").ok())?
            .set_override_option("database.port", std::env::var("DB_PORT").ok())?
            .set_override_option("database.username", std::env::var("DB_USER").ok())?
            .set_override_option("database.password", std::env::var("DB_PASSWORD").ok())?
            // The CLI argument wins over everything else
            .set_override_option("server.port", cli_port)?
            .build()?
            .try_deserialize()
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
