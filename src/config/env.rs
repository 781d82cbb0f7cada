//! Environment variable configuration module.
//!
//! Provides environment variable loading and the global `APP_CONFIG` instance.

use std::env;
use std::sync::Once;

use once_cell::sync::Lazy;

static INIT: Once = Once::new();

/// Initializes the environment by loading the .env file.
/// This is called automatically when `get_env` is first used.
fn init_env() {
    INIT.call_once(|| {
        if let Err(e) = dotenvy::dotenv() {
            tracing::warn!("Warning: .env file not found or error loading: {}", e);
        }
    });
}

/// Retrieves an environment variable by key.
///
/// If the variable is not set, returns the provided default value.
/// If no default is provided and the variable is not set, returns an empty string.
pub fn get_env(key: &str, default: Option<&str>) -> String {
    init_env();
    env::var(key).unwrap_or_else(|_| default.unwrap_or("").to_string())
}

/// Retrieves an environment variable as a parsed type.
pub fn get_env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    init_env();
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // Server settings
    pub server_port: String,

    // Environment
    pub is_production: bool,

    // Sentry settings
    pub sentry_dsn: String,
    pub sentry_traces_sample_rate: f32,

    // Database settings
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub db_idle_timeout_secs: u64,
    pub db_max_lifetime_secs: u64,

    // Inventory service settings
    pub inventory_service_url: String,
    pub inventory_timeout_secs: u64,

    // CORS settings
    pub cors_origins: String,

    // Rate limiting
    pub rate_limit_per_second: u64,
    pub rate_limit_burst_size: u32,

    // Migration
    pub run_migrations: bool,
}

impl AppConfig {
    /// Creates a new `AppConfig` from environment variables.
    pub fn from_env() -> Self {
        let rust_env = get_env("RUST_ENV", Some("development"));
        let is_production = rust_env == "production" || rust_env == "prod";

        Self {
            server_port: get_env("SERVER_PORT", Some("3000")),

            is_production,

            sentry_dsn: get_env("SENTRY_DSN", None),
            sentry_traces_sample_rate: get_env_parsed("SENTRY_TRACES_SAMPLE_RATE", 0.1),

            db_max_connections: get_env_parsed("DB_MAX_CONNECTIONS", 20),
            db_min_connections: get_env_parsed("DB_MIN_CONNECTIONS", 2),
            db_acquire_timeout_secs: get_env_parsed("DB_ACQUIRE_TIMEOUT_SECS", 5),
            db_idle_timeout_secs: get_env_parsed("DB_IDLE_TIMEOUT_SECS", 600),
            db_max_lifetime_secs: get_env_parsed("DB_MAX_LIFETIME_SECS", 1800),

            inventory_service_url: get_env(
                "INVENTORY_SERVICE_URL",
                Some("http://localhost:8083"),
            ),
            inventory_timeout_secs: get_env_parsed("INVENTORY_TIMEOUT_SECS", 10),

            cors_origins: get_env("CORS_ORIGINS", Some("*")),

            rate_limit_per_second: get_env_parsed("RATE_LIMIT_PER_SECOND", 10),
            rate_limit_burst_size: get_env_parsed("RATE_LIMIT_BURST_SIZE", 50),

            run_migrations: get_env("RUN_MIGRATIONS", Some("true")) == "true",
        }
    }
}

/// Global application configuration instance.
pub static APP_CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);
