use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    /// Apply bundled migrations at startup. Off when the schema is owned elsewhere.
    pub run_migrations: bool,
    pub jwt_secret: String,
    pub port: u16,
    pub rust_log: String,
    /// Deadline covering all collaborator reads for one request.
    pub recommendation_timeout: Duration,
    /// Most jobs scored per recommendation request.
    pub recommendation_candidate_cap: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            database_max_connections: env_or("DATABASE_MAX_CONNECTIONS", 10)?,
            run_migrations: env_or("RUN_MIGRATIONS", false)?,
            jwt_secret: require_env("JWT_SECRET")?,
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            recommendation_timeout: Duration::from_millis(env_or(
                "RECOMMENDATION_TIMEOUT_MS",
                2000,
            )?),
            recommendation_candidate_cap: env_or("RECOMMENDATION_CANDIDATE_CAP", 50)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        Err(_) => Ok(default),
    }
}
