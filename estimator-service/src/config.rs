use std::env;

use anyhow::{Context, Result};

/// Connection settings for the backing store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct MetricsConfig {
    pub bind_addr: String,
}

/// Process-wide configuration. Read from the environment once at startup;
/// there is no hot reload.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_bind_addr: String,
    /// `None` when no `DATABASE_URL` is provided; persistence is then
    /// disabled for the lifetime of the process.
    pub database: Option<DatabaseConfig>,
    pub metrics: Option<MetricsConfig>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        // Pick up a local .env file when present.
        let _ = dotenvy::dotenv();

        let port: u16 = match env::var("PORT") {
            Ok(raw) => raw.parse().context("invalid PORT")?,
            Err(_) => 5000,
        };

        let max_connections: u32 = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw.parse().context("invalid DATABASE_MAX_CONNECTIONS")?,
            Err(_) => 5,
        };

        let database = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .map(|url| DatabaseConfig {
                url,
                max_connections,
            });

        let metrics = env::var("METRICS_BIND_ADDR")
            .ok()
            .filter(|addr| !addr.is_empty())
            .map(|bind_addr| MetricsConfig { bind_addr });

        Ok(Self {
            http_bind_addr: format!("0.0.0.0:{port}"),
            database,
            metrics,
        })
    }
}
