use std::{net::SocketAddr, time::Duration};

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub mongo_details: String,
    pub database_name: String,
    pub db_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env_string("CARPARTS_BIND_ADDR", "127.0.0.1:8000")
            .parse::<SocketAddr>()
            .context("CARPARTS_BIND_ADDR must be a valid host:port")?;

        let mongo_details = env_string("MONGO_DETAILS", "mongodb://localhost:27017");
        let database_name = env_string("DATABASE_NAME", "car_parts_db");

        let db_timeout_secs = env_string("CARPARTS_DB_TIMEOUT_SECS", "5")
            .parse::<u64>()
            .context("CARPARTS_DB_TIMEOUT_SECS must be u64")?;

        Ok(Self {
            bind_addr,
            mongo_details,
            database_name,
            db_timeout: Duration::from_secs(db_timeout_secs),
        })
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
