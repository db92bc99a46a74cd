//! Runtime configuration from the environment.

use crate::error::AppError;

/// Server configuration. Read once at startup; `.env` values are loaded by
/// the binary before this runs.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    /// Seed demo data (categories, customers, contacts) at startup.
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/customers".into());
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(v) => v
                .parse()
                .map_err(|_| AppError::Config(format!("DATABASE_MAX_CONNECTIONS: '{}' is not a number", v)))?,
            Err(_) => 5,
        };
        let seed_demo_data = std::env::var("SEED_DEMO_DATA")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Ok(Config {
            database_url,
            bind_addr,
            max_connections,
            seed_demo_data,
        })
    }
}
