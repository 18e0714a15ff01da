// src/config.rs
use std::net::IpAddr;

/// Environment-driven service configuration, read once at startup and
/// passed down explicitly instead of re-reading `std::env` in handlers.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    /// Allowed CORS origins; empty means allow any origin.
    pub cors_origins: Vec<String>,
    /// Skips schema init and seeding so tests can wire their own store.
    pub test_mode: bool,
    pub seed_on_startup: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");
        let host: IpAddr = std::env::var("HOST")
            .ok()
            .and_then(|h| h.parse().ok())
            .unwrap_or_else(|| "127.0.0.1".parse().unwrap());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let cors_origins = parse_origins(&std::env::var("CORS_ORIGINS").unwrap_or_default());
        let test_mode = parse_bool(&std::env::var("TEST_MODE").unwrap_or_default());
        let seed_on_startup = parse_bool(&std::env::var("SEED_ON_STARTUP").unwrap_or_default());

        Self {
            database_url,
            host,
            port,
            cors_origins,
            test_mode,
            seed_on_startup,
        }
    }
}

pub fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

pub fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
