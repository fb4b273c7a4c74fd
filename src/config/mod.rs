//! Configuration module for the potluck backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// URL of the external iCalendar feed, if one is configured
    pub feed_url: Option<String>,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("POTLUCK_DB_PATH")
            .unwrap_or_else(|_| "./data/app.sqlite".to_string())
            .into();

        let feed_url = env::var("POTLUCK_FEED_URL").ok();

        let bind_addr = env::var("POTLUCK_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid POTLUCK_BIND_ADDR format");

        let log_level = env::var("POTLUCK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            db_path,
            feed_url,
            bind_addr,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("POTLUCK_DB_PATH");
        env::remove_var("POTLUCK_FEED_URL");
        env::remove_var("POTLUCK_BIND_ADDR");
        env::remove_var("POTLUCK_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.db_path, PathBuf::from("./data/app.sqlite"));
        assert!(config.feed_url.is_none());
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
    }
}
