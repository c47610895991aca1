// SPDX-License-Identifier: MIT

//! Application configuration loaded from environment variables.

use std::env;

const DEFAULT_HOLIDAY_FEED_URL: &str =
    "https://raw.githubusercontent.com/guangrei/APIHariLibur_V2/main/holidays.json";
const DEFAULT_HOLIDAY_TTL_MINUTES: u64 = 24 * 60;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Remote national-holiday feed
    pub holiday_feed_url: String,
    /// How long a loaded holiday calendar stays fresh
    pub holiday_ttl_minutes: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a local-development default; bad numeric values are
    /// rejected rather than silently replaced.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => 8080,
        };

        let holiday_ttl_minutes = match env::var("HOLIDAY_TTL_MINUTES") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("HOLIDAY_TTL_MINUTES"))?,
            Err(_) => DEFAULT_HOLIDAY_TTL_MINUTES,
        };

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port,
            holiday_feed_url: env::var("HOLIDAY_FEED_URL")
                .unwrap_or_else(|_| DEFAULT_HOLIDAY_FEED_URL.to_string()),
            holiday_ttl_minutes,
        })
    }

    /// Fixed config for tests.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            // Unroutable port so tests exercising feed failure fail fast.
            holiday_feed_url: "http://127.0.0.1:9/holidays.json".to_string(),
            holiday_ttl_minutes: 60,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
