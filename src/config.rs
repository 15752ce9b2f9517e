//! Application configuration loaded from environment variables.

use std::env;

/// How long a device-bound temporary token stays valid, in minutes.
/// The purge treats anything at or past this age as dead.
pub const DEFAULT_TEMP_TOKEN_TTL_MINUTES: i64 = 10;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed for CORS (the pairing portal)
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// JWT signing key for session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
    /// Lifetime of device-bound temporary tokens, in minutes
    pub temp_token_ttl_minutes: i64,
    /// Path to the weather forecast feed data file
    pub weather_data_path: String,
    /// Path to the emergency contact feed data file
    pub emergency_data_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// For local development, the signing key can be set via a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            jwt_signing_key: env::var("JWT_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
                .into_bytes(),
            temp_token_ttl_minutes: env::var("TEMP_TOKEN_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TEMP_TOKEN_TTL_MINUTES),
            weather_data_path: env::var("WEATHER_DATA_PATH")
                .unwrap_or_else(|_| "data/weather.json".to_string()),
            emergency_data_path: env::var("EMERGENCY_DATA_PATH")
                .unwrap_or_else(|_| "data/emergency_contacts.json".to_string()),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
            temp_token_ttl_minutes: DEFAULT_TEMP_TOKEN_TTL_MINUTES,
            weather_data_path: "data/weather.json".to_string(),
            emergency_data_path: "data/emergency_contacts.json".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
