use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the nutrition backend, including the `/api` prefix.
    pub api_base_url: String,
    /// Path to the on-device SQLite database.
    pub database_path: String,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
    /// TTL for cached meal plans and history responses, in seconds.
    pub cache_ttl_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api".to_string()),
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "bitetrack.db".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
