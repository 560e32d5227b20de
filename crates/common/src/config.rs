use crate::error::TextRelayError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// TextRelay application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Chat-completion API base URL (OpenRouter-compatible)
    pub upstream_base_url: String,

    /// HTTP-Referer header value sent with completion requests
    pub http_referer: String,

    /// Fixed delay between per-segment completion calls, in milliseconds
    pub request_delay_ms: u64,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            upstream_base_url: "https://openrouter.ai/api/v1".to_string(),
            http_referer: "https://textrelay.local".to_string(),
            request_delay_ms: 1000,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, TextRelayError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            upstream_base_url: std::env::var("UPSTREAM_BASE_URL")
                .unwrap_or_else(|_| "https://openrouter.ai/api/v1".to_string()),
            http_referer: std::env::var("HTTP_REFERER")
                .unwrap_or_else(|_| "https://textrelay.local".to_string()),
            request_delay_ms: std::env::var("REQUEST_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1000),
            log_dir: std::env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./log")),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
        };

        // Ensure required directories exist
        config.ensure_directories()?;

        Ok(config)
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), TextRelayError> {
        if !self.log_dir.exists() {
            std::fs::create_dir_all(&self.log_dir).map_err(|e| {
                TextRelayError::config(format!(
                    "Failed to create directory {}: {}",
                    self.log_dir.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), TextRelayError> {
        // Validate upstream URL
        if !self.upstream_base_url.starts_with("http://")
            && !self.upstream_base_url.starts_with("https://") {
            return Err(TextRelayError::config(
                "Upstream base URL must start with http:// or https://"
            ));
        }

        // Validate port range
        if self.server_port == 0 {
            return Err(TextRelayError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
