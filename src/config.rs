use std::env;

use anyhow::Context;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:4200";
pub const DEFAULT_LOG_FILTER: &str = "soupmate=info,tower_http=debug,axum::rejection=info";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Origin allowed to call the API from a browser
    pub cors_origin: String,
    /// Origin of the backend the client talks to, without the `/api` suffix
    pub backend_url: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{}'", raw))?,
            Err(_) => 8000,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
            backend_url: env::var("SOUPMATE_BACKEND_URL")
                .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string()),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            log_level: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
