use std::time::Duration;

use catalog_client::{ClientConfig, DEFAULT_BASE_URL};

/// Storefront server configuration
///
/// # Environment
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | listen port |
/// | CATALOG_BASE_URL | https://fakestoreapi.com | upstream product API |
/// | CATALOG_TIMEOUT_SECS | 30 | upstream request timeout |
/// | CATALOG_CACHE_TTL_SECS | 3600 | how long a catalog snapshot stays fresh |
/// | LOG_LEVEL | info | tracing level or filter directive |
/// | LOG_DIR | (unset) | daily rolling log directory |
/// | ENVIRONMENT | development | development / production |
///
/// ```ignore
/// HTTP_PORT=8080 CATALOG_CACHE_TTL_SECS=60 cargo run -p storefront-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub catalog_base_url: String,
    pub catalog_timeout_secs: u64,
    pub catalog_cache_ttl_secs: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | production
    pub environment: String,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            catalog_base_url: std::env::var("CATALOG_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            catalog_timeout_secs: std::env::var("CATALOG_TIMEOUT_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30),
            catalog_cache_ttl_secs: std::env::var("CATALOG_CACHE_TTL_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3600),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Settings for the upstream catalog client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.catalog_base_url.clone())
            .with_timeout(self.catalog_timeout_secs)
            .with_max_age(self.catalog_cache_ttl_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.catalog_cache_ttl_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 3000,
            catalog_base_url: DEFAULT_BASE_URL.into(),
            catalog_timeout_secs: 30,
            catalog_cache_ttl_secs: 3600,
            log_level: "info".into(),
            log_dir: None,
            environment: "development".into(),
        }
    }
}
