//! Client configuration

/// Public product API used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Accepted staleness of cached catalog responses, in seconds
pub const DEFAULT_MAX_AGE_SECS: u64 = 60 * 60;

/// Configuration for connecting to the remote catalog
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Catalog base URL (e.g., "https://fakestoreapi.com")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// `User-Agent` sent with every request
    pub user_agent: String,

    /// `max-age` hint sent in `Cache-Control`
    pub max_age: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            user_agent: format!("storefront/{}", env!("CARGO_PKG_VERSION")),
            max_age: DEFAULT_MAX_AGE_SECS,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_max_age(mut self, seconds: u64) -> Self {
        self.max_age = seconds;
        self
    }

    /// Create an HTTP catalog source from this configuration
    pub fn build_http_source(&self) -> shared::CatalogResult<super::HttpCatalogSource> {
        super::HttpCatalogSource::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://localhost:9000")
            .with_timeout(5)
            .with_user_agent("tests")
            .with_max_age(60);
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.user_agent, "tests");
        assert_eq!(config.max_age, 60);
    }

    #[test]
    fn test_default_points_at_public_api() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, 30);
        assert_eq!(config.max_age, 3600);
    }
}
