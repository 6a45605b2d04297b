//! Client configuration.
//!
//! There is exactly one externally configured base URL, resolved once at
//! startup and passed into the client. Request code never reads the
//! environment.

/// Default API origin; matches the port the Bookshelf REST server binds.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8787";

/// Configuration for [`ApiClient`](crate::ApiClient).
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve the base URL from `BOOKSHELF_API_URL`, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::new(std::env::var("BOOKSHELF_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
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
    fn default_points_at_the_local_api() {
        assert_eq!(ClientConfig::default().base_url(), "http://localhost:8787");
    }

    #[test]
    fn explicit_base_url_wins() {
        let config = ClientConfig::new("http://api.example.test");
        assert_eq!(config.base_url(), "http://api.example.test");
    }
}
