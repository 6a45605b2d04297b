//! REST server configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! the server. Request handlers never read environment variables.

/// Default bind address; the port matches what catalog clients expect.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8787";

/// Configuration for the REST server.
#[derive(Clone, Debug)]
pub struct HttpServerConfig {
    addr: String,
}

impl HttpServerConfig {
    pub fn new(addr: impl Into<String>) -> Self {
        Self { addr: addr.into() }
    }

    /// Resolve the bind address from `BOOKSHELF_REST_ADDR`, falling back
    /// to [`DEFAULT_REST_ADDR`].
    pub fn from_env() -> Self {
        Self::new(std::env::var("BOOKSHELF_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into()))
    }

    /// The address to bind, in `host:port` form.
    pub fn socket_addr(&self) -> &str {
        &self.addr
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REST_ADDR)
    }
}
