//! HTTP server configuration object.

use std::net::SocketAddr;

/// Address the server binds to when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Configuration consumed by the server wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a configuration with an explicit bind address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Read the configuration from the environment: `BIND_ADDR`, defaulting
    /// to [`DEFAULT_BIND_ADDR`]. An unparsable value is an error rather than
    /// a silent fallback.
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        let raw = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        Ok(Self::new(raw.parse()?))
    }

    /// The socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
