//! HTTP server configuration object.

use std::net::SocketAddr;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) seed_catalog: bool,
}

impl ServerConfig {
    /// Construct a server configuration for the given bind address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            seed_catalog: true,
        }
    }

    /// Start with an empty catalog instead of the reference seed records.
    #[must_use]
    pub fn without_seed(mut self) -> Self {
        self.seed_catalog = false;
        self
    }
}
