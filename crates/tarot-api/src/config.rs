//! Server configuration.

use std::env;

/// Environment variable holding the bind host.
pub const HOST_VAR: &str = "TAROT_API_HOST";
/// Environment variable holding the bind port.
pub const PORT_VAR: &str = "TAROT_API_PORT";

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host name or IP address to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// Set the bind host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the bind port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Defaults overridden by `TAROT_API_HOST` and `TAROT_API_PORT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the two variables.
    ///
    /// Blank values are ignored. A port that does not parse keeps the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(host) = lookup(HOST_VAR).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup(PORT_VAR).and_then(|p| p.trim().parse().ok()) {
            config.port = port;
        }
        config
    }

    /// The `host:port` pair handed to the listener.
    pub fn bind_addr(&self) -> (&str, u16) {
        (&self.host, self.port)
    }
}
