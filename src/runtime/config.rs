//! Echo server configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the echo server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EchoConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Path answered by the echo handler, with or without a trailing slash.
    pub path: String,
    /// Whether to enable the health check endpoint.
    pub enable_health: bool,
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            path: "/echo".to_string(),
            enable_health: true,
            max_body_size: 10 * 1024 * 1024, // 10MB
        }
    }
}

impl EchoConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from defaults overlaid with `ECHO_*` environment variables.
    ///
    /// Recognized: `ECHO_HOST`, `ECHO_PORT`, `ECHO_PATH`, `ECHO_MAX_BODY_SIZE`.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from defaults overlaid with values from `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error + Send + Sync>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(host) = lookup("ECHO_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("ECHO_PORT") {
            config.port = port
                .parse()
                .map_err(|e| format!("Invalid ECHO_PORT '{}': {}", port, e))?;
        }
        if let Some(path) = lookup("ECHO_PATH") {
            config = config.path(path);
        }
        if let Some(size) = lookup("ECHO_MAX_BODY_SIZE") {
            config.max_body_size = size
                .parse()
                .map_err(|e| format!("Invalid ECHO_MAX_BODY_SIZE '{}': {}", size, e))?;
        }
        Ok(config)
    }

    /// Set the host address.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the echo path. A leading slash is added and a trailing one removed.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        let trimmed = path.trim_matches('/');
        self.path = format!("/{}", trimmed);
        self
    }

    /// Set the maximum request body size.
    pub fn max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = max_body_size;
        self
    }

    /// Enable or disable the health check endpoint.
    pub fn enable_health(mut self, enable: bool) -> Self {
        self.enable_health = enable;
        self
    }

    /// Get the bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check whether a request path is the echo path.
    pub fn is_echo_path(&self, path: &str) -> bool {
        match path.strip_prefix(self.path.as_str()) {
            Some(rest) => rest.is_empty() || (rest == "/" && self.path != "/"),
            None => false,
        }
    }
}
