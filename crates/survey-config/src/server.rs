//! HTTP server configuration.

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "0.0.0.0".into()
}

const fn default_port() -> u16 {
    8000
}

fn default_pages_dir() -> String {
    "web/pages".into()
}

fn default_static_dir() -> String {
    "web/static".into()
}

fn default_static_version() -> String {
    "1.0.0".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding `index.html` and `pages/<name>.html`.
    #[serde(default = "default_pages_dir")]
    pub pages_dir: String,

    /// Directory served under `/static`.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Cache-busting token appended to asset URLs on the form page.
    #[serde(default = "default_static_version")]
    pub static_version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            pages_dir: default_pages_dir(),
            static_dir: default_static_dir(),
            static_version: default_static_version(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.pages_dir, "web/pages");
        assert_eq!(config.static_dir, "web/static");
        assert_eq!(config.static_version, "1.0.0");
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }
}
