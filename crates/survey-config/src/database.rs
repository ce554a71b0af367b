//! Database connection configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// URL schemes served by a remote libSQL server rather than a local file.
const REMOTE_SCHEMES: [&str; 5] = ["libsql://", "https://", "http://", "wss://", "ws://"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection string: a local file path (e.g. `./survey.db`) or a remote
    /// URL (e.g. `libsql://survey-org.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for remote databases. Ignored for local files.
    #[serde(default)]
    pub auth_token: String,
}

impl DatabaseConfig {
    /// Check if a connection string is present.
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Whether the connection string points at a remote server.
    pub fn is_remote(&self) -> bool {
        let url = self.url.trim();
        REMOTE_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
    }

    /// Check that the section can be used to open a database.
    ///
    /// Hosted `libsql://` databases always require a token; plain HTTP URLs
    /// (a local `sqld`) may run without one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "database".into(),
            });
        }
        if self.url.trim().starts_with("libsql://") && self.auth_token.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.auth_token".into(),
                reason: "libsql:// URLs require an auth token".into(),
            });
        }
        Ok(())
    }
}
