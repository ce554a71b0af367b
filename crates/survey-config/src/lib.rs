//! # survey-config
//!
//! Layered configuration loading for the BI survey backend using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SURVEY_*` prefix, `__` as separator)
//! 2. `DATABASE_PATH`, the connection-string variable of earlier deployments
//! 3. Project-level `./survey.toml`
//! 4. User-level `~/.config/bi-survey/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SURVEY_DATABASE__URL` -> `database.url`,
//! `SURVEY_SERVER__PORT` -> `server.port`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use survey_config::SurveyConfig;
//!
//! let config = SurveyConfig::load_with_dotenv().expect("config");
//! let database = config.require_database().expect("database configured");
//! println!("connecting to {}", database.url);
//! ```

mod database;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the legacy connection-string variable.
pub const LEGACY_DATABASE_ENV: &str = "DATABASE_PATH";

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_FILE: &str = "survey.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SurveyConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl SurveyConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads the nearest `.env` (current directory or a parent) before building
    /// the figment. Variables already set in the process environment win.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer additional
    /// providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Legacy connection-string variable
        figment = figment.merge(
            Env::raw()
                .only(&[LEGACY_DATABASE_ENV])
                .map(|_| "database.url".into()),
        );

        // Layer 4: Prefixed environment variables (highest priority)
        figment = figment.merge(Env::prefixed("SURVEY_").split("__"));

        figment
    }

    /// The database section, or an error when startup cannot proceed.
    ///
    /// A missing connection string is fatal for the server.
    pub fn require_database(&self) -> Result<&DatabaseConfig, ConfigError> {
        self.database.validate()?;
        Ok(&self.database)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("bi-survey").join("config.toml"))
    }
}
