//! # survey-db
//!
//! libSQL data access for the BI survey backend.
//!
//! Three read-only reference tables (reports, process/subprocess pairs) and
//! one append-only response table. Operations are grouped as repo modules
//! implemented on [`service::SurveyService`]:
//! - `repos::catalog`: report names, processes, subprocesses
//! - `repos::report`: report resolution by name and metadata by id
//! - `repos::response`: survey response insert and read-back
//!
//! Every operation opens its own connection through [`SurveyDb::connect`] and
//! drops it when the operation returns, on success and on error alike.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;
use survey_config::DatabaseConfig;

/// Milliseconds a local connection waits on a locked database before failing.
const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Central database handle.
///
/// Wraps a libSQL database, local file or remote server. Holds no open
/// connection of its own; see [`SurveyDb::connect`].
pub struct SurveyDb {
    db: libsql::Database,
    remote: bool,
}

impl SurveyDb {
    /// Open the database described by the configuration.
    ///
    /// Remote URLs (`libsql://`, `https://`, ...) connect to a libSQL server;
    /// anything else is treated as a local file path.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or the
    /// bootstrap schema fails.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            Self::open_remote(config.url.trim(), &config.auth_token).await
        } else {
            Self::open_local(config.url.trim()).await
        }
    }

    /// Open a local database file, creating it if needed.
    ///
    /// Switches the file to WAL journaling so concurrent readers and a writer
    /// do not block each other, then applies the bootstrap schema.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` for `:memory:` (every connection
    /// would see a different empty database), or `DatabaseError` if the file
    /// cannot be opened.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        if path == ":memory:" {
            return Err(DatabaseError::InvalidState(
                "in-memory databases are not shared across connections; use a file path".into(),
            ));
        }

        let db = Builder::new_local(path).build().await?;
        let survey_db = Self { db, remote: false };

        let conn = survey_db.connect().await?;
        let mut rows = conn
            .query("PRAGMA journal_mode = WAL", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA journal_mode: {e}")))?;
        rows.next().await?;
        drop(rows);
        drop(conn);

        survey_db.run_migrations().await?;
        Ok(survey_db)
    }

    /// Connect to a remote libSQL server.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the client cannot be built or the bootstrap
    /// schema fails.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let survey_db = Self { db, remote: true };
        survey_db.run_migrations().await?;
        Ok(survey_db)
    }

    /// Open a connection scoped to one operation.
    ///
    /// Local connections enable foreign keys (per-connection in `SQLite`) and a
    /// busy timeout. The connection closes when dropped.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection or its pragmas fail.
    pub async fn connect(&self) -> Result<libsql::Connection, DatabaseError> {
        let conn = self.db.connect()?;
        if !self.remote {
            conn.execute("PRAGMA foreign_keys = ON", ())
                .await
                .map_err(|e| DatabaseError::Query(format!("PRAGMA foreign_keys: {e}")))?;
            let mut rows = conn
                .query(&format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}"), ())
                .await
                .map_err(|e| DatabaseError::Query(format!("PRAGMA busy_timeout: {e}")))?;
            rows.next().await?;
        }
        Ok(conn)
    }

    /// Whether this handle talks to a remote libSQL server.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }
}
