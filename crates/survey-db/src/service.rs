//! Service layer over `SurveyDb`.
//!
//! `SurveyService` owns the database handle. All repo methods are implemented
//! as `impl SurveyService` blocks in `crate::repos`.

use survey_config::DatabaseConfig;

use crate::SurveyDb;
use crate::error::DatabaseError;

/// Entry point for catalog reads, report resolution, and response inserts.
///
/// Holds no per-request state; share it behind an `Arc`.
pub struct SurveyService {
    db: SurveyDb,
}

impl SurveyService {
    /// Open the configured database and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        Ok(Self {
            db: SurveyDb::open(config).await?,
        })
    }

    /// Create a service over a local database file.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the file cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        Ok(Self {
            db: SurveyDb::open_local(db_path).await?,
        })
    }

    /// Create from an existing `SurveyDb`.
    #[must_use]
    pub const fn from_db(db: SurveyDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &SurveyDb {
        &self.db
    }
}
