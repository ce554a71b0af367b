//! Bootstrap schema runner.
//!
//! Embeds the schema at compile time and executes it when the database is
//! opened. Every statement uses `IF NOT EXISTS`, so re-running is a no-op.

use crate::SurveyDb;
use crate::error::DatabaseError;

/// Reports, process pairs, and the append-only response table.
const MIGRATION_001: &str = include_str!("../migrations/001_schema.sql");

impl SurveyDb {
    /// Apply the embedded schema on a fresh connection.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        let conn = self.connect().await?;
        conn.execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_schema: {e}")))?;
        Ok(())
    }
}
