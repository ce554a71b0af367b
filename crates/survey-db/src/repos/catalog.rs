//! Catalog reads: report names, processes, and subprocesses.
//!
//! Read-only. Failures come back as `DatabaseError`; the `*_listing` variants
//! wrap them into a [`Listing`] for callers that must keep rendering.

use survey_core::listing::Listing;

use crate::error::DatabaseError;
use crate::service::SurveyService;

impl SurveyService {
    /// All report display names, ordered by report id.
    pub async fn list_report_names(&self) -> Result<Vec<String>, DatabaseError> {
        let conn = self.db().connect().await?;
        let mut rows = conn
            .query("SELECT item_name FROM reports ORDER BY id", ())
            .await?;
        let mut names = Vec::new();
        while let Some(row) = rows.next().await? {
            names.push(row.get::<String>(0)?);
        }
        Ok(names)
    }

    /// Distinct non-blank process names, alphabetical.
    pub async fn list_processes(&self) -> Result<Vec<String>, DatabaseError> {
        let conn = self.db().connect().await?;
        let mut rows = conn
            .query(
                "SELECT DISTINCT process FROM processes
                 WHERE process IS NOT NULL AND trim(process) <> ''
                 ORDER BY process",
                (),
            )
            .await?;
        let mut processes = Vec::new();
        while let Some(row) = rows.next().await? {
            processes.push(row.get::<String>(0)?);
        }
        Ok(processes)
    }

    /// Distinct non-blank subprocess names under `process`, alphabetical.
    ///
    /// An unknown process yields an empty list.
    pub async fn list_subprocesses(&self, process: &str) -> Result<Vec<String>, DatabaseError> {
        let conn = self.db().connect().await?;
        let mut rows = conn
            .query(
                "SELECT DISTINCT subprocess FROM processes
                 WHERE process = ?1
                   AND subprocess IS NOT NULL
                   AND trim(subprocess) <> ''
                 ORDER BY subprocess",
                [process],
            )
            .await?;
        let mut subprocesses = Vec::new();
        while let Some(row) = rows.next().await? {
            subprocesses.push(row.get::<String>(0)?);
        }
        Ok(subprocesses)
    }

    pub async fn report_names_listing(&self) -> Listing<String> {
        Listing::from_result(self.list_report_names().await)
    }

    pub async fn processes_listing(&self) -> Listing<String> {
        Listing::from_result(self.list_processes().await)
    }
}
