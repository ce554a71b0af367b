//! Report resolution: display name → id and denormalized metadata.

use survey_core::entities::{Report, ReportMeta};

use crate::error::DatabaseError;
use crate::service::SurveyService;

fn row_to_report(row: &libsql::Row) -> Result<Report, DatabaseError> {
    Ok(Report {
        id: row.get::<i64>(0)?,
        workspace_name: row.get::<Option<String>>(1)?.unwrap_or_default(),
        item_name: row.get::<String>(2)?,
    })
}

impl SurveyService {
    /// Exact-match lookup by display name.
    ///
    /// `Ok(None)` is the expected outcome for a name that is not in the
    /// catalog; only connectivity and query failures are errors.
    pub async fn resolve_report_by_name(
        &self,
        item_name: &str,
    ) -> Result<Option<Report>, DatabaseError> {
        let conn = self.db().connect().await?;
        let mut rows = conn
            .query(
                "SELECT id, workspace_name, item_name FROM reports WHERE item_name = ?1 LIMIT 1",
                [item_name],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_report(&row)?)),
            None => Ok(None),
        }
    }

    /// Workspace and item name of a report, or `None` if the id is unknown.
    pub async fn get_report_meta(&self, id: i64) -> Result<Option<ReportMeta>, DatabaseError> {
        let conn = self.db().connect().await?;
        let mut rows = conn
            .query(
                "SELECT workspace_name, item_name FROM reports WHERE id = ?1",
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(ReportMeta {
                workspace_name: row.get::<Option<String>>(0)?.unwrap_or_default(),
                item_name: row.get::<String>(1)?,
            })),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{seed_report, test_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn resolves_existing_report() {
        let (_dir, svc) = test_service().await;
        seed_report(&svc, 7, "Finance WS", "SalesDash").await;

        let report = svc.resolve_report_by_name("SalesDash").await.unwrap();
        assert_eq!(
            report,
            Some(Report {
                id: 7,
                workspace_name: "Finance WS".into(),
                item_name: "SalesDash".into(),
            })
        );
    }

    #[tokio::test]
    async fn unknown_name_is_none() {
        let (_dir, svc) = test_service().await;
        seed_report(&svc, 7, "Finance WS", "SalesDash").await;

        assert_eq!(svc.resolve_report_by_name("Unknown").await.unwrap(), None);
    }

    #[tokio::test]
    async fn match_is_exact() {
        let (_dir, svc) = test_service().await;
        seed_report(&svc, 7, "Finance WS", "SalesDash").await;

        assert_eq!(svc.resolve_report_by_name("salesdash").await.unwrap(), None);
        assert_eq!(svc.resolve_report_by_name("SalesDash ").await.unwrap(), None);
    }

    #[tokio::test]
    async fn meta_by_id() {
        let (_dir, svc) = test_service().await;
        seed_report(&svc, 7, "Finance WS", "SalesDash").await;

        let meta = svc.get_report_meta(7).await.unwrap();
        assert_eq!(
            meta,
            Some(ReportMeta {
                workspace_name: "Finance WS".into(),
                item_name: "SalesDash".into(),
            })
        );
        assert_eq!(svc.get_report_meta(8).await.unwrap(), None);
    }

    #[tokio::test]
    async fn resolved_report_splits_into_meta() {
        let (_dir, svc) = test_service().await;
        seed_report(&svc, 11, "Ops", "Inventario").await;

        let report = svc.resolve_report_by_name("Inventario").await.unwrap().unwrap();
        let meta = svc.get_report_meta(report.id).await.unwrap().unwrap();
        assert_eq!(report.meta(), meta);
    }
}
