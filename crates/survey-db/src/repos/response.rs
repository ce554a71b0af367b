//! Survey responses: the single write path plus point read-backs.

use survey_core::clock::bogota_now;
use survey_core::entities::{SurveyAnswers, SurveyResponse};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_rating};
use crate::service::SurveyService;

const SELECT_COLS: &str = "id, report_id, submitted_at, process, subprocess, role, usage_frequency, \
     clarity_rating, overall_usefulness, decision_usefulness, comment, workspace_name, item_name";

fn row_to_response(row: &libsql::Row) -> Result<SurveyResponse, DatabaseError> {
    Ok(SurveyResponse {
        id: row.get::<i64>(0)?,
        report_id: row.get::<i64>(1)?,
        submitted_at: parse_datetime(&row.get::<String>(2)?)?,
        answers: SurveyAnswers {
            process: row.get::<String>(3)?,
            subprocess: row.get::<String>(4)?,
            role: row.get::<String>(5)?,
            usage_frequency: row.get::<String>(6)?,
            clarity_rating: parse_rating(row, 7, "clarity_rating")?,
            overall_usefulness: parse_rating(row, 8, "overall_usefulness")?,
            decision_usefulness: parse_rating(row, 9, "decision_usefulness")?,
            comment: get_opt_string(row, 10)?,
            workspace_name: row.get::<String>(11)?,
            item_name: row.get::<String>(12)?,
        },
    })
}

impl SurveyService {
    /// Insert one response and return its generated id.
    ///
    /// The submission time is taken here, in America/Bogota civil time. One
    /// statement, one row: either the row is stored or nothing is. There is
    /// no idempotency key, so a retried request stores a second row.
    pub async fn insert_survey_response(
        &self,
        report_id: i64,
        answers: &SurveyAnswers,
    ) -> Result<i64, DatabaseError> {
        let submitted_at = bogota_now().to_rfc3339();
        let clarity = answers.clarity_rating.to_string();
        let overall = answers.overall_usefulness.to_string();
        let decision = answers.decision_usefulness.to_string();

        let conn = self.db().connect().await?;
        let inserted = conn
            .execute(
                "INSERT INTO survey_responses
                    (report_id, submitted_at, process, subprocess, role, usage_frequency,
                     clarity_rating, overall_usefulness, decision_usefulness, comment,
                     workspace_name, item_name)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                libsql::params![
                    report_id,
                    submitted_at.as_str(),
                    answers.process.as_str(),
                    answers.subprocess.as_str(),
                    answers.role.as_str(),
                    answers.usage_frequency.as_str(),
                    clarity.as_str(),
                    overall.as_str(),
                    decision.as_str(),
                    answers.comment.as_deref(),
                    answers.workspace_name.as_str(),
                    answers.item_name.as_str()
                ],
            )
            .await?;
        if inserted != 1 {
            return Err(DatabaseError::InvalidState(format!(
                "expected 1 inserted row, got {inserted}"
            )));
        }

        let id = conn.last_insert_rowid();
        tracing::debug!(id, report_id, "stored survey response");
        Ok(id)
    }

    /// Read back one stored response.
    pub async fn get_survey_response(
        &self,
        id: i64,
    ) -> Result<Option<SurveyResponse>, DatabaseError> {
        let conn = self.db().connect().await?;
        let sql = format!("SELECT {SELECT_COLS} FROM survey_responses WHERE id = ?1");
        let mut rows = conn.query(&sql, [id]).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_response(&row)?)),
            None => Ok(None),
        }
    }

    /// Number of stored responses, optionally restricted to one report.
    pub async fn count_survey_responses(
        &self,
        report_id: Option<i64>,
    ) -> Result<u64, DatabaseError> {
        let conn = self.db().connect().await?;
        let mut rows = match report_id {
            Some(id) => {
                conn.query(
                    "SELECT COUNT(*) FROM survey_responses WHERE report_id = ?1",
                    [id],
                )
                .await?
            }
            None => conn.query("SELECT COUNT(*) FROM survey_responses", ()).await?,
        };
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count).map_err(|_| DatabaseError::InvalidState(format!("negative count {count}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{drop_table, sample_answers, seed_report, test_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn insert_roundtrip() {
        let (_dir, svc) = test_service().await;
        seed_report(&svc, 7, "Finance WS", "SalesDash").await;

        let answers = sample_answers(Some("none"));
        let id = svc.insert_survey_response(7, &answers).await.unwrap();

        let stored = svc.get_survey_response(id).await.unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.report_id, 7);
        assert_eq!(stored.answers, answers);
        assert_eq!(stored.submitted_at.offset().local_minus_utc(), -5 * 3600);
    }

    #[tokio::test]
    async fn ratings_are_stored_as_text() {
        let (_dir, svc) = test_service().await;
        seed_report(&svc, 7, "Finance WS", "SalesDash").await;
        let id = svc
            .insert_survey_response(7, &sample_answers(None))
            .await
            .unwrap();

        let conn = svc.db().connect().await.unwrap();
        let mut rows = conn
            .query(
                "SELECT typeof(clarity_rating), clarity_rating, comment IS NULL FROM survey_responses WHERE id = ?1",
                [id],
            )
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<String>(0).unwrap(), "text");
        assert_eq!(row.get::<String>(1).unwrap(), "5");
        assert_eq!(row.get::<i64>(2).unwrap(), 1);
    }

    #[tokio::test]
    async fn each_insert_gets_a_new_id() {
        let (_dir, svc) = test_service().await;
        seed_report(&svc, 7, "Finance WS", "SalesDash").await;
        let answers = sample_answers(None);

        let first = svc.insert_survey_response(7, &answers).await.unwrap();
        let second = svc.insert_survey_response(7, &answers).await.unwrap();
        assert_ne!(first, second);
        assert_eq!(svc.count_survey_responses(Some(7)).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn unknown_report_id_is_rejected_by_foreign_key() {
        let (_dir, svc) = test_service().await;
        let result = svc.insert_survey_response(404, &sample_answers(None)).await;
        assert!(result.is_err());
        assert_eq!(svc.count_survey_responses(None).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn missing_response_is_none() {
        let (_dir, svc) = test_service().await;
        assert!(svc.get_survey_response(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn counts_filter_by_report() {
        let (_dir, svc) = test_service().await;
        seed_report(&svc, 1, "WS", "A").await;
        seed_report(&svc, 2, "WS", "B").await;
        svc.insert_survey_response(1, &sample_answers(None)).await.unwrap();
        svc.insert_survey_response(2, &sample_answers(None)).await.unwrap();
        svc.insert_survey_response(2, &sample_answers(None)).await.unwrap();

        assert_eq!(svc.count_survey_responses(None).await.unwrap(), 3);
        assert_eq!(svc.count_survey_responses(Some(1)).await.unwrap(), 1);
        assert_eq!(svc.count_survey_responses(Some(2)).await.unwrap(), 2);
        assert_eq!(svc.count_survey_responses(Some(3)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn insert_fails_cleanly_when_table_missing() {
        let (_dir, svc) = test_service().await;
        seed_report(&svc, 7, "Finance WS", "SalesDash").await;
        drop_table(&svc, "survey_responses").await;

        let result = svc.insert_survey_response(7, &sample_answers(None)).await;
        assert!(matches!(result, Err(DatabaseError::LibSql(_))));
    }
}
