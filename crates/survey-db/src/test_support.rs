#[cfg(test)]
pub(crate) mod helpers {
    use survey_core::entities::SurveyAnswers;
    use survey_core::validation::Rating;
    use tempfile::TempDir;

    use crate::service::SurveyService;

    /// Service over a fresh file database. Keep the `TempDir` alive for the
    /// duration of the test.
    pub async fn test_service() -> (TempDir, SurveyService) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("survey.db");
        let svc = SurveyService::new_local(path.to_str().unwrap())
            .await
            .unwrap();
        (dir, svc)
    }

    pub async fn seed_report(svc: &SurveyService, id: i64, workspace: &str, item: &str) {
        svc.db()
            .connect()
            .await
            .unwrap()
            .execute(
                "INSERT INTO reports (id, workspace_name, item_name) VALUES (?1, ?2, ?3)",
                libsql::params![id, workspace, item],
            )
            .await
            .unwrap();
    }

    pub async fn seed_process(svc: &SurveyService, process: Option<&str>, subprocess: Option<&str>) {
        svc.db()
            .connect()
            .await
            .unwrap()
            .execute(
                "INSERT INTO processes (process, subprocess) VALUES (?1, ?2)",
                libsql::params![process, subprocess],
            )
            .await
            .unwrap();
    }

    pub async fn drop_table(svc: &SurveyService, table: &str) {
        svc.db()
            .connect()
            .await
            .unwrap()
            .execute(&format!("DROP TABLE {table}"), ())
            .await
            .unwrap();
    }

    pub fn sample_answers(comment: Option<&str>) -> SurveyAnswers {
        SurveyAnswers {
            process: "Finance".into(),
            subprocess: "AP".into(),
            role: "Analyst".into(),
            usage_frequency: "weekly".into(),
            clarity_rating: Rating::new("claridad_precision", 5).unwrap(),
            overall_usefulness: Rating::new("utilidad_general", 4).unwrap(),
            decision_usefulness: Rating::new("utilidad_decisiones", 5).unwrap(),
            comment: comment.map(str::to_string),
            workspace_name: "Finance WS".into(),
            item_name: "SalesDash".into(),
        }
    }
}
