use chrono::{DateTime, FixedOffset};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::Rating;

/// The fixed-shape answer record of one survey submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SurveyAnswers {
    pub process: String,
    pub subprocess: String,
    /// Job title of the person answering.
    pub role: String,
    /// Free text such as `diario`, `semanal` or `weekly`.
    pub usage_frequency: String,
    pub clarity_rating: Rating,
    pub overall_usefulness: Rating,
    pub decision_usefulness: Rating,
    pub comment: Option<String>,
    /// Copied from the report when the answer is stored, so later renames
    /// of the report do not rewrite history.
    pub workspace_name: String,
    pub item_name: String,
}

/// One persisted survey response. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SurveyResponse {
    pub id: i64,
    pub report_id: i64,
    /// Civil time in America/Bogota at the moment of insert.
    pub submitted_at: DateTime<FixedOffset>,
    pub answers: SurveyAnswers,
}
