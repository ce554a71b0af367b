use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A catalogued business-intelligence report users can evaluate.
///
/// Created out-of-band; the survey backend only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Report {
    pub id: i64,
    pub workspace_name: String,
    /// Human-readable unique key shown in the form.
    pub item_name: String,
}

/// Denormalized report fields copied into every response at submission time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportMeta {
    pub workspace_name: String,
    pub item_name: String,
}

impl Report {
    /// Split off the metadata copied into a survey response.
    #[must_use]
    pub fn meta(&self) -> ReportMeta {
        ReportMeta {
            workspace_name: self.workspace_name.clone(),
            item_name: self.item_name.clone(),
        }
    }
}
