//! Entity structs for the survey domain.
//!
//! Each entity maps to a table in the libSQL database (see `survey-db`'s
//! bootstrap schema). All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema`.

mod report;
mod response;

pub use report::{Report, ReportMeta};
pub use response::{SurveyAnswers, SurveyResponse};
