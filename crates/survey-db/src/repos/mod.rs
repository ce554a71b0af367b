//! Repository modules implementing the survey operations.
//!
//! Each module adds methods to `SurveyService` via `impl SurveyService` blocks.

pub mod catalog;
pub mod report;
pub mod response;
