//! Decoding of the submitted survey form.

use serde::Deserialize;
use survey_core::entities::{ReportMeta, SurveyAnswers};
use survey_core::errors::ValidationError;
use survey_core::validation::{Rating, normalize_comment};

/// Raw `application/x-www-form-urlencoded` body of `POST /encuesta`.
///
/// Every field is optional at the decoding stage so that a missing field is
/// reported as a [`ValidationError`] naming it.
#[derive(Debug, Default, Deserialize)]
pub struct SurveyForm {
    pub reporte: Option<String>,
    pub proceso: Option<String>,
    pub subproceso_evaluacion: Option<String>,
    pub cargo_evaluador: Option<String>,
    pub claridad_precision: Option<String>,
    pub utilidad_general: Option<String>,
    pub utilidad_decisiones: Option<String>,
    pub frecuencia_uso: Option<String>,
    #[serde(default)]
    pub sugerencias_mejora: String,
}

/// A form whose fields are present and whose ratings are on the scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub report: String,
    pub process: String,
    pub subprocess: String,
    pub role: String,
    pub usage_frequency: String,
    pub clarity_rating: Rating,
    pub overall_usefulness: Rating,
    pub decision_usefulness: Rating,
    pub comment: String,
}

impl SurveyForm {
    /// Check presence of required fields and parse the ratings.
    ///
    /// The comment length is not checked here; it is validated after the
    /// report has been resolved.
    pub fn parse(self) -> Result<Submission, ValidationError> {
        Ok(Submission {
            report: required("reporte", self.reporte)?,
            process: required("proceso", self.proceso)?,
            subprocess: required("subproceso_evaluacion", self.subproceso_evaluacion)?,
            role: required("cargo_evaluador", self.cargo_evaluador)?,
            usage_frequency: required("frecuencia_uso", self.frecuencia_uso)?,
            clarity_rating: rating("claridad_precision", self.claridad_precision)?,
            overall_usefulness: rating("utilidad_general", self.utilidad_general)?,
            decision_usefulness: rating("utilidad_decisiones", self.utilidad_decisiones)?,
            comment: self.sugerencias_mejora,
        })
    }
}

impl Submission {
    /// Build the stored answer record, copying the report's metadata.
    pub fn into_answers(self, meta: ReportMeta) -> SurveyAnswers {
        SurveyAnswers {
            process: self.process,
            subprocess: self.subprocess,
            role: self.role,
            usage_frequency: self.usage_frequency,
            clarity_rating: self.clarity_rating,
            overall_usefulness: self.overall_usefulness,
            decision_usefulness: self.decision_usefulness,
            comment: normalize_comment(&self.comment),
            workspace_name: meta.workspace_name,
            item_name: meta.item_name,
        }
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField { field }),
    }
}

fn rating(field: &'static str, value: Option<String>) -> Result<Rating, ValidationError> {
    let raw = required(field, value)?;
    Rating::parse(field, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn complete() -> SurveyForm {
        SurveyForm {
            reporte: Some("SalesDash".into()),
            proceso: Some("Finance".into()),
            subproceso_evaluacion: Some("AP".into()),
            cargo_evaluador: Some("Analyst".into()),
            claridad_precision: Some("5".into()),
            utilidad_general: Some("4".into()),
            utilidad_decisiones: Some("5".into()),
            frecuencia_uso: Some("weekly".into()),
            sugerencias_mejora: String::new(),
        }
    }

    #[test]
    fn complete_form_parses() {
        let submission = complete().parse().unwrap();
        assert_eq!(submission.report, "SalesDash");
        assert_eq!(submission.overall_usefulness.get(), 4);
        assert_eq!(submission.comment, "");
    }

    #[test]
    fn missing_field_is_named() {
        let form = SurveyForm {
            cargo_evaluador: None,
            ..complete()
        };
        assert_eq!(
            form.parse(),
            Err(ValidationError::MissingField {
                field: "cargo_evaluador"
            })
        );
    }

    #[test]
    fn blank_field_counts_as_missing() {
        let form = SurveyForm {
            proceso: Some("  ".into()),
            ..complete()
        };
        assert_eq!(
            form.parse(),
            Err(ValidationError::MissingField { field: "proceso" })
        );
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let form = SurveyForm {
            utilidad_decisiones: Some("0".into()),
            ..complete()
        };
        assert!(matches!(
            form.parse(),
            Err(ValidationError::RatingOutOfRange {
                field: "utilidad_decisiones",
                value: 0,
                ..
            })
        ));
    }

    #[test]
    fn empty_comment_becomes_null_answer() {
        let meta = ReportMeta {
            workspace_name: "Finance WS".into(),
            item_name: "SalesDash".into(),
        };
        let answers = complete().parse().unwrap().into_answers(meta);
        assert_eq!(answers.comment, None);
        assert_eq!(answers.workspace_name, "Finance WS");
    }
}
