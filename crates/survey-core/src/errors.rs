//! Validation errors raised while checking a survey submission.
//!
//! Storage errors live in `survey-db` (`DatabaseError`) and configuration
//! errors in `survey-config` (`ConfigError`). The HTTP layer maps all of them
//! onto status codes. Messages are user-facing and written in Spanish, the
//! language of the form.

use thiserror::Error;

/// A submitted field violated a form constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required form field was not sent.
    #[error("El campo '{field}' es obligatorio.")]
    MissingField { field: &'static str },

    /// A rating was not an integer.
    #[error("El campo '{field}' debe ser un número entero (recibido '{value}').")]
    MalformedRating { field: &'static str, value: String },

    /// A rating was an integer outside the accepted scale.
    #[error("El campo '{field}' debe estar entre {min} y {max} (recibido {value}).")]
    RatingOutOfRange {
        field: &'static str,
        value: i64,
        min: u8,
        max: u8,
    },

    /// The free-form comment has more whitespace-delimited words than allowed.
    #[error("El comentario tiene {words} palabras; el máximo permitido es {max}.")]
    CommentTooLong { words: usize, max: usize },
}
