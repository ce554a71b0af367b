//! Form-level rules: the rating scale and the comment word ceiling.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Lowest accepted rating.
pub const RATING_MIN: u8 = 1;

/// Highest accepted rating.
pub const RATING_MAX: u8 = 5;

/// Maximum number of whitespace-delimited words in the free-form comment.
pub const MAX_COMMENT_WORDS: usize = 500;

/// A satisfaction rating on the `RATING_MIN..=RATING_MAX` scale.
///
/// Construct through [`Rating::new`] or [`Rating::parse`]; both enforce the scale.
/// Stored as text in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Check an integer against the rating scale.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::RatingOutOfRange` when `value` is outside the scale.
    pub fn new(field: &'static str, value: i64) -> Result<Self, ValidationError> {
        match u8::try_from(value) {
            Ok(v) if (RATING_MIN..=RATING_MAX).contains(&v) => Ok(Self(v)),
            _ => Err(ValidationError::RatingOutOfRange {
                field,
                value,
                min: RATING_MIN,
                max: RATING_MAX,
            }),
        }
    }

    /// Parse a raw form value. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MalformedRating` for non-integers and
    /// `ValidationError::RatingOutOfRange` for integers off the scale.
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, ValidationError> {
        let value = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::MalformedRating {
                field,
                value: raw.to_string(),
            })?;
        Self::new(field, value)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Count whitespace-delimited tokens.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Reject comments longer than [`MAX_COMMENT_WORDS`].
///
/// # Errors
///
/// Returns `ValidationError::CommentTooLong` carrying the actual word count.
pub fn validate_comment(comment: &str) -> Result<(), ValidationError> {
    let words = count_words(comment);
    if words > MAX_COMMENT_WORDS {
        return Err(ValidationError::CommentTooLong {
            words,
            max: MAX_COMMENT_WORDS,
        });
    }
    Ok(())
}

/// Blank comments are stored as NULL.
#[must_use]
pub fn normalize_comment(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}
