//! Row-to-entity parsing helpers.
//!
//! Rows are column-indexed `libsql::Row`s. These helpers isolate the parsing
//! of timestamps, nullable text, and text-stored ratings.

use chrono::{DateTime, FixedOffset};
use survey_core::clock::{bogota_offset, to_bogota};
use survey_core::validation::Rating;

use crate::error::DatabaseError;

/// Parse a stored timestamp as Bogota civil time.
///
/// Handles RFC 3339 with an offset (what the writer stores) and `SQLite`'s
/// `datetime('now')` format (`"2026-02-09 14:30:00"`, UTC) for rows inserted
/// by hand.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string matches neither format.
pub fn parse_datetime(s: &str) -> Result<DateTime<FixedOffset>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&bogota_offset()));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| to_bogota(naive.and_utc()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read a rating stored as text.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if the stored text is not a rating.
pub fn parse_rating(
    row: &libsql::Row,
    idx: i32,
    field: &'static str,
) -> Result<Rating, DatabaseError> {
    let raw = row.get::<String>(idx)?;
    Rating::parse(field, &raw)
        .map_err(|e| DatabaseError::InvalidState(format!("stored {field}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::rfc3339_bogota("2025-06-02T09:15:00-05:00")]
    #[case::rfc3339_utc("2025-06-02T14:15:00+00:00")]
    #[case::rfc3339_zulu("2025-06-02T14:15:00Z")]
    #[case::sqlite_default_is_utc("2025-06-02 14:15:00")]
    fn stored_timestamps_read_as_bogota(#[case] stored: &str) {
        let dt = parse_datetime(stored).unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-06-02T09:15:00-05:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Query(_))
        ));
    }
}
