//! Submission timestamps in the business's civil time.
//!
//! Responses are stamped in America/Bogota time, not UTC, so stored times
//! line up with local reporting regardless of the server's locale. Colombia
//! has observed UTC−05:00 without daylight saving since 1993, so a fixed
//! offset is exact.

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Offset of America/Bogota from UTC, in seconds west of Greenwich.
pub const BOGOTA_OFFSET_WEST_SECS: i32 = 5 * 3600;

/// The America/Bogota offset.
#[must_use]
pub fn bogota_offset() -> FixedOffset {
    FixedOffset::west_opt(BOGOTA_OFFSET_WEST_SECS).unwrap_or_else(|| Utc.fix())
}

/// Current time in America/Bogota.
#[must_use]
pub fn bogota_now() -> DateTime<FixedOffset> {
    to_bogota(Utc::now())
}

/// Convert a UTC instant to America/Bogota civil time.
#[must_use]
pub fn to_bogota(instant: DateTime<Utc>) -> DateTime<FixedOffset> {
    instant.with_timezone(&bogota_offset())
}
