//! Conversion of user-supplied date strings into epoch milliseconds.
//!
//! Filter bounds arrive as either bare dates (`2024-06-01`) or full
//! timestamps (`2024-06-01T12:00:00Z`). Bare dates are widened to the
//! inclusive edge of the day they name, so a range `[start, end]` of bare
//! dates covers both days completely. Everything is interpreted in UTC unless
//! the input carries an explicit offset.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::blog::BlogError;

/// Naive timestamp layouts accepted when no UTC offset is present.
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Which edge of a date range a value is normalized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Start,
    End,
}

impl Boundary {
    /// Time of day appended to a bare date.
    fn default_time(self) -> (u32, u32, u32) {
        match self {
            Boundary::Start => (0, 0, 0),
            Boundary::End => (23, 59, 59),
        }
    }
}

/// Normalizes a date or timestamp string into epoch milliseconds.
///
/// Inputs containing a `T` separator are parsed as full timestamps (RFC 3339,
/// or a naive timestamp taken as UTC). Bare `YYYY-MM-DD` dates get `00:00:00`
/// for [`Boundary::Start`] and `23:59:59` for [`Boundary::End`].
///
/// # Examples
///
/// ```
/// use wayfarer_core::query::{normalize, Boundary};
///
/// assert_eq!(normalize("2024-06-01", Boundary::Start).unwrap(), 1_717_200_000_000);
/// assert_eq!(normalize("2024-07-31", Boundary::End).unwrap(), 1_722_470_399_000);
/// assert!(normalize("June 1st", Boundary::Start).is_err());
/// ```
pub fn normalize(input: &str, boundary: Boundary) -> Result<i64, BlogError> {
    let trimmed = input.trim();
    let malformed = || BlogError::MalformedDate {
        input: input.to_string(),
    };

    if trimmed.contains('T') {
        return parse_timestamp(trimmed)
            .map(|dt| dt.timestamp_millis())
            .ok_or_else(malformed);
    }

    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| malformed())?;
    let (hour, minute, second) = boundary.default_time();

    date.and_hms_opt(hour, minute, second)
        .map(|naive| naive.and_utc().timestamp_millis())
        .ok_or_else(malformed)
}

fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|naive| naive.and_utc())
}
