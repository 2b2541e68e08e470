//! Timestamp text encoding used for storage and the wire.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::DomainError;

/// Renders a timestamp as RFC 3339 with millisecond precision and a `Z` suffix,
/// e.g. `2024-03-01T09:00:00.000Z`.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses an RFC 3339 timestamp in any offset and normalizes it to UTC.
///
/// # Errors
///
/// Returns `DomainError::Parse` if the string is not valid RFC 3339.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DomainError::parse(format!("Invalid timestamp '{}': {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn formats_with_millis_and_z() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        assert_eq!(format_datetime(&dt), "2024-03-01T09:00:00.000Z");
    }

    #[test]
    fn parse_normalizes_offset_to_utc() {
        let dt = parse_datetime("2024-01-15T10:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn parse_accepts_formatted_output() {
        let dt = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(parse_datetime(&format_datetime(&dt)).unwrap(), dt);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(parse_datetime("not-a-date"), Err(DomainError::Parse(_))));
        assert!(parse_datetime("2024-01-15").is_err());
    }
}
