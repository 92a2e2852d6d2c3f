//! Time source and instant parsing
//!
//! The engine never reads the wall clock itself; callers pass `now` from a
//! [`Clock`].

use chrono::{DateTime, NaiveDateTime, Utc};

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

const LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Parse an author-supplied instant.
///
/// Accepts RFC 3339, or a `datetime-local` value without offset read as UTC.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc3339() {
        let expected = Utc.with_ymd_and_hms(2030, 1, 20, 10, 30, 0).unwrap();
        assert_eq!(parse_instant("2030-01-20T10:30:00Z"), Some(expected));
        assert_eq!(parse_instant("2030-01-20T12:30:00+02:00"), Some(expected));
    }

    #[test]
    fn test_parse_datetime_local() {
        let expected = Utc.with_ymd_and_hms(2030, 1, 20, 10, 30, 0).unwrap();
        assert_eq!(parse_instant("2030-01-20T10:30"), Some(expected));
        assert_eq!(parse_instant("2030-01-20T10:30:00"), Some(expected));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_instant(""), None);
        assert_eq!(parse_instant("next tuesday"), None);
        assert_eq!(parse_instant("2030-13-01T00:00"), None);
    }

    #[test]
    fn test_fixed_clock() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        assert_eq!(FixedClock(at).now(), at);
    }
}
