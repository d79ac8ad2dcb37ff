//! Time bucketing utilities for observation statistics
//!
//! Observation timestamps are interpreted as the wall-clock time the observer
//! recorded, in the offset they recorded it with. Nothing here converts to UTC
//! or derives a zone from the observation's coordinates.
//! - Day keys: calendar dates used for streaks
//! - Hour buckets: late night `[0, 4)` and early morning `[4, 6)`

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};

/// Offset-less layouts accepted in addition to RFC 3339
const LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a recorded timestamp into the observer's local wall-clock time.
///
/// Returns `None` for anything that cannot be parsed.
///
/// # Example
/// ```
/// use starlog::stats::parse_local_timestamp;
/// use chrono::Timelike;
///
/// let local = parse_local_timestamp("2025-01-15T02:30:00-05:00").unwrap();
/// assert_eq!(local.hour(), 2);
/// ```
pub fn parse_local_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Calendar day a local timestamp falls on
pub fn day_key(local: NaiveDateTime) -> NaiveDate {
    local.date()
}

/// Display form of a day key ("YYYY-MM-DD")
pub fn day_bucket(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Hour-of-day classification used by time achievements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    /// 00:00 - 03:59
    LateNight,
    /// 04:00 - 05:59
    EarlyMorning,
    Other,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=3 => Self::LateNight,
            4..=5 => Self::EarlyMorning,
            _ => Self::Other,
        }
    }

    pub fn of(local: NaiveDateTime) -> Self {
        Self::from_hour(local.hour())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_keeps_recorded_offset() {
        // 23:30 in New York is already the next day in UTC
        let local = parse_local_timestamp("2025-01-15T23:30:00-05:00").unwrap();
        assert_eq!(local.hour(), 23);
        assert_eq!(day_bucket(day_key(local)), "2025-01-15");

        let local = parse_local_timestamp("2025-01-16T01:15:00+09:00").unwrap();
        assert_eq!(local.hour(), 1);
        assert_eq!(day_bucket(day_key(local)), "2025-01-16");
    }

    #[test]
    fn test_offsetless_formats() {
        assert!(parse_local_timestamp("2025-01-15T22:00:00").is_some());
        assert!(parse_local_timestamp("2025-01-15T22:00:00.123").is_some());
        assert!(parse_local_timestamp("2025-01-15 22:00:00").is_some());
        assert!(parse_local_timestamp("2025-01-15T22:00").is_some());
    }

    #[test]
    fn test_malformed_timestamps() {
        assert!(parse_local_timestamp("").is_none());
        assert!(parse_local_timestamp("   ").is_none());
        assert!(parse_local_timestamp("yesterday").is_none());
        assert!(parse_local_timestamp("2025-13-40T99:00:00Z").is_none());
    }

    #[test]
    fn test_hour_buckets() {
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::LateNight);
        assert_eq!(TimeOfDay::from_hour(3), TimeOfDay::LateNight);
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::EarlyMorning);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::EarlyMorning);
        assert_eq!(TimeOfDay::from_hour(6), TimeOfDay::Other);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Other);
    }
}
