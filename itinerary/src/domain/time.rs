//! Date and time token handling.
//!
//! Reservation lines carry dates as "YYYY-MM-DD" and clock times as "HH:MM".
//! All timestamps are naive local times; no timezone conversion happens
//! anywhere in the crate.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Error returned when parsing an invalid date or time token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date/time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse a calendar date from "YYYY-MM-DD" format.
///
/// The token must be well shaped and name a real calendar day.
///
/// # Examples
///
/// ```
/// use itinerary::domain::parse_date;
///
/// assert!(parse_date("2023-01-05").is_ok());
/// assert!(parse_date("2024-02-29").is_ok());
///
/// assert!(parse_date("2023-13-01").is_err());
/// assert!(parse_date("2023-02-29").is_err());
/// assert!(parse_date("23-01-05").is_err());
/// ```
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    let bytes = s.as_bytes();

    if bytes.len() != 10 {
        return Err(TimeError::new("expected YYYY-MM-DD format"));
    }

    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(TimeError::new("expected dashes at positions 4 and 7"));
    }

    let year = field(&bytes[0..4], "invalid year digits")?;
    let month = field(&bytes[5..7], "invalid month digits")?;
    let day = field(&bytes[8..10], "invalid day digits")?;

    let Ok(year) = i32::try_from(year) else {
        return Err(TimeError::new("year out of range"));
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| TimeError::new("not a calendar date"))
}

/// Parse a clock time from "HH:MM" format.
///
/// # Examples
///
/// ```
/// use itinerary::domain::parse_hhmm;
///
/// assert!(parse_hhmm("00:00").is_ok());
/// assert!(parse_hhmm("23:59").is_ok());
///
/// assert!(parse_hhmm("1430").is_err());
/// assert!(parse_hhmm("14:3").is_err());
/// assert!(parse_hhmm("25:00").is_err());
/// ```
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, TimeError> {
    // Must be exactly 5 characters: HH:MM
    if s.len() != 5 {
        return Err(TimeError::new("expected HH:MM format"));
    }

    let bytes = s.as_bytes();

    if bytes[2] != b':' {
        return Err(TimeError::new("expected colon at position 2"));
    }

    let hour = field(&bytes[0..2], "invalid hour digits")?;
    if hour > 23 {
        return Err(TimeError::new("hour must be 0-23"));
    }

    let minute = field(&bytes[3..5], "invalid minute digits")?;
    if minute > 59 {
        return Err(TimeError::new("minute must be 0-59"));
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| TimeError::new("invalid time"))
}

/// The last second of `date` (23:59:59).
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::seconds(24 * 60 * 60 - 1)
}

/// Midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn field(bytes: &[u8], reason: &'static str) -> Result<u32, TimeError> {
    parse_digits(bytes).ok_or_else(|| TimeError::new(reason))
}

/// Parse a run of ASCII digit bytes into a u32.
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() {
        return None;
    }
    bytes.iter().try_fold(0u32, |acc, &b| {
        let digit = (b as char).to_digit(10)?;
        Some(acc * 10 + digit)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_valid_dates() {
        assert_eq!(parse_date("2023-01-05").unwrap(), date(2023, 1, 5));
        assert_eq!(parse_date("2023-12-31").unwrap(), date(2023, 12, 31));
        assert_eq!(parse_date("2024-02-29").unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn reject_impossible_dates() {
        assert!(parse_date("2023-13-40").is_err());
        assert!(parse_date("2023-00-10").is_err());
        assert!(parse_date("2023-04-31").is_err());
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("2023-01-00").is_err());
    }

    #[test]
    fn reject_malformed_dates() {
        assert!(parse_date("").is_err());
        assert!(parse_date("2023/01/05").is_err());
        assert!(parse_date("2023-1-5").is_err());
        assert!(parse_date("2023-01-0a").is_err());
        assert!(parse_date("02023-01-05").is_err());
    }

    #[test]
    fn parse_valid_times() {
        let t = parse_hhmm("00:00").unwrap();
        assert_eq!((t.hour(), t.minute()), (0, 0));

        let t = parse_hhmm("06:40").unwrap();
        assert_eq!((t.hour(), t.minute()), (6, 40));

        let t = parse_hhmm("23:59").unwrap();
        assert_eq!((t.hour(), t.minute()), (23, 59));
    }

    #[test]
    fn reject_out_of_range_times() {
        assert!(parse_hhmm("24:00").is_err());
        assert!(parse_hhmm("25:00").is_err());
        assert!(parse_hhmm("12:60").is_err());
        assert!(parse_hhmm("99:99").is_err());
    }

    #[test]
    fn reject_malformed_times() {
        assert!(parse_hhmm("").is_err());
        assert!(parse_hhmm("1:30").is_err());
        assert!(parse_hhmm("12-30").is_err());
        assert!(parse_hhmm("ab:cd").is_err());
        assert!(parse_hhmm("12:301").is_err());
    }

    #[test]
    fn day_boundaries() {
        let d = date(2023, 1, 5);
        assert_eq!(end_of_day(d), d.and_hms_opt(23, 59, 59).unwrap());
        assert_eq!(start_of_day(d), d.and_hms_opt(0, 0, 0).unwrap());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use proptest::prelude::*;

    proptest! {
        /// Every real clock time formatted as HH:MM parses back to itself
        #[test]
        fn time_roundtrip(h in 0u32..24, m in 0u32..60) {
            let t = parse_hhmm(&format!("{h:02}:{m:02}")).unwrap();
            prop_assert_eq!((t.hour(), t.minute()), (h, m));
        }

        /// Hours past 23 are always rejected
        #[test]
        fn late_hours_rejected(h in 24u32..100, m in 0u32..60) {
            let token = format!("{h:02}:{m:02}");
            prop_assert!(parse_hhmm(&token).is_err());
        }

        /// Parsing agrees with chrono's own calendar
        #[test]
        fn date_matches_calendar(y in 1900i32..2100, m in 0u32..15, d in 0u32..35) {
            let parsed = parse_date(&format!("{y:04}-{m:02}-{d:02}"));
            match NaiveDate::from_ymd_opt(y, m, d) {
                Some(expected) => {
                    let got = parsed.unwrap();
                    prop_assert_eq!(got, expected);
                    prop_assert_eq!((got.year(), got.month(), got.day()), (y, m, d));
                }
                None => prop_assert!(parsed.is_err()),
            }
        }
    }
}
