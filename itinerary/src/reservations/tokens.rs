//! Token scanning over reservation text.
//!
//! Codes, dates and times are found anywhere in a line as word-bounded
//! matches, so punctuation next to a token does not hide it.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::domain::{parse_date, parse_hhmm};

/// Separator between the departure half and the arrival half of a line.
pub const SEPARATOR: &str = "->";

static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z]{3}\b").expect("code pattern is valid")
});

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]{4}-[0-9]{2}-[0-9]{2}\b").expect("date pattern is valid")
});

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]{2}:[0-9]{2}\b").expect("time pattern is valid")
});

/// The first whitespace-delimited word of a line, if any.
pub fn keyword(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

/// All code-shaped tokens, left to right.
pub fn codes(text: &str) -> impl Iterator<Item = &str> {
    CODE_PATTERN.find_iter(text).map(|m| m.as_str())
}

/// All date-shaped tokens, left to right, valid or not.
pub fn date_tokens(text: &str) -> impl Iterator<Item = &str> {
    DATE_PATTERN.find_iter(text).map(|m| m.as_str())
}

/// All time-shaped tokens, left to right, valid or not.
pub fn time_tokens(text: &str) -> impl Iterator<Item = &str> {
    TIME_PATTERN.find_iter(text).map(|m| m.as_str())
}

/// Date tokens that name a real calendar day.
pub fn valid_dates(text: &str) -> impl Iterator<Item = NaiveDate> + '_ {
    date_tokens(text).filter_map(|token| parse_date(token).ok())
}

/// Time tokens that name a real clock time.
pub fn valid_times(text: &str) -> impl Iterator<Item = NaiveTime> + '_ {
    time_tokens(text).filter_map(|token| parse_hhmm(token).ok())
}

/// How many usable tokens of each sort a line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenCounts {
    pub codes: usize,
    pub dates: usize,
    pub times: usize,
}

impl TokenCounts {
    /// Count codes plus *valid* dates and times in `text`.
    ///
    /// Tokens that are shaped right but name an impossible date or time are
    /// not counted.
    pub fn scan(text: &str) -> Self {
        Self {
            codes: codes(text).count(),
            dates: valid_dates(text).count(),
            times: valid_times(text).count(),
        }
    }
}

/// Split a line on the first separator into its departure and arrival halves.
pub fn split_halves(text: &str) -> Option<(&str, &str)> {
    text.split_once(SEPARATOR)
}
