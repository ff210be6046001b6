//! Report rendering.
//!
//! A run produces exactly one of two reports: the organized itinerary, or
//! the list of lines that failed validation.

use std::fmt;

use crate::domain::Trip;
use crate::reservations::ValidationError;

/// First line of the error report.
pub const ERROR_HEADER: &str = "Following lines could not be processed due to format failure:";

/// The outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Every line was valid; the trips in chronological order.
    Itinerary(Vec<Trip>),
    /// At least one line was invalid; all invalid lines in input order.
    Errors(Vec<ValidationError>),
}

impl Report {
    /// Returns true if this is an error report.
    pub fn is_errors(&self) -> bool {
        matches!(self, Report::Errors(_))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Itinerary(trips) => f.write_str(&format_trips(trips)),
            Report::Errors(errors) => f.write_str(&format_errors(errors)),
        }
    }
}

/// Render trips: each trip's title, its segments, then a blank line.
///
/// # Examples
///
/// ```
/// use itinerary::domain::{Iata, Segment, Trip};
/// use itinerary::report::format_trips;
/// use chrono::NaiveDate;
///
/// let bcn = Iata::parse("BCN").unwrap();
/// let stay = Segment::hotel(
///     bcn,
///     NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(),
/// );
/// let trip = Trip::new(bcn, vec![stay]).unwrap();
///
/// assert_eq!(
///     format_trips(&[trip]),
///     "TRIP to BCN\nHotel at BCN on 2023-01-05 to 2023-01-10\n\n"
/// );
/// ```
pub fn format_trips(trips: &[Trip]) -> String {
    trips.iter().map(|trip| format!("{trip}\n")).collect()
}

/// Render the error report: the header, then each offending line verbatim.
pub fn format_errors(errors: &[ValidationError]) -> String {
    std::iter::once(ERROR_HEADER)
        .chain(errors.iter().map(ValidationError::line))
        .map(|line| format!("{line}\n"))
        .collect()
}
