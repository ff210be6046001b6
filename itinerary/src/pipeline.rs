//! End-to-end itinerary run.
//!
//! Extract → check → parse → organize. Any invalid line switches the whole
//! run to the error report; nothing is organized in that case.

use std::path::Path;

use tracing::debug;

use crate::error::ItineraryError;
use crate::organizer::{OrganizerConfig, organize_trips};
use crate::report::Report;
use crate::reservations::{
    SegmentParseError, extract_segments, parse_segments, partition_segments, read_segments,
};

/// Build the report for already-extracted segment lines.
///
/// # Errors
///
/// Returns `Err` only if a line passes validation but cannot be parsed.
pub fn report_for_segments<I, S>(
    segments: I,
    config: &OrganizerConfig,
) -> Result<Report, SegmentParseError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let checked = partition_segments(segments);
    if !checked.errors.is_empty() {
        debug!(
            errors = checked.errors.len(),
            valid = checked.valid.len(),
            "Invalid reservation lines, skipping organization"
        );
        return Ok(Report::Errors(checked.errors));
    }

    let segments = parse_segments(&checked.valid)?;
    Ok(Report::Itinerary(organize_trips(segments, config)))
}

/// Build the report for raw input lines.
///
/// # Examples
///
/// ```
/// use itinerary::organizer::OrganizerConfig;
/// use itinerary::pipeline::build_report;
///
/// let lines = [
///     "RESERVATION",
///     "SEGMENT: Flight SVQ 2023-03-02 06:40 -> BCN 09:10",
/// ];
/// let report = build_report(lines, &OrganizerConfig::default()).unwrap();
///
/// assert_eq!(
///     report.to_string(),
///     "TRIP to BCN\nFlight from SVQ to BCN at 2023-03-02 06:40 to 09:10\n\n"
/// );
/// ```
pub fn build_report<I, S>(lines: I, config: &OrganizerConfig) -> Result<Report, SegmentParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    report_for_segments(extract_segments(lines), config)
}

/// Read `path` and build its report.
pub fn run(path: impl AsRef<Path>, config: &OrganizerConfig) -> Result<Report, ItineraryError> {
    let segments = read_segments(path)?;
    Ok(report_for_segments(segments, config)?)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
