//! Conversion of validated reservation lines into segments.
//!
//! Lines reaching this module have already passed the integrity checks, so
//! every failure here means the checks and the parser disagree. Those
//! failures are returned as errors for the caller to abort on; nothing is
//! skipped or patched up.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, trace};

use super::tokens::{self, split_halves};
use crate::domain::{DomainError, Iata, InvalidIata, Segment, SegmentKind};

/// A validated line that could not be turned into a segment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentParseError {
    /// First word is not a segment keyword
    #[error("unknown segment kind in {line:?}")]
    UnknownKind { line: String },

    /// No `->` separator
    #[error("missing '->' separator in {line:?}")]
    MissingSeparator { line: String },

    /// Fewer location codes than the kind needs
    #[error("missing location code in {line:?}")]
    MissingCode { line: String },

    /// The departure half has no date to anchor the segment
    #[error("missing departure date in {line:?}")]
    MissingDate { line: String },

    /// A location code token did not parse
    #[error("bad location code in {line:?}: {source}")]
    Code {
        line: String,
        #[source]
        source: InvalidIata,
    },

    /// The parsed parts violate a segment invariant
    #[error("inconsistent segment {line:?}: {source}")]
    Domain {
        line: String,
        #[source]
        source: DomainError,
    },
}

/// The date and time found in one half of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HalfStamp {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

impl HalfStamp {
    /// Read the first real date and the first real clock time of `half`.
    ///
    /// Impossible tokens such as `2023-13-40` or `25:00` are skipped, the
    /// same way the integrity checks leave them uncounted.
    pub fn scan(half: &str) -> Self {
        Self {
            date: tokens::valid_dates(half).next(),
            time: tokens::valid_times(half).next(),
        }
    }

    /// The timestamp for this half; a missing time means midnight.
    fn datetime(&self) -> Option<NaiveDateTime> {
        self.date
            .map(|date| date.and_time(self.time.unwrap_or(NaiveTime::MIN)))
    }
}

/// Arrival halves without a date take the departure date.
///
/// This is the only place the two halves of a line affect each other. It
/// covers same-day arrivals written as `-> BCN 09:10`.
pub fn inherit_date(from: &HalfStamp, to: HalfStamp) -> HalfStamp {
    HalfStamp {
        date: to.date.or(from.date),
        ..to
    }
}

/// Parse one validated reservation line into a segment.
///
/// # Examples
///
/// ```
/// use itinerary::domain::SegmentKind;
/// use itinerary::reservations::parse_segment;
///
/// let segment = parse_segment("Flight SVQ 2023-03-02 06:40 -> BCN 09:10").unwrap();
/// assert_eq!(segment.kind(), SegmentKind::Flight);
/// assert_eq!(segment.origin().as_str(), "SVQ");
/// assert_eq!(segment.destination().unwrap().as_str(), "BCN");
/// assert_eq!(segment.end().to_string(), "2023-03-02 09:10:00");
/// ```
pub fn parse_segment(line: &str) -> Result<Segment, SegmentParseError> {
    let kind = tokens::keyword(line)
        .and_then(|word| word.parse::<SegmentKind>().ok())
        .ok_or_else(|| SegmentParseError::UnknownKind {
            line: line.to_string(),
        })?;

    let (from_half, to_half) =
        split_halves(line).ok_or_else(|| SegmentParseError::MissingSeparator {
            line: line.to_string(),
        })?;

    let from = HalfStamp::scan(from_half);
    let to = inherit_date(&from, HalfStamp::scan(to_half));

    let missing_date = || SegmentParseError::MissingDate {
        line: line.to_string(),
    };

    let mut codes = tokens::codes(line).map(|code| {
        code.parse::<Iata>().map_err(|source| SegmentParseError::Code {
            line: line.to_string(),
            source,
        })
    });
    let mut next_code = || {
        codes.next().unwrap_or_else(|| {
            Err(SegmentParseError::MissingCode {
                line: line.to_string(),
            })
        })
    };

    let origin = next_code()?;

    let segment = if kind.is_travel() {
        let destination = next_code()?;
        let start = from.datetime().ok_or_else(missing_date)?;
        let end = to.datetime().ok_or_else(missing_date)?;
        Segment::travel(kind, origin, destination, start, end).map_err(|source| {
            SegmentParseError::Domain {
                line: line.to_string(),
                source,
            }
        })?
    } else {
        let check_in = from.date.ok_or_else(missing_date)?;
        let check_out = to.date.ok_or_else(missing_date)?;
        Segment::hotel(origin, check_in, check_out)
    };

    trace!(line, start = %segment.start(), end = %segment.end(), "Parsed segment");
    Ok(segment)
}

/// Parse validated lines into segments sorted by start time.
///
/// Segments starting at the same instant keep their input order.
///
/// # Errors
///
/// Fails on the first line that cannot be parsed; no partial result is
/// returned.
pub fn parse_segments<I, S>(lines: I) -> Result<Vec<Segment>, SegmentParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut segments = lines
        .into_iter()
        .map(|line| parse_segment(line.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    // Stable, so equal starts stay in input order.
    segments.sort_by_key(Segment::start);

    debug!(segments = segments.len(), "Parsed reservation segments");
    Ok(segments)
}
