//! Reservation segment types.
//!
//! A `Segment` is one structured travel or stay unit with a start and end
//! timestamp. Flights and trains connect two locations; a hotel stay sits at
//! a single location.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};

use super::time::{end_of_day, start_of_day};
use super::{DomainError, Iata};

/// The kind of reservation a segment describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Flight,
    Train,
    Hotel,
}

impl SegmentKind {
    /// All kinds, in the order they are listed in reports and rule tables.
    pub const ALL: [SegmentKind; 3] = [
        SegmentKind::Flight,
        SegmentKind::Train,
        SegmentKind::Hotel,
    ];

    /// Returns the keyword used for this kind in reservation lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Flight => "Flight",
            SegmentKind::Train => "Train",
            SegmentKind::Hotel => "Hotel",
        }
    }

    /// Returns true for kinds that move between two locations.
    pub fn is_travel(&self) -> bool {
        !matches!(self, SegmentKind::Hotel)
    }
}

/// Error returned when a keyword is not a known segment kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown segment kind: {0:?}")]
pub struct UnknownSegmentKind(pub String);

impl FromStr for SegmentKind {
    type Err = UnknownSegmentKind;

    /// Keywords match exactly and case-sensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SegmentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownSegmentKind(s.to_string()))
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed reservation segment.
///
/// # Invariants
///
/// - Travel segments (`Flight`, `Train`) always have a destination
/// - Hotel segments never have a destination; `origin` is the hotel location
/// - `start <= end` is *not* guaranteed
///
/// Hotel stays are normalized so that they bracket the nights between the
/// arrival evening and the departure morning: `start` is 23:59:59 on the
/// check-in date and `end` is 00:00:00 on the checkout date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    kind: SegmentKind,
    origin: Iata,
    destination: Option<Iata>,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Segment {
    /// Construct a flight or train segment.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `kind` is `Hotel`.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary::domain::{Iata, Segment, SegmentKind};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2023, 3, 2).unwrap();
    /// let segment = Segment::travel(
    ///     SegmentKind::Flight,
    ///     Iata::parse("SVQ").unwrap(),
    ///     Iata::parse("BCN").unwrap(),
    ///     date.and_hms_opt(6, 40, 0).unwrap(),
    ///     date.and_hms_opt(9, 10, 0).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(segment.to_string(), "Flight from SVQ to BCN at 2023-03-02 06:40 to 09:10");
    /// ```
    pub fn travel(
        kind: SegmentKind,
        origin: Iata,
        destination: Iata,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, DomainError> {
        if !kind.is_travel() {
            return Err(DomainError::NotTravel(kind));
        }

        Ok(Self {
            kind,
            origin,
            destination: Some(destination),
            start,
            end,
        })
    }

    /// Construct a hotel stay, normalizing its span to the check-in night
    /// and checkout morning.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary::domain::{Iata, Segment};
    /// use chrono::NaiveDate;
    ///
    /// let check_in = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
    /// let check_out = NaiveDate::from_ymd_opt(2023, 1, 10).unwrap();
    /// let stay = Segment::hotel(Iata::parse("BCN").unwrap(), check_in, check_out);
    ///
    /// assert_eq!(stay.start(), check_in.and_hms_opt(23, 59, 59).unwrap());
    /// assert_eq!(stay.end(), check_out.and_hms_opt(0, 0, 0).unwrap());
    /// ```
    pub fn hotel(location: Iata, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            kind: SegmentKind::Hotel,
            origin: location,
            destination: None,
            start: end_of_day(check_in),
            end: start_of_day(check_out),
        }
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Departure location, or the hotel's location for stays.
    pub fn origin(&self) -> Iata {
        self.origin
    }

    /// Arrival location; `None` for hotel stays.
    pub fn destination(&self) -> Option<Iata> {
        self.destination
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// The time between this segment ending and `next` starting.
    ///
    /// Negative when the segments overlap.
    pub fn gap_until(&self, next: &Segment) -> chrono::Duration {
        next.start.signed_duration_since(self.end)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.destination {
            None => write!(
                f,
                "{} at {} on {} to {}",
                self.kind,
                self.origin,
                self.start.format("%Y-%m-%d"),
                self.end.format("%Y-%m-%d")
            ),
            Some(destination) => write!(
                f,
                "{} from {} to {} at {} to {}",
                self.kind,
                self.origin,
                destination,
                self.start.format("%Y-%m-%d %H:%M"),
                self.end.format("%H:%M")
            ),
        }
    }
}
