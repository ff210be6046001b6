//! Trip type.
//!
//! A `Trip` is a maximal run of consecutive segments, by start time, with no
//! internal gap longer than the organizer's threshold.

use std::fmt;

use super::{DomainError, Iata, Segment};

/// An organized trip: a titled, ordered run of segments.
///
/// # Invariants
///
/// - At least one segment
/// - Segments are in ascending start order, as handed over by the organizer
///
/// Trips are immutable once built; the title is always derived from the
/// destination and never supplied directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    destination: Iata,
    segments: Vec<Segment>,
}

impl Trip {
    /// Seal a run of segments into a trip towards `destination`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `segments` is empty.
    pub fn new(destination: Iata, segments: Vec<Segment>) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptyTrip);
        }

        Ok(Self {
            destination,
            segments,
        })
    }

    /// Seal `earlier` plus the closing segment `last` into a trip.
    ///
    /// Cannot fail: the closing segment guarantees the trip is non-empty.
    pub fn ending_with(destination: Iata, mut earlier: Vec<Segment>, last: Segment) -> Self {
        earlier.push(last);
        Self {
            destination,
            segments: earlier,
        }
    }

    /// The location this trip is named after.
    pub fn destination(&self) -> Iata {
        self.destination
    }

    /// Human-readable title, e.g. "TRIP to BCN".
    pub fn title(&self) -> String {
        format!("TRIP to {}", self.destination)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Consumes the trip, returning its segments.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

impl fmt::Display for Trip {
    /// Title line followed by one line per segment.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        for segment in &self.segments {
            writeln!(f, "{segment}")?;
        }
        Ok(())
    }
}
