//! Domain types for the itinerary organizer.
//!
//! This module contains the value types that represent validated
//! reservation data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod error;
mod iata;
mod segment;
mod time;
mod trip;

pub use error::DomainError;
pub use iata::{Iata, InvalidIata};
pub use segment::{Segment, SegmentKind, UnknownSegmentKind};
pub use time::{TimeError, end_of_day, parse_date, parse_hhmm, start_of_day};
pub use trip::Trip;
