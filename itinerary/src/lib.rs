//! Travel itinerary organizer.
//!
//! Reads reservation lines (flights, trains, hotels), checks their
//! structure, and groups them into trips separated by gaps of more than a
//! day, or lists the lines that could not be processed.

pub mod domain;
pub mod error;
pub mod organizer;
pub mod pipeline;
pub mod report;
pub mod reservations;

pub use error::ItineraryError;
