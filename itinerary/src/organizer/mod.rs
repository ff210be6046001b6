//! Trip organization.
//!
//! Groups a start-sorted sequence of segments into trips, splitting wherever
//! consecutive segments are more than a configurable gap apart (24 hours by
//! default), and names each trip after where it went.

mod config;
mod organize;

pub use config::{BASE_ENV_VAR, ConfigError, OrganizerConfig};
pub use organize::{organize_trips, title_destination};
