//! Reservation input handling.
//!
//! Turns raw input lines into sorted [`Segment`](crate::domain::Segment)s in
//! three steps: extract the tagged lines, check their structure, and parse
//! the ones that pass.

mod extract;
mod integrity;
mod parse;
mod tokens;

pub use extract::{SEGMENT_MARKER, extract_segments, read_segments};
pub use integrity::{
    Checked, SHAPE_RULES, ShapeRule, ValidationError, Violation, check_integrity, check_segment,
    partition_segments, shape_rule,
};
pub use parse::{HalfStamp, SegmentParseError, inherit_date, parse_segment, parse_segments};
pub use tokens::{SEPARATOR, TokenCounts, codes};
