//! Structural integrity checks for reservation lines.
//!
//! Every line must start with a known segment keyword, contain the `->`
//! separator and carry exactly the tokens its kind needs. The per-kind
//! shapes live in [`SHAPE_RULES`]; adding a segment kind means adding a row.

use std::fmt;

use tracing::debug;

use super::tokens::{self, SEPARATOR, TokenCounts};
use crate::domain::SegmentKind;

/// A reservation line that failed a structural rule.
///
/// Carries no diagnostic beyond the offending text itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError(String);

impl ValidationError {
    /// The original line text.
    pub fn line(&self) -> &str {
        &self.0
    }

    pub fn into_line(self) -> String {
        self.0
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ValidationError {
    fn from(line: &str) -> Self {
        Self(line.to_string())
    }
}

/// Which rule a line broke. Only used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    UnknownKind,
    MissingSeparator,
    Shape {
        kind: SegmentKind,
        found: TokenCounts,
    },
}

/// The token quantities a segment kind requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeRule {
    pub kind: SegmentKind,
    pub codes: usize,
    pub dates: usize,
    pub times: usize,
}

impl ShapeRule {
    /// Returns true if `counts` has exactly the required quantities.
    pub fn accepts(&self, counts: &TokenCounts) -> bool {
        counts.codes == self.codes && counts.dates == self.dates && counts.times == self.times
    }
}

/// Required token shape per segment kind.
pub const SHAPE_RULES: [ShapeRule; 3] = [
    ShapeRule {
        kind: SegmentKind::Flight,
        codes: 2,
        dates: 1,
        times: 2,
    },
    ShapeRule {
        kind: SegmentKind::Train,
        codes: 2,
        dates: 1,
        times: 2,
    },
    ShapeRule {
        kind: SegmentKind::Hotel,
        codes: 1,
        dates: 2,
        times: 0,
    },
];

/// Look up the shape rule for a kind.
pub fn shape_rule(kind: SegmentKind) -> Option<&'static ShapeRule> {
    SHAPE_RULES.iter().find(|rule| rule.kind == kind)
}

/// Check a single line, stopping at the first broken rule.
///
/// # Examples
///
/// ```
/// use itinerary::domain::SegmentKind;
/// use itinerary::reservations::{Violation, check_segment};
///
/// assert_eq!(
///     check_segment("Flight SVQ 2023-03-02 06:40 -> BCN 09:10"),
///     Ok(SegmentKind::Flight)
/// );
/// assert_eq!(
///     check_segment("Bus SVQ 2023-03-02 06:40 -> BCN 09:10"),
///     Err(Violation::UnknownKind)
/// );
/// ```
pub fn check_segment(segment: &str) -> Result<SegmentKind, Violation> {
    let kind = tokens::keyword(segment)
        .and_then(|word| word.parse::<SegmentKind>().ok())
        .ok_or(Violation::UnknownKind)?;

    if !segment.contains(SEPARATOR) {
        return Err(Violation::MissingSeparator);
    }

    let found = TokenCounts::scan(segment);
    match shape_rule(kind) {
        Some(rule) if rule.accepts(&found) => Ok(kind),
        _ => Err(Violation::Shape { kind, found }),
    }
}

/// Segment lines split by whether they passed the integrity checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checked {
    pub valid: Vec<String>,
    pub errors: Vec<ValidationError>,
}

/// Split segment lines into valid lines and validation errors.
///
/// Both sides keep input order.
pub fn partition_segments<I, S>(segments: I) -> Checked
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    segments
        .into_iter()
        .map(Into::<String>::into)
        .fold(Checked::default(), |mut checked, segment| {
            match check_segment(&segment) {
                Ok(_) => checked.valid.push(segment),
                Err(violation) => {
                    debug!(segment = %segment, ?violation, "Rejected reservation line");
                    checked.errors.push(ValidationError(segment));
                }
            }
            checked
        })
}

/// Return the lines that fail validation, in input order.
pub fn check_integrity<I, S>(segments: I) -> Vec<ValidationError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    partition_segments(segments).errors
}
