//! Crate-level error type.
//!
//! Validation findings on input lines are not errors in this sense; they are
//! collected into the error report. Everything here aborts the run.

use std::path::PathBuf;

use crate::organizer::ConfigError;
use crate::reservations::SegmentParseError;

/// Errors that abort an itinerary run.
#[derive(Debug, thiserror::Error)]
pub enum ItineraryError {
    /// Input file missing or unreadable
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line passed validation but could not be parsed
    #[error(transparent)]
    Parse(#[from] SegmentParseError),

    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::organizer::OrganizerConfig;

    #[test]
    fn error_display() {
        let err = ItineraryError::Io {
            path: PathBuf::from("/tmp/input.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "failed to read /tmp/input.txt: not found");

        let err = ItineraryError::from(SegmentParseError::MissingDate {
            line: "Flight SVQ".into(),
        });
        assert_eq!(
            err.to_string(),
            "missing departure date in \"Flight SVQ\""
        );

        let config_err = OrganizerConfig::from_base_value(Some("x")).unwrap_err();
        let err = ItineraryError::from(config_err.clone());
        assert_eq!(err.to_string(), config_err.to_string());
    }
}
