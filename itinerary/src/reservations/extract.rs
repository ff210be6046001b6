//! Reservation line extraction.
//!
//! Input files mix reservation lines with free-form notes. Only lines that
//! carry the reservation marker are of interest.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ItineraryError;

/// Marker that tags a line as a reservation.
pub const SEGMENT_MARKER: &str = "SEGMENT:";

/// Pull the reservation text out of raw input lines.
///
/// Returns, in input order, the trimmed text following the first
/// [`SEGMENT_MARKER`] of every line that has one. Lines without the marker
/// are dropped silently.
///
/// # Examples
///
/// ```
/// use itinerary::reservations::extract_segments;
///
/// let lines = [
///     "RESERVATION",
///     "SEGMENT: Flight SVQ 2023-03-02 06:40 -> BCN 09:10",
///     "",
///     "SEGMENT: Hotel BCN 2023-01-05 -> 2023-01-10  ",
/// ];
///
/// assert_eq!(
///     extract_segments(lines),
///     vec![
///         "Flight SVQ 2023-03-02 06:40 -> BCN 09:10",
///         "Hotel BCN 2023-01-05 -> 2023-01-10",
///     ]
/// );
/// ```
pub fn extract_segments<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            line.as_ref()
                .split_once(SEGMENT_MARKER)
                .map(|(_, rest)| rest.trim().to_string())
        })
        .collect()
}

/// Read a reservation file and extract its segment lines.
///
/// The file is read once, in full, and closed before returning.
///
/// # Errors
///
/// Returns [`ItineraryError::Io`] if the file cannot be read.
pub fn read_segments(path: impl AsRef<Path>) -> Result<Vec<String>, ItineraryError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ItineraryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let segments = extract_segments(contents.lines());
    debug!(
        path = %path.display(),
        segments = segments.len(),
        "Extracted reservation lines"
    );

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn drops_lines_without_marker() {
        let lines = ["RESERVATION", "", "BASED: SVQ", "segment: lowercase"];
        assert!(extract_segments(lines).is_empty());
    }

    #[test]
    fn keeps_input_order() {
        let lines = ["SEGMENT: b", "noise", "SEGMENT: a", "SEGMENT: c"];
        assert_eq!(extract_segments(lines), vec!["b", "a", "c"]);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let lines = ["  SEGMENT:   Train SVQ 2023-02-15 09:30 -> MAD 11:00 \t"];
        assert_eq!(
            extract_segments(lines),
            vec!["Train SVQ 2023-02-15 09:30 -> MAD 11:00"]
        );
    }

    #[test]
    fn marker_with_nothing_after_yields_empty_segment() {
        assert_eq!(extract_segments(["SEGMENT:"]), vec![""]);
    }

    #[test]
    fn only_first_marker_is_stripped() {
        assert_eq!(
            extract_segments(["SEGMENT: Hotel SEGMENT: x"]),
            vec!["Hotel SEGMENT: x"]
        );
    }

    #[test]
    fn reads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "RESERVATION").unwrap();
        writeln!(file, "SEGMENT: Hotel BCN 2023-01-05 -> 2023-01-10").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "RESERVATION").unwrap();
        writeln!(file, "SEGMENT: Flight SVQ 2023-03-02 06:40 -> BCN 09:10").unwrap();

        let segments = read_segments(file.path()).unwrap();
        assert_eq!(
            segments,
            vec![
                "Hotel BCN 2023-01-05 -> 2023-01-10",
                "Flight SVQ 2023-03-02 06:40 -> BCN 09:10",
            ]
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_segments("/nonexistent/path/input.txt").unwrap_err();
        assert!(matches!(err, ItineraryError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/path/input.txt"));
    }
}
