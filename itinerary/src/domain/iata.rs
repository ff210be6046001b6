//! Location codes.
//!
//! Airports, stations and hotel cities all appear in reservation lines as
//! three uppercase letters, e.g. `SVQ` or `BCN`.

use std::fmt;
use std::str::FromStr;

/// Error returned for text that is not a location code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{text:?} is not a location code: {reason}")]
pub struct InvalidIata {
    text: String,
    reason: &'static str,
}

/// A three-letter location code, `A-Z` only.
///
/// # Examples
///
/// ```
/// use itinerary::domain::Iata;
///
/// let bcn: Iata = "BCN".parse().unwrap();
/// assert_eq!(bcn.to_string(), "BCN");
///
/// assert!("bcn".parse::<Iata>().is_err());
/// assert!("BCNX".parse::<Iata>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iata([u8; 3]);

impl Iata {
    /// Parse a code token. Same as [`str::parse`].
    pub fn parse(s: &str) -> Result<Self, InvalidIata> {
        s.parse()
    }

    pub fn as_str(&self) -> &str {
        // Only A-Z bytes are stored, so this never falls back.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for Iata {
    type Err = InvalidIata;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| InvalidIata {
            text: s.to_string(),
            reason,
        };

        let letters: [u8; 3] = s
            .as_bytes()
            .try_into()
            .map_err(|_| invalid("expected 3 letters"))?;

        if letters.iter().all(u8::is_ascii_uppercase) {
            Ok(Self(letters))
        } else {
            Err(invalid("only A-Z allowed"))
        }
    }
}

impl fmt::Debug for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iata({})", self.as_str())
    }
}

impl fmt::Display for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
