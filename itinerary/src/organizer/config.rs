//! Configuration for trip organization.

use chrono::Duration;

use crate::domain::{Iata, InvalidIata};

/// Environment variable naming the traveller's home location.
pub const BASE_ENV_VAR: &str = "BASED";

/// Error returned when the configured base is not a location code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid BASED: {source}")]
pub struct ConfigError {
    #[from]
    source: InvalidIata,
}

/// Configuration parameters for splitting segments into trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizerConfig {
    /// Home location. Trip titles name the endpoint that is not home.
    pub base: Option<Iata>,

    /// Longest gap between consecutive segments of one trip (minutes).
    /// Gaps strictly longer than this start a new trip.
    pub max_gap_mins: i64,
}

impl OrganizerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(base: Option<Iata>, max_gap_mins: i64) -> Self {
        Self { base, max_gap_mins }
    }

    /// Returns this configuration with `base` as the home location.
    pub fn with_base(mut self, base: Iata) -> Self {
        self.base = Some(base);
        self
    }

    /// Build the default configuration with the base read from `BASED`.
    ///
    /// An unset or blank variable means no base.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_base_value(std::env::var(BASE_ENV_VAR).ok().as_deref())
    }

    /// Build the default configuration from a raw base value.
    pub fn from_base_value(value: Option<&str>) -> Result<Self, ConfigError> {
        let base = match value.map(str::trim) {
            None | Some("") => None,
            Some(code) => Some(code.parse::<Iata>()?),
        };

        Ok(Self {
            base,
            ..Self::default()
        })
    }

    /// Returns the maximum gap as a Duration.
    pub fn max_gap(&self) -> Duration {
        Duration::minutes(self.max_gap_mins)
    }
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self {
            base: None,
            max_gap_mins: 24 * 60, // 24 hours
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = OrganizerConfig::default();

        assert_eq!(config.base, None);
        assert_eq!(config.max_gap_mins, 1440);
        assert_eq!(config.max_gap(), Duration::hours(24));
    }

    #[test]
    fn custom_config() {
        let svq = Iata::parse("SVQ").unwrap();
        let config = OrganizerConfig::new(Some(svq), 720);

        assert_eq!(config.base, Some(svq));
        assert_eq!(config.max_gap(), Duration::hours(12));
    }

    #[test]
    fn with_base() {
        let mad = Iata::parse("MAD").unwrap();
        let config = OrganizerConfig::default().with_base(mad);

        assert_eq!(config.base, Some(mad));
        assert_eq!(config.max_gap_mins, 1440);
    }

    #[test]
    fn base_value_parsed() {
        let config = OrganizerConfig::from_base_value(Some("SVQ")).unwrap();
        assert_eq!(config.base, Some(Iata::parse("SVQ").unwrap()));

        let config = OrganizerConfig::from_base_value(Some(" SVQ\n")).unwrap();
        assert_eq!(config.base, Some(Iata::parse("SVQ").unwrap()));
    }

    #[test]
    fn missing_or_blank_base_is_none() {
        for value in [None, Some(""), Some("  ")] {
            let config = OrganizerConfig::from_base_value(value).unwrap();
            assert_eq!(config.base, None, "value {value:?}");
        }
    }

    #[test]
    fn invalid_base_rejected() {
        let err = OrganizerConfig::from_base_value(Some("svq")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid BASED: \"svq\" is not a location code: only A-Z allowed"
        );

        assert!(OrganizerConfig::from_base_value(Some("SEVILLA")).is_err());
    }
}
