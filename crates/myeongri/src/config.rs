//! Analysis configuration.
//!
//! Every field has a default that reproduces the conventional behavior, so
//! `AnalysisConfig::default()` is what callers want unless a school-specific
//! variant is requested. With the `serde` feature the struct deserializes
//! from partial documents; missing fields take their defaults.
//!
//! ```toml
//! decade_count = 10
//! direction_basis = "day_stem"
//! authority_basis = "governing"
//! following_threshold = 6
//! ```

use crate::core::constants::{DEFAULT_DECADE_COUNT, MAX_DECADE_COUNT};
use crate::direction::DirectionBasis;
use crate::error::ConfigError;

/// Number of chart positions counted for the Following check: three visible
/// stems and the main qi of four branches.
pub const COUNTED_POSITIONS: u8 = 7;

/// Default Following threshold: five of the seven counted positions.
pub const DEFAULT_FOLLOWING_THRESHOLD: u8 = 5;

/// Smallest threshold that still names a unique majority family.
pub const MIN_FOLLOWING_THRESHOLD: u8 = 4;

/// Which hidden-stem entry of the month branch stands for the month when
/// classifying.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum AuthorityBasis {
    /// Always the Main entry.
    #[default]
    MainQi,
    /// The entry governing on the birth day, when elapsed days are known.
    Governing,
}

/// Tunable parameters of [`Chart::analyze`](crate::chart::Chart::analyze).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct AnalysisConfig {
    /// Decade pillars to generate (1..=12).
    pub decade_count: usize,
    /// Stem whose polarity decides the luck direction.
    pub direction_basis: DirectionBasis,
    /// Month entry read by the Rival and main-qi steps.
    pub authority_basis: AuthorityBasis,
    /// Positions (of seven) one family needs for a Following pattern.
    pub following_threshold: u8,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            decade_count: DEFAULT_DECADE_COUNT,
            direction_basis: DirectionBasis::YearStem,
            authority_basis: AuthorityBasis::MainQi,
            following_threshold: DEFAULT_FOLLOWING_THRESHOLD,
        }
    }
}

impl AnalysisConfig {
    /// Check every field against its supported range.
    ///
    /// # Errors
    ///
    /// [`ConfigError::DecadeCount`] for a count outside `1..=12`,
    /// [`ConfigError::FollowingThreshold`] for a threshold outside `4..=7`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decade_count == 0 || self.decade_count > MAX_DECADE_COUNT {
            return Err(ConfigError::DecadeCount(self.decade_count));
        }
        if !(MIN_FOLLOWING_THRESHOLD..=COUNTED_POSITIONS).contains(&self.following_threshold) {
            return Err(ConfigError::FollowingThreshold(self.following_threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AnalysisConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.decade_count, 8);
        assert_eq!(config.direction_basis, DirectionBasis::YearStem);
        assert_eq!(config.authority_basis, AuthorityBasis::MainQi);
    }

    #[test]
    fn test_decade_bounds() {
        for (count, ok) in [(0, false), (1, true), (12, true), (13, false)] {
            let config = AnalysisConfig {
                decade_count: count,
                ..AnalysisConfig::default()
            };
            assert_eq!(config.validate().is_ok(), ok, "{count}");
        }
    }

    #[test]
    fn test_threshold_bounds() {
        for t in 0..=9u8 {
            let config = AnalysisConfig {
                following_threshold: t,
                ..AnalysisConfig::default()
            };
            assert_eq!(config.validate().is_ok(), (4..=7).contains(&t), "{t}");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_document() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{"direction_basis":"day_stem"}"#).unwrap();
        assert_eq!(config.direction_basis, DirectionBasis::DayStem);
        assert_eq!(config.decade_count, 8);
        assert!(serde_json::from_str::<AnalysisConfig>(r#"{"decades":3}"#).is_err());
    }
}
