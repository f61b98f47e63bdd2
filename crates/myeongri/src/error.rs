//! Error types.
//!
//! The integer entry points of the crate are total: stems and branches are
//! normalized, elapsed days saturate, and "not applicable" table cells are
//! `Option`s. Errors only arise at the two boundaries where input is not an
//! integer domain: text parsing and caller-supplied configuration.

use crate::core::constants::MAX_DECADE_COUNT;
use thiserror::Error;

/// Failure to parse a stem, branch, pillar, chart, sex or direction from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not a stem in Hanja, Hangul, romanized or index form.
    #[error("unknown heavenly stem {0:?}")]
    UnknownStem(String),

    /// Not a branch in Hanja, Hangul, romanized or index form.
    #[error("unknown earthly branch {0:?}")]
    UnknownBranch(String),

    /// Not a two-token stem/branch pair.
    #[error("malformed pillar {0:?}; expected forms like 甲子, 갑자 or gap-ja")]
    MalformedPillar(String),

    /// Not one of the accepted sex spellings.
    #[error("unknown sex {0:?}; expected male/female, m/f, 남/여")]
    UnknownSex(String),

    /// Not one of the accepted direction spellings.
    #[error("unknown direction {0:?}; expected forward/backward")]
    UnknownDirection(String),

    /// Not four pillars in year, month, day, hour order.
    #[error("malformed chart {0:?}; expected four pillars such as \"甲子 丙寅 甲午 丁卯\"")]
    MalformedChart(String),
}

/// An [`AnalysisConfig`](crate::config::AnalysisConfig) value outside its
/// supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Decade count of zero or above the supported maximum.
    #[error("decade count {0} outside 1..={}", MAX_DECADE_COUNT)]
    DecadeCount(usize),

    /// Following threshold that does not name a unique majority of the
    /// seven counted positions.
    #[error("following threshold {0} outside 4..=7")]
    FollowingThreshold(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ParseError::UnknownStem("x".into()).to_string(),
            "unknown heavenly stem \"x\""
        );
        assert_eq!(
            ConfigError::DecadeCount(0).to_string(),
            "decade count 0 outside 1..=12"
        );
        assert_eq!(
            ConfigError::FollowingThreshold(2).to_string(),
            "following threshold 2 outside 4..=7"
        );
    }
}
