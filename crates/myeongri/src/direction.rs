//! Polarity and luck direction (順行/逆行).
//!
//! A Yang year with a male chart, or a Yin year with a female chart, steps
//! forward through the sexagenary cycle; the other two combinations step
//! backward. The direction is fixed once per chart and shared by the decade
//! and early-childhood sequences.

use crate::core::stem::Stem;
use crate::error::ParseError;
use core::fmt;
use core::str::FromStr;

/// Declared sex of the chart owner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Sex {
    /// 男 (乾命).
    Male,
    /// 女 (坤命).
    Female,
}

impl Sex {
    /// True for [`Sex::Male`].
    #[inline]
    #[must_use]
    pub const fn is_male(self) -> bool {
        matches!(self, Self::Male)
    }
}

impl FromStr for Sex {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "man" | "남" | "남자" | "男" | "건명" => Ok(Self::Male),
            "female" | "f" | "woman" | "여" | "여자" | "女" | "곤명" => Ok(Self::Female),
            _ => Err(ParseError::UnknownSex(s.to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "male",
            Self::Female => "female",
        })
    }
}

/// Stepping direction of luck pillars.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// 順行: +1 per step.
    Forward,
    /// 逆行: −1 per step.
    Backward,
}

impl Direction {
    /// `+1` for Forward, `−1` for Backward.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// Hangul name.
    #[must_use]
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Forward => "순행",
            Self::Backward => "역행",
        }
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" | "+" | "순행" | "順行" => Ok(Self::Forward),
            "backward" | "-" | "역행" | "逆行" => Ok(Self::Backward),
            _ => Err(ParseError::UnknownDirection(s.to_string())),
        }
    }
}

/// Which stem's polarity decides the direction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DirectionBasis {
    /// Year stem (the common convention).
    #[default]
    YearStem,
    /// Day stem, used by some schools.
    DayStem,
}

/// True for the five Yang stems.
#[inline]
#[must_use]
pub const fn is_yang_stem(stem: Stem) -> bool {
    stem.is_yang()
}

/// Luck direction from the year stem and sex.
///
/// # Example
///
/// ```
/// use myeongri::direction::{direction, Direction, Sex};
/// use myeongri::Stem;
///
/// assert_eq!(direction(Stem::GAP, Sex::Male), Direction::Forward);
/// assert_eq!(direction(Stem::GAP, Sex::Female), Direction::Backward);
/// assert_eq!(direction(Stem::EUL, Sex::Female), Direction::Forward);
/// ```
#[inline]
#[must_use]
pub const fn direction(year_stem: Stem, sex: Sex) -> Direction {
    if is_yang_stem(year_stem) == sex.is_male() {
        Direction::Forward
    } else {
        Direction::Backward
    }
}

/// Luck direction with an explicit choice of deciding stem.
#[inline]
#[must_use]
pub const fn direction_with(
    basis: DirectionBasis,
    year_stem: Stem,
    day_stem: Stem,
    sex: Sex,
) -> Direction {
    match basis {
        DirectionBasis::YearStem => direction(year_stem, sex),
        DirectionBasis::DayStem => direction(day_stem, sex),
    }
}
