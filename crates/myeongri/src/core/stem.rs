//! Heavenly stems (天干).
//!
//! A stem is an index in `[0, 10)`. Element and polarity are computed
//! properties, not identity:
//!
//! | Index | Hanja | Hangul | Element | Polarity |
//! |-------|-------|--------|---------|----------|
//! | 0 | 甲 | 갑 | Wood | Yang |
//! | 1 | 乙 | 을 | Wood | Yin |
//! | 2 | 丙 | 병 | Fire | Yang |
//! | 3 | 丁 | 정 | Fire | Yin |
//! | 4 | 戊 | 무 | Earth | Yang |
//! | 5 | 己 | 기 | Earth | Yin |
//! | 6 | 庚 | 경 | Metal | Yang |
//! | 7 | 辛 | 신 | Metal | Yin |
//! | 8 | 壬 | 임 | Water | Yang |
//! | 9 | 癸 | 계 | Water | Yin |

use super::constants::STEM_COUNT;
use super::element::Element;
use super::polarity::Polarity;
use crate::error::ParseError;
use crate::lut::{STEM_HANGUL, STEM_HANJA, STEM_ROMANIZED};
use core::fmt;
use core::str::FromStr;

/// A heavenly stem.
///
/// Construction always normalizes, so every `Stem` value is in range.
///
/// # Example
///
/// ```
/// use myeongri::{Element, Polarity, Stem};
///
/// let s = Stem::wrap(-3);
/// assert_eq!(s, Stem::SIN);
/// assert_eq!(s.element(), Element::Metal);
/// assert_eq!(s.polarity(), Polarity::Yin);
/// assert_eq!(s.hanja(), '辛');
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u8", into = "u8")
)]
#[repr(transparent)]
pub struct Stem(u8);

impl Stem {
    /// 甲 (0).
    pub const GAP: Self = Self(0);
    /// 乙 (1).
    pub const EUL: Self = Self(1);
    /// 丙 (2).
    pub const BYEONG: Self = Self(2);
    /// 丁 (3).
    pub const JEONG: Self = Self(3);
    /// 戊 (4).
    pub const MU: Self = Self(4);
    /// 己 (5).
    pub const GI: Self = Self(5);
    /// 庚 (6).
    pub const GYEONG: Self = Self(6);
    /// 辛 (7).
    pub const SIN: Self = Self(7);
    /// 壬 (8).
    pub const IM: Self = Self(8);
    /// 癸 (9).
    pub const GYE: Self = Self(9);

    /// All stems in cycle order.
    pub const ALL: [Self; STEM_COUNT] = [
        Self::GAP,
        Self::EUL,
        Self::BYEONG,
        Self::JEONG,
        Self::MU,
        Self::GI,
        Self::GYEONG,
        Self::SIN,
        Self::IM,
        Self::GYE,
    ];

    /// Stem from an unsigned index, reduced mod 10.
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value % STEM_COUNT as u8)
    }

    /// Stem from any integer: `((n % 10) + 10) % 10`.
    #[inline]
    #[must_use]
    pub const fn wrap(n: i64) -> Self {
        Self(n.rem_euclid(STEM_COUNT as i64) as u8)
    }

    /// Index in `[0, 10)`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Element (`index / 2`).
    #[inline]
    #[must_use]
    pub const fn element(self) -> Element {
        Element::from_index(self.0 / 2)
    }

    /// Polarity (even = Yang).
    #[inline]
    #[must_use]
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.0)
    }

    /// True for the five Yang stems.
    #[inline]
    #[must_use]
    pub const fn is_yang(self) -> bool {
        self.0 % 2 == 0
    }

    /// Stem `n` steps away along the cycle (negative steps go backward).
    #[inline]
    #[must_use]
    pub const fn offset(self, n: i64) -> Self {
        Self::wrap(self.0 as i64 + n.rem_euclid(STEM_COUNT as i64))
    }

    /// Hanja character.
    #[inline]
    #[must_use]
    pub const fn hanja(self) -> char {
        STEM_HANJA[self.0 as usize]
    }

    /// Hangul reading.
    #[inline]
    #[must_use]
    pub const fn hangul(self) -> char {
        STEM_HANGUL[self.0 as usize]
    }

    /// Revised-romanization reading.
    #[inline]
    #[must_use]
    pub const fn romanized(self) -> &'static str {
        STEM_ROMANIZED[self.0 as usize]
    }

    /// Match a single token (Hanja, Hangul, romanized or decimal index).
    pub(crate) fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(i) = STEM_HANJA.iter().position(|&h| h == c) {
                return Some(Self(i as u8));
            }
            if let Some(i) = STEM_HANGUL.iter().position(|&h| h == c) {
                return Some(Self(i as u8));
            }
        }
        if let Some(i) = STEM_ROMANIZED
            .iter()
            .position(|r| r.eq_ignore_ascii_case(token))
        {
            return Some(Self(i as u8));
        }
        token.parse::<i64>().ok().map(Self::wrap)
    }
}

impl From<u8> for Stem {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Stem> for u8 {
    fn from(stem: Stem) -> Self {
        stem.0
    }
}

impl FromStr for Stem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| ParseError::UnknownStem(s.to_string()))
    }
}

impl fmt::Debug for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stem({}, {})", self.0, self.hanja())
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanja())
    }
}
