//! Earthly branches (地支).
//!
//! A branch is an index in `[0, 12)`. Polarity follows parity; the element
//! comes from a table because the four earth branches (辰戌丑未) sit between
//! the seasonal pairs:
//!
//! | Index | Hanja | Hangul | Element | Polarity |
//! |-------|-------|--------|---------|----------|
//! | 0 | 子 | 자 | Water | Yang |
//! | 1 | 丑 | 축 | Earth | Yin |
//! | 2 | 寅 | 인 | Wood | Yang |
//! | 3 | 卯 | 묘 | Wood | Yin |
//! | 4 | 辰 | 진 | Earth | Yang |
//! | 5 | 巳 | 사 | Fire | Yin |
//! | 6 | 午 | 오 | Fire | Yang |
//! | 7 | 未 | 미 | Earth | Yin |
//! | 8 | 申 | 신 | Metal | Yang |
//! | 9 | 酉 | 유 | Metal | Yin |
//! | 10 | 戌 | 술 | Earth | Yang |
//! | 11 | 亥 | 해 | Water | Yin |

use super::constants::BRANCH_COUNT;
use super::element::Element;
use super::polarity::Polarity;
use crate::error::ParseError;
use crate::hidden::HiddenStem;
use crate::lut::{BRANCH_ELEMENTS, BRANCH_HANGUL, BRANCH_HANJA, BRANCH_ROMANIZED, HIDDEN_STEMS};
use core::fmt;
use core::str::FromStr;

/// An earthly branch.
///
/// # Example
///
/// ```
/// use myeongri::{Branch, Element};
///
/// let b = Branch::wrap(14);
/// assert_eq!(b, Branch::IN);
/// assert_eq!(b.element(), Element::Wood);
/// assert_eq!(b.hidden_stems().len(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u8", into = "u8")
)]
#[repr(transparent)]
pub struct Branch(u8);

impl Branch {
    /// 子 (0).
    pub const JA: Self = Self(0);
    /// 丑 (1).
    pub const CHUK: Self = Self(1);
    /// 寅 (2).
    pub const IN: Self = Self(2);
    /// 卯 (3).
    pub const MYO: Self = Self(3);
    /// 辰 (4).
    pub const JIN: Self = Self(4);
    /// 巳 (5).
    pub const SA: Self = Self(5);
    /// 午 (6).
    pub const O: Self = Self(6);
    /// 未 (7).
    pub const MI: Self = Self(7);
    /// 申 (8).
    pub const SIN: Self = Self(8);
    /// 酉 (9).
    pub const YU: Self = Self(9);
    /// 戌 (10).
    pub const SUL: Self = Self(10);
    /// 亥 (11).
    pub const HAE: Self = Self(11);

    /// All branches in cycle order.
    pub const ALL: [Self; BRANCH_COUNT] = [
        Self::JA,
        Self::CHUK,
        Self::IN,
        Self::MYO,
        Self::JIN,
        Self::SA,
        Self::O,
        Self::MI,
        Self::SIN,
        Self::YU,
        Self::SUL,
        Self::HAE,
    ];

    /// Branch from an unsigned index, reduced mod 12.
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value % BRANCH_COUNT as u8)
    }

    /// Branch from any integer: `((n % 12) + 12) % 12`.
    #[inline]
    #[must_use]
    pub const fn wrap(n: i64) -> Self {
        Self(n.rem_euclid(BRANCH_COUNT as i64) as u8)
    }

    /// Index in `[0, 12)`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Element (table lookup).
    #[inline]
    #[must_use]
    pub const fn element(self) -> Element {
        BRANCH_ELEMENTS[self.0 as usize]
    }

    /// Polarity (even = Yang).
    #[inline]
    #[must_use]
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.0)
    }

    /// Branch `n` steps away along the cycle (negative steps go backward).
    #[inline]
    #[must_use]
    pub const fn offset(self, n: i64) -> Self {
        Self::wrap(self.0 as i64 + n.rem_euclid(BRANCH_COUNT as i64))
    }

    /// Hidden stems in Residual → Middle → Main order.
    #[inline]
    #[must_use]
    pub const fn hidden_stems(self) -> &'static [HiddenStem] {
        HIDDEN_STEMS[self.0 as usize]
    }

    /// Hanja character.
    #[inline]
    #[must_use]
    pub const fn hanja(self) -> char {
        BRANCH_HANJA[self.0 as usize]
    }

    /// Hangul reading.
    #[inline]
    #[must_use]
    pub const fn hangul(self) -> char {
        BRANCH_HANGUL[self.0 as usize]
    }

    /// Revised-romanization reading.
    #[inline]
    #[must_use]
    pub const fn romanized(self) -> &'static str {
        BRANCH_ROMANIZED[self.0 as usize]
    }

    /// Match a single token (Hanja, Hangul, romanized or decimal index).
    pub(crate) fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(i) = BRANCH_HANJA.iter().position(|&h| h == c) {
                return Some(Self(i as u8));
            }
            if let Some(i) = BRANCH_HANGUL.iter().position(|&h| h == c) {
                return Some(Self(i as u8));
            }
        }
        if let Some(i) = BRANCH_ROMANIZED
            .iter()
            .position(|r| r.eq_ignore_ascii_case(token))
        {
            return Some(Self(i as u8));
        }
        token.parse::<i64>().ok().map(Self::wrap)
    }
}

impl From<u8> for Branch {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Branch> for u8 {
    fn from(branch: Branch) -> Self {
        branch.0
    }
}

impl FromStr for Branch {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| ParseError::UnknownBranch(s.to_string()))
    }
}

impl fmt::Debug for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Branch({}, {})", self.0, self.hanja())
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_negative() {
        assert_eq!(Branch::wrap(-1), Branch::HAE);
        assert_eq!(Branch::wrap(-12), Branch::JA);
        assert_eq!(Branch::wrap(2020), Branch::JA);
    }

    #[test]
    fn test_offset_extremes() {
        // i64::MIN ≡ 4 and i64::MAX ≡ 7 (mod 12).
        for b in Branch::ALL {
            assert_eq!(b.offset(i64::MIN), b.offset(4));
            assert_eq!(b.offset(i64::MAX), b.offset(7));
        }
        assert_eq!(Branch::HAE.offset(i64::MAX), Branch::O);
    }

    #[test]
    fn test_seasonal_elements() {
        assert_eq!(Branch::IN.element(), Element::Wood);
        assert_eq!(Branch::MYO.element(), Element::Wood);
        assert_eq!(Branch::SA.element(), Element::Fire);
        assert_eq!(Branch::O.element(), Element::Fire);
        assert_eq!(Branch::SIN.element(), Element::Metal);
        assert_eq!(Branch::YU.element(), Element::Metal);
        assert_eq!(Branch::HAE.element(), Element::Water);
        assert_eq!(Branch::JA.element(), Element::Water);
        for b in [Branch::JIN, Branch::SUL, Branch::CHUK, Branch::MI] {
            assert_eq!(b.element(), Element::Earth);
        }
    }

    #[test]
    fn test_polarity_parity() {
        for b in Branch::ALL {
            assert_eq!(b.polarity().is_yang(), b.index() % 2 == 0);
        }
    }

    #[test]
    fn test_parse_all_forms() {
        assert_eq!("子".parse::<Branch>(), Ok(Branch::JA));
        assert_eq!("해".parse::<Branch>(), Ok(Branch::HAE));
        assert_eq!("SUL".parse::<Branch>(), Ok(Branch::SUL));
        assert_eq!("13".parse::<Branch>(), Ok(Branch::CHUK));
        assert!("甲".parse::<Branch>().is_err());
    }
}
