//! Stem–branch pillars and the sexagenary cycle.
//!
//! A pillar pairs one stem with one branch. Stepping a pillar moves both
//! halves together, which is the primitive behind every luck sequence:
//! after 60 steps the pair returns to its origin.

use super::branch::Branch;
use super::constants::SEXAGENARY_CYCLE;
use super::stem::Stem;
use crate::error::ParseError;
use core::fmt;
use core::str::FromStr;

/// A (stem, branch) pair.
///
/// # Example
///
/// ```
/// use myeongri::{Branch, Pillar, Stem};
///
/// let p: Pillar = "丙寅".parse().unwrap();
/// assert_eq!(p, Pillar::new(Stem::BYEONG, Branch::IN));
/// assert_eq!(p.offset(1).to_string(), "丁卯");
/// assert_eq!(p.sexagenary_index(), Some(2));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// 甲子, origin of the sexagenary cycle.
    pub const GAPJA: Self = Self::new(Stem::GAP, Branch::JA);

    /// Pillar from a stem and a branch.
    #[inline]
    #[must_use]
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar from raw integers, each normalized to its cycle.
    #[inline]
    #[must_use]
    pub const fn from_indices(stem: i64, branch: i64) -> Self {
        Self::new(Stem::wrap(stem), Branch::wrap(branch))
    }

    /// Pillar at position `n` of the sexagenary cycle (normalized mod 60).
    #[inline]
    #[must_use]
    pub const fn from_sexagenary(n: i64) -> Self {
        let n = n.rem_euclid(SEXAGENARY_CYCLE as i64);
        Self::from_indices(n, n)
    }

    /// The stem.
    #[inline]
    #[must_use]
    pub const fn stem(self) -> Stem {
        self.stem
    }

    /// The branch.
    #[inline]
    #[must_use]
    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Steps stem and branch together by `n` (negative steps go backward).
    #[inline]
    #[must_use]
    pub const fn offset(self, n: i64) -> Self {
        Self::new(self.stem.offset(n), self.branch.offset(n))
    }

    /// Position in the sexagenary cycle.
    ///
    /// Only pairs of equal polarity occur in the cycle; mixed pairs such as
    /// 甲丑 return `None`.
    #[inline]
    #[must_use]
    pub const fn sexagenary_index(self) -> Option<u8> {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        if (s - b) % 2 != 0 {
            return None;
        }
        // n ≡ s (mod 10), n ≡ b (mod 12)  ⇒  n = 6s − 5b (mod 60)
        Some((6 * s - 5 * b).rem_euclid(SEXAGENARY_CYCLE as i64) as u8)
    }

    /// Hangul reading, e.g. `갑자`.
    #[must_use]
    pub fn hangul(self) -> String {
        let mut s = String::with_capacity(6);
        s.push(self.stem.hangul());
        s.push(self.branch.hangul());
        s
    }
}

impl FromStr for Pillar {
    type Err = ParseError;

    /// Accepts `甲子`, `갑자`, `gap-ja`, `gap ja` and `0-0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let chars: Vec<char> = trimmed.chars().collect();
        let (stem_tok, branch_tok) = if chars.len() == 2 && !chars[0].is_ascii() {
            (chars[0].to_string(), chars[1].to_string())
        } else {
            let mut parts = trimmed
                .split(|c: char| c == '-' || c == '/' || c == ',' || c.is_whitespace())
                .filter(|p| !p.is_empty());
            match (parts.next(), parts.next(), parts.next()) {
                (Some(a), Some(b), None) => (a.to_string(), b.to_string()),
                _ => return Err(ParseError::MalformedPillar(s.to_string())),
            }
        };
        let stem = stem_tok.parse::<Stem>()?;
        let branch = branch_tok.parse::<Branch>()?;
        Ok(Self::new(stem, branch))
    }
}

impl fmt::Debug for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pillar({}{}, {}/{})",
            self.stem.hanja(),
            self.branch.hanja(),
            self.stem.index(),
            self.branch.index()
        )
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}
