//! Yin-Yang polarity.
//!
//! Both alphabets alternate polarity by index: even indices are Yang,
//! odd indices are Yin.

use core::fmt;

/// Yang or Yin.
///
/// # Example
///
/// ```
/// use myeongri::Polarity;
///
/// assert_eq!(Polarity::from_index(4), Polarity::Yang);
/// assert_eq!(Polarity::from_index(7), Polarity::Yin);
/// assert_eq!(Polarity::Yang.opposite(), Polarity::Yin);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Polarity {
    /// 陽: even indices.
    #[default]
    Yang = 0,
    /// 陰: odd indices.
    Yin = 1,
}

impl Polarity {
    /// Polarity of a cycle index by parity.
    #[inline]
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        if index % 2 == 0 {
            Self::Yang
        } else {
            Self::Yin
        }
    }

    /// True for Yang.
    #[inline]
    #[must_use]
    pub const fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }

    /// The other polarity.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Yang => Self::Yin,
            Self::Yin => Self::Yang,
        }
    }

    /// Hanja character.
    #[inline]
    #[must_use]
    pub const fn hanja(self) -> char {
        match self {
            Self::Yang => '陽',
            Self::Yin => '陰',
        }
    }

    /// Hangul reading.
    #[inline]
    #[must_use]
    pub const fn hangul(self) -> char {
        match self {
            Self::Yang => '양',
            Self::Yin => '음',
        }
    }
}

impl fmt::Debug for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yang => write!(f, "Yang({})", self.hanja()),
            Self::Yin => write!(f, "Yin({})", self.hanja()),
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity() {
        for i in 0..=255u8 {
            assert_eq!(Polarity::from_index(i).is_yang(), i % 2 == 0);
        }
    }

    #[test]
    fn test_opposite_involution() {
        for p in [Polarity::Yang, Polarity::Yin] {
            assert_eq!(p.opposite().opposite(), p);
            assert_ne!(p.opposite(), p);
        }
    }
}
