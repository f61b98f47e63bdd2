//! Ten-god (十神) classification.
//!
//! The relation of a target stem to a reference stem is the element offset
//! (0..5) crossed with polarity match (same/different), giving ten closed
//! outcomes. The discriminant encodes both halves:
//! `discriminant = 2 * offset + (polarity differs as u8)`.
//!
//! | Offset | Family | Same polarity | Different polarity |
//! |--------|--------|---------------|--------------------|
//! | 0 | Companion | 比肩 Rival | 劫財 Rob Wealth |
//! | 1 | Output | 食神 Eating God | 傷官 Hurting Officer |
//! | 2 | Wealth | 偏財 Indirect Wealth | 正財 Direct Wealth |
//! | 3 | Officer | 偏官 Seven Killings | 正官 Direct Officer |
//! | 4 | Resource | 偏印 Indirect Resource | 正印 Direct Resource |
//!
//! # Inverse relation
//!
//! Seen from the target's side the offset negates and polarity match is
//! unchanged, so `ten_god(b, a) == ten_god(a, b).inverse()` for every pair.

use crate::core::stem::Stem;
use crate::lut::ten_god_lut;
use core::fmt;

/// Five families of ten gods, keyed by element offset.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TenGodFamily {
    /// 比劫: same element as the reference.
    Companion = 0,
    /// 食傷: generated by the reference.
    Output = 1,
    /// 財星: overcome by the reference.
    Wealth = 2,
    /// 官星: overcomes the reference.
    Officer = 3,
    /// 印星: generates the reference.
    Resource = 4,
}

impl TenGodFamily {
    /// All families in offset order.
    pub const ALL: [Self; 5] = [
        Self::Companion,
        Self::Output,
        Self::Wealth,
        Self::Officer,
        Self::Resource,
    ];

    /// Family for an element offset, reduced mod 5.
    #[inline]
    #[must_use]
    pub const fn from_offset(offset: u8) -> Self {
        match offset % 5 {
            0 => Self::Companion,
            1 => Self::Output,
            2 => Self::Wealth,
            3 => Self::Officer,
            _ => Self::Resource,
        }
    }

    /// Element offset of this family from the reference.
    #[inline]
    #[must_use]
    pub const fn offset(self) -> u8 {
        self as u8
    }

    /// True for Companion and Resource, the families that strengthen the
    /// reference stem.
    #[inline]
    #[must_use]
    pub const fn supports_reference(self) -> bool {
        matches!(self, Self::Companion | Self::Resource)
    }

    /// Hangul name.
    #[must_use]
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Companion => "비겁",
            Self::Output => "식상",
            Self::Wealth => "재성",
            Self::Officer => "관성",
            Self::Resource => "인성",
        }
    }
}

/// One of the ten relations of a target stem to a reference stem.
///
/// # Example
///
/// ```
/// use myeongri::{ten_god, Stem, TenGod, TenGodFamily};
///
/// let g = ten_god(Stem::GAP, Stem::GYEONG);
/// assert_eq!(g, TenGod::SevenKillings);
/// assert_eq!(g.family(), TenGodFamily::Officer);
/// assert_eq!(g.hangul(), "편관");
/// assert_eq!(ten_god(Stem::GYEONG, Stem::GAP), g.inverse());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TenGod {
    /// 比肩: same element, same polarity.
    Rival = 0,
    /// 劫財: same element, different polarity.
    RobWealth = 1,
    /// 食神: generated by the reference, same polarity.
    EatingGod = 2,
    /// 傷官: generated by the reference, different polarity.
    HurtingOfficer = 3,
    /// 偏財: overcome by the reference, same polarity.
    IndirectWealth = 4,
    /// 正財: overcome by the reference, different polarity.
    DirectWealth = 5,
    /// 偏官 (七殺): overcomes the reference, same polarity.
    SevenKillings = 6,
    /// 正官: overcomes the reference, different polarity.
    DirectOfficer = 7,
    /// 偏印: generates the reference, same polarity.
    IndirectResource = 8,
    /// 正印: generates the reference, different polarity.
    DirectResource = 9,
}

impl TenGod {
    /// All ten gods in discriminant order.
    pub const ALL: [Self; 10] = [
        Self::Rival,
        Self::RobWealth,
        Self::EatingGod,
        Self::HurtingOfficer,
        Self::IndirectWealth,
        Self::DirectWealth,
        Self::SevenKillings,
        Self::DirectOfficer,
        Self::IndirectResource,
        Self::DirectResource,
    ];

    /// Ten god from an element offset and a polarity match.
    #[inline]
    #[must_use]
    pub const fn from_parts(offset: u8, same_polarity: bool) -> Self {
        let idx = (offset % 5) * 2 + if same_polarity { 0 } else { 1 };
        Self::ALL[idx as usize]
    }

    /// The classification formula.
    ///
    /// `offset = (element(target) − element(reference) + 5) % 5`, crossed with
    /// `polarity(reference) == polarity(target)`. The lookup table in
    /// [`crate::lut::TEN_GODS`] is built from this function; callers use
    /// [`ten_god`].
    #[inline]
    #[must_use]
    pub const fn derive(reference: Stem, target: Stem) -> Self {
        let offset = reference.element().offset_to(target.element());
        let same = reference.is_yang() == target.is_yang();
        Self::from_parts(offset, same)
    }

    /// Element offset from the reference (0..5).
    #[inline]
    #[must_use]
    pub const fn offset(self) -> u8 {
        self as u8 / 2
    }

    /// True when target and reference share polarity.
    #[inline]
    #[must_use]
    pub const fn is_same_polarity(self) -> bool {
        self as u8 % 2 == 0
    }

    /// The family (element offset bucket).
    #[inline]
    #[must_use]
    pub const fn family(self) -> TenGodFamily {
        TenGodFamily::from_offset(self.offset())
    }

    /// The eight kinds that name a regular structural pattern, i.e. all but
    /// Rival and Rob Wealth.
    #[inline]
    #[must_use]
    pub const fn is_regular(self) -> bool {
        !matches!(self, Self::Rival | Self::RobWealth)
    }

    /// The relation seen from the other stem: offset negated, polarity match
    /// kept.
    #[inline]
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::from_parts((5 - self.offset()) % 5, self.is_same_polarity())
    }

    /// Hangul name.
    #[must_use]
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Rival => "비견",
            Self::RobWealth => "겁재",
            Self::EatingGod => "식신",
            Self::HurtingOfficer => "상관",
            Self::IndirectWealth => "편재",
            Self::DirectWealth => "정재",
            Self::SevenKillings => "편관",
            Self::DirectOfficer => "정관",
            Self::IndirectResource => "편인",
            Self::DirectResource => "정인",
        }
    }

    /// Hanja name.
    #[must_use]
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Rival => "比肩",
            Self::RobWealth => "劫財",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "傷官",
            Self::IndirectWealth => "偏財",
            Self::DirectWealth => "正財",
            Self::SevenKillings => "偏官",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }

    /// English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rival => "Rival",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }
}

impl fmt::Debug for TenGod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.hangul())
    }
}

impl fmt::Display for TenGod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hangul())
    }
}

/// Ten god of `target` relative to `reference`.
///
/// The single classification entry point: month authority, luck pillars and
/// auxiliary pillars all go through here.
#[inline]
#[must_use]
pub const fn ten_god(reference: Stem, target: Stem) -> TenGod {
    ten_god_lut(reference, target)
}
