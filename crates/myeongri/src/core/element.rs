//! The five elements and their generating/overcoming cycle.
//!
//! Elements are ordered along the generating cycle
//! (Wood → Fire → Earth → Metal → Water → Wood), so every relation between
//! two elements is a single offset mod 5:
//!
//! | Offset | Relation of `b` to `a` |
//! |--------|------------------------|
//! | 0 | same element |
//! | 1 | `a` generates `b` |
//! | 2 | `a` overcomes `b` |
//! | 3 | `b` overcomes `a` |
//! | 4 | `b` generates `a` |

use super::constants::ELEMENT_COUNT;
use core::fmt;

/// One of the five elements.
///
/// # Example
///
/// ```
/// use myeongri::Element;
///
/// assert_eq!(Element::Wood.generates(), Element::Fire);
/// assert_eq!(Element::Wood.controls(), Element::Earth);
/// assert_eq!(Element::Wood.offset_to(Element::Metal), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Element {
    /// 木: stems 甲乙, branches 寅卯.
    #[default]
    Wood = 0,
    /// 火: stems 丙丁, branches 巳午.
    Fire = 1,
    /// 土: stems 戊己, branches 辰戌丑未.
    Earth = 2,
    /// 金: stems 庚辛, branches 申酉.
    Metal = 3,
    /// 水: stems 壬癸, branches 亥子.
    Water = 4,
}

impl Element {
    /// All elements in generating order.
    pub const ALL: [Self; ELEMENT_COUNT] = [
        Self::Wood,
        Self::Fire,
        Self::Earth,
        Self::Metal,
        Self::Water,
    ];

    /// Element at a position of the generating cycle, reduced mod 5.
    #[inline]
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index % 5 {
            0 => Self::Wood,
            1 => Self::Fire,
            2 => Self::Earth,
            3 => Self::Metal,
            _ => Self::Water,
        }
    }

    /// Position in the generating cycle (0..5).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Steps `n` positions along the generating cycle.
    #[inline]
    #[must_use]
    pub const fn step(self, n: u8) -> Self {
        Self::from_index(self.index() + n % 5)
    }

    /// Offset of `other` from `self`: `(other - self + 5) % 5`.
    #[inline]
    #[must_use]
    pub const fn offset_to(self, other: Self) -> u8 {
        (other.index() + 5 - self.index()) % 5
    }

    /// The element this one generates (Wood → Fire).
    #[inline]
    #[must_use]
    pub const fn generates(self) -> Self {
        self.step(1)
    }

    /// The element this one overcomes (Wood → Earth).
    #[inline]
    #[must_use]
    pub const fn controls(self) -> Self {
        self.step(2)
    }

    /// The element that overcomes this one (Wood ← Metal).
    #[inline]
    #[must_use]
    pub const fn controlled_by(self) -> Self {
        self.step(3)
    }

    /// The element that generates this one (Wood ← Water).
    #[inline]
    #[must_use]
    pub const fn generated_by(self) -> Self {
        self.step(4)
    }

    /// Hanja character.
    #[inline]
    #[must_use]
    pub const fn hanja(self) -> char {
        match self {
            Self::Wood => '木',
            Self::Fire => '火',
            Self::Earth => '土',
            Self::Metal => '金',
            Self::Water => '水',
        }
    }

    /// Hangul reading.
    #[inline]
    #[must_use]
    pub const fn hangul(self) -> char {
        match self {
            Self::Wood => '목',
            Self::Fire => '화',
            Self::Earth => '토',
            Self::Metal => '금',
            Self::Water => '수',
        }
    }

    /// English name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.hanja())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

// ============================================================================
// ElementSet: 5-bit membership set
// ============================================================================

/// Set of elements as a 5-bit mask.
///
/// Used for the supporting/opposing element sets of a structural pattern.
///
/// # Example
///
/// ```
/// use myeongri::{Element, ElementSet};
///
/// let s = ElementSet::EMPTY.insert(Element::Fire).insert(Element::Water);
/// assert!(s.contains(Element::Fire));
/// assert!(!s.contains(Element::Wood));
/// assert_eq!(s.len(), 2);
/// assert_eq!(s.iter().collect::<Vec<_>>(), vec![Element::Fire, Element::Water]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Element>", into = "Vec<Element>")
)]
pub struct ElementSet(u8);

impl ElementSet {
    /// Empty set.
    pub const EMPTY: Self = Self(0);

    /// All five elements.
    pub const FULL: Self = Self(0b1_1111);

    /// Set containing a single element.
    #[inline]
    #[must_use]
    pub const fn singleton(element: Element) -> Self {
        Self::EMPTY.insert(element)
    }

    /// Insert an element.
    #[inline]
    #[must_use]
    pub const fn insert(self, element: Element) -> Self {
        Self(self.0 | (1 << element.index()))
    }

    /// Test membership.
    #[inline]
    #[must_use]
    pub const fn contains(&self, element: Element) -> bool {
        (self.0 >> element.index()) & 1 == 1
    }

    /// Number of elements in the set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }

    /// True if no element is present.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Union.
    #[inline]
    #[must_use]
    pub const fn union(&self, other: &Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Intersection.
    #[inline]
    #[must_use]
    pub const fn intersection(&self, other: &Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Iterate members in generating order.
    pub fn iter(&self) -> impl Iterator<Item = Element> + '_ {
        Element::ALL.into_iter().filter(|e| self.contains(*e))
    }
}

impl FromIterator<Element> for ElementSet {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::insert)
    }
}

impl From<Vec<Element>> for ElementSet {
    fn from(elements: Vec<Element>) -> Self {
        elements.into_iter().collect()
    }
}

impl From<ElementSet> for Vec<Element> {
    fn from(set: ElementSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Debug for ElementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
