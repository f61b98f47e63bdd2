//! Combination and clash relations.
//!
//! - Stem combination (天干合): stems five apart bond and may transform into
//!   a fixed element.
//! - Six clash (六沖): branches six apart oppose each other.
//! - Six combination (六合): the fixed branch pairs of [`SIX_COMBINATIONS`].

use crate::core::branch::Branch;
use crate::core::element::Element;
use crate::core::stem::Stem;
use crate::lut::{SIX_COMBINATIONS, STEM_COMBINATIONS};

/// Element a stem pair transforms into, or `None` if they do not combine.
///
/// # Example
///
/// ```
/// use myeongri::relation::stem_combination;
/// use myeongri::{Element, Stem};
///
/// assert_eq!(stem_combination(Stem::GAP, Stem::GI), Some(Element::Earth));
/// assert_eq!(stem_combination(Stem::GI, Stem::GAP), Some(Element::Earth));
/// assert_eq!(stem_combination(Stem::GAP, Stem::EUL), None);
/// ```
#[must_use]
pub fn stem_combination(a: Stem, b: Stem) -> Option<Element> {
    STEM_COMBINATIONS
        .iter()
        .find(|&&(x, y, _)| (x == a && y == b) || (x == b && y == a))
        .map(|&(_, _, element)| element)
}

/// True if the two stems form a stem combination.
#[inline]
#[must_use]
pub fn stems_combine(a: Stem, b: Stem) -> bool {
    stem_combination(a, b).is_some()
}

/// The branch that clashes with `b`: `(b + 6) % 12`.
#[inline]
#[must_use]
pub const fn clash_partner(b: Branch) -> Branch {
    b.offset(6)
}

/// True if the two branches clash.
#[inline]
#[must_use]
pub const fn branches_clash(a: Branch, b: Branch) -> bool {
    clash_partner(a).index() == b.index()
}

/// The six-combination partner of `b`.
#[must_use]
pub fn combination_partner(b: Branch) -> Branch {
    SIX_COMBINATIONS
        .iter()
        .find_map(|&(x, y)| {
            if x == b {
                Some(y)
            } else if y == b {
                Some(x)
            } else {
                None
            }
        })
        .unwrap_or(b)
}

/// True if the two branches form a six combination.
#[inline]
#[must_use]
pub fn branches_combine(a: Branch, b: Branch) -> bool {
    SIX_COMBINATIONS
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}
