//! Supporting and opposing elements of a pattern.
//!
//! Both sets are expressed as ten-god families relative to the day master
//! and then mapped to concrete elements. For family `f` the element is the
//! day master's element stepped `f.offset()` places along the generating
//! cycle.
//!
//! | Pattern | Supporting | Opposing |
//! |---------|------------|----------|
//! | Direct Officer | Wealth, Resource | Output |
//! | Seven Killings | Output, Resource | Wealth |
//! | Direct/Indirect Wealth | Output, Officer | Companion |
//! | Direct/Indirect Resource | Officer, Companion | Wealth |
//! | Eating God | Wealth, Companion | Resource |
//! | Hurting Officer | Wealth, Resource | Officer |
//! | Direct-Office, Rival-Office, Blade, Month-Rob | Officer, Wealth, Output | Companion, Resource |
//! | Following an opposing family `f` | `f`, `f − 1` | `f − 2` |
//! | Following a supporting family `f` | Companion, Resource | `f − 2` |
//! | Transformed into `e` | `e`, generator of `e` | controller of `e` |
//! | Miscellaneous | none | none |

use super::PatternKind;
use crate::core::element::{Element, ElementSet};
use crate::core::stem::Stem;
use crate::relation::ten_god::TenGodFamily::{Companion, Officer, Output, Resource, Wealth};
use crate::relation::ten_god::{TenGod, TenGodFamily};

type Families = &'static [TenGodFamily];

const STRONG_SELF_SUPPORT: Families = &[Officer, Wealth, Output];
const STRONG_SELF_OPPOSE: Families = &[Companion, Resource];

/// Element of `family` relative to `day_master`.
///
/// ```
/// use myeongri::pattern::family_element;
/// use myeongri::{Element, Stem, TenGodFamily};
///
/// assert_eq!(family_element(Stem::GAP, TenGodFamily::Wealth), Element::Earth);
/// assert_eq!(family_element(Stem::GAP, TenGodFamily::Officer), Element::Metal);
/// ```
#[inline]
#[must_use]
pub const fn family_element(day_master: Stem, family: TenGodFamily) -> Element {
    day_master.element().step(family.offset())
}

fn families(day_master: Stem, families: &[TenGodFamily]) -> ElementSet {
    families
        .iter()
        .map(|&f| family_element(day_master, f))
        .collect()
}

fn back(family: TenGodFamily, n: u8) -> TenGodFamily {
    TenGodFamily::from_offset(family.offset() + 5 - n)
}

/// Elements that support a pattern of `kind` for `day_master`.
#[must_use]
pub fn supporting_elements(kind: PatternKind, day_master: Stem) -> ElementSet {
    match kind {
        PatternKind::Regular(g) => families(day_master, regular_sets(g).0),
        PatternKind::DirectOffice
        | PatternKind::MonthRival
        | PatternKind::Blade
        | PatternKind::MonthRob => families(day_master, STRONG_SELF_SUPPORT),
        PatternKind::Following(f) if f.supports_reference() => {
            families(day_master, &[Companion, Resource])
        }
        PatternKind::Following(f) => families(day_master, &[f, back(f, 1)]),
        PatternKind::Transformed(e) => ElementSet::singleton(e).insert(e.generated_by()),
        PatternKind::Miscellaneous => ElementSet::EMPTY,
    }
}

/// Elements that break a pattern of `kind` for `day_master`.
#[must_use]
pub fn opposing_elements(kind: PatternKind, day_master: Stem) -> ElementSet {
    match kind {
        PatternKind::Regular(g) => families(day_master, regular_sets(g).1),
        PatternKind::DirectOffice
        | PatternKind::MonthRival
        | PatternKind::Blade
        | PatternKind::MonthRob => families(day_master, STRONG_SELF_OPPOSE),
        PatternKind::Following(f) => families(day_master, &[back(f, 2)]),
        PatternKind::Transformed(e) => ElementSet::singleton(e.controlled_by()),
        PatternKind::Miscellaneous => ElementSet::EMPTY,
    }
}

/// `(supporting, opposing)` families of a regular pattern.
///
/// Rival and Rob Wealth never name a regular pattern; they share the
/// strong-self sets of the month-branch patterns.
fn regular_sets(g: TenGod) -> (Families, Families) {
    const WEALTH_RESOURCE: Families = &[Wealth, Resource];
    const OUTPUT_RESOURCE: Families = &[Output, Resource];
    const OUTPUT_OFFICER: Families = &[Output, Officer];
    const OFFICER_COMPANION: Families = &[Officer, Companion];
    const WEALTH_COMPANION: Families = &[Wealth, Companion];
    const OUTPUT: Families = &[Output];
    const WEALTH: Families = &[Wealth];
    const COMPANION: Families = &[Companion];
    const RESOURCE: Families = &[Resource];
    const OFFICER: Families = &[Officer];

    match g {
        TenGod::DirectOfficer => (WEALTH_RESOURCE, OUTPUT),
        TenGod::SevenKillings => (OUTPUT_RESOURCE, WEALTH),
        TenGod::DirectWealth | TenGod::IndirectWealth => (OUTPUT_OFFICER, COMPANION),
        TenGod::DirectResource | TenGod::IndirectResource => (OFFICER_COMPANION, WEALTH),
        TenGod::EatingGod => (WEALTH_COMPANION, RESOURCE),
        TenGod::HurtingOfficer => (WEALTH_RESOURCE, OFFICER),
        TenGod::Rival | TenGod::RobWealth => (STRONG_SELF_SUPPORT, STRONG_SELF_OPPOSE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(elements: &[Element]) -> ElementSet {
        elements.iter().copied().collect()
    }

    #[test]
    fn test_direct_officer_for_gap() {
        let k = PatternKind::Regular(TenGod::DirectOfficer);
        assert_eq!(
            supporting_elements(k, Stem::GAP),
            set(&[Element::Earth, Element::Water])
        );
        assert_eq!(opposing_elements(k, Stem::GAP), set(&[Element::Fire]));
    }

    #[test]
    fn test_regular_sets_are_disjoint() {
        for dm in Stem::ALL {
            for g in TenGod::ALL {
                let k = PatternKind::Regular(g);
                let s = supporting_elements(k, dm);
                let o = opposing_elements(k, dm);
                assert!(s.intersection(&o).is_empty(), "{g:?}");
                assert!(!s.is_empty() && !o.is_empty());
            }
        }
    }

    #[test]
    fn test_following_opposing_family() {
        // 甲 following Wealth (Earth): Earth and Fire support, Wood opposes.
        let k = PatternKind::Following(Wealth);
        assert_eq!(
            supporting_elements(k, Stem::GAP),
            set(&[Element::Earth, Element::Fire])
        );
        assert_eq!(opposing_elements(k, Stem::GAP), set(&[Element::Wood]));
    }

    #[test]
    fn test_following_supporting_family() {
        // 甲 following Companion: Wood and Water support, Metal opposes.
        let k = PatternKind::Following(Companion);
        assert_eq!(
            supporting_elements(k, Stem::GAP),
            set(&[Element::Wood, Element::Water])
        );
        assert_eq!(opposing_elements(k, Stem::GAP), set(&[Element::Metal]));
        assert_eq!(
            opposing_elements(PatternKind::Following(Resource), Stem::GAP),
            set(&[Element::Earth])
        );
    }

    #[test]
    fn test_transformed_ignores_day_master() {
        let k = PatternKind::Transformed(Element::Earth);
        for dm in Stem::ALL {
            assert_eq!(
                supporting_elements(k, dm),
                set(&[Element::Earth, Element::Fire])
            );
            assert_eq!(opposing_elements(k, dm), set(&[Element::Wood]));
        }
    }

    #[test]
    fn test_miscellaneous_is_empty() {
        assert!(supporting_elements(PatternKind::Miscellaneous, Stem::GAP).is_empty());
        assert!(opposing_elements(PatternKind::Miscellaneous, Stem::GAP).is_empty());
    }

    #[test]
    fn test_strong_self_sets() {
        let s = supporting_elements(PatternKind::DirectOffice, Stem::GAP);
        let o = opposing_elements(PatternKind::DirectOffice, Stem::GAP);
        assert_eq!(s.union(&o), ElementSet::FULL);
        assert!(s.intersection(&o).is_empty());
    }
}
