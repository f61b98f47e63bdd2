//! Property-based tests for the cycle base and the ten-god classifier.
//!
//! Uses proptest to check that normalization, stepping and the relation
//! table hold for arbitrary integers, not just the canonical indices.

use myeongri::cycle::{branch_of, stem_of};
use myeongri::direction::{direction, is_yang_stem, Direction, Sex};
use myeongri::hidden::{governing_stem, hidden_stems, main_qi, HiddenRole};
use myeongri::luck::{daewun, daewun_at, start_age, start_age_detailed};
use myeongri::lut::{blade_branch, direct_office_branch, is_blade, is_direct_office};
use myeongri::pattern::{classify_regular, PatternKind};
use myeongri::{ten_god, Branch, Pillar, Stem, TenGod};
use proptest::prelude::*;

fn any_stem() -> impl Strategy<Value = Stem> {
    (0u8..10).prop_map(Stem::new)
}

fn any_branch() -> impl Strategy<Value = Branch> {
    (0u8..12).prop_map(Branch::new)
}

fn any_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Forward), Just(Direction::Backward)]
}

// =============================================================================
// Normalization
// =============================================================================

proptest! {
    /// stem_of(n) == stem_of(n + 10k)
    #[test]
    fn prop_stem_of_is_cyclic(n in -1_000_000i64..1_000_000, k in -1000i64..1000) {
        prop_assert_eq!(stem_of(n), stem_of(n + 10 * k));
    }

    /// branch_of(n) == branch_of(n + 12k)
    #[test]
    fn prop_branch_of_is_cyclic(n in -1_000_000i64..1_000_000, k in -1000i64..1000) {
        prop_assert_eq!(branch_of(n), branch_of(n + 12 * k));
    }

    /// Normalized indices are always in range.
    #[test]
    fn prop_normalized_in_range(n: i64) {
        prop_assert!(stem_of(n).index() < 10);
        prop_assert!(branch_of(n).index() < 12);
    }

    /// Stepping a pillar 60 times returns to the start.
    #[test]
    fn prop_pillar_sixty_cycle(s in 0i64..10, b in 0i64..12, n in -500i64..500) {
        let p = Pillar::from_indices(s, b);
        prop_assert_eq!(p.offset(n).offset(60), p.offset(n));
        prop_assert_eq!(p.offset(n).offset(-n), p);
    }

    /// Sexagenary index is defined exactly when polarities agree.
    #[test]
    fn prop_sexagenary_index_polarity(s in any_stem(), b in any_branch()) {
        let p = Pillar::new(s, b);
        let same = s.polarity() == b.polarity();
        prop_assert_eq!(p.sexagenary_index().is_some(), same);
        if let Some(i) = p.sexagenary_index() {
            prop_assert_eq!(Pillar::from_sexagenary(i64::from(i)), p);
        }
    }
}

// =============================================================================
// Ten gods
// =============================================================================

proptest! {
    /// Every stem is its own Rival.
    #[test]
    fn prop_self_is_rival(s in any_stem()) {
        prop_assert_eq!(ten_god(s, s), TenGod::Rival);
    }

    /// The (b, a) relation is the documented inverse of (a, b).
    #[test]
    fn prop_inverse_consistency(a in any_stem(), b in any_stem()) {
        prop_assert_eq!(ten_god(b, a), ten_god(a, b).inverse());
    }

    /// Polarity match is symmetric.
    #[test]
    fn prop_polarity_match_symmetric(a in any_stem(), b in any_stem()) {
        prop_assert_eq!(
            ten_god(a, b).is_same_polarity(),
            ten_god(b, a).is_same_polarity()
        );
    }
}

// =============================================================================
// Hidden stems
// =============================================================================

proptest! {
    /// Month authority never fails and only moves forward in role.
    #[test]
    fn prop_authority_monotone(b in any_branch(), d in 0u32..60) {
        let now = governing_stem(b, d);
        let later = governing_stem(b, d + 1);
        prop_assert!(later.role() >= now.role());
        prop_assert!(hidden_stems(b).contains(&now));
    }

    /// Anything past the month total is the Main entry.
    #[test]
    fn prop_authority_saturates(b in any_branch(), d in 30u32..) {
        prop_assert_eq!(governing_stem(b, d), main_qi(b));
        prop_assert_eq!(governing_stem(b, d).role(), HiddenRole::Main);
    }
}

// =============================================================================
// Direction and luck stepping
// =============================================================================

proptest! {
    /// Forward iff Yang year agrees with male.
    #[test]
    fn prop_direction_rule(s in any_stem(), male: bool) {
        let sex = if male { Sex::Male } else { Sex::Female };
        prop_assert_eq!(
            direction(s, sex) == Direction::Forward,
            is_yang_stem(s) == male
        );
    }

    /// Office holds exactly at the table branch; blade only for Yang stems.
    #[test]
    fn prop_office_and_blade_tables(s in any_stem(), b in any_branch()) {
        prop_assert_eq!(is_direct_office(s, b), b == direct_office_branch(s));
        prop_assert_eq!(is_blade(s, b), is_yang_stem(s) && blade_branch(s) == Some(b));
    }

    /// Step 3 pre-empts everything after it, whatever else is visible.
    #[test]
    fn prop_direct_office_preempts(s in any_stem(), others in prop::array::uniform3(any_stem())) {
        let p = classify_regular(s, direct_office_branch(s), others);
        prop_assert_eq!(p.kind, PatternKind::DirectOffice);
    }

    /// Decade i+1 has stem month ± (i + 2).
    #[test]
    fn prop_decade_stepping(
        ms in 0i64..10,
        mb in 0i64..12,
        dir in any_direction(),
        age in 1u32..12,
        i in 0usize..11,
    ) {
        let month = Pillar::from_indices(ms, mb);
        let seq = daewun(month, dir, age, 12);
        let expected = stem_of(ms + dir.sign() * (i as i64 + 2));
        prop_assert_eq!(seq[i + 1].pillar.stem(), expected);
        prop_assert_eq!(seq[i + 1].start_age, seq[i].end_age + 1);
    }

    /// Regenerating decade 0 from its parameters reproduces it.
    #[test]
    fn prop_decade_zero_deterministic(
        ms in 0i64..10,
        mb in 0i64..12,
        dir in any_direction(),
        days in 0u32..40,
    ) {
        let month = Pillar::from_indices(ms, mb);
        let age = start_age(days);
        let seq = daewun(month, dir, age, 8);
        prop_assert_eq!(seq[0], daewun_at(month, dir, age, 0));
    }

    /// Start age is at least one and the detailed form stays within a year.
    #[test]
    fn prop_start_age_bounds(days in 0u32..10_000) {
        let age = start_age(days);
        let d = start_age_detailed(days);
        prop_assert!(age >= 1);
        prop_assert!(d.months < 12);
        prop_assert!(age.abs_diff(d.years) <= 1);
    }
}
