//! Month authority (司令): which hidden stem of the month branch governs on a
//! given day.
//!
//! The entries of the month branch take power one after another. Walking the
//! Residual → Middle → Main list and accumulating day counts, the governing
//! entry is the first whose cumulative total reaches the elapsed days:
//!
//! ```text
//! 寅: 戊 7 | 丙 7 | 甲 16
//!     0..=7  8..=14  15..=30  (and beyond, saturating)
//! ```

use super::{hidden_stems, main_qi, HiddenStem};
use crate::core::branch::Branch;
use crate::core::stem::Stem;
use crate::relation::ten_god::{ten_god, TenGod};

/// Governing hidden stem of `branch`, `elapsed_days` after its solar term.
///
/// Values beyond the branch total saturate to the Main entry.
///
/// # Example
///
/// ```
/// use myeongri::hidden::{governing_stem, HiddenRole};
/// use myeongri::{Branch, Stem};
///
/// assert_eq!(governing_stem(Branch::IN, 3).stem(), Stem::MU);
/// assert_eq!(governing_stem(Branch::IN, 7).stem(), Stem::MU);
/// assert_eq!(governing_stem(Branch::IN, 8).stem(), Stem::BYEONG);
/// assert_eq!(governing_stem(Branch::IN, 400).role(), HiddenRole::Main);
/// ```
#[must_use]
pub fn governing_stem(branch: Branch, elapsed_days: u32) -> HiddenStem {
    let mut cumulative = 0u32;
    for entry in hidden_stems(branch) {
        cumulative += entry.days();
        if cumulative >= elapsed_days {
            return *entry;
        }
    }
    main_qi(branch)
}

/// Ten god of the Main hidden stem of `branch` relative to `reference`.
#[inline]
#[must_use]
pub const fn main_qi_ten_god(reference: Stem, branch: Branch) -> TenGod {
    ten_god(reference, main_qi(branch).stem())
}

/// The resolved month authority of a chart.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthAuthority {
    /// The month branch.
    pub branch: Branch,
    /// Days since the month's solar term, when known.
    pub elapsed_days: Option<u32>,
    /// The governing entry (the Main entry when days are unknown).
    pub entry: HiddenStem,
    /// Ten god of the governing entry relative to the day master.
    pub ten_god: TenGod,
}

impl MonthAuthority {
    /// Resolve the authority of `month_branch` for `day_master`.
    #[must_use]
    pub fn resolve(day_master: Stem, month_branch: Branch, elapsed_days: Option<u32>) -> Self {
        let entry = match elapsed_days {
            Some(days) => governing_stem(month_branch, days),
            None => main_qi(month_branch),
        };
        Self {
            branch: month_branch,
            elapsed_days,
            entry,
            ten_god: ten_god(day_master, entry.stem()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hidden::HiddenRole;

    #[test]
    fn test_zero_days_is_first_entry() {
        for b in Branch::ALL {
            assert_eq!(governing_stem(b, 0), hidden_stems(b)[0]);
        }
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        // 午: 丙 10, 己 9, 丁 11
        assert_eq!(governing_stem(Branch::O, 10).stem(), Stem::BYEONG);
        assert_eq!(governing_stem(Branch::O, 11).stem(), Stem::GI);
        assert_eq!(governing_stem(Branch::O, 19).stem(), Stem::GI);
        assert_eq!(governing_stem(Branch::O, 20).stem(), Stem::JEONG);
        assert_eq!(governing_stem(Branch::O, 30).stem(), Stem::JEONG);
    }

    #[test]
    fn test_saturates_to_main() {
        for b in Branch::ALL {
            for days in [30, 31, 45, u32::MAX] {
                assert_eq!(governing_stem(b, days), main_qi(b));
                assert_eq!(governing_stem(b, days).role(), HiddenRole::Main);
            }
        }
    }

    #[test]
    fn test_authority_is_monotone_in_role() {
        for b in Branch::ALL {
            let mut last = HiddenRole::Residual;
            for days in 0..=30 {
                let role = governing_stem(b, days).role();
                assert!(role >= last);
                last = role;
            }
        }
    }

    #[test]
    fn test_main_qi_ten_god() {
        assert_eq!(main_qi_ten_god(Stem::GAP, Branch::YU), TenGod::DirectOfficer);
        assert_eq!(main_qi_ten_god(Stem::GAP, Branch::IN), TenGod::Rival);
    }

    #[test]
    fn test_resolve_without_days_uses_main() {
        let a = MonthAuthority::resolve(Stem::GAP, Branch::IN, None);
        assert_eq!(a.entry, main_qi(Branch::IN));
        assert_eq!(a.ten_god, TenGod::Rival);

        let a = MonthAuthority::resolve(Stem::GAP, Branch::IN, Some(2));
        assert_eq!(a.entry.stem(), Stem::MU);
        assert_eq!(a.ten_god, TenGod::IndirectWealth);
    }
}
