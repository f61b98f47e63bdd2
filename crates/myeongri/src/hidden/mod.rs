//! Hidden stems (地藏干).
//!
//! Every branch carries one to three stems, each "in power" for a number of
//! days after the solar term that opens the branch's month. The entries are
//! ordered Residual → Middle → Main and their days always sum to 30.
//!
//! # Example
//!
//! ```
//! use myeongri::hidden::{hidden_stems, main_qi, HiddenRole};
//! use myeongri::{Branch, Stem};
//!
//! let row = hidden_stems(Branch::IN);
//! assert_eq!(row.len(), 3);
//! assert_eq!(row[0].stem(), Stem::MU);
//! assert_eq!(main_qi(Branch::IN).stem(), Stem::GAP);
//! assert_eq!(main_qi(Branch::IN).role(), HiddenRole::Main);
//! ```

pub mod authority;

pub use authority::{governing_stem, main_qi_ten_god, MonthAuthority};

use crate::core::branch::Branch;
use crate::core::stem::Stem;
use core::fmt;

/// Role of a hidden stem inside its branch.
///
/// Ordered by priority: `Main > Middle > Residual`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum HiddenRole {
    /// 餘氣: carried over from the previous month.
    Residual = 0,
    /// 中氣: the middle stem (absent in 子卯酉).
    Middle = 1,
    /// 正氣: the branch's own stem.
    Main = 2,
}

impl HiddenRole {
    /// Priority used when several hidden stems compete (higher wins).
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        self as u8
    }

    /// Hangul name.
    #[must_use]
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Residual => "여기",
            Self::Middle => "중기",
            Self::Main => "정기",
        }
    }
}

/// One hidden-stem entry of a branch.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HiddenStem {
    stem: Stem,
    role: HiddenRole,
    days: u32,
}

impl HiddenStem {
    /// Creates an entry.
    #[inline]
    #[must_use]
    pub const fn new(stem: Stem, role: HiddenRole, days: u32) -> Self {
        Self { stem, role, days }
    }

    /// The hidden stem.
    #[inline]
    #[must_use]
    pub const fn stem(&self) -> Stem {
        self.stem
    }

    /// Residual, Middle or Main.
    #[inline]
    #[must_use]
    pub const fn role(&self) -> HiddenRole {
        self.role
    }

    /// Days in power.
    #[inline]
    #[must_use]
    pub const fn days(&self) -> u32 {
        self.days
    }
}

impl fmt::Debug for HiddenStem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {} {}d", self.role, self.stem.hanja(), self.days)
    }
}

/// Hidden stems of a branch, Residual → Middle → Main.
#[inline]
#[must_use]
pub const fn hidden_stems(branch: Branch) -> &'static [HiddenStem] {
    branch.hidden_stems()
}

/// The Main entry of a branch (always the last one).
#[must_use]
pub const fn main_qi(branch: Branch) -> HiddenStem {
    let row = hidden_stems(branch);
    row[row.len() - 1]
}

/// Hidden stems of `branch` that also appear among `visible`, highest role
/// priority first.
///
/// This is transparency (透出): a hidden stem is transparent when the same
/// stem stands in a visible position of the chart.
///
/// # Example
///
/// ```
/// use myeongri::hidden::{transparent_stems, HiddenRole};
/// use myeongri::{Branch, Stem};
///
/// // 寅 hides 戊 丙 甲; 戊 and 甲 are visible.
/// let t = transparent_stems(Branch::IN, &[Stem::MU, Stem::GAP]);
/// assert_eq!(t.len(), 2);
/// assert_eq!(t[0].role(), HiddenRole::Main);
/// assert_eq!(t[1].role(), HiddenRole::Residual);
/// ```
#[must_use]
pub fn transparent_stems(branch: Branch, visible: &[Stem]) -> Vec<HiddenStem> {
    let mut matches: Vec<HiddenStem> = hidden_stems(branch)
        .iter()
        .filter(|h| visible.contains(&h.stem()))
        .copied()
        .collect();
    matches.sort_by(|a, b| b.role().priority().cmp(&a.role().priority()));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MONTH_CYCLE_DAYS;

    #[test]
    fn test_every_branch_sums_to_thirty() {
        for b in Branch::ALL {
            let total: u32 = hidden_stems(b).iter().map(HiddenStem::days).sum();
            assert_eq!(total, MONTH_CYCLE_DAYS);
        }
    }

    #[test]
    fn test_exactly_one_main() {
        for b in Branch::ALL {
            let count = hidden_stems(b)
                .iter()
                .filter(|h| h.role() == HiddenRole::Main)
                .count();
            assert_eq!(count, 1, "{b:?}");
        }
    }

    #[test]
    fn test_cardinal_branches_have_no_middle() {
        for b in [Branch::JA, Branch::MYO, Branch::YU] {
            assert_eq!(hidden_stems(b).len(), 2);
        }
        assert_eq!(hidden_stems(Branch::O).len(), 3);
    }

    #[test]
    fn test_transparency_none_visible() {
        assert!(transparent_stems(Branch::JA, &[Stem::GAP, Stem::EUL]).is_empty());
    }

    #[test]
    fn test_transparency_orders_by_role() {
        // 丑: 癸 residual, 辛 middle, 己 main
        let t = transparent_stems(Branch::CHUK, &[Stem::GYE, Stem::SIN, Stem::GI]);
        let roles: Vec<HiddenRole> = t.iter().map(HiddenStem::role).collect();
        assert_eq!(
            roles,
            vec![HiddenRole::Main, HiddenRole::Middle, HiddenRole::Residual]
        );
    }
}
