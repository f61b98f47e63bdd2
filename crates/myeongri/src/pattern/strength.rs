//! Family census of a chart for the Following check.

use crate::core::branch::Branch;
use crate::core::stem::Stem;
use crate::hidden::{hidden_stems, main_qi};
use crate::relation::ten_god::{ten_god, TenGodFamily};

/// How the seven non-day-master positions split across the five families,
/// and whether the day master has a root.
///
/// The counted positions are the year, month and hour stems plus the main
/// qi of all four branches.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrengthProfile {
    counts: [u8; 5],
    rooted: bool,
}

impl StrengthProfile {
    /// Census of a chart.
    ///
    /// `stems` are the year, month and hour stems; `branches` the four
    /// branches in year, month, day, hour order.
    ///
    /// ```
    /// use myeongri::pattern::StrengthProfile;
    /// use myeongri::{Branch, Stem, TenGodFamily};
    ///
    /// let p = StrengthProfile::from_chart(
    ///     Stem::GAP,
    ///     [Stem::MU, Stem::GI, Stem::MU],
    ///     [Branch::JIN, Branch::SUL, Branch::CHUK, Branch::MI],
    /// );
    /// assert_eq!(p.count(TenGodFamily::Wealth), 7);
    /// assert!(p.is_rooted()); // 辰 and 未 hide 乙
    /// ```
    #[must_use]
    pub fn from_chart(day_master: Stem, stems: [Stem; 3], branches: [Branch; 4]) -> Self {
        let mut counts = [0u8; 5];
        let main_stems = branches.iter().map(|&b| main_qi(b).stem());
        for s in stems.into_iter().chain(main_stems) {
            counts[ten_god(day_master, s).family().offset() as usize] += 1;
        }
        let element = day_master.element();
        let rooted = branches
            .iter()
            .flat_map(|&b| hidden_stems(b).iter())
            .any(|h| h.stem().element() == element);
        Self { counts, rooted }
    }

    /// Positions held by `family`.
    #[inline]
    #[must_use]
    pub const fn count(&self, family: TenGodFamily) -> u8 {
        self.counts[family.offset() as usize]
    }

    /// True if any branch hides a stem of the day master's element.
    #[inline]
    #[must_use]
    pub const fn is_rooted(&self) -> bool {
        self.rooted
    }

    /// Positions held by Companion and Resource.
    #[inline]
    #[must_use]
    pub const fn supporting(&self) -> u8 {
        self.count(TenGodFamily::Companion) + self.count(TenGodFamily::Resource)
    }

    /// Positions held by Output, Wealth and Officer.
    #[inline]
    #[must_use]
    pub const fn opposing(&self) -> u8 {
        self.count(TenGodFamily::Output)
            + self.count(TenGodFamily::Wealth)
            + self.count(TenGodFamily::Officer)
    }

    /// The family with the most positions; ties go to the lower offset.
    #[must_use]
    pub fn dominant(&self) -> (TenGodFamily, u8) {
        TenGodFamily::ALL
            .into_iter()
            .map(|f| (f, self.count(f)))
            .fold((TenGodFamily::Companion, 0), |best, cur| {
                if cur.1 > best.1 {
                    cur
                } else {
                    best
                }
            })
    }
}
