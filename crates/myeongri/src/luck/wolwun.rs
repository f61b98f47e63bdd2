//! Month pillars (月運).
//!
//! Month numbers are solar-term months: 1 is 寅 (opening at 立春), 12 is 丑.
//! The year stem fixes the stem of month 1 (年上起月):
//!
//! | Year stem | Month 1 |
//! |-----------|---------|
//! | 甲 己 | 丙寅 |
//! | 乙 庚 | 戊寅 |
//! | 丙 辛 | 庚寅 |
//! | 丁 壬 | 壬寅 |
//! | 戊 癸 | 甲寅 |

use super::sewun::sewun;
use crate::core::constants::{FIRST_MONTH_BRANCH, MONTHS_PER_YEAR};
use crate::core::pillar::Pillar;
use crate::core::stem::Stem;
use crate::cycle::{branch_of, stem_of};

/// One month pillar of a year.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wolwun {
    /// Solar-term month number (1..=12).
    pub month: u8,
    /// The pillar.
    pub pillar: Pillar,
}

/// Fold any month number into `1..=12`: `((m − 1) mod 12) + 1`.
#[inline]
#[must_use]
pub const fn normalize_month(month: i64) -> u8 {
    let m = MONTHS_PER_YEAR as i64;
    ((month.rem_euclid(m) + m - 1) % m + 1) as u8
}

/// Stem of `month` in a year with stem `year_stem`:
/// `(year_stem % 5) * 2 + 2 + (month − 1)`.
///
/// ```
/// use myeongri::luck::month_stem;
/// use myeongri::Stem;
///
/// assert_eq!(month_stem(Stem::GAP, 1), Stem::BYEONG);
/// assert_eq!(month_stem(Stem::GI, 1), Stem::BYEONG);
/// assert_eq!(month_stem(Stem::MU, 1), Stem::GAP);
/// ```
#[inline]
#[must_use]
pub const fn month_stem(year_stem: Stem, month: u8) -> Stem {
    let base = (year_stem.index() % 5) as i64 * 2 + 2;
    stem_of(base + normalize_month(month as i64) as i64 - 1)
}

/// Month pillar of `month` in a year with stem `year_stem`.
///
/// The branch is `month + 1`, so month 1 is 寅 and month 11 is 子.
#[inline]
#[must_use]
pub const fn wolwun(year_stem: Stem, month: u8) -> Wolwun {
    let month = normalize_month(month as i64);
    Wolwun {
        month,
        pillar: Pillar::new(
            month_stem(year_stem, month),
            branch_of(month as i64 + FIRST_MONTH_BRANCH - 1),
        ),
    }
}

/// All twelve month pillars of calendar year `year`.
///
/// ```
/// use myeongri::luck::wolwun_year;
///
/// let months = wolwun_year(2024);
/// assert_eq!(months[0].pillar.to_string(), "丙寅");
/// assert_eq!(months[11].pillar.to_string(), "丁丑");
/// ```
#[must_use]
pub fn wolwun_year(year: i64) -> Vec<Wolwun> {
    let year_stem = sewun(year).pillar.stem();
    (1..=MONTHS_PER_YEAR as u8)
        .map(|m| wolwun(year_stem, m))
        .collect()
}
