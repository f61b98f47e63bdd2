//! Year pillars (歲運).

use crate::core::constants::{SEWUN_EPOCH_YEAR, SEXAGENARY_CYCLE};
use crate::core::pillar::Pillar;
use crate::core::stem::Stem;
use crate::cycle::{branch_of, stem_of};
use crate::relation::ten_god::{ten_god, TenGod};

/// The pillar of one calendar year.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sewun {
    /// Calendar year (astronomical numbering; 0 is 1 BCE).
    pub year: i64,
    /// The pillar.
    pub pillar: Pillar,
}

impl Sewun {
    /// Ten god of the year stem relative to `day_master`.
    #[inline]
    #[must_use]
    pub const fn ten_god(&self, day_master: Stem) -> TenGod {
        ten_god(day_master, self.pillar.stem())
    }
}

/// Year pillar of `year`: stem and branch of `year − 4`.
///
/// Depends on the year alone; direction and birth data play no part.
///
/// ```
/// use myeongri::luck::sewun;
/// use myeongri::cycle::{branch_of, stem_of};
///
/// let s = sewun(2024);
/// assert_eq!(s.pillar.stem(), stem_of(2020));
/// assert_eq!(s.pillar.branch(), branch_of(2020));
/// ```
#[inline]
#[must_use]
pub const fn sewun(year: i64) -> Sewun {
    let n = year.rem_euclid(SEXAGENARY_CYCLE as i64) - SEWUN_EPOCH_YEAR;
    Sewun {
        year,
        pillar: Pillar::new(stem_of(n), branch_of(n)),
    }
}

/// `count` consecutive year pillars starting at `from`.
///
/// Stops early rather than wrapping if the range would run past
/// `i64::MAX`.
#[must_use]
pub fn sewun_range(from: i64, count: usize) -> Vec<Sewun> {
    (0..count)
        .map_while(|i| i64::try_from(i).ok().and_then(|i| from.checked_add(i)))
        .map(sewun)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        assert_eq!(sewun(4).pillar, Pillar::GAPJA);
        assert_eq!(sewun(64).pillar, Pillar::GAPJA);
        assert_eq!(sewun(1984).pillar, Pillar::GAPJA);
    }

    #[test]
    fn test_known_years() {
        assert_eq!(sewun(2024).pillar.to_string(), "甲辰");
        assert_eq!(sewun(2025).pillar.to_string(), "乙巳");
        assert_eq!(sewun(1900).pillar.to_string(), "庚子");
    }

    #[test]
    fn test_before_epoch() {
        assert_eq!(sewun(3).pillar.to_string(), "癸亥");
        assert_eq!(sewun(-56).pillar, Pillar::GAPJA);
    }

    #[test]
    fn test_range_is_consecutive() {
        let r = sewun_range(2020, 12);
        assert_eq!(r.len(), 12);
        for w in r.windows(2) {
            assert_eq!(w[1].year, w[0].year + 1);
            assert_eq!(w[1].pillar, w[0].pillar.offset(1));
        }
        assert!(sewun_range(2020, 0).is_empty());
    }

    #[test]
    fn test_extreme_years() {
        for year in [i64::MIN, i64::MIN + 1, i64::MAX - 1, i64::MAX] {
            let s = sewun(year);
            assert_eq!(s.year, year);
            assert_eq!(
                s.pillar,
                Pillar::from_sexagenary(year.rem_euclid(60) - SEWUN_EPOCH_YEAR)
            );
        }
        // i64::MAX ≡ 7 (mod 60): three steps past 甲子.
        assert_eq!(sewun(i64::MAX).pillar, Pillar::GAPJA.offset(3));
        assert_eq!(sewun(i64::MAX).pillar, sewun(i64::MAX - 60).pillar);
        assert_eq!(sewun(i64::MIN).pillar, sewun(i64::MIN + 60).pillar);
    }

    #[test]
    fn test_range_stops_at_max_year() {
        let r = sewun_range(i64::MAX - 2, 10);
        assert_eq!(r.len(), 3);
        assert_eq!(r[2].year, i64::MAX);
        assert_eq!(r[2].pillar, r[0].pillar.offset(2));
        assert_eq!(sewun_range(i64::MIN, 2)[1].year, i64::MIN + 1);
    }
}
