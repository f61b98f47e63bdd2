//! Start age of the decade sequence.

use crate::core::constants::{DAYS_PER_LUCK_YEAR, MONTHS_PER_REMAINDER_DAY};

/// Start age in whole years: `max(1, round(days / 3))`.
///
/// `days` is the distance to the next solar term for a forward chart and to
/// the previous one for a backward chart. Halves cannot occur with a divisor
/// of three, so rounding is `(days + 1) / 3`.
///
/// # Example
///
/// ```
/// use myeongri::luck::start_age;
///
/// assert_eq!(start_age(0), 1);
/// assert_eq!(start_age(4), 1);
/// assert_eq!(start_age(5), 2);
/// assert_eq!(start_age(30), 10);
/// ```
#[inline]
#[must_use]
pub const fn start_age(days: u32) -> u32 {
    let rounded = days.saturating_add(1) / DAYS_PER_LUCK_YEAR;
    if rounded < 1 {
        1
    } else {
        rounded
    }
}

/// Start age as years and months: three days make a year, one day four
/// months.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartAge {
    /// `floor(days / 3)`.
    pub years: u32,
    /// `(days % 3) * 4`, always below 12.
    pub months: u32,
}

/// Detailed start age without rounding.
///
/// ```
/// use myeongri::luck::{start_age_detailed, StartAge};
///
/// assert_eq!(start_age_detailed(14), StartAge { years: 4, months: 8 });
/// ```
#[inline]
#[must_use]
pub const fn start_age_detailed(days: u32) -> StartAge {
    StartAge {
        years: days / DAYS_PER_LUCK_YEAR,
        months: (days % DAYS_PER_LUCK_YEAR) * MONTHS_PER_REMAINDER_DAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding() {
        let expected = [1, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3];
        for (days, &age) in expected.iter().enumerate() {
            assert_eq!(start_age(days as u32), age, "days={days}");
        }
    }

    #[test]
    fn test_never_below_one() {
        for days in 0..200 {
            assert!(start_age(days) >= 1);
        }
        assert_eq!(start_age(u32::MAX), u32::MAX / 3);
    }

    #[test]
    fn test_detailed_agrees_with_rounded() {
        for days in 3..200 {
            let d = start_age_detailed(days);
            assert!(d.months < 12);
            let rounded = d.years + u32::from(d.months >= 8);
            assert_eq!(start_age(days), rounded, "days={days}");
        }
    }
}
