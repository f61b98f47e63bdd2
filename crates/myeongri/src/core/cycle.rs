//! Modular offset helpers for the two alphabets.
//!
//! These are the only normalization points of the crate: any integer,
//! negative or out of range, is reduced with `((n % base) + base) % base`.
//! Nothing here can fail.

use super::branch::Branch;
use super::stem::Stem;

/// Stem for any integer (mod 10).
///
/// # Example
///
/// ```
/// use myeongri::cycle::stem_of;
/// use myeongri::Stem;
///
/// assert_eq!(stem_of(12), Stem::BYEONG);
/// assert_eq!(stem_of(-1), Stem::GYE);
/// ```
#[inline]
#[must_use]
pub const fn stem_of(n: i64) -> Stem {
    Stem::wrap(n)
}

/// Branch for any integer (mod 12).
///
/// # Example
///
/// ```
/// use myeongri::cycle::branch_of;
/// use myeongri::Branch;
///
/// assert_eq!(branch_of(14), Branch::IN);
/// assert_eq!(branch_of(-1), Branch::HAE);
/// ```
#[inline]
#[must_use]
pub const fn branch_of(n: i64) -> Branch {
    Branch::wrap(n)
}

/// Forward distance from `from` to `to` on the stem cycle (0..10).
#[inline]
#[must_use]
pub const fn stem_distance(from: Stem, to: Stem) -> u8 {
    (to.index() + 10 - from.index()) % 10
}

/// Forward distance from `from` to `to` on the branch cycle (0..12).
#[inline]
#[must_use]
pub const fn branch_distance(from: Branch, to: Branch) -> u8 {
    (to.index() + 12 - from.index()) % 12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_of_is_periodic() {
        for n in -100i64..100 {
            assert_eq!(stem_of(n), stem_of(n + 10));
            assert_eq!(stem_of(n), stem_of(n - 30));
        }
    }

    #[test]
    fn test_branch_of_is_periodic() {
        for n in -100i64..100 {
            assert_eq!(branch_of(n), branch_of(n + 12));
            assert_eq!(branch_of(n), branch_of(n - 36));
        }
    }

    #[test]
    fn test_extreme_inputs() {
        assert_eq!(stem_of(i64::MIN).index(), i64::MIN.rem_euclid(10) as u8);
        assert_eq!(branch_of(i64::MAX).index(), i64::MAX.rem_euclid(12) as u8);
    }

    #[test]
    fn test_distances() {
        for a in Stem::ALL {
            for b in Stem::ALL {
                assert_eq!(a.offset(stem_distance(a, b) as i64), b);
            }
        }
        for a in Branch::ALL {
            for b in Branch::ALL {
                assert_eq!(a.offset(branch_distance(a, b) as i64), b);
            }
        }
    }
}
