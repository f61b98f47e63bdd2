//! Cycle constants.
//!
//! Every other constant in the crate is derived from the two alphabet sizes
//! (10 stems, 12 branches) and the five-element cycle.

/// Number of heavenly stems.
pub const STEM_COUNT: usize = 10;

/// Number of earthly branches.
pub const BRANCH_COUNT: usize = 12;

/// Number of elements in the generating/overcoming cycle.
pub const ELEMENT_COUNT: usize = 5;

/// Length of the combined stem-branch cycle (lcm(10, 12) = 60).
pub const SEXAGENARY_CYCLE: usize = 60;

/// Total hidden-stem days of every branch.
///
/// One solar-term month is conventionally 30 days; each branch splits it
/// between its residual, middle and main hidden stems.
pub const MONTH_CYCLE_DAYS: u32 = 30;

/// Calendar year whose year pillar is stem 0 / branch 0 (甲子, 4 CE).
pub const SEWUN_EPOCH_YEAR: i64 = 4;

/// Years covered by one decade luck pillar.
pub const DECADE_YEARS: u32 = 10;

/// Decade pillars generated when the caller does not say otherwise.
pub const DEFAULT_DECADE_COUNT: usize = 8;

/// Upper bound on requested decade pillars (120 years of luck).
pub const MAX_DECADE_COUNT: usize = 12;

/// Days to the adjacent solar term that correspond to one year of start age.
pub const DAYS_PER_LUCK_YEAR: u32 = 3;

/// Months of start age contributed by each remainder day.
pub const MONTHS_PER_REMAINDER_DAY: u32 = 4;

/// Months in one luck year.
pub const MONTHS_PER_YEAR: usize = 12;

/// Branch index of the first solar-term month (寅).
pub const FIRST_MONTH_BRANCH: i64 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sexagenary_is_lcm() {
        let mut n = STEM_COUNT;
        while n % BRANCH_COUNT != 0 {
            n += STEM_COUNT;
        }
        assert_eq!(n, SEXAGENARY_CYCLE);
    }

    #[test]
    fn test_start_age_units_cover_a_year() {
        assert_eq!(
            DAYS_PER_LUCK_YEAR * MONTHS_PER_REMAINDER_DAY,
            MONTHS_PER_YEAR as u32
        );
    }

    #[test]
    fn test_epoch_year_is_cycle_origin() {
        assert_eq!(SEWUN_EPOCH_YEAR % SEXAGENARY_CYCLE as i64, 4);
    }
}
