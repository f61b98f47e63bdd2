//! Decade (大運) and early-childhood (小運) pillars.

use crate::core::constants::DECADE_YEARS;
use crate::core::pillar::Pillar;
use crate::core::stem::Stem;
use crate::direction::Direction;
use crate::relation::ten_god::{ten_god, TenGod};
use tracing::trace;

/// One decade luck pillar.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Daewun {
    /// Position in the sequence, from 0.
    pub index: usize,
    /// The pillar.
    pub pillar: Pillar,
    /// First age covered.
    pub start_age: u32,
    /// Last age covered (`start_age + 9`).
    pub end_age: u32,
}

impl Daewun {
    /// True if `age` falls inside this decade.
    #[inline]
    #[must_use]
    pub const fn covers(&self, age: u32) -> bool {
        self.start_age <= age && age <= self.end_age
    }

    /// Ten god of the pillar stem relative to `day_master`.
    #[inline]
    #[must_use]
    pub const fn ten_god(&self, day_master: Stem) -> TenGod {
        ten_god(day_master, self.pillar.stem())
    }
}

/// Decade pillar `index` stepped from `month` without generating the ones
/// before it.
///
/// `offset = (index + 1) * sign`, ages
/// `[start_age + 10 * index, start_age + 10 * index + 9]`.
#[must_use]
pub fn daewun_at(month: Pillar, direction: Direction, start_age: u32, index: usize) -> Daewun {
    let offset = (index as i64 + 1) * direction.sign();
    let first = start_age.saturating_add(DECADE_YEARS.saturating_mul(index as u32));
    Daewun {
        index,
        pillar: month.offset(offset),
        start_age: first,
        end_age: first.saturating_add(DECADE_YEARS - 1),
    }
}

/// The first `count` decade pillars stepped from the month pillar.
#[must_use]
pub fn daewun(month: Pillar, direction: Direction, start_age: u32, count: usize) -> Vec<Daewun> {
    trace!(%month, ?direction, start_age, count, "generating decade pillars");
    (0..count)
        .map(|i| daewun_at(month, direction, start_age, i))
        .collect()
}

/// A generated decade sequence with its parameters.
///
/// # Example
///
/// ```
/// use myeongri::direction::Direction;
/// use myeongri::luck::DaewunCycle;
///
/// let cycle = DaewunCycle::generate("甲子".parse().unwrap(), Direction::Backward, 3, 8);
/// assert_eq!(cycle.at_age(2), None);
/// assert_eq!(cycle.at_age(3).map(|d| d.index), Some(0));
/// assert_eq!(cycle.at_age(25).map(|d| d.pillar.to_string()), Some("辛酉".to_string()));
/// assert_eq!(cycle.at_age(83), None);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaewunCycle {
    /// Stepping direction.
    pub direction: Direction,
    /// Age at which the first decade begins.
    pub start_age: u32,
    /// Decades in order.
    pub pillars: Vec<Daewun>,
}

impl DaewunCycle {
    /// Generate `count` decades from the month pillar.
    #[must_use]
    pub fn generate(month: Pillar, direction: Direction, start_age: u32, count: usize) -> Self {
        Self {
            direction,
            start_age,
            pillars: daewun(month, direction, start_age, count),
        }
    }

    /// The decade covering `age`; `None` before the first or after the last.
    #[must_use]
    pub fn at_age(&self, age: u32) -> Option<&Daewun> {
        if age < self.start_age {
            return None;
        }
        let index = ((age - self.start_age) / DECADE_YEARS) as usize;
        self.pillars.get(index)
    }

    /// Number of decades.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pillars.len()
    }

    /// True if no decade was generated.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pillars.is_empty()
    }

    /// Iterate the decades in order.
    pub fn iter(&self) -> impl Iterator<Item = &Daewun> + '_ {
        self.pillars.iter()
    }
}

/// One early-childhood pillar.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sowun {
    /// Age (from 1).
    pub age: u32,
    /// The pillar.
    pub pillar: Pillar,
}

/// Early-childhood pillars for every age from 1 up to, but excluding,
/// `start_age`, stepped `age * sign` from `base`.
///
/// A chart passes its month pillar, so age `k` gets the same pillar the
/// decade formula gives index `k − 1`.
///
/// Empty when the first decade starts at age 1.
///
/// ```
/// use myeongri::direction::Direction;
/// use myeongri::luck::sowun;
///
/// let years = sowun("丁卯".parse().unwrap(), Direction::Forward, 4);
/// let names: Vec<String> = years.iter().map(|s| s.pillar.to_string()).collect();
/// assert_eq!(names, ["戊辰", "己巳", "庚午"]);
/// assert!(sowun("丁卯".parse().unwrap(), Direction::Forward, 1).is_empty());
/// ```
#[must_use]
pub fn sowun(base: Pillar, direction: Direction, start_age: u32) -> Vec<Sowun> {
    (1..start_age)
        .map(|age| Sowun {
            age,
            pillar: base.offset(i64::from(age) * direction.sign()),
        })
        .collect()
}
