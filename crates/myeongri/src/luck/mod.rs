//! Luck pillars (運).
//!
//! Four generators, each a pure function returning a concrete, bounded,
//! ordered list:
//!
//! | Sequence | Base | Stepping |
//! |----------|------|----------|
//! | Daewun (大運) | month pillar | `(i + 1) * sign` per decade |
//! | Sowun (小運) | month pillar | `age * sign` for ages before the first decade |
//! | Sewun (歲運) | calendar year | `year − 4` (epoch 甲子 = 4 CE) |
//! | Wolwun (月運) | year stem | `(year_stem % 5) * 2 + 2 + (month − 1)` |
//!
//! The start age comes from the days between birth and the adjacent solar
//! term, three days per year.
//!
//! # Example
//!
//! ```
//! use myeongri::direction::Direction;
//! use myeongri::luck::{daewun, sewun, start_age};
//! use myeongri::Pillar;
//!
//! let month: Pillar = "丙寅".parse().unwrap();
//! let decades = daewun(month, Direction::Forward, start_age(12), 3);
//! assert_eq!(decades[0].pillar.to_string(), "丁卯");
//! assert_eq!((decades[0].start_age, decades[0].end_age), (4, 13));
//! assert_eq!(sewun(2024).pillar.to_string(), "甲辰");
//! ```

mod daewun;
mod sewun;
mod start_age;
mod wolwun;

pub use daewun::{daewun, daewun_at, sowun, Daewun, DaewunCycle, Sowun};
pub use sewun::{sewun, sewun_range, Sewun};
pub use start_age::{start_age, start_age_detailed, StartAge};
pub use wolwun::{month_stem, normalize_month, wolwun, wolwun_year, Wolwun};
