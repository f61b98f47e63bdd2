//! Myeongri - Four-Pillar Chart Engine
//!
//! A pure rule engine over two small cyclic alphabets: ten heavenly stems
//! and twelve earthly branches. Every table is a compile-time constant
//! array indexed by those closed domains, and every integer entry point is
//! total: out-of-range values are normalized, never rejected.
//!
//! # Pipeline
//!
//! ```text
//! Pillars ──► Ten-God / Month-Authority ──► Structural Pattern
//! Pillars + Direction ──► Start Age ──► Sowun / Daewun
//! Year ──► Sewun ──► Wolwun
//! Day + Month/Year Pillars ──► Taewon / Taesik / Myeonggung + flags
//! ```
//!
//! # Cycle Base
//!
//! | Alphabet | Size | Element | Polarity |
//! |----------|------|---------|----------|
//! | Stem | 10 | `index / 2` | even = Yang |
//! | Branch | 12 | table | even = Yang |
//! | Pillar | 60 | - | stem and branch agree |
//!
//! # Example: Ten Gods
//!
//! ```
//! use myeongri::{ten_god, Stem, TenGod};
//!
//! assert_eq!(ten_god(Stem::GAP, Stem::GAP), TenGod::Rival);
//! assert_eq!(ten_god(Stem::GAP, Stem::SIN), TenGod::DirectOfficer);
//! ```
//!
//! # Example: Chart Analysis
//!
//! ```
//! use myeongri::prelude::*;
//!
//! let chart: Chart = "庚午 乙酉 甲子 丙寅".parse().unwrap();
//! let birth = BirthContext::new(Sex::Female, 20, 8).with_elapsed_days(12);
//! let analysis = chart.analyze(&birth, &AnalysisConfig::default()).unwrap();
//!
//! // 庚, the residual stem of 酉, stands in the year: Seven Killings.
//! assert_eq!(analysis.pattern.kind, PatternKind::Regular(TenGod::SevenKillings));
//! assert_eq!(analysis.direction, Direction::Backward);
//! assert_eq!(analysis.daewun.pillars[0].pillar.to_string(), "甲申");
//! ```
//!
//! # Design Principles
//!
//! - **Tables, not hash maps**: dense arrays over the closed index domains
//! - **One relation**: every stem-to-stem relation goes through [`ten_god`]
//! - **Ordered rules**: pattern steps run in a fixed pipeline, first match wins
//! - **Bounded output**: luck generators return concrete lists, never live iterators

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![warn(missing_docs)]

// Core data types (stem, branch, pillar, element, polarity, constants, cycle)
mod core;

// Precomputed lookup tables
pub mod lut;

// Errors
pub mod error;

// Analysis configuration
pub mod config;

// Ten gods and branch/stem harmonies
pub mod relation;

// Hidden stems and month authority
pub mod hidden;

// Luck direction
pub mod direction;

// Structural pattern pipeline
pub mod pattern;

// Decade, early-childhood, year and month luck
pub mod luck;

// Taewon, taesik, myeonggung
pub mod auxiliary;

// Chart facade
pub mod chart;

// Re-export submodules for external access
pub use core::branch;
pub use core::constants;
pub use core::cycle;
pub use core::element;
pub use core::pillar;
pub use core::polarity;
pub use core::stem;

// Re-export core types at crate root
pub use core::branch::Branch;
pub use core::element::{Element, ElementSet};
pub use core::pillar::Pillar;
pub use core::polarity::Polarity;
pub use core::stem::Stem;

pub use chart::{BirthContext, Chart, ChartAnalysis};
pub use config::AnalysisConfig;
pub use error::{ConfigError, ParseError};
pub use pattern::{Pattern, PatternCategory, PatternKind};
pub use relation::ten_god::{ten_god, TenGod, TenGodFamily};

/// Prelude module for convenient imports.
///
/// ```
/// use myeongri::prelude::*;
/// ```
pub mod prelude {
    // Cycle base
    pub use crate::core::branch::Branch;
    pub use crate::core::cycle::{branch_of, stem_of};
    pub use crate::core::element::{Element, ElementSet};
    pub use crate::core::pillar::Pillar;
    pub use crate::core::polarity::Polarity;
    pub use crate::core::stem::Stem;

    // Relations
    pub use crate::relation::ten_god::{ten_god, TenGod, TenGodFamily};

    // Hidden stems
    pub use crate::hidden::{governing_stem, hidden_stems, HiddenRole, HiddenStem, MonthAuthority};

    // Patterns
    pub use crate::pattern::{Pattern, PatternCategory, PatternKind, PatternRule};

    // Luck
    pub use crate::direction::{Direction, DirectionBasis, Sex};
    pub use crate::luck::{Daewun, DaewunCycle, Sewun, Sowun, Wolwun};

    // Chart facade
    pub use crate::chart::{BirthContext, Chart, ChartAnalysis, PillarPosition};
    pub use crate::config::{AnalysisConfig, AuthorityBasis};
    pub use crate::error::{ConfigError, ParseError};
}
