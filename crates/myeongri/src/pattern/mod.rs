//! Structural pattern (格局) classification.
//!
//! A chart receives exactly one pattern from an ordered pipeline of step
//! functions; the first step that produces a result wins and later steps
//! never run:
//!
//! | Step | Rule | Result |
//! |------|------|--------|
//! | 1 | one force dominates an unrooted day master | Following (從格) |
//! | 2 | day master combines with month/hour stem, month branch agrees | Transformed (化氣格) |
//! | 3 | month branch is the direct office, else the blade | Direct-Office (建祿格) / Blade (羊刃格) |
//! | 4 | month entry is Rival to the day master | Rival-Office (月比格) |
//! | 5 | highest-priority transparent month stem is a regular kind | Regular (正格) |
//! | 6 | month entry's ten god | Regular / Month-Rob (月劫格) |
//! | 7 | nothing fired (a logic gap) | Miscellaneous (雜格) |
//!
//! # Example
//!
//! ```
//! use myeongri::pattern::{classify_regular, PatternCategory, PatternKind};
//! use myeongri::{Branch, Stem, TenGod};
//!
//! // 甲 day master, 酉 month, 壬 辛 丙 visible: 辛 (main qi of 酉) is transparent.
//! let p = classify_regular(Stem::GAP, Branch::YU, [Stem::IM, Stem::SIN, Stem::BYEONG]);
//! assert_eq!(p.kind, PatternKind::Regular(TenGod::DirectOfficer));
//! assert_eq!(p.category, PatternCategory::Jeonggyeok);
//! assert_eq!(p.kind.to_string(), "정관격");
//! ```

mod elements;
mod steps;
mod strength;

pub use elements::{family_element, opposing_elements, supporting_elements};
pub use steps::{
    blade_or_direct_office, classify, classify_regular, classify_with, following,
    main_qi_fallback, month_rival, transformed, transparency, PatternContext, Step, PIPELINE,
};
pub use strength::StrengthProfile;

use crate::core::element::{Element, ElementSet};
use crate::core::stem::Stem;
use crate::hidden::HiddenRole;
use crate::relation::ten_god::{TenGod, TenGodFamily};
use core::fmt;

/// The six pattern families.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternCategory {
    /// 正格: the eight regular ten-god patterns.
    Jeonggyeok,
    /// 外格: Direct-Office and Rival-Office.
    Oegyeok,
    /// 羊刃格: Blade and Month-Rob.
    Yangingyeok,
    /// 從格: Following.
    Jonggyeok,
    /// 化氣格: Transformed-Qi.
    Hwagigyeok,
    /// 雜格: Miscellaneous.
    Japgyeok,
}

impl PatternCategory {
    /// Hangul name.
    #[must_use]
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Jeonggyeok => "정격",
            Self::Oegyeok => "외격",
            Self::Yangingyeok => "양인격",
            Self::Jonggyeok => "종격",
            Self::Hwagigyeok => "화기격",
            Self::Japgyeok => "잡격",
        }
    }
}

/// The specific pattern.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternKind {
    /// A pattern named after one of the eight regular ten gods.
    Regular(TenGod),
    /// 建祿格.
    DirectOffice,
    /// 月比格, the Rival-Office pattern.
    MonthRival,
    /// 羊刃格.
    Blade,
    /// 月劫格.
    MonthRob,
    /// 從格, keyed by the dominating family.
    Following(TenGodFamily),
    /// 化氣格, keyed by the transformed element.
    Transformed(Element),
    /// 雜格.
    Miscellaneous,
}

impl PatternKind {
    /// Family the kind belongs to.
    #[must_use]
    pub const fn category(self) -> PatternCategory {
        match self {
            Self::Regular(_) => PatternCategory::Jeonggyeok,
            Self::DirectOffice | Self::MonthRival => PatternCategory::Oegyeok,
            Self::Blade | Self::MonthRob => PatternCategory::Yangingyeok,
            Self::Following(_) => PatternCategory::Jonggyeok,
            Self::Transformed(_) => PatternCategory::Hwagigyeok,
            Self::Miscellaneous => PatternCategory::Japgyeok,
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regular(g) => write!(f, "{}격", g.hangul()),
            Self::DirectOffice => f.write_str("건록격"),
            Self::MonthRival => f.write_str("월비격"),
            Self::Blade => f.write_str("양인격"),
            Self::MonthRob => f.write_str("월겁격"),
            Self::Following(family) => f.write_str(match family {
                TenGodFamily::Companion => "종왕격",
                TenGodFamily::Output => "종아격",
                TenGodFamily::Wealth => "종재격",
                TenGodFamily::Officer => "종살격",
                TenGodFamily::Resource => "종강격",
            }),
            Self::Transformed(e) => write!(f, "화{}격", e.hangul()),
            Self::Miscellaneous => f.write_str("잡격"),
        }
    }
}

/// Which rule of the pipeline fired.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternRule {
    /// Step 1.
    ExtremeStrength,
    /// Step 2.
    TransformationBond,
    /// Step 3, direct office.
    DirectOfficeBranch,
    /// Step 3, blade.
    BladeBranch,
    /// Step 4.
    MonthRivalMainQi,
    /// Step 5, with the role of the transparent entry.
    Transparency {
        /// Role of the highest-priority transparent entry.
        role: HiddenRole,
    },
    /// Step 6.
    MainQiFallback,
    /// Step 7: no earlier step produced a pattern.
    InvariantGap,
}

impl PatternRule {
    /// Pipeline step number (1..=7).
    #[must_use]
    pub const fn step(self) -> u8 {
        match self {
            Self::ExtremeStrength => 1,
            Self::TransformationBond => 2,
            Self::DirectOfficeBranch | Self::BladeBranch => 3,
            Self::MonthRivalMainQi => 4,
            Self::Transparency { .. } => 5,
            Self::MainQiFallback => 6,
            Self::InvariantGap => 7,
        }
    }
}

/// A classified structural pattern.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    /// Pattern family.
    pub category: PatternCategory,
    /// Specific pattern.
    pub kind: PatternKind,
    /// The rule that fired.
    pub rule: PatternRule,
    /// Human-readable account of why the rule fired.
    pub basis: String,
    /// Elements that support the pattern.
    pub supporting: ElementSet,
    /// Elements that break the pattern.
    pub opposing: ElementSet,
}

impl Pattern {
    /// Build a pattern, deriving category and element sets from `kind`.
    #[must_use]
    pub fn new(
        kind: PatternKind,
        rule: PatternRule,
        basis: impl Into<String>,
        day_master: Stem,
    ) -> Self {
        Self {
            category: kind.category(),
            kind,
            rule,
            basis: basis.into(),
            supporting: supporting_elements(kind, day_master),
            opposing: opposing_elements(kind, day_master),
        }
    }

    /// True for the step-7 outcome.
    #[inline]
    #[must_use]
    pub fn is_invariant_gap(&self) -> bool {
        self.rule == PatternRule::InvariantGap
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.kind, self.category.hangul(), self.basis)
    }
}
