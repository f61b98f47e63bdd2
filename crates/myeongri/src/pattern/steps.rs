//! The classification pipeline.
//!
//! Each step is a pure function from the chart context to an optional
//! pattern. [`PIPELINE`] lists them in priority order and [`classify`] runs
//! them until one answers, so every step can also be tested on its own.

use super::strength::StrengthProfile;
use super::{Pattern, PatternKind, PatternRule};
use crate::config::DEFAULT_FOLLOWING_THRESHOLD;
use crate::core::branch::Branch;
use crate::core::stem::Stem;
use crate::hidden::{main_qi, transparent_stems, HiddenStem};
use crate::lut::{is_blade, is_direct_office};
use crate::relation::harmony::stem_combination;
use crate::relation::ten_god::{ten_god, TenGod};
use tracing::{debug, error, trace};

/// Everything the pipeline reads from a chart.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PatternContext {
    /// Day stem.
    pub day_master: Stem,
    /// Month branch.
    pub month_branch: Branch,
    /// Year, month and hour stems.
    pub visible: [Stem; 3],
    /// Month entry read by steps 4 and 6 (the Main entry by default).
    pub authority: HiddenStem,
    /// Family census; step 1 is skipped without it.
    pub strength: Option<StrengthProfile>,
    /// Positions one family needs for a Following pattern.
    pub following_threshold: u8,
}

impl PatternContext {
    /// Context with the Main entry as authority and no census.
    #[must_use]
    pub const fn new(day_master: Stem, month_branch: Branch, visible: [Stem; 3]) -> Self {
        Self {
            day_master,
            month_branch,
            visible,
            authority: main_qi(month_branch),
            strength: None,
            following_threshold: DEFAULT_FOLLOWING_THRESHOLD,
        }
    }

    /// Replace the month authority entry.
    #[must_use]
    pub const fn with_authority(mut self, authority: HiddenStem) -> Self {
        self.authority = authority;
        self
    }

    /// Attach a family census, enabling step 1.
    #[must_use]
    pub const fn with_strength(mut self, strength: StrengthProfile) -> Self {
        self.strength = Some(strength);
        self
    }

    /// Set the Following threshold.
    #[must_use]
    pub const fn with_following_threshold(mut self, threshold: u8) -> Self {
        self.following_threshold = threshold;
        self
    }

    fn month_stem(&self) -> Stem {
        self.visible[1]
    }

    fn hour_stem(&self) -> Stem {
        self.visible[2]
    }

    fn authority_ten_god(&self) -> TenGod {
        ten_god(self.day_master, self.authority.stem())
    }

    fn pattern(&self, kind: PatternKind, rule: PatternRule, basis: String) -> Pattern {
        Pattern::new(kind, rule, basis, self.day_master)
    }
}

/// A pipeline step.
pub type Step = fn(&PatternContext) -> Option<Pattern>;

/// Steps 1 through 6 in priority order, with a label for logging.
pub const PIPELINE: [(&str, Step); 6] = [
    ("extreme strength", following),
    ("transformation bond", transformed),
    ("month branch office", blade_or_direct_office),
    ("month rival", month_rival),
    ("transparency", transparency),
    ("main qi fallback", main_qi_fallback),
];

/// Step 1: Following (從格).
///
/// Only an unrooted day master can follow. It then follows one of Output,
/// Wealth or Officer holding at least the threshold when no position
/// supports it, or Companion or Resource holding the threshold when no
/// position opposes it.
pub fn following(ctx: &PatternContext) -> Option<Pattern> {
    let profile = ctx.strength?;
    if profile.is_rooted() {
        return None;
    }
    let (family, count) = profile.dominant();
    if count < ctx.following_threshold {
        return None;
    }
    let basis = if family.supports_reference() {
        if profile.opposing() != 0 {
            return None;
        }
        format!(
            "day master {} is unrooted and unopposed; {} holds {count} of 7",
            ctx.day_master,
            family.hangul()
        )
    } else {
        if profile.supporting() != 0 {
            return None;
        }
        format!(
            "day master {} is unrooted and unsupported; {} holds {count} of 7",
            ctx.day_master,
            family.hangul()
        )
    };
    Some(ctx.pattern(PatternKind::Following(family), PatternRule::ExtremeStrength, basis))
}

/// Step 2: Transformed-Qi (化氣格).
///
/// The day master combines with the month stem, or failing that the hour
/// stem, and the month branch has the transformed element.
pub fn transformed(ctx: &PatternContext) -> Option<Pattern> {
    [("month", ctx.month_stem()), ("hour", ctx.hour_stem())]
        .into_iter()
        .find_map(|(position, partner)| {
            let element = stem_combination(ctx.day_master, partner)?;
            if ctx.month_branch.element() != element {
                return None;
            }
            let basis = format!(
                "{} combines with {position} stem {partner} into {}; month branch {} is {}",
                ctx.day_master,
                element.name(),
                ctx.month_branch,
                element.name()
            );
            Some(ctx.pattern(
                PatternKind::Transformed(element),
                PatternRule::TransformationBond,
                basis,
            ))
        })
}

/// Step 3: Direct-Office (建祿格), else Blade (羊刃格).
pub fn blade_or_direct_office(ctx: &PatternContext) -> Option<Pattern> {
    let (dm, month) = (ctx.day_master, ctx.month_branch);
    if is_direct_office(dm, month) {
        let basis = format!("month branch {month} is the direct office of {dm}");
        return Some(ctx.pattern(PatternKind::DirectOffice, PatternRule::DirectOfficeBranch, basis));
    }
    if is_blade(dm, month) {
        let basis = format!("month branch {month} is the blade of {dm}");
        return Some(ctx.pattern(PatternKind::Blade, PatternRule::BladeBranch, basis));
    }
    None
}

/// Step 4: Rival-Office (月比格) when the month entry is Rival.
pub fn month_rival(ctx: &PatternContext) -> Option<Pattern> {
    if ctx.authority_ten_god() != TenGod::Rival {
        return None;
    }
    let basis = format!(
        "month entry {} of {} is Rival to {}",
        ctx.authority.stem(),
        ctx.month_branch,
        ctx.day_master
    );
    Some(ctx.pattern(PatternKind::MonthRival, PatternRule::MonthRivalMainQi, basis))
}

/// Step 5: transparency (透出).
///
/// Only the highest-priority transparent entry is considered; if its ten
/// god is Rival or Rob Wealth the step yields nothing.
pub fn transparency(ctx: &PatternContext) -> Option<Pattern> {
    let top = transparent_stems(ctx.month_branch, &ctx.visible)
        .into_iter()
        .next()?;
    let god = ten_god(ctx.day_master, top.stem());
    if !god.is_regular() {
        trace!(entry = ?top, ?god, "top transparent entry is not a regular kind");
        return None;
    }
    let basis = format!(
        "{} stem {} of {} is transparent as {}",
        top.role().hangul(),
        top.stem(),
        ctx.month_branch,
        god.name()
    );
    Some(ctx.pattern(
        PatternKind::Regular(god),
        PatternRule::Transparency { role: top.role() },
        basis,
    ))
}

/// Step 6: the month entry's ten god names the pattern.
///
/// Rob Wealth routes to Month-Rob (月劫格). Rival is left unanswered, since
/// step 4 owns it.
pub fn main_qi_fallback(ctx: &PatternContext) -> Option<Pattern> {
    let god = ctx.authority_ten_god();
    let kind = match god {
        TenGod::Rival => return None,
        TenGod::RobWealth => PatternKind::MonthRob,
        regular => PatternKind::Regular(regular),
    };
    let basis = format!(
        "no transparency; month entry {} of {} is {}",
        ctx.authority.stem(),
        ctx.month_branch,
        god.name()
    );
    Some(ctx.pattern(kind, PatternRule::MainQiFallback, basis))
}

/// Run `steps` in order and return the first pattern produced.
///
/// If none answers, the pipeline has a logic gap: the gap is logged at
/// error level and a Miscellaneous pattern with
/// [`PatternRule::InvariantGap`] is returned so the caller can tell it
/// apart from a deliberate classification.
pub fn classify_with(ctx: &PatternContext, steps: &[(&str, Step)]) -> Pattern {
    for (name, step) in steps {
        match step(ctx) {
            Some(pattern) => {
                debug!(
                    step = *name,
                    pattern = %pattern.kind,
                    basis = %pattern.basis,
                    "pattern assigned"
                );
                return pattern;
            }
            None => trace!(step = *name, "step did not fire"),
        }
    }
    error!(
        day_master = %ctx.day_master,
        month_branch = %ctx.month_branch,
        authority = ?ctx.authority,
        "no pattern step fired; classification pipeline has a gap"
    );
    let basis = format!(
        "no step fired for day master {} in month {}",
        ctx.day_master, ctx.month_branch
    );
    ctx.pattern(PatternKind::Miscellaneous, PatternRule::InvariantGap, basis)
}

/// Run the full pipeline.
#[must_use]
pub fn classify(ctx: &PatternContext) -> Pattern {
    classify_with(ctx, &PIPELINE)
}

/// Steps 3 through 7 for a day master, month branch and the three other
/// visible stems, with the Main entry as authority.
#[must_use]
pub fn classify_regular(day_master: Stem, month_branch: Branch, other_stems: [Stem; 3]) -> Pattern {
    let ctx = PatternContext::new(day_master, month_branch, other_stems);
    classify_with(&ctx, &PIPELINE[2..])
}
