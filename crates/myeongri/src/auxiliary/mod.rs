//! Auxiliary pillars (胎元, 胎息, 命宮) and their relations to the day pillar.
//!
//! | Pillar | Formula |
//! |--------|---------|
//! | Taewon | month pillar, stem +4, branch +1 |
//! | Taesik | day pillar, stem +4, branch +1 |
//! | Myeonggung | branch `14 − month − hour_branch`; stem by the month-stem rule |
//!
//! Each pillar is reported with its stem ten god relative to the day master
//! and three relation flags against the day pillar.

use crate::core::branch::Branch;
use crate::core::pillar::Pillar;
use crate::core::stem::Stem;
use crate::cycle::{branch_of, stem_of};
use crate::luck::{month_stem, normalize_month};
use crate::relation::harmony::{branches_clash, branches_combine, stems_combine};
use crate::relation::ten_god::{ten_god, TenGod};

/// Taewon (胎元), the conception pillar.
///
/// ```
/// use myeongri::auxiliary::taewon;
///
/// assert_eq!(taewon("丙寅".parse().unwrap()).to_string(), "庚卯");
/// ```
#[inline]
#[must_use]
pub const fn taewon(month: Pillar) -> Pillar {
    shifted(month)
}

/// Taesik (胎息), the same shift applied to the day pillar.
#[inline]
#[must_use]
pub const fn taesik(day: Pillar) -> Pillar {
    shifted(day)
}

const fn shifted(p: Pillar) -> Pillar {
    Pillar::new(
        stem_of(p.stem().index() as i64 + 4),
        branch_of(p.branch().index() as i64 + 1),
    )
}

/// Myeonggung (命宮), the life palace.
///
/// `birth_month` is the solar-term month number (1 = 寅); out-of-range
/// values are folded into `1..=12` first.
///
/// ```
/// use myeongri::auxiliary::myeonggung;
/// use myeongri::{Branch, Stem};
///
/// // 14 − 1 − 2 = 11 (亥); 亥 is month 10 of a 甲 year, 乙亥.
/// assert_eq!(myeonggung(1, Branch::IN, Stem::GAP).to_string(), "乙亥");
/// ```
#[must_use]
pub const fn myeonggung(birth_month: u8, hour_branch: Branch, year_stem: Stem) -> Pillar {
    let month = normalize_month(birth_month as i64) as i64;
    let branch = branch_of(14 - month - hour_branch.index() as i64);
    let synthetic_month = (branch.index() as i64 - 2 + 12) % 12 + 1;
    Pillar::new(month_stem(year_stem, synthetic_month as u8), branch)
}

/// Relations of an auxiliary pillar to the day pillar.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationFlags {
    /// Stem combines with the day stem (天干合).
    pub stem_combination: bool,
    /// Branch clashes with the day branch (六沖).
    pub branch_clash: bool,
    /// Branch forms a six combination with the day branch (六合).
    pub branch_combination: bool,
}

impl RelationFlags {
    /// Flags of `pillar` against `day`.
    #[must_use]
    pub fn against(pillar: Pillar, day: Pillar) -> Self {
        Self {
            stem_combination: stems_combine(pillar.stem(), day.stem()),
            branch_clash: branches_clash(pillar.branch(), day.branch()),
            branch_combination: branches_combine(pillar.branch(), day.branch()),
        }
    }

    /// True if any flag is set.
    #[inline]
    #[must_use]
    pub const fn any(&self) -> bool {
        self.stem_combination || self.branch_clash || self.branch_combination
    }
}

/// Which auxiliary pillar.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AuxiliaryKind {
    /// 胎元.
    Taewon,
    /// 胎息.
    Taesik,
    /// 命宮.
    Myeonggung,
}

impl AuxiliaryKind {
    /// Hangul name.
    #[must_use]
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Taewon => "태원",
            Self::Taesik => "태식",
            Self::Myeonggung => "명궁",
        }
    }
}

/// An auxiliary pillar with its interpretation inputs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuxiliaryPillar {
    /// Which pillar this is.
    pub kind: AuxiliaryKind,
    /// The pillar.
    pub pillar: Pillar,
    /// Stem ten god relative to the day master.
    pub ten_god: TenGod,
    /// Relations to the day pillar.
    pub flags: RelationFlags,
}

impl AuxiliaryPillar {
    /// Annotate `pillar` against the day pillar.
    #[must_use]
    pub fn new(kind: AuxiliaryKind, pillar: Pillar, day: Pillar) -> Self {
        Self {
            kind,
            pillar,
            ten_god: ten_god(day.stem(), pillar.stem()),
            flags: RelationFlags::against(pillar, day),
        }
    }
}

/// The three auxiliary pillars of a chart.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuxiliaryPillars {
    /// 胎元.
    pub taewon: AuxiliaryPillar,
    /// 胎息.
    pub taesik: AuxiliaryPillar,
    /// 命宮.
    pub myeonggung: AuxiliaryPillar,
}

impl AuxiliaryPillars {
    /// Compute all three from the chart pillars and the birth month number.
    #[must_use]
    pub fn compute(year: Pillar, month: Pillar, day: Pillar, hour: Pillar, birth_month: u8) -> Self {
        Self {
            taewon: AuxiliaryPillar::new(AuxiliaryKind::Taewon, taewon(month), day),
            taesik: AuxiliaryPillar::new(AuxiliaryKind::Taesik, taesik(day), day),
            myeonggung: AuxiliaryPillar::new(
                AuxiliaryKind::Myeonggung,
                myeonggung(birth_month, hour.branch(), year.stem()),
                day,
            ),
        }
    }

    /// The pillars in Taewon, Taesik, Myeonggung order.
    #[must_use]
    pub const fn as_array(&self) -> [AuxiliaryPillar; 3] {
        [self.taewon, self.taesik, self.myeonggung]
    }
}
