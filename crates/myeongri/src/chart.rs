//! Four-pillar charts and the analysis facade.
//!
//! [`Chart::analyze`] runs every stage of the engine over one chart and
//! bundles the results:
//!
//! ```text
//! pillars ──► ten-god table, month authority, census ──► pattern
//!    │
//!    ├──► direction ──► start age ──► sowun, daewun
//!    └──► taewon, taesik, myeonggung (+ flags)
//! ```
//!
//! Year and month luck are independent of the chart and are queried with
//! [`sewun_range`](crate::luck::sewun_range) and
//! [`wolwun_year`](crate::luck::wolwun_year).
//!
//! # Example
//!
//! ```
//! use myeongri::chart::{BirthContext, Chart};
//! use myeongri::config::AnalysisConfig;
//! use myeongri::direction::{Direction, Sex};
//!
//! let chart: Chart = "甲子 丙寅 甲午 丁卯".parse().unwrap();
//! let birth = BirthContext::new(Sex::Male, 12, 1);
//! let analysis = chart.analyze(&birth, &AnalysisConfig::default()).unwrap();
//!
//! assert_eq!(analysis.direction, Direction::Forward);
//! assert_eq!(analysis.start_age, 4);
//! assert_eq!(analysis.daewun.len(), 8);
//! assert_eq!(analysis.sowun.len(), 3);
//! assert_eq!(analysis.pattern.kind.to_string(), "건록격");
//! ```

use crate::auxiliary::AuxiliaryPillars;
use crate::config::{AnalysisConfig, AuthorityBasis};
use crate::core::branch::Branch;
use crate::core::pillar::Pillar;
use crate::core::stem::Stem;
use crate::direction::{direction_with, Direction, DirectionBasis, Sex};
use crate::error::{ConfigError, ParseError};
use crate::hidden::{main_qi, main_qi_ten_god, MonthAuthority};
use crate::luck::{sowun, start_age, start_age_detailed, DaewunCycle, Sowun, StartAge};
use crate::pattern::{classify, Pattern, PatternContext, StrengthProfile};
use crate::relation::ten_god::{ten_god, TenGod};
use core::fmt;
use core::str::FromStr;
use tracing::debug;

/// Position of a pillar in the chart.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PillarPosition {
    /// 年柱.
    Year,
    /// 月柱.
    Month,
    /// 日柱.
    Day,
    /// 時柱.
    Hour,
}

impl PillarPosition {
    /// All positions in chart order.
    pub const ALL: [Self; 4] = [Self::Year, Self::Month, Self::Day, Self::Hour];

    /// Hangul name.
    #[must_use]
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Year => "연주",
            Self::Month => "월주",
            Self::Day => "일주",
            Self::Hour => "시주",
        }
    }
}

/// Four resolved pillars.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    /// Year pillar.
    pub year: Pillar,
    /// Month pillar.
    pub month: Pillar,
    /// Day pillar; its stem is the day master.
    pub day: Pillar,
    /// Hour pillar.
    pub hour: Pillar,
}

impl Chart {
    /// Chart from four pillars.
    #[inline]
    #[must_use]
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Chart from eight integers (stem, branch per pillar, year first), each
    /// normalized to its cycle.
    #[must_use]
    pub const fn from_indices(indices: [i64; 8]) -> Self {
        Self::new(
            Pillar::from_indices(indices[0], indices[1]),
            Pillar::from_indices(indices[2], indices[3]),
            Pillar::from_indices(indices[4], indices[5]),
            Pillar::from_indices(indices[6], indices[7]),
        )
    }

    /// The day stem.
    #[inline]
    #[must_use]
    pub const fn day_master(&self) -> Stem {
        self.day.stem()
    }

    /// Pillar at `position`.
    #[inline]
    #[must_use]
    pub const fn pillar(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// Pillars in year, month, day, hour order.
    #[inline]
    #[must_use]
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Year, month and hour stems.
    #[inline]
    #[must_use]
    pub const fn visible_stems(&self) -> [Stem; 3] {
        [self.year.stem(), self.month.stem(), self.hour.stem()]
    }

    /// Branches in year, month, day, hour order.
    #[inline]
    #[must_use]
    pub const fn branches(&self) -> [Branch; 4] {
        [
            self.year.branch(),
            self.month.branch(),
            self.day.branch(),
            self.hour.branch(),
        ]
    }

    /// Ten gods of every position relative to the day master.
    #[must_use]
    pub fn ten_gods(&self) -> TenGodTable {
        let dm = self.day_master();
        TenGodTable {
            positions: PillarPosition::ALL.map(|position| {
                let pillar = self.pillar(position);
                PositionTenGods {
                    position,
                    pillar,
                    stem: (position != PillarPosition::Day).then(|| ten_god(dm, pillar.stem())),
                    branch: main_qi_ten_god(dm, pillar.branch()),
                }
            }),
        }
    }

    /// Family census for the Following check.
    #[must_use]
    pub fn strength(&self) -> StrengthProfile {
        StrengthProfile::from_chart(self.day_master(), self.visible_stems(), self.branches())
    }

    /// Month authority for the birth day, when elapsed days are known.
    #[must_use]
    pub fn authority(&self, elapsed_days: Option<u32>) -> MonthAuthority {
        MonthAuthority::resolve(self.day_master(), self.month.branch(), elapsed_days)
    }

    /// Pipeline input for this chart.
    #[must_use]
    pub fn pattern_context(
        &self,
        config: &AnalysisConfig,
        elapsed_days: Option<u32>,
    ) -> PatternContext {
        let authority = match config.authority_basis {
            AuthorityBasis::MainQi => main_qi(self.month.branch()),
            AuthorityBasis::Governing => self.authority(elapsed_days).entry,
        };
        PatternContext::new(self.day_master(), self.month.branch(), self.visible_stems())
            .with_authority(authority)
            .with_strength(self.strength())
            .with_following_threshold(config.following_threshold)
    }

    /// Structural pattern of this chart.
    #[must_use]
    pub fn classify(&self, config: &AnalysisConfig, elapsed_days: Option<u32>) -> Pattern {
        classify(&self.pattern_context(config, elapsed_days))
    }

    /// Luck direction.
    #[must_use]
    pub const fn direction(&self, sex: Sex, basis: DirectionBasis) -> Direction {
        direction_with(basis, self.year.stem(), self.day.stem(), sex)
    }

    /// Decade pillars stepped from the month pillar.
    #[must_use]
    pub fn daewun(&self, direction: Direction, start_age: u32, count: usize) -> DaewunCycle {
        DaewunCycle::generate(self.month, direction, start_age, count)
    }

    /// Early-childhood pillars stepped from the month pillar, like the
    /// decade pillars.
    #[must_use]
    pub fn sowun(&self, direction: Direction, start_age: u32) -> Vec<Sowun> {
        sowun(self.month, direction, start_age)
    }

    /// Auxiliary pillars.
    #[must_use]
    pub fn auxiliary(&self, birth_month: u8) -> AuxiliaryPillars {
        AuxiliaryPillars::compute(self.year, self.month, self.day, self.hour, birth_month)
    }

    /// Run every stage.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn analyze(
        &self,
        birth: &BirthContext,
        config: &AnalysisConfig,
    ) -> Result<ChartAnalysis, ConfigError> {
        config.validate()?;

        let pattern = self.classify(config, birth.elapsed_days);
        let direction = self.direction(birth.sex, config.direction_basis);
        let age = start_age(birth.solar_term_days);
        debug!(
            chart = %self,
            pattern = %pattern.kind,
            ?direction,
            start_age = age,
            "chart analyzed"
        );

        Ok(ChartAnalysis {
            chart: *self,
            day_master: self.day_master(),
            pattern,
            ten_gods: self.ten_gods(),
            authority: self.authority(birth.elapsed_days),
            strength: self.strength(),
            direction,
            start_age: age,
            start_age_detail: start_age_detailed(birth.solar_term_days),
            sowun: self.sowun(direction, age),
            daewun: self.daewun(direction, age, config.decade_count),
            auxiliary: self.auxiliary(birth.birth_month),
        })
    }
}

impl FromStr for Chart {
    type Err = ParseError;

    /// Four pillars separated by whitespace, year first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [year, month, day, hour] = parts.as_slice() else {
            return Err(ParseError::MalformedChart(s.to_string()));
        };
        Ok(Self::new(
            year.parse()?,
            month.parse()?,
            day.parse()?,
            hour.parse()?,
        ))
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Ten gods of one pillar position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionTenGods {
    /// Which pillar.
    pub position: PillarPosition,
    /// The pillar.
    pub pillar: Pillar,
    /// Stem ten god; `None` for the day stem, which is the day master.
    pub stem: Option<TenGod>,
    /// Ten god of the branch main qi.
    pub branch: TenGod,
}

/// Ten gods of all four positions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TenGodTable {
    /// Year, month, day, hour.
    pub positions: [PositionTenGods; 4],
}

impl TenGodTable {
    /// Entry for `position`.
    #[inline]
    #[must_use]
    pub const fn get(&self, position: PillarPosition) -> &PositionTenGods {
        &self.positions[position as usize]
    }
}

/// Birth data that is not part of the four pillars.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BirthContext {
    /// Declared sex.
    pub sex: Sex,
    /// Days to the adjacent solar term in the luck direction.
    pub solar_term_days: u32,
    /// Solar-term month number of the birth (1 = 寅).
    pub birth_month: u8,
    /// Days since the month's opening solar term, if known.
    pub elapsed_days: Option<u32>,
}

impl BirthContext {
    /// Birth context without elapsed days.
    #[must_use]
    pub const fn new(sex: Sex, solar_term_days: u32, birth_month: u8) -> Self {
        Self {
            sex,
            solar_term_days,
            birth_month,
            elapsed_days: None,
        }
    }

    /// Set the days elapsed since the month's solar term.
    #[must_use]
    pub const fn with_elapsed_days(mut self, days: u32) -> Self {
        self.elapsed_days = Some(days);
        self
    }
}

/// Everything [`Chart::analyze`] derives from one chart.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartAnalysis {
    /// The input chart.
    pub chart: Chart,
    /// Day stem.
    pub day_master: Stem,
    /// Structural pattern.
    pub pattern: Pattern,
    /// Ten gods per position.
    pub ten_gods: TenGodTable,
    /// Governing entry of the month branch.
    pub authority: MonthAuthority,
    /// Family census.
    pub strength: StrengthProfile,
    /// Luck direction.
    pub direction: Direction,
    /// Start age in whole years.
    pub start_age: u32,
    /// Start age as years and months.
    pub start_age_detail: StartAge,
    /// Early-childhood pillars before the first decade.
    pub sowun: Vec<Sowun>,
    /// Decade pillars.
    pub daewun: DaewunCycle,
    /// Taewon, taesik and myeonggung.
    pub auxiliary: AuxiliaryPillars,
}
