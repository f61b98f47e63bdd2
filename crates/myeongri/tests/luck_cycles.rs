//! Luck-cycle and auxiliary-pillar scenarios through the public API.

use myeongri::auxiliary::{myeonggung, taesik, taewon, AuxiliaryKind, RelationFlags};
use myeongri::chart::{BirthContext, Chart};
use myeongri::config::AnalysisConfig;
use myeongri::cycle::{branch_of, stem_of};
use myeongri::direction::{Direction, DirectionBasis, Sex};
use myeongri::luck::{sewun, sewun_range, wolwun, wolwun_year, DaewunCycle};
use myeongri::{Branch, Pillar, Stem, TenGod};

fn chart() -> Chart {
    "庚午 辛巳 甲子 丙寅".parse().unwrap()
}

// =============================================================================
// Sewun / Wolwun
// =============================================================================

#[test]
fn test_sewun_epoch_anchor() {
    let s = sewun(2024);
    assert_eq!(s.pillar.stem(), stem_of(2020));
    assert_eq!(s.pillar.branch(), branch_of(2020));
    assert_eq!(s.pillar.to_string(), "甲辰");
}

#[test]
fn test_sewun_range_spans_a_cycle() {
    let years = sewun_range(1984, 60);
    assert_eq!(years[0].pillar, Pillar::GAPJA);
    let indices: Vec<u8> = years
        .iter()
        .filter_map(|s| s.pillar.sexagenary_index())
        .collect();
    assert_eq!(indices, (0..60).collect::<Vec<u8>>());
    assert_eq!(sewun(2044).pillar, Pillar::GAPJA);
}

#[test]
fn test_wolwun_follows_year_stem() {
    let months = wolwun_year(2024);
    assert_eq!(months.len(), 12);
    assert_eq!(months[0].month, 1);
    assert_eq!(months[0].pillar.to_string(), "丙寅");
    assert_eq!(months[10].pillar.branch(), Branch::JA);
    // The next year's first month continues the sequence.
    let next = wolwun_year(2025);
    assert_eq!(next[0].pillar, months[11].pillar.offset(1));
    assert_eq!(wolwun(Stem::EUL, 1), next[0]);
}

// =============================================================================
// Daewun / Sowun through the facade
// =============================================================================

#[test]
fn test_forward_male_chart() {
    let birth = BirthContext::new(Sex::Male, 20, 4);
    let a = chart().analyze(&birth, &AnalysisConfig::default()).unwrap();
    assert_eq!(a.direction, Direction::Forward);
    assert_eq!(a.start_age, 7);
    assert_eq!(a.start_age_detail.years, 6);
    assert_eq!(a.start_age_detail.months, 8);

    let names: Vec<String> = a.daewun.iter().map(|d| d.pillar.to_string()).collect();
    assert_eq!(
        names,
        ["壬午", "癸未", "甲申", "乙酉", "丙戌", "丁亥", "戊子", "己丑"]
    );
    assert_eq!(a.daewun.pillars[7].end_age, 7 + 79);
    assert_eq!(a.daewun.at_age(30).map(|d| d.pillar.to_string()), Some("甲申".into()));
    assert_eq!(a.daewun.pillars[0].ten_god(a.day_master), TenGod::IndirectResource);

    let sowun: Vec<u32> = a.sowun.iter().map(|s| s.age).collect();
    assert_eq!(sowun, [1, 2, 3, 4, 5, 6]);
    assert_eq!(a.sowun[0].pillar, chart().month.offset(1));
}

#[test]
fn test_sowun_steps_from_month_pillar() {
    // 辛巳 month; forward from 壬午, not from the 丙寅 hour.
    let birth = BirthContext::new(Sex::Male, 20, 4);
    let a = chart().analyze(&birth, &AnalysisConfig::default()).unwrap();
    let names: Vec<String> = a.sowun.iter().map(|s| s.pillar.to_string()).collect();
    assert_eq!(names, ["壬午", "癸未", "甲申", "乙酉", "丙戌", "丁亥"]);
    for s in &a.sowun {
        assert_eq!(s.pillar, chart().month.offset(i64::from(s.age)));
    }

    let birth = BirthContext::new(Sex::Female, 20, 4);
    let a = chart().analyze(&birth, &AnalysisConfig::default()).unwrap();
    assert_eq!(a.direction, Direction::Backward);
    for s in &a.sowun {
        assert_eq!(s.pillar, chart().month.offset(-i64::from(s.age)));
    }
    assert_eq!(a.sowun[0].pillar, a.daewun.pillars[0].pillar);
}

#[test]
fn test_backward_female_chart() {
    let birth = BirthContext::new(Sex::Female, 1, 4);
    let a = chart().analyze(&birth, &AnalysisConfig::default()).unwrap();
    assert_eq!(a.direction, Direction::Backward);
    assert_eq!(a.start_age, 1);
    assert!(a.sowun.is_empty());
    assert_eq!(a.daewun.pillars[0].pillar.to_string(), "庚辰");
    assert_eq!(a.daewun.pillars[0].start_age, 1);
}

#[test]
fn test_decade_count_and_direction_basis() {
    let config = AnalysisConfig {
        decade_count: 12,
        direction_basis: DirectionBasis::DayStem,
        ..AnalysisConfig::default()
    };
    // Year 庚 and day 甲 are both Yang, so the basis does not flip here.
    let a = chart()
        .analyze(&BirthContext::new(Sex::Male, 9, 4), &config)
        .unwrap();
    assert_eq!(a.daewun.len(), 12);
    assert_eq!(a.direction, Direction::Forward);

    let yin_day: Chart = "庚午 辛巳 乙丑 丙寅".parse().unwrap();
    let a = yin_day
        .analyze(&BirthContext::new(Sex::Male, 9, 4), &config)
        .unwrap();
    assert_eq!(a.direction, Direction::Backward);
}

#[test]
fn test_cycle_round_trip() {
    let month = chart().month;
    let cycle = DaewunCycle::generate(month, Direction::Backward, 5, 8);
    let again = DaewunCycle::generate(month, Direction::Backward, 5, 8);
    assert_eq!(cycle, again);
    assert_eq!(cycle.pillars[0].pillar, month.offset(-1));
}

// =============================================================================
// Auxiliary pillars
// =============================================================================

#[test]
fn test_auxiliary_formulas() {
    let c = chart();
    assert_eq!(taewon(c.month).to_string(), "乙午");
    assert_eq!(taesik(c.day).to_string(), "戊丑");
    // 14 − 4 − 2 = 8 (申), synthetic month 7 in a 庚 year.
    assert_eq!(myeonggung(4, c.hour.branch(), c.year.stem()).to_string(), "甲申");
}

#[test]
fn test_auxiliary_through_facade() {
    let a = chart()
        .analyze(&BirthContext::new(Sex::Male, 9, 4), &AnalysisConfig::default())
        .unwrap();
    let aux = a.auxiliary.as_array();
    assert_eq!(aux.map(|p| p.kind), [
        AuxiliaryKind::Taewon,
        AuxiliaryKind::Taesik,
        AuxiliaryKind::Myeonggung,
    ]);
    // 戊丑 against 甲子: 丑 combines with 子.
    assert_eq!(
        a.auxiliary.taesik.flags,
        RelationFlags {
            stem_combination: false,
            branch_clash: false,
            branch_combination: true,
        }
    );
    // 乙午 against 甲子: 午 clashes with 子.
    assert!(a.auxiliary.taewon.flags.branch_clash);
    assert_eq!(a.auxiliary.taewon.ten_god, TenGod::RobWealth);
}

#[cfg(feature = "serde")]
#[test]
fn test_analysis_serializes() {
    let a = chart()
        .analyze(&BirthContext::new(Sex::Male, 9, 4), &AnalysisConfig::default())
        .unwrap();
    let json = serde_json::to_value(&a).unwrap();
    assert_eq!(json["direction"], "Forward");
    assert_eq!(json["daewun"]["pillars"].as_array().map(Vec::len), Some(8));
    assert_eq!(json["chart"]["day"]["stem"], 0);
}
