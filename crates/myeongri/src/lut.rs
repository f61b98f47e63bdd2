//! Compile-time lookup tables.
//!
//! Every table the engine consults lives here, once, as a dense constant
//! array indexed by the closed stem/branch domains. Nothing is built at
//! runtime and nothing is mutable.
//!
//! # Tables Provided
//!
//! - **Names**: Hanja, Hangul and romanized readings of stems and branches
//! - **Branch elements**: element of each branch
//! - **Hidden stems (地藏干)**: per-branch `(stem, role, days)` entries
//! - **Direct office (建祿)**: the branch where each stem holds office
//! - **Blade (羊刃)**: the blade branch of each Yang stem
//! - **Stem combinations (天干合)**: the five combining pairs
//! - **Six combinations (六合)**: the six combining branch pairs
//! - **Ten gods (十神)**: the full 10×10 relation table
//!
//! # Example
//!
//! ```
//! use myeongri::lut::{blade_branch, direct_office_branch, ten_god_lut};
//! use myeongri::{Branch, Stem, TenGod};
//!
//! assert_eq!(direct_office_branch(Stem::GAP), Branch::IN);
//! assert_eq!(blade_branch(Stem::GAP), Some(Branch::MYO));
//! assert_eq!(blade_branch(Stem::EUL), None);
//! assert_eq!(ten_god_lut(Stem::GAP, Stem::SIN), TenGod::DirectOfficer);
//! ```

use crate::core::branch::Branch;
use crate::core::constants::{BRANCH_COUNT, STEM_COUNT};
use crate::core::element::Element;
use crate::core::stem::Stem;
use crate::hidden::{HiddenRole, HiddenStem};
use crate::relation::ten_god::TenGod;

// ============================================================================
// Names
// ============================================================================

/// Hanja of each stem.
pub const STEM_HANJA: [char; STEM_COUNT] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

/// Hangul reading of each stem.
pub const STEM_HANGUL: [char; STEM_COUNT] = ['갑', '을', '병', '정', '무', '기', '경', '신', '임', '계'];

/// Romanized reading of each stem.
pub const STEM_ROMANIZED: [&str; STEM_COUNT] = [
    "gap", "eul", "byeong", "jeong", "mu", "gi", "gyeong", "sin", "im", "gye",
];

/// Hanja of each branch.
pub const BRANCH_HANJA: [char; BRANCH_COUNT] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

/// Hangul reading of each branch.
pub const BRANCH_HANGUL: [char; BRANCH_COUNT] = [
    '자', '축', '인', '묘', '진', '사', '오', '미', '신', '유', '술', '해',
];

/// Romanized reading of each branch.
pub const BRANCH_ROMANIZED: [&str; BRANCH_COUNT] = [
    "ja", "chuk", "in", "myo", "jin", "sa", "o", "mi", "sin", "yu", "sul", "hae",
];

// ============================================================================
// Branch attributes
// ============================================================================

/// Element of each branch.
pub const BRANCH_ELEMENTS: [Element; BRANCH_COUNT] = [
    Element::Water, // 子
    Element::Earth, // 丑
    Element::Wood,  // 寅
    Element::Wood,  // 卯
    Element::Earth, // 辰
    Element::Fire,  // 巳
    Element::Fire,  // 午
    Element::Earth, // 未
    Element::Metal, // 申
    Element::Metal, // 酉
    Element::Earth, // 戌
    Element::Water, // 亥
];

const fn residual(stem: Stem, days: u32) -> HiddenStem {
    HiddenStem::new(stem, HiddenRole::Residual, days)
}

const fn middle(stem: Stem, days: u32) -> HiddenStem {
    HiddenStem::new(stem, HiddenRole::Middle, days)
}

const fn main_qi(stem: Stem, days: u32) -> HiddenStem {
    HiddenStem::new(stem, HiddenRole::Main, days)
}

/// Hidden stems of each branch, Residual → Middle → Main.
///
/// Day counts follow the month-division (月律分野) convention; every row
/// sums to 30.
///
/// | Branch | Residual | Middle | Main |
/// |--------|----------|--------|------|
/// | 子 | 壬 10 | - | 癸 20 |
/// | 丑 | 癸 9 | 辛 3 | 己 18 |
/// | 寅 | 戊 7 | 丙 7 | 甲 16 |
/// | 卯 | 甲 10 | - | 乙 20 |
/// | 辰 | 乙 9 | 癸 3 | 戊 18 |
/// | 巳 | 戊 7 | 庚 7 | 丙 16 |
/// | 午 | 丙 10 | 己 9 | 丁 11 |
/// | 未 | 丁 9 | 乙 3 | 己 18 |
/// | 申 | 戊 7 | 壬 7 | 庚 16 |
/// | 酉 | 庚 10 | - | 辛 20 |
/// | 戌 | 辛 9 | 丁 3 | 戊 18 |
/// | 亥 | 戊 7 | 甲 7 | 壬 16 |
pub const HIDDEN_STEMS: [&[HiddenStem]; BRANCH_COUNT] = [
    &[residual(Stem::IM, 10), main_qi(Stem::GYE, 20)],
    &[residual(Stem::GYE, 9), middle(Stem::SIN, 3), main_qi(Stem::GI, 18)],
    &[residual(Stem::MU, 7), middle(Stem::BYEONG, 7), main_qi(Stem::GAP, 16)],
    &[residual(Stem::GAP, 10), main_qi(Stem::EUL, 20)],
    &[residual(Stem::EUL, 9), middle(Stem::GYE, 3), main_qi(Stem::MU, 18)],
    &[residual(Stem::MU, 7), middle(Stem::GYEONG, 7), main_qi(Stem::BYEONG, 16)],
    &[residual(Stem::BYEONG, 10), middle(Stem::GI, 9), main_qi(Stem::JEONG, 11)],
    &[residual(Stem::JEONG, 9), middle(Stem::EUL, 3), main_qi(Stem::GI, 18)],
    &[residual(Stem::MU, 7), middle(Stem::IM, 7), main_qi(Stem::GYEONG, 16)],
    &[residual(Stem::GYEONG, 10), main_qi(Stem::SIN, 20)],
    &[residual(Stem::SIN, 9), middle(Stem::JEONG, 3), main_qi(Stem::MU, 18)],
    &[residual(Stem::MU, 7), middle(Stem::GAP, 7), main_qi(Stem::IM, 16)],
];

// ============================================================================
// Stem-keyed month-branch tables
// ============================================================================

/// Direct-office (建祿) branch of each stem.
pub const DIRECT_OFFICE: [Branch; STEM_COUNT] = [
    Branch::IN,   // 甲
    Branch::MYO,  // 乙
    Branch::SA,   // 丙
    Branch::O,    // 丁
    Branch::SA,   // 戊
    Branch::O,    // 己
    Branch::SIN,  // 庚
    Branch::YU,   // 辛
    Branch::HAE,  // 壬
    Branch::JA,   // 癸
];

/// Blade (羊刃) branch of each stem; `None` marks the Yin stems, for which
/// the blade is not applicable.
pub const BLADE: [Option<Branch>; STEM_COUNT] = [
    Some(Branch::MYO), // 甲
    None,              // 乙
    Some(Branch::O),   // 丙
    None,              // 丁
    Some(Branch::O),   // 戊
    None,              // 己
    Some(Branch::YU),  // 庚
    None,              // 辛
    Some(Branch::JA),  // 壬
    None,              // 癸
];

// ============================================================================
// Combination tables
// ============================================================================

/// The five stem combinations and the element each transforms into.
pub const STEM_COMBINATIONS: [(Stem, Stem, Element); 5] = [
    (Stem::GAP, Stem::GI, Element::Earth),
    (Stem::EUL, Stem::GYEONG, Element::Metal),
    (Stem::BYEONG, Stem::SIN, Element::Water),
    (Stem::JEONG, Stem::IM, Element::Wood),
    (Stem::MU, Stem::GYE, Element::Fire),
];

/// The six branch combinations (六合).
pub const SIX_COMBINATIONS: [(Branch, Branch); 6] = [
    (Branch::JA, Branch::CHUK),
    (Branch::IN, Branch::HAE),
    (Branch::MYO, Branch::SUL),
    (Branch::JIN, Branch::YU),
    (Branch::SA, Branch::SIN),
    (Branch::O, Branch::MI),
];

// ============================================================================
// Ten-god table
// ============================================================================

/// `TEN_GODS[reference][target]`, built at compile time from
/// [`TenGod::derive`].
pub const TEN_GODS: [[TenGod; STEM_COUNT]; STEM_COUNT] = {
    let mut table = [[TenGod::Rival; STEM_COUNT]; STEM_COUNT];
    let mut r = 0;
    while r < STEM_COUNT {
        let mut t = 0;
        while t < STEM_COUNT {
            table[r][t] = TenGod::derive(Stem::new(r as u8), Stem::new(t as u8));
            t += 1;
        }
        r += 1;
    }
    table
};

// ============================================================================
// Lookup functions
// ============================================================================

/// O(1) direct-office branch lookup.
#[inline]
#[must_use]
pub const fn direct_office_branch(stem: Stem) -> Branch {
    DIRECT_OFFICE[stem.index() as usize]
}

/// O(1) blade branch lookup; `None` for Yin stems.
#[inline]
#[must_use]
pub const fn blade_branch(stem: Stem) -> Option<Branch> {
    BLADE[stem.index() as usize]
}

/// True if `branch` is the direct office (建祿) of `stem`.
#[inline]
#[must_use]
pub const fn is_direct_office(stem: Stem, branch: Branch) -> bool {
    direct_office_branch(stem).index() == branch.index()
}

/// True if `branch` is the blade (羊刃) of `stem`; always false for Yin stems.
#[inline]
#[must_use]
pub const fn is_blade(stem: Stem, branch: Branch) -> bool {
    match blade_branch(stem) {
        Some(blade) => blade.index() == branch.index(),
        None => false,
    }
}

/// O(1) ten-god lookup.
#[inline]
#[must_use]
pub const fn ten_god_lut(reference: Stem, target: Stem) -> TenGod {
    TEN_GODS[reference.index() as usize][target.index() as usize]
}
