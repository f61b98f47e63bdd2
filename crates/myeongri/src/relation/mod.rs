//! Stem-to-stem and branch-to-branch relations.
//!
//! - [`ten_god`]: the ten-god classifier, the one relation every stage of
//!   the engine shares
//! - [`harmony`]: stem combinations, six clashes and six combinations

pub mod harmony;
pub mod ten_god;

pub use harmony::{
    branches_clash, branches_combine, clash_partner, combination_partner, stem_combination,
    stems_combine,
};
pub use ten_god::{ten_god, TenGod, TenGodFamily};
