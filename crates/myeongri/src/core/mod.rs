//! Core data types and constants.
//!
//! The cycle base every other module builds on:
//!
//! - [`stem::Stem`]: Heavenly stems (0-9)
//! - [`branch::Branch`]: Earthly branches (0-11)
//! - [`pillar::Pillar`]: Stem–branch pairs and the sexagenary cycle
//! - [`element::Element`], [`element::ElementSet`]: Five-element cycle
//! - [`polarity::Polarity`]: Yin-Yang
//! - [`constants`]: Cycle sizes and derived values
//! - [`cycle`]: Normalizing offset helpers

pub mod branch;
pub mod constants;
pub mod cycle;
pub mod element;
pub mod pillar;
pub mod polarity;
pub mod stem;
