//! Cyclic symbol tables and sexagenary arithmetic for Four Pillars charts.
//!
//! This crate provides:
//! - The 10 heavenly stems, 12 earthly branches, five elements and polarity
//! - The combined 60-cycle (index ↔ pillar) and void-branch computation
//! - The hidden-stem table for each branch
//! - Ten-God classification between two stems
//!
//! Everything here is a pure function over `Copy` values backed by
//! constant tables.

pub mod branch;
pub mod element;
pub mod error;
pub mod hidden_stems;
pub mod sexagenary;
pub mod stem;
pub mod ten_god;
pub mod util;

pub use branch::{ALL_BRANCHES, BRANCH_COUNT, Branch};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, Polarity};
pub use error::CycleError;
pub use hidden_stems::{dominant_hidden_stem, hidden_stems};
pub use sexagenary::{Pillar, SEXAGENARY_COUNT, Sexagenary, decode, index_of, void_branches};
pub use stem::{ALL_STEMS, STEM_COUNT, Stem};
pub use ten_god::{ALL_TEN_GODS, TenGod, ten_god};
