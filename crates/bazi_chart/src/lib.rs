//! Four Pillars chart assembly and its time projections.
//!
//! This crate provides:
//! - The simplified solar-term month boundaries
//! - Year, month, day and hour pillar rules
//! - `BaZiChart` with void branches and Ten-God annotations
//! - Decade luck pillars (`LuckPillarSequence`)
//! - Annual pillars
//!
//! Inputs are proleptic Gregorian dates and local clock hours. Solar-term
//! boundaries are fixed calendar days, not solar longitudes.

pub mod annual;
pub mod chart;
pub mod error;
pub mod luck;
pub mod pillars;
pub mod solar_term;

pub use annual::{
    ANNUAL_REFERENCE_DAY, ANNUAL_REFERENCE_HOUR, ANNUAL_REFERENCE_MONTH, AnnualPillar,
    annual_pillar, annual_pillars,
};
pub use chart::{ALL_PILLAR_POSITIONS, BaZiChart, PillarPosition};
pub use error::ChartError;
pub use luck::{
    DEFAULT_LUCK_PILLAR_COUNT, DEFAULT_ONSET_AGE, Direction, LuckPillar, LuckPillarConfig,
    LuckPillarSequence, Sex, YEARS_PER_LUCK_PILLAR,
};
pub use pillars::{
    DAY_EPOCH_INDEX, DAY_EPOCH_JDN, YEAR_EPOCH, day_index, day_pillar, five_rat_start,
    five_tiger_start, hour_branch, hour_pillar, month_pillar, solar_year, solar_year_pillar,
    year_pillar,
};
pub use solar_term::{
    MONTH_CUTOVERS, MonthCutover, SPRING_CUTOVER_DAY, SPRING_CUTOVER_MONTH, is_before_spring,
    month_branch, month_cutover,
};
