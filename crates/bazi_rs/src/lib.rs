//! Convenience wrapper for the Four Pillars chart engine.
//!
//! Bundles the chart, the decade luck pillars and the annual pillars of one
//! subject in a [`Reading`], and adds name parsing for stems, branches and
//! pillars.
//!
//! # Quick start
//!
//! ```rust
//! use bazi_rs::*;
//!
//! let reading = Reading::from_solar(2000, 7, 15, 16, Sex::Male).unwrap();
//! assert_eq!(reading.chart().to_string(), "庚辰 癸未 庚申 甲申");
//! let decade = reading.luck_pillar_at(30).unwrap();
//! println!("{} {}", decade.pillar, decade.stem_ten_god.name());
//! ```

pub mod convenience;
pub mod error;
pub mod reading;

// Primary re-exports: users should only need `use bazi_rs::*`
pub use convenience::{
    chart_for, parse_branch, parse_pillar, parse_sex, parse_stem, ten_god_by_name,
};
pub use error::BaziError;
pub use reading::Reading;

pub use bazi_chart::{
    ALL_PILLAR_POSITIONS, AnnualPillar, BaZiChart, ChartError, DEFAULT_LUCK_PILLAR_COUNT,
    DEFAULT_ONSET_AGE, Direction, LuckPillar, LuckPillarConfig, LuckPillarSequence, MONTH_CUTOVERS,
    MonthCutover, PillarPosition, Sex, annual_pillar, annual_pillars,
};
pub use bazi_cycle::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, ALL_TEN_GODS, Branch, CycleError, Element,
    ElementRelation, Pillar, Polarity, Sexagenary, Stem, TenGod, decode, dominant_hidden_stem,
    hidden_stems, index_of, ten_god, void_branches,
};
pub use bazi_time::{BirthTime, CivilDate, TimeError};
