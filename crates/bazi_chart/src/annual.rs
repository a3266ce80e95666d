//! Annual pillars (liu nian).
//!
//! The pillar for a Gregorian year is the year pillar of a fixed mid-year
//! reference instant, which always lies after Lichun.

use bazi_cycle::{Pillar, Stem, TenGod, ten_god};

use crate::pillars::solar_year_pillar;

/// Reference month for an annual pillar.
pub const ANNUAL_REFERENCE_MONTH: u32 = 7;
/// Reference day for an annual pillar.
pub const ANNUAL_REFERENCE_DAY: u32 = 1;
/// Reference clock hour for an annual pillar.
pub const ANNUAL_REFERENCE_HOUR: u32 = 12;

/// One year's pillar relative to a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnualPillar {
    pub year: i32,
    pub pillar: Pillar,
    /// Nominal (xu sui) age: 1 in the birth year.
    pub age: i64,
    pub stem_ten_god: TenGod,
    pub branch_ten_god: TenGod,
}

/// Annual pillar for `year`, annotated against the chart's day stem.
pub fn annual_pillar(year: i32, birth_year: i32, day_stem: Stem) -> AnnualPillar {
    let pillar = solar_year_pillar(i64::from(year));
    AnnualPillar {
        year,
        pillar,
        age: i64::from(year) - i64::from(birth_year) + 1,
        stem_ten_god: ten_god(day_stem, pillar.stem),
        branch_ten_god: ten_god(day_stem, pillar.dominant_hidden_stem()),
    }
}

/// Annual pillars for `count` consecutive years from `start_year`,
/// stopping early at `i32::MAX`.
pub fn annual_pillars(
    start_year: i32,
    count: usize,
    birth_year: i32,
    day_stem: Stem,
) -> Vec<AnnualPillar> {
    (start_year..=i32::MAX)
        .take(count)
        .map(|year| annual_pillar(year, birth_year, day_stem))
        .collect()
}
