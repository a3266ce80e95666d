//! Year, month, day and hour pillar rules.
//!
//! - Year: solar year opens at Lichun (Feb 4); index `(year - 1984) mod 60`.
//! - Month: branch from the cutover table, stem by the Five-Tiger rule.
//! - Day: continuous 60-day count anchored at 2000-01-01 = Jia-Chen.
//! - Hour: two-hour slots with 23:00 in Zi, stem by the Five-Rat rule.

use bazi_cycle::{Branch, Pillar, Sexagenary, Stem, decode};
use bazi_time::{CivilDate, J2000_JDN, TimeError};

use crate::error::ChartError;
use crate::solar_term::{is_before_spring, month_branch};

/// Gregorian year whose solar year is Jia-Zi (index 0).
pub const YEAR_EPOCH: i32 = 1984;

/// Julian Day Number of the day-count anchor, 2000-01-01.
pub const DAY_EPOCH_JDN: i64 = J2000_JDN;

/// Cycle index of the anchor day (Jia-Chen).
pub const DAY_EPOCH_INDEX: u8 = 40;

/// Tiger-month (Yin) stem by year stem index mod 5.
const FIVE_TIGER_START: [Stem; 5] = [Stem::Bing, Stem::Wu, Stem::Geng, Stem::Ren, Stem::Jia];

/// Rat-hour (Zi) stem by day stem index mod 5.
const FIVE_RAT_START: [Stem; 5] = [Stem::Jia, Stem::Bing, Stem::Wu, Stem::Geng, Stem::Ren];

/// Stem of the Yin month in a year with the given stem.
pub const fn five_tiger_start(year_stem: Stem) -> Stem {
    FIVE_TIGER_START[(year_stem.index() % 5) as usize]
}

/// Stem of the Zi hour on a day with the given stem.
pub const fn five_rat_start(day_stem: Stem) -> Stem {
    FIVE_RAT_START[(day_stem.index() % 5) as usize]
}

/// Gregorian year in which the date's solar year began. Widened to `i64`
/// so January of `i32::MIN` still has a previous year.
pub const fn solar_year(date: &CivilDate) -> i64 {
    let year = date.year() as i64;
    if is_before_spring(date.month(), date.day()) {
        year - 1
    } else {
        year
    }
}

/// Pillar of a solar year (no spring adjustment).
pub const fn solar_year_pillar(solar_year: i64) -> Pillar {
    decode(solar_year - YEAR_EPOCH as i64)
}

/// Year pillar of a date.
pub const fn year_pillar(date: &CivilDate) -> Pillar {
    solar_year_pillar(solar_year(date))
}

/// Month pillar of a date.
pub const fn month_pillar(date: &CivilDate) -> Pillar {
    let year_stem = year_pillar(date).stem;
    let branch = month_branch(date.month(), date.day());
    let stem = five_tiger_start(year_stem).forward(Branch::Yin.distance_to(branch) as i64);
    Pillar::new(stem, branch)
}

/// Cycle position of a date's day pillar.
pub const fn day_index(date: &CivilDate) -> Sexagenary {
    Sexagenary::new(DAY_EPOCH_INDEX as i64 + date.jdn() - DAY_EPOCH_JDN)
}

/// Day pillar of a date.
pub const fn day_pillar(date: &CivilDate) -> Pillar {
    day_index(date).pillar()
}

/// Branch of a clock hour in 0..=23. Hour 23 belongs to Zi.
pub(crate) const fn hour_slot(hour: u32) -> Branch {
    debug_assert!(hour <= 23);
    if hour == 23 {
        Branch::Zi
    } else {
        Branch::from_index(((hour + 1) / 2) as i64)
    }
}

/// Hour branch of a clock hour in 0..=23.
pub fn hour_branch(hour: u32) -> Result<Branch, ChartError> {
    if hour > 23 {
        return Err(TimeError::InvalidHour(hour).into());
    }
    Ok(hour_slot(hour))
}

/// Hour pillar from the day stem and a clock hour in 0..=23.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Result<Pillar, ChartError> {
    Ok(hour_pillar_of_branch(day_stem, hour_branch(hour)?))
}

pub(crate) const fn hour_pillar_of_branch(day_stem: Stem, branch: Branch) -> Pillar {
    let stem = five_rat_start(day_stem).forward(Branch::Zi.distance_to(branch) as i64);
    Pillar::new(stem, branch)
}
