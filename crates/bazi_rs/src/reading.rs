//! A complete reading: birth data, chart and decade luck pillars.

use bazi_chart::{
    AnnualPillar, BaZiChart, LuckPillar, LuckPillarConfig, LuckPillarSequence, Sex, annual_pillar,
    annual_pillars,
};
use bazi_cycle::TenGod;
use bazi_time::BirthTime;
use tracing::debug;

use crate::error::BaziError;

/// Chart plus the projections that depend on the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    birth: BirthTime,
    sex: Sex,
    chart: BaZiChart,
    luck: LuckPillarSequence,
}

impl Reading {
    /// Reading with the default luck-pillar configuration.
    pub fn new(birth: BirthTime, sex: Sex) -> Self {
        Self::with_config(birth, sex, &LuckPillarConfig::default())
    }

    pub fn with_config(birth: BirthTime, sex: Sex, config: &LuckPillarConfig) -> Self {
        let chart = BaZiChart::from_birth(&birth);
        let luck =
            LuckPillarSequence::generate_with_config(&chart, sex, birth.date().year(), config);
        debug!(%birth, sex = sex.name(), %chart, "reading built");
        Self {
            birth,
            sex,
            chart,
            luck,
        }
    }

    /// Validate raw fields and build a reading.
    pub fn from_solar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        sex: Sex,
    ) -> Result<Self, BaziError> {
        let birth = BirthTime::from_parts(year, month, day, hour)?;
        Ok(Self::new(birth, sex))
    }

    /// Parse `YYYY-MM-DDThh[:mm]` and build a reading.
    pub fn parse(birth: &str, sex: Sex) -> Result<Self, BaziError> {
        Ok(Self::new(birth.parse()?, sex))
    }

    pub const fn birth(&self) -> BirthTime {
        self.birth
    }

    pub const fn birth_year(&self) -> i32 {
        self.birth.date().year()
    }

    pub const fn sex(&self) -> Sex {
        self.sex
    }

    pub const fn chart(&self) -> &BaZiChart {
        &self.chart
    }

    pub const fn luck(&self) -> &LuckPillarSequence {
        &self.luck
    }

    /// Annual pillar for a Gregorian year.
    pub fn annual(&self, year: i32) -> AnnualPillar {
        annual_pillar(year, self.birth_year(), self.chart.day_stem())
    }

    /// Annual pillars for `count` consecutive years.
    pub fn annual_range(&self, start_year: i32, count: usize) -> Vec<AnnualPillar> {
        annual_pillars(start_year, count, self.birth_year(), self.chart.day_stem())
    }

    /// Luck pillar covering an age.
    pub fn luck_pillar_at(&self, age: i64) -> Option<&LuckPillar> {
        self.luck.at_age(age)
    }

    /// Luck pillar covering a calendar year.
    pub fn luck_pillar_in(&self, year: i64) -> Option<&LuckPillar> {
        self.luck.at_year(year)
    }

    pub fn stem_ten_gods(&self) -> [TenGod; 4] {
        self.chart.stem_ten_gods()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_chart::Direction;
    use bazi_time::TimeError;

    #[test]
    fn from_solar_and_parse_agree() {
        let a = Reading::from_solar(2000, 7, 15, 16, Sex::Male).unwrap();
        let b = Reading::parse("2000-07-15T16:45", Sex::Male).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.birth_year(), 2000);
        assert_eq!(a.luck().direction(), Direction::Forward);
    }

    #[test]
    fn annual_matches_luck_lookup() {
        let r = Reading::from_solar(2000, 7, 15, 16, Sex::Female).unwrap();
        let a = r.annual(2024);
        assert_eq!(a.age, 25);
        // Nominal age 25 falls in the third decade (ages 23..=32).
        let p = r.luck_pillar_at(a.age).unwrap();
        assert_eq!(p.order, 2);
        assert_eq!(r.luck_pillar_in(2024), Some(p));
    }

    #[test]
    fn invalid_birth_is_reported() {
        assert_eq!(
            Reading::from_solar(2000, 7, 15, 30, Sex::Male),
            Err(BaziError::Time(TimeError::InvalidHour(30)))
        );
        assert!(matches!(
            Reading::parse("yesterday", Sex::Male),
            Err(BaziError::Time(TimeError::Parse(_)))
        ));
    }
}
