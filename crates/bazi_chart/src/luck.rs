//! Decade luck pillars (da yun).
//!
//! The sequence steps away from the month pillar one cycle position per
//! decade. Yang-year males and Yin-year females run forward; the other
//! two cases run backward.
//!
//! The onset age is a fixed constant rather than the traditional
//! days-to-next-jie count divided by three.

use bazi_cycle::{Pillar, Polarity, Stem, TenGod, ten_god};
use tracing::debug;

use crate::chart::BaZiChart;

/// Age at which the first luck pillar begins.
pub const DEFAULT_ONSET_AGE: i32 = 3;

/// Number of luck pillars generated by default.
pub const DEFAULT_LUCK_PILLAR_COUNT: usize = 10;

/// Years covered by a single luck pillar.
pub const YEARS_PER_LUCK_PILLAR: i64 = 10;

/// Sex of the chart subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    pub const fn han(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }

    /// Parse `male`/`female`, `m`/`f` (case-insensitive) or 男/女.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Some(Self::Male),
            "female" | "f" | "女" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Traversal direction of the luck-pillar sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Forward when the subject's sex matches the year stem polarity
    /// (male with Yang, female with Yin).
    pub const fn for_subject(sex: Sex, year_stem: Stem) -> Self {
        let yang = matches!(year_stem.polarity(), Polarity::Yang);
        let male = matches!(sex, Sex::Male);
        if yang == male {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    /// +1 or -1.
    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "Forward",
            Self::Backward => "Backward",
        }
    }
}

/// Configuration for luck-pillar generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuckPillarConfig {
    /// Age at which the first pillar begins.
    pub onset_age: i32,
    /// Number of pillars to generate.
    pub count: usize,
}

impl Default for LuckPillarConfig {
    fn default() -> Self {
        Self {
            onset_age: DEFAULT_ONSET_AGE,
            count: DEFAULT_LUCK_PILLAR_COUNT,
        }
    }
}

/// One decade of the sequence. Age and year ranges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuckPillar {
    /// 0-based position in the sequence.
    pub order: usize,
    pub pillar: Pillar,
    pub start_age: i64,
    pub end_age: i64,
    pub start_year: i64,
    pub end_year: i64,
    /// Pillar stem against the day stem.
    pub stem_ten_god: TenGod,
    /// Dominant hidden stem of the pillar branch against the day stem.
    pub branch_ten_god: TenGod,
}

impl LuckPillar {
    pub const fn contains_age(&self, age: i64) -> bool {
        self.start_age <= age && age <= self.end_age
    }

    pub const fn contains_year(&self, year: i64) -> bool {
        self.start_year <= year && year <= self.end_year
    }
}

/// Ordered decade luck pillars for one chart and subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuckPillarSequence {
    direction: Direction,
    onset_age: i32,
    birth_year: i32,
    pillars: Vec<LuckPillar>,
}

impl LuckPillarSequence {
    /// Generate `count` pillars with the default onset age.
    pub fn generate(chart: &BaZiChart, sex: Sex, birth_year: i32, count: usize) -> Self {
        let config = LuckPillarConfig {
            count,
            ..LuckPillarConfig::default()
        };
        Self::generate_with_config(chart, sex, birth_year, &config)
    }

    /// Generate with an explicit configuration.
    pub fn generate_with_config(
        chart: &BaZiChart,
        sex: Sex,
        birth_year: i32,
        config: &LuckPillarConfig,
    ) -> Self {
        let direction = Direction::for_subject(sex, chart.year().stem);
        let day_stem = chart.day_stem();
        let month = chart.month();

        let pillars = (0..config.count)
            .map(|k| {
                let pillar = month.forward(direction.step() * (k as i64 + 1));
                let start_age = i64::from(config.onset_age) + YEARS_PER_LUCK_PILLAR * k as i64;
                let end_age = start_age + YEARS_PER_LUCK_PILLAR - 1;
                LuckPillar {
                    order: k,
                    pillar,
                    start_age,
                    end_age,
                    start_year: i64::from(birth_year) + start_age,
                    end_year: i64::from(birth_year) + end_age,
                    stem_ten_god: ten_god(day_stem, pillar.stem),
                    branch_ten_god: ten_god(day_stem, pillar.dominant_hidden_stem()),
                }
            })
            .collect::<Vec<_>>();

        debug!(
            sex = sex.name(),
            direction = direction.name(),
            onset_age = config.onset_age,
            count = pillars.len(),
            "luck pillars generated"
        );

        Self {
            direction,
            onset_age: config.onset_age,
            birth_year,
            pillars,
        }
    }

    /// Pillar whose age range contains `age`.
    pub fn at_age(&self, age: i64) -> Option<&LuckPillar> {
        self.pillars.iter().find(|p| p.contains_age(age))
    }

    /// Pillar whose year range contains `year`.
    pub fn at_year(&self, year: i64) -> Option<&LuckPillar> {
        self.pillars.iter().find(|p| p.contains_year(year))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LuckPillar> {
        self.pillars.iter()
    }

    pub fn pillars(&self) -> &[LuckPillar] {
        &self.pillars
    }

    pub fn len(&self) -> usize {
        self.pillars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pillars.is_empty()
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn onset_age(&self) -> i32 {
        self.onset_age
    }

    pub const fn birth_year(&self) -> i32 {
        self.birth_year
    }
}

impl<'a> IntoIterator for &'a LuckPillarSequence {
    type Item = &'a LuckPillar;
    type IntoIter = std::slice::Iter<'a, LuckPillar>;

    fn into_iter(self) -> Self::IntoIter {
        self.pillars.iter()
    }
}
