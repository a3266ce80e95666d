//! The Four Pillars chart.

use std::fmt::{Display, Formatter};

use bazi_cycle::{Branch, Pillar, Stem, TenGod, ten_god};
use bazi_time::BirthTime;
use tracing::debug;

use crate::error::ChartError;
use crate::pillars::{day_pillar, hour_pillar_of_branch, hour_slot, month_pillar, year_pillar};

/// Position of a pillar within the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PillarPosition {
    Year = 0,
    Month = 1,
    Day = 2,
    Hour = 3,
}

/// Chart positions in chart order.
pub const ALL_PILLAR_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }

    pub const fn han(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "时柱",
        }
    }
}

/// Year, month, day and hour pillars plus the day pillar's void branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaZiChart {
    year: Pillar,
    month: Pillar,
    day: Pillar,
    hour: Pillar,
    void: (Branch, Branch),
}

impl BaZiChart {
    /// Build a chart from a proleptic Gregorian date and clock hour.
    ///
    /// Fails with [`ChartError::Time`] on a date that does not exist or an
    /// hour outside 0..=23.
    pub fn from_solar(year: i32, month: u32, day: u32, hour: u32) -> Result<Self, ChartError> {
        let birth = BirthTime::from_parts(year, month, day, hour)?;
        Ok(Self::from_birth(&birth))
    }

    /// Build a chart from an already validated birth time.
    pub fn from_birth(birth: &BirthTime) -> Self {
        let date = birth.date();
        let year = year_pillar(&date);
        let month = month_pillar(&date);
        let day = day_pillar(&date);
        let hour = hour_pillar_of_branch(day.stem, hour_slot(birth.hour()));
        let void = day.void_branches();
        debug!(
            %date,
            hour = birth.hour(),
            year = %year,
            month = %month,
            day = %day,
            hour_pillar = %hour,
            "chart assembled"
        );
        Self {
            year,
            month,
            day,
            hour,
            void,
        }
    }

    pub const fn year(&self) -> Pillar {
        self.year
    }

    pub const fn month(&self) -> Pillar {
        self.month
    }

    pub const fn day(&self) -> Pillar {
        self.day
    }

    pub const fn hour(&self) -> Pillar {
        self.hour
    }

    /// The day master.
    pub const fn day_stem(&self) -> Stem {
        self.day.stem
    }

    /// Void (kong wang) branches of the day pillar.
    pub const fn void_branches(&self) -> (Branch, Branch) {
        self.void
    }

    /// Whether a branch is one of the day pillar's void branches.
    pub fn is_void(&self, branch: Branch) -> bool {
        self.void.0 == branch || self.void.1 == branch
    }

    /// Pillar at a chart position.
    pub const fn pillar(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// All four pillars in chart order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Ten-God of each pillar's stem against the day stem. The day entry
    /// is always [`TenGod::Peer`].
    pub fn stem_ten_gods(&self) -> [TenGod; 4] {
        self.pillars().map(|p| ten_god(self.day.stem, p.stem))
    }

    /// Ten-God of every hidden stem under a pillar's branch, dominant first.
    pub fn hidden_ten_gods(&self, position: PillarPosition) -> Vec<(Stem, TenGod)> {
        self.pillar(position)
            .hidden_stems()
            .iter()
            .map(|&s| (s, ten_god(self.day.stem, s)))
            .collect()
    }
}

impl Display for BaZiChart {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}
