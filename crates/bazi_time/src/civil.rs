//! Validated civil dates and birth times.
//!
//! `CivilDate` is a proleptic Gregorian day; `BirthTime` adds the local
//! clock hour. Both are validated on construction, so every value that
//! exists names a real day and hour.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{MAX_JDN, MIN_JDN, calendar_to_jdn, days_in_month, jdn_to_calendar};

/// Proleptic Gregorian calendar date (astronomical year numbering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Create a date, rejecting months outside 1..=12 and days past the
    /// end of the month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Date of a Julian Day Number in `MIN_JDN..=MAX_JDN`.
    pub fn from_jdn(jdn: i64) -> Result<Self, TimeError> {
        if !(MIN_JDN..=MAX_JDN).contains(&jdn) {
            return Err(TimeError::JdnOutOfRange(jdn));
        }
        let (year, month, day) = jdn_to_calendar(jdn);
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Julian Day Number of the date.
    pub const fn jdn(&self) -> i64 {
        calendar_to_jdn(self.year, self.month, self.day)
    }

    /// Signed number of days from `earlier` to `self`.
    pub const fn days_since(&self, earlier: &CivilDate) -> i64 {
        self.jdn() - earlier.jdn()
    }

    /// The date `days` days later (negative goes back).
    pub fn add_days(&self, days: i64) -> Result<Self, TimeError> {
        Self::from_jdn(self.jdn().saturating_add(days))
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -(self.year as i64), self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`; a leading `-` marks a negative year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, rest) = match s.strip_prefix('-') {
            Some(r) => (true, r),
            None => (false, s),
        };
        let parts: Vec<&str> = rest.split('-').collect();
        if parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s}")));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|e| TimeError::Parse(format!("year {:?}: {e}", parts[0])))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|e| TimeError::Parse(format!("month {:?}: {e}", parts[1])))?;
        let day: u32 = parts[2]
            .parse()
            .map_err(|e| TimeError::Parse(format!("day {:?}: {e}", parts[2])))?;
        Self::new(if negative { -year } else { year }, month, day)
    }
}

/// Civil date plus local clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthTime {
    date: CivilDate,
    hour: u32,
}

impl BirthTime {
    /// Combine a date with an hour in 0..=23.
    pub fn new(date: CivilDate, hour: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::InvalidHour(hour));
        }
        Ok(Self { date, hour })
    }

    /// Validate and combine raw calendar fields.
    pub fn from_parts(year: i32, month: u32, day: u32, hour: u32) -> Result<Self, TimeError> {
        Self::new(CivilDate::new(year, month, day)?, hour)
    }

    pub const fn date(&self) -> CivilDate {
        self.date
    }

    pub const fn hour(&self) -> u32 {
        self.hour
    }
}

impl Display for BirthTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}T{:02}:00", self.date, self.hour)
    }
}

impl FromStr for BirthTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh` or `YYYY-MM-DDThh:mm` (a space may replace
    /// `T`). Minutes are validated and then dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date_part, time_part) = s
            .split_once(['T', ' '])
            .ok_or_else(|| TimeError::Parse(format!("expected YYYY-MM-DDThh[:mm], got {s}")))?;
        let date: CivilDate = date_part.parse()?;
        let (hour_str, minute_str) = match time_part.split_once(':') {
            Some((h, m)) => (h, Some(m)),
            None => (time_part, None),
        };
        let hour: u32 = hour_str
            .parse()
            .map_err(|e| TimeError::Parse(format!("hour {hour_str:?}: {e}")))?;
        if let Some(m) = minute_str {
            let minute: u32 = m
                .parse()
                .map_err(|e| TimeError::Parse(format!("minute {m:?}: {e}")))?;
            if minute > 59 {
                return Err(TimeError::InvalidMinute(minute));
            }
        }
        Self::new(date, hour)
    }
}
