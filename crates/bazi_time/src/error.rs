//! Error types for civil date handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date validation or parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// The year/month/day triple does not name a proleptic Gregorian day.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour outside 0..=23.
    InvalidHour(u32),
    /// Julian Day Number whose year does not fit an `i32`.
    JdnOutOfRange(i64),
    /// Minute outside 0..=59.
    InvalidMinute(u32),
    /// Date/time text could not be parsed.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::JdnOutOfRange(jdn) => {
                write!(f, "Julian Day Number out of range: {jdn}")
            }
            Self::InvalidHour(h) => write!(f, "invalid hour: {h} (expected 0-23)"),
            Self::InvalidMinute(m) => write!(f, "invalid minute: {m} (expected 0-59)"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
