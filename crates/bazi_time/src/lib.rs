//! Civil calendar arithmetic for Four Pillars charting.
//!
//! This crate provides:
//! - Julian Day Number conversions on the proleptic Gregorian calendar
//! - Validated `CivilDate` and `BirthTime` values with text parsing
//!
//! All arithmetic is integral; there is no time zone or true-solar-time
//! handling. A birth time is the local clock hour as the caller supplies it.

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::{BirthTime, CivilDate};
pub use error::TimeError;
pub use julian::{
    J2000_JDN, MAX_JDN, MIN_JDN, calendar_to_jdn, days_in_month, is_leap_year, jdn_to_calendar,
};
