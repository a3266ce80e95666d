//! Julian Day Number ↔ proleptic Gregorian calendar conversions.
//!
//! Integer-only day arithmetic on the proleptic Gregorian calendar: no
//! Julian/Gregorian reform gap, no year zero special case (astronomical
//! numbering, 1 BCE = year 0). Valid for every `i32` year.
//!
//! Based on the era/day-of-era decomposition: 400 Gregorian years are
//! exactly 146 097 days, so dates are reduced to a 400-year era with
//! Euclidean division and solved within it.

/// Julian Day Number of the civil day 2000-01-01.
pub const J2000_JDN: i64 = 2_451_545;

/// Julian Day Number of the civil day 1970-01-01.
const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// Days from 0000-03-01 to 1970-01-01.
const CIVIL_TO_UNIX_DAYS: i64 = 719_468;

const DAYS_PER_ERA: i64 = 146_097;

/// Julian Day Number of `i32::MIN`-01-01, the earliest representable date.
pub const MIN_JDN: i64 = calendar_to_jdn(i32::MIN, 1, 1);

/// Julian Day Number of `i32::MAX`-12-31, the latest representable date.
pub const MAX_JDN: i64 = calendar_to_jdn(i32::MAX, 12, 31);

/// Gregorian leap year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, or 0 for a month outside 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Julian Day Number of a proleptic Gregorian date.
///
/// The inputs are not validated; see [`crate::CivilDate::new`].
pub const fn calendar_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let m = month as i64;
    let y = year as i64 - if m <= 2 { 1 } else { 0 };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - CIVIL_TO_UNIX_DAYS + UNIX_EPOCH_JDN
}

/// Proleptic Gregorian `(year, month, day)` of a Julian Day Number.
///
/// Exact for `MIN_JDN..=MAX_JDN`; outside that range the year does not
/// fit an `i32` and is truncated. [`crate::CivilDate::from_jdn`] checks
/// the range first.
pub const fn jdn_to_calendar(jdn: i64) -> (i32, u32, u32) {
    let z = jdn - UNIX_EPOCH_JDN + CIVIL_TO_UNIX_DAYS;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year as i32, month as u32, day as u32)
}
