//! Forward and inverse conversion algorithms.
//!
//! The forward direction is the closed-form day-count formula over the
//! shifted (March-first) year; the inverse direction recovers the civil
//! fields by quotient extraction. All integer divisions truncate toward
//! zero, which coincides with floor division for the positive operands
//! the supported range produces.

use crate::civil::{CalendarMode, CivilDate, TimeOfDay};
use crate::jdn::JulianDay;

/// First Julian day of the Gregorian reckoning in British mode
/// (1752-09-14 Gregorian).
pub const GREGORIAN_REFORM_JDN: i64 = 2_361_222;

/// Converts a civil date to a Julian day under the given mode.
///
/// In British mode the Gregorian formula is tried first; a result below
/// the reform threshold is recomputed with the Julian formula and
/// clamped to not exceed the threshold, so the reform gap maps
/// deterministically.
pub fn to_julian_day(date: CivilDate, mode: CalendarMode) -> JulianDay {
    let day_number = match mode {
        CalendarMode::Gregorian => gregorian_day_number(date),
        CalendarMode::Julian => julian_day_number(date),
        CalendarMode::British => {
            let gregorian = gregorian_day_number(date);
            if gregorian < GREGORIAN_REFORM_JDN {
                julian_day_number(date).min(GREGORIAN_REFORM_JDN)
            } else {
                gregorian
            }
        }
    };
    JulianDay::new(day_number as f64 + date.day_fraction())
}

/// Converts a Julian day back to a civil date under the given mode.
///
/// The time of day is recovered from the fractional part at second
/// resolution; the returned date always carries a time (noon when the
/// fraction is zero).
pub fn from_julian_day(jd: JulianDay, mode: CalendarMode) -> CivilDate {
    let julian_reckoning = match mode {
        CalendarMode::Julian => true,
        CalendarMode::Gregorian => false,
        CalendarMode::British => jd.value() < GREGORIAN_REFORM_JDN as f64,
    };
    if julian_reckoning {
        julian_civil_date(jd)
    } else {
        gregorian_civil_date(jd)
    }
}

/// Day-count terms shared by both civil reckonings.
///
/// Returns `(terms, shifted_year)` where `terms` is
/// `day + (153 m' + 2)/5 + 365 y' + y'/4` over the March-first year.
fn raw_day_terms(date: CivilDate) -> (i64, i64) {
    let month = i64::from(date.month());
    let a = (14 - month) / 12;
    let y = i64::from(date.year()) + 4800 - a;
    let m = month + 12 * a - 3;
    let terms = i64::from(date.day()) + (153 * m + 2) / 5 + 365 * y + y / 4;
    (terms, y)
}

fn gregorian_day_number(date: CivilDate) -> i64 {
    let (terms, y) = raw_day_terms(date);
    terms - y / 100 + y / 400 - 32_045
}

fn julian_day_number(date: CivilDate) -> i64 {
    let (terms, _) = raw_day_terms(date);
    terms - 32_083
}

/// Splits a Julian day into its midnight-aligned day count and the
/// fraction of the day elapsed since that midnight.
fn split_at_midnight(jd: JulianDay) -> (i64, f64) {
    let shifted = jd.value() + 0.5;
    let day = shifted.floor() as i64;
    (day, shifted - day as f64)
}

/// Recovers a time of day from the fraction elapsed since midnight.
///
/// Rounds to the nearest whole second so that second-resolution inputs
/// survive the float arithmetic of the forward conversion.
fn time_from_fraction(elapsed: f64) -> TimeOfDay {
    let seconds = ((elapsed * 86_400.0).round() as i64).clamp(0, 86_399) as u32;
    let hour = (seconds / 3600) as u8;
    let minute = (seconds % 3600 / 60) as u8;
    let second = (seconds % 60) as u8;
    TimeOfDay::new(hour, minute, second).expect("seconds below 86400 decompose in range")
}

fn julian_civil_date(jd: JulianDay) -> CivilDate {
    let (day_count, elapsed) = split_at_midnight(jd);
    let b = day_count + 1524;
    let c = ((b as f64 - 122.1) / 365.25) as i64;
    let f = (365.25 * c as f64) as i64;
    let e = ((b - f) as f64 / 30.6001) as i64;

    let month = if e > 13 { e - 13 } else { e - 1 };
    let day = b - f - (30.6001 * e as f64) as i64;
    let year = if month < 3 { c - 4715 } else { c - 4716 };

    CivilDate::from_parts_unchecked(
        year as i32,
        month as u8,
        day as u8,
        Some(time_from_fraction(elapsed)),
    )
}

fn gregorian_civil_date(jd: JulianDay) -> CivilDate {
    let (day_count, elapsed) = split_at_midnight(jd);
    let mut jdn = day_count - 1_721_119;
    let mut year = (4 * jdn - 1) / 146_097;
    jdn = 4 * jdn - 1 - 146_097 * year;
    let mut day = jdn / 4;
    jdn = (4 * day + 3) / 1461;
    day = 4 * day + 3 - 1461 * jdn;
    day = (day + 4) / 4;
    let mut month = (5 * day - 3) / 153;
    day = 5 * day - 3 - 153 * month;
    day = (day + 5) / 5;
    year = 100 * year + jdn;

    if month < 10 {
        month += 3;
    } else {
        month -= 9;
        year += 1;
    }

    CivilDate::from_parts_unchecked(
        year as i32,
        month as u8,
        day as u8,
        Some(time_from_fraction(elapsed)),
    )
}
