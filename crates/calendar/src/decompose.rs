//! Forward decomposition: Julian day to Myanmar date fields.

use tracing::debug;

use crate::constants::{
    EXTRA_DAY_BIAS, EXTRA_DAY_SPAN, MONTH_FIT_OFFSET, MONTH_FIT_SLOPE, SOLAR_YEAR, ZERO_YEAR_JDN,
};
use crate::error::CalendarError;
use crate::month::Month;
use crate::phase::MoonPhase;
use crate::weekday::Weekday;
use crate::year::{MyanmarYear, YearType};
use mmcal_julian::JulianDay;

/// The full field set produced by one decomposition.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Decomposed {
    pub year: MyanmarYear,
    pub month: Month,
    pub day: u8,
    pub month_length: u8,
    pub moon_phase: MoonPhase,
    pub fortnight_day: u8,
    pub weekday: Weekday,
}

/// Decomposes a Julian day into Myanmar date fields.
///
/// The Myanmar year is estimated from the solar-year formula; the day
/// is then placed inside that year by counting from the first day of
/// Tagu, which the year's watat anchors fix. Days the anchor chain
/// pushes ahead of Tagu 1 belong to the previous year's late cycle and
/// are re-resolved there.
pub(crate) fn decompose(jdn: JulianDay) -> Result<Decomposed, CalendarError> {
    let day_number = jdn.day_number();
    let year_estimate =
        ((day_number as f64 - ZERO_YEAR_JDN - 0.5) / SOLAR_YEAR).floor() as i32;

    let mut year = MyanmarYear::resolve(year_estimate)?;
    let mut total_days = day_number - year.first_tagu_day() + 1;
    if total_days < 1 {
        // The solar-year estimate and the anchor chain disagree by a
        // few days around some watat new years; the day sits before
        // Tagu 1 and reads as the previous year's late cycle.
        debug!(day_number, year_estimate, "day precedes Tagu 1, stepping back a year");
        year = MyanmarYear::resolve(year_estimate - 1)?;
        total_days = day_number - year.first_tagu_day() + 1;
    }

    let late_cycle = total_days > year.length();
    if late_cycle {
        total_days -= year.length();
    }

    // Only the month estimate sees the intercalary-day adjustment; the
    // day offset below works on the raw count.
    let threshold = (total_days + EXTRA_DAY_BIAS) / EXTRA_DAY_SPAN;
    let adjusted_days = match year.year_type() {
        YearType::BigWatat => total_days - threshold,
        YearType::Common => total_days + 30 * threshold,
        YearType::LittleWatat => total_days,
    };

    let raw_month = ((adjusted_days as f64 + MONTH_FIT_OFFSET) / MONTH_FIT_SLOPE) as i64;
    let e = (raw_month + 12) / 16;
    let f = (raw_month + 11) / 16;

    let mut day = total_days - (MONTH_FIT_SLOPE * raw_month as f64 - MONTH_FIT_OFFSET) as i64;
    match year.year_type() {
        YearType::BigWatat => day -= e,
        YearType::Common => day += 30 * f,
        YearType::LittleWatat => {}
    }

    let mut month_number = raw_month + 3 * f - 4 * e;
    if late_cycle {
        month_number += 12;
    }
    let month = Month::from_number(month_number as u8)?;

    let month_length = year.month_length(month);
    let day = day as u8;
    Ok(Decomposed {
        year,
        month,
        day,
        month_length,
        moon_phase: MoonPhase::of_day(day, month_length),
        fortnight_day: (i64::from(day) - 15 * (i64::from(day) / 16)) as u8,
        weekday: Weekday::of_day_number(day_number),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_year_day_1386() {
        // 2024-04-17, the 1386 ME new year.
        let d = decompose(JulianDay::from(2_460_418)).unwrap();
        assert_eq!(d.year.year(), 1386);
        assert_eq!(d.month, Month::Tagu);
        assert_eq!(d.day, 1);
        assert_eq!(d.moon_phase, MoonPhase::Waxing);
        assert_eq!(d.fortnight_day, 1);
        assert_eq!(d.weekday, Weekday::Wednesday);
    }

    #[test]
    fn waso_full_moon_1375() {
        // 2013-07-29.
        let d = decompose(JulianDay::from(2_456_503)).unwrap();
        assert_eq!(d.year.year(), 1375);
        assert_eq!(d.month, Month::Waso);
        assert_eq!(d.day, 15);
        assert_eq!(d.moon_phase, MoonPhase::FullMoon);
        assert_eq!(d.fortnight_day, 15);
        assert_eq!(d.weekday, Weekday::Monday);
    }

    #[test]
    fn second_era_date() {
        // 1900-01-01 fell in Nadaw of 1261 ME.
        let d = decompose(JulianDay::from(2_415_021)).unwrap();
        assert_eq!(d.year.year(), 1261);
        assert_eq!(d.month, Month::Nadaw);
        assert_eq!(d.day, 1);
        assert_eq!(d.weekday, Weekday::Monday);
    }

    #[test]
    fn first_era_date() {
        // 1600-05-01 fell in Kason of 962 ME.
        let d = decompose(JulianDay::from(2_305_569)).unwrap();
        assert_eq!(d.year.year(), 962);
        assert_eq!(d.month, Month::Kason);
        assert_eq!(d.day, 20);
        assert_eq!(d.moon_phase, MoonPhase::Waning);
        assert_eq!(d.fortnight_day, 5);
    }

    #[test]
    fn big_watat_first_waso() {
        // 1385 ME is a big watat year; its first Waso full moon.
        let d = decompose(JulianDay::from(2_460_136)).unwrap();
        assert_eq!(d.year.year(), 1385);
        assert_eq!(d.year.year_type(), YearType::BigWatat);
        assert_eq!(d.month, Month::FirstWaso);
        assert_eq!(d.day, 15);
        assert_eq!(d.moon_phase, MoonPhase::FullMoon);
    }

    #[test]
    fn nayon_thirtieth_day_in_big_watat() {
        // 1377 ME is big watat, so Nayon runs to day 30.
        let d = decompose(JulianDay::from(2_457_197)).unwrap();
        assert_eq!(d.year.year(), 1377);
        assert_eq!(d.month, Month::Nayon);
        assert_eq!(d.day, 30);
        assert_eq!(d.month_length, 30);
        assert_eq!(d.moon_phase, MoonPhase::NewMoon);
        assert_eq!(d.fortnight_day, 15);
    }

    #[test]
    fn last_day_of_a_big_watat_year() {
        // The day before the 1386 new year closes 1385's Tabaung.
        let d = decompose(JulianDay::from(2_460_417)).unwrap();
        assert_eq!(d.year.year(), 1385);
        assert_eq!(d.month, Month::Tabaung);
        assert_eq!(d.day, 30);
        assert_eq!(d.moon_phase, MoonPhase::NewMoon);
    }

    #[test]
    fn late_cycle_day() {
        // Tagu days past the end of 1312 ME read as its late cycle.
        let d = decompose(JulianDay::from(2_433_744)).unwrap();
        assert_eq!(d.year.year(), 1312);
        assert_eq!(d.month, Month::LateTagu);
        assert_eq!(d.day, 1);
    }

    #[test]
    fn weekday_cycles_across_a_fortnight() {
        for offset in 0..14 {
            let d = decompose(JulianDay::from(2_460_418 + offset)).unwrap();
            assert_eq!(d.weekday.number(), ((4 + offset) % 7) as u8);
        }
    }
}
