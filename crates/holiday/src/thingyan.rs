//! The Thingyan transition cycle.

use mmcal_calendar::constants::{SOLAR_YEAR, THIRD_ERA_FIRST_YEAR, ZERO_YEAR_JDN};
use mmcal_calendar::MyanmarDate;

use crate::rules::Holiday;

/// Thingyan observance began in ME 1100; earlier years report nothing.
const FIRST_THINGYAN_YEAR: i32 = 1100;

/// Mean offset from the atat instant back to the akya day, refined for
/// the third era.
fn akya_offset(year: i32) -> f64 {
    if year >= THIRD_ERA_FIRST_YEAR {
        2.169_918_982
    } else {
        2.1675
    }
}

/// Classifies a day against the Thingyan cycle of its solar year.
///
/// Late-cycle months count toward the following year's transition, so
/// the days bracketing a new year compare against the same atat
/// instant whichever side of it they fall on. The extended holiday
/// spans follow the three historical regimes (1369–1378, 1384–1385,
/// and 1386 onward).
pub(crate) fn thingyan_holiday(date: &MyanmarDate) -> Option<Holiday> {
    let day_number = date.julian_day().day_number();
    let cycle_year = date.year() + i32::from(date.month().number() / 13);
    if cycle_year < FIRST_THINGYAN_YEAR {
        return None;
    }

    let atat_instant = SOLAR_YEAR * f64::from(cycle_year) + ZERO_YEAR_JDN;
    let atat_day = atat_instant.round() as i64;
    let akya_day = (atat_instant - akya_offset(date.year())).round() as i64;

    if day_number == atat_day + 1 {
        return Some(Holiday::MyanmarNewYearDay);
    }
    if day_number == atat_day {
        return Some(Holiday::ThingyanAtat);
    }
    if day_number > akya_day && day_number < atat_day {
        return Some(Holiday::ThingyanAkyat);
    }
    if day_number == akya_day {
        return Some(Holiday::ThingyanAkya);
    }
    if day_number == akya_day - 1 {
        return Some(Holiday::ThingyanAkyo);
    }

    let extended = match cycle_year {
        1369..=1378 => {
            day_number == akya_day - 2
                || (day_number >= atat_day + 2 && day_number <= akya_day + 7)
        }
        1384..=1385 => day_number >= akya_day - 5 && day_number <= akya_day - 2,
        y if y >= 1386 => day_number >= atat_day + 2 && day_number <= akya_day + 7,
        _ => false,
    };
    extended.then_some(Holiday::ThingyanHoliday)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mmcal_calendar::MyanmarDate;
    use mmcal_julian::JulianDay;

    fn at(day_number: i64) -> MyanmarDate {
        MyanmarDate::from_julian(JulianDay::from(day_number)).unwrap()
    }

    #[test]
    fn the_1386_new_year_window() {
        // 2024-04-17 was the new-year day; the following four days
        // were the extended holiday span.
        assert_eq!(
            thingyan_holiday(&at(2_460_418)),
            Some(Holiday::MyanmarNewYearDay)
        );
        for day in 2_460_419..=2_460_422 {
            assert_eq!(
                thingyan_holiday(&at(day)),
                Some(Holiday::ThingyanHoliday),
                "jdn {day}"
            );
        }
        assert_eq!(thingyan_holiday(&at(2_460_423)), None);
    }

    #[test]
    fn transition_days_label_the_late_cycle() {
        // The 1313 ME transition, reached through 1312's late Tagu.
        assert_eq!(thingyan_holiday(&at(2_433_750)), Some(Holiday::ThingyanAkyo));
        assert_eq!(thingyan_holiday(&at(2_433_751)), Some(Holiday::ThingyanAkya));
        assert_eq!(thingyan_holiday(&at(2_433_752)), Some(Holiday::ThingyanAkyat));
        assert_eq!(thingyan_holiday(&at(2_433_753)), Some(Holiday::ThingyanAtat));
        assert_eq!(
            thingyan_holiday(&at(2_433_754)),
            Some(Holiday::MyanmarNewYearDay)
        );
        assert_eq!(thingyan_holiday(&at(2_433_749)), None);
    }

    #[test]
    fn nothing_before_the_first_thingyan_year() {
        // ME 900 predates the observance.
        let early = MyanmarDate::from_myanmar(900, mmcal_calendar::Month::Tagu, 1).unwrap();
        assert_eq!(thingyan_holiday(&early), None);
    }
}
