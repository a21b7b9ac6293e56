//! Inverse composition: Myanmar date fields to Julian day.

use crate::constants::{MONTH_FIT_OFFSET, MONTH_FIT_SLOPE};
use crate::error::CalendarError;
use crate::month::Month;
use crate::phase::MoonPhase;
use crate::year::{MyanmarYear, YearType};

/// Computes the day count of a Myanmar date, validating the day against
/// the month's length in that year.
///
/// Algebraically reverses the forward decomposition: the month code is
/// mapped back to its position in the doubled-Waso month sequence, the
/// cumulative-day fit is applied forward, and the era adjustments are
/// re-added before counting from the year's first day of Tagu.
pub(crate) fn compose(year: &MyanmarYear, month: Month, day: u8) -> Result<i64, CalendarError> {
    if month == Month::FirstWaso && !year.anchor().is_watat() {
        return Err(CalendarError::NotAWatatYear { year: year.year() });
    }
    let month_length = year.month_length(month);
    if !(1..=month_length).contains(&day) {
        return Err(CalendarError::InvalidDate {
            year: year.year(),
            month,
            day,
            month_length,
        });
    }

    let code = i64::from(month.number());
    let late_cycle = code / 13;
    let mut position = code % 13 + late_cycle;
    position += 4 - ((position + 15) / 16) * 4 + (position + 12) / 16;

    let mut days = i64::from(day)
        + (MONTH_FIT_SLOPE * position as f64 - MONTH_FIT_OFFSET) as i64;
    if !year.anchor().is_watat() {
        days -= ((position + 11) / 16) * 30;
    }
    if year.year_type() == YearType::BigWatat {
        days += (position + 12) / 16;
    }
    days += year.length() * late_cycle;

    Ok(days + year.first_tagu_day() - 1)
}

/// Resolves a month day from a moon phase and fortnight day.
///
/// The month length is recomputed from the year context, so the big
/// watat Nayon extension is honored here as well.
pub(crate) fn day_from_phase(
    year: &MyanmarYear,
    month: Month,
    phase: MoonPhase,
    fortnight_day: u8,
) -> Result<u8, CalendarError> {
    if !(1..=15).contains(&fortnight_day) {
        return Err(CalendarError::InvalidFortnightDay {
            day: fortnight_day,
        });
    }
    Ok(match phase {
        MoonPhase::Waxing => fortnight_day,
        MoonPhase::FullMoon => 15,
        MoonPhase::Waning => fortnight_day + 15,
        MoonPhase::NewMoon => year.month_length(month),
    })
}
