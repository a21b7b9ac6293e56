//! The Myanmar date value object.

use crate::compose::{compose, day_from_phase};
use crate::decompose::decompose;
use crate::error::CalendarError;
use crate::month::Month;
use crate::phase::MoonPhase;
use crate::weekday::Weekday;
use crate::year::{MyanmarYear, YearType};
use mmcal_julian::{
    from_julian_day, to_julian_day, CalendarMode, CivilDate, JulianDay, TimeOfDay,
};

/// A fully decomposed Myanmar date.
///
/// Every field is derived once at construction from the underlying
/// Julian day and the year's watat anchors. The value is immutable;
/// moving to another day means building a replacement with
/// [`MyanmarDate::add_days`], so readers can never observe a mix of old
/// and new derived fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MyanmarDate {
    jdn: JulianDay,
    civil: CivilDate,
    year: MyanmarYear,
    month: Month,
    day: u8,
    month_length: u8,
    moon_phase: MoonPhase,
    fortnight_day: u8,
    weekday: Weekday,
}

impl MyanmarDate {
    /// Builds the Myanmar date of a civil date under the given
    /// calendar mode.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedEra`] if the date falls
    /// before the earliest tabulated era.
    pub fn from_civil(date: CivilDate, mode: CalendarMode) -> Result<Self, CalendarError> {
        Self::build(to_julian_day(date, mode), date)
    }

    /// Builds the Myanmar date of the current system clock reading,
    /// read in the system time zone under the British reckoning.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedEra`] if the clock is set
    /// before the earliest tabulated era.
    pub fn today() -> Result<Self, CalendarError> {
        let now = jiff::Zoned::now();
        let time = TimeOfDay::new(now.hour() as u8, now.minute() as u8, now.second() as u8)
            .expect("system clock yields a valid time of day");
        let civil = CivilDate::with_time(
            i32::from(now.year()),
            now.month() as u8,
            now.day() as u8,
            time,
        )
        .expect("system clock yields a valid civil date");
        Self::from_civil(civil, CalendarMode::British)
    }

    /// Builds the Myanmar date of a Julian day.
    ///
    /// The civil rendering uses the British reckoning.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedEra`] if the day falls
    /// before the earliest tabulated era.
    pub fn from_julian(jdn: JulianDay) -> Result<Self, CalendarError> {
        Self::build(jdn, from_julian_day(jdn, CalendarMode::British))
    }

    /// Builds a Myanmar date from its year, month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the day is outside the
    /// month's length in that year, [`CalendarError::NotAWatatYear`] if
    /// the month is the first Waso of a common year, and
    /// [`CalendarError::UnsupportedEra`] for years before the earliest
    /// tabulated era.
    pub fn from_myanmar(year: i32, month: Month, day: u8) -> Result<Self, CalendarError> {
        let context = MyanmarYear::resolve(year)?;
        let day_number = compose(&context, month, day)?;
        Self::from_julian(JulianDay::from(day_number))
    }

    /// Builds a Myanmar date from its year, month, moon phase and
    /// fortnight day.
    ///
    /// # Errors
    ///
    /// As [`MyanmarDate::from_myanmar`], plus
    /// [`CalendarError::InvalidFortnightDay`] when the fortnight day is
    /// outside 1..=15.
    pub fn from_fortnight(
        year: i32,
        month: Month,
        phase: MoonPhase,
        fortnight_day: u8,
    ) -> Result<Self, CalendarError> {
        let context = MyanmarYear::resolve(year)?;
        let day = day_from_phase(&context, month, phase, fortnight_day)?;
        let day_number = compose(&context, month, day)?;
        Self::from_julian(JulianDay::from(day_number))
    }

    /// Returns the date shifted by a whole number of days, as a new
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedEra`] if the shifted day
    /// falls before the earliest tabulated era.
    pub fn add_days(&self, days: i64) -> Result<Self, CalendarError> {
        Self::from_julian(self.jdn.add_days(days))
    }

    fn build(jdn: JulianDay, civil: CivilDate) -> Result<Self, CalendarError> {
        let fields = decompose(jdn)?;
        Ok(Self {
            jdn,
            civil,
            year: fields.year,
            month: fields.month,
            day: fields.day,
            month_length: fields.month_length,
            moon_phase: fields.moon_phase,
            fortnight_day: fields.fortnight_day,
            weekday: fields.weekday,
        })
    }

    /// The Myanmar year number.
    pub fn year(&self) -> i32 {
        self.year.year()
    }

    /// The resolved year context.
    pub fn year_context(&self) -> MyanmarYear {
        self.year
    }

    /// The intercalation class of the year.
    pub fn year_type(&self) -> YearType {
        self.year.year_type()
    }

    /// Number of days in the year (354, 384 or 385).
    pub fn year_length(&self) -> i64 {
        self.year.length()
    }

    /// The month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// The day of the month (1..=30).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Number of days in the month (29 or 30).
    pub fn month_length(&self) -> u8 {
        self.month_length
    }

    /// The moon phase of the day.
    pub fn moon_phase(&self) -> MoonPhase {
        self.moon_phase
    }

    /// The day within the half-month (1..=15).
    pub fn fortnight_day(&self) -> u8 {
        self.fortnight_day
    }

    /// The weekday (Saturday-first numbering).
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// The underlying Julian day.
    pub fn julian_day(&self) -> JulianDay {
        self.jdn
    }

    /// The civil date the value was built from (or rendered to, for
    /// dates built from Myanmar fields).
    pub fn civil(&self) -> CivilDate {
        self.civil
    }

    /// The Buddhist-era year.
    ///
    /// The Sasana year steps at the Kason full moon, so early Tagu and
    /// the waxing half of Kason share the previous offset.
    pub fn sasana_year(&self) -> i32 {
        let offset = if self.month == Month::Tagu
            || (self.month == Month::Kason && self.day < 16)
        {
            1181
        } else {
            1182
        };
        self.year.year() + offset
    }
}
