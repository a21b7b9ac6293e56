//! Civil date, time-of-day and calendar mode types.

use crate::error::JulianError;

/// Number of days in each month of a non-leap year (index 0 unused).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// The civil reckoning used when converting to and from Julian days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalendarMode {
    /// Proleptic Gregorian calendar for all dates.
    Gregorian,
    /// Proleptic Julian calendar for all dates.
    Julian,
    /// Julian before the 1752 reform, Gregorian from it onward.
    #[default]
    British,
}

/// A wall-clock time of day with second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Creates a new `TimeOfDay`.
    ///
    /// # Errors
    ///
    /// Returns [`JulianError::InvalidTime`] if `hour` is not in 0..=23 or
    /// `minute`/`second` are not in 0..=59.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, JulianError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(JulianError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u8 {
        self.second
    }

    /// Returns the offset from noon as a fraction of a day.
    ///
    /// Midnight is -0.5, noon is 0.0, and the instant before the next
    /// midnight approaches +0.5.
    pub fn day_fraction(self) -> f64 {
        (f64::from(self.hour) - 12.0) / 24.0
            + f64::from(self.minute) / 1440.0
            + f64::from(self.second) / 86_400.0
    }
}

/// A civil calendar date with an optional time of day.
///
/// The date fields are validated against the proleptic Gregorian month
/// lengths. A missing time of day stands for noon, which keeps the
/// Julian day fraction at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
    time: Option<TimeOfDay>,
}

impl CivilDate {
    /// Creates a new `CivilDate` without a time of day.
    ///
    /// # Errors
    ///
    /// Returns [`JulianError`] if the month or day is out of range for
    /// the given year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, JulianError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(JulianError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            time: None,
        })
    }

    /// Creates a new `CivilDate` carrying a time of day.
    ///
    /// # Errors
    ///
    /// Returns [`JulianError`] if the month or day is out of range for
    /// the given year.
    pub fn with_time(
        year: i32,
        month: u8,
        day: u8,
        time: TimeOfDay,
    ) -> Result<Self, JulianError> {
        let mut date = Self::new(year, month, day)?;
        date.time = Some(time);
        Ok(date)
    }

    /// Builds a date from fields already known to be consistent.
    ///
    /// Used by the inverse conversion, whose closed-form algorithms
    /// only produce in-range fields (including Julian-calendar leap
    /// days the Gregorian validation would reject).
    pub(crate) fn from_parts_unchecked(
        year: i32,
        month: u8,
        day: u8,
        time: Option<TimeOfDay>,
    ) -> Self {
        Self {
            year,
            month,
            day,
            time,
        }
    }

    /// Returns the year (astronomical numbering; 1 BC is year 0).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the time of day, if one was set.
    pub fn time(self) -> Option<TimeOfDay> {
        self.time
    }

    /// Returns the offset from noon as a fraction of a day.
    ///
    /// Zero when no time of day is set.
    pub fn day_fraction(self) -> f64 {
        self.time.map_or(0.0, TimeOfDay::day_fraction)
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if let Some(t) = self.time {
            write!(f, " {:02}:{:02}:{:02}", t.hour, t.minute, t.second)?;
        }
        Ok(())
    }
}

/// Returns the number of days in a month of the proleptic Gregorian
/// calendar.
///
/// # Errors
///
/// Returns [`JulianError::InvalidMonth`] if `month` is not in 1..=12.
pub(crate) fn days_in_month(year: i32, month: u8) -> Result<u8, JulianError> {
    if !(1..=12).contains(&month) {
        return Err(JulianError::InvalidMonth { month });
    }
    if month == 2 && is_gregorian_leap(year) {
        return Ok(29);
    }
    Ok(DAYS_PER_MONTH[month as usize])
}

fn is_gregorian_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
