//! Error types for the mmcal-calendar crate.

use crate::month::Month;

/// Error type for all fallible operations in the mmcal-calendar crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a day is outside the resolved month's length.
    ///
    /// Day validity depends on the year: Nayon gains a thirtieth day in
    /// big watat years, so the same (month, day) pair can be valid in
    /// one year and invalid in the next.
    #[error("invalid date: {month} {day}, {year} ME ({month} has {month_length} days that year)")]
    InvalidDate {
        /// The Myanmar year the day was checked against.
        year: i32,
        /// The month the day was checked against.
        month: Month,
        /// The invalid day number that was provided.
        day: u8,
        /// The length of the month in the given year.
        month_length: u8,
    },

    /// Returned when a first Waso date names a year without an
    /// intercalary month.
    #[error("{year} ME is not a watat year and has no first Waso")]
    NotAWatatYear {
        /// The common year that was named.
        year: i32,
    },

    /// Returned when a month number is outside 0..=14.
    #[error("invalid month number: {month} (must be 0..=14)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a month name fails to parse.
    #[error("unknown month name: {name:?}")]
    UnknownMonthName {
        /// The string that failed to parse.
        name: String,
    },

    /// Returned when a moon-phase name fails to parse.
    #[error("unknown moon phase: {name:?}")]
    UnknownMoonPhase {
        /// The string that failed to parse.
        name: String,
    },

    /// Returned when a fortnight day is outside 1..=15.
    #[error("invalid fortnight day: {day} (must be 1..=15)")]
    InvalidFortnightDay {
        /// The invalid fortnight day that was provided.
        day: u8,
    },

    /// Returned when a year predates the earliest tabulated watat era.
    #[error("no tabulated watat era covers Myanmar year {year}")]
    UnsupportedEra {
        /// The unsupported Myanmar year.
        year: i32,
    },
}
