//! Error types for the mmcal-julian crate.

/// Error type for all fallible operations in the mmcal-julian crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JulianError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month the day was checked against.
        month: u8,
        /// The year the day was checked against.
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a time-of-day component is out of range.
    #[error("invalid time of day: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime {
        /// The hour that was provided.
        hour: u8,
        /// The minute that was provided.
        minute: u8,
        /// The second that was provided.
        second: u8,
    },
}
