//! Moon phase classification.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// The phase a day of a Myanmar month falls in.
///
/// Days 1..=14 wax, day 15 is the full moon, days 16 onward wane, and
/// the last day of the month is the new moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    /// Waxing days (1..=14 of the month).
    Waxing,
    /// The full-moon day (day 15).
    FullMoon,
    /// Waning days (16 up to the day before the month ends).
    Waning,
    /// The new-moon day closing the month.
    NewMoon,
}

impl MoonPhase {
    /// Returns the phase code (0..=3).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Classifies a day of a month with the given length.
    ///
    /// The classification is a pure function of `day` and
    /// `month_length`.
    pub(crate) fn of_day(day: u8, month_length: u8) -> Self {
        let day = i64::from(day);
        let length = i64::from(month_length);
        match (day + 1) / 16 + day / 16 + day / length {
            0 => MoonPhase::Waxing,
            1 => MoonPhase::FullMoon,
            2 => MoonPhase::Waning,
            _ => MoonPhase::NewMoon,
        }
    }

    /// Returns the English name of the phase.
    pub fn name(self) -> &'static str {
        match self {
            MoonPhase::Waxing => "waxing",
            MoonPhase::FullMoon => "full moon",
            MoonPhase::Waning => "waning",
            MoonPhase::NewMoon => "new moon",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoonPhase {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "waxing" | "0" => Ok(MoonPhase::Waxing),
            "fullmoon" | "full" | "1" => Ok(MoonPhase::FullMoon),
            "waning" | "2" => Ok(MoonPhase::Waning),
            "newmoon" | "new" | "3" => Ok(MoonPhase::NewMoon),
            _ => Err(CalendarError::UnknownMoonPhase {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_day_month() {
        assert_eq!(MoonPhase::of_day(1, 30), MoonPhase::Waxing);
        assert_eq!(MoonPhase::of_day(14, 30), MoonPhase::Waxing);
        assert_eq!(MoonPhase::of_day(15, 30), MoonPhase::FullMoon);
        assert_eq!(MoonPhase::of_day(16, 30), MoonPhase::Waning);
        assert_eq!(MoonPhase::of_day(29, 30), MoonPhase::Waning);
        assert_eq!(MoonPhase::of_day(30, 30), MoonPhase::NewMoon);
    }

    #[test]
    fn twenty_nine_day_month() {
        assert_eq!(MoonPhase::of_day(15, 29), MoonPhase::FullMoon);
        assert_eq!(MoonPhase::of_day(28, 29), MoonPhase::Waning);
        assert_eq!(MoonPhase::of_day(29, 29), MoonPhase::NewMoon);
    }

    #[test]
    fn parse_phase_names() {
        assert_eq!("waxing".parse::<MoonPhase>().unwrap(), MoonPhase::Waxing);
        assert_eq!("full-moon".parse::<MoonPhase>().unwrap(), MoonPhase::FullMoon);
        assert_eq!("Full Moon".parse::<MoonPhase>().unwrap(), MoonPhase::FullMoon);
        assert_eq!("new".parse::<MoonPhase>().unwrap(), MoonPhase::NewMoon);
        assert!("gibbous".parse::<MoonPhase>().is_err());
    }

    #[test]
    fn numbers_follow_declaration_order() {
        assert_eq!(MoonPhase::Waxing.number(), 0);
        assert_eq!(MoonPhase::NewMoon.number(), 3);
    }
}
