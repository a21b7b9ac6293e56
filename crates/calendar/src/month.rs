//! Myanmar month numbering.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// A month of the Myanmar year.
///
/// The numbering follows the traditional encoding: `FirstWaso` is 0 and
/// exists only in watat years, the regular months run 1 (Tagu) through
/// 12 (Tabaung), and the late-cycle months — the slices of Tagu and
/// Kason that spill past the solar new year — carry their base number
/// plus twelve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    /// The intercalary month inserted before Waso in watat years.
    FirstWaso,
    /// Month 1, the first month of the year.
    Tagu,
    /// Month 2.
    Kason,
    /// Month 3; gains a thirtieth day in big watat years.
    Nayon,
    /// Month 4 (the second Waso in watat years).
    Waso,
    /// Month 5.
    Wagaung,
    /// Month 6.
    Tawthalin,
    /// Month 7.
    Thadingyut,
    /// Month 8.
    Tazaungmon,
    /// Month 9.
    Nadaw,
    /// Month 10.
    Pyatho,
    /// Month 11.
    Tabodwe,
    /// Month 12.
    Tabaung,
    /// Tagu days past the end of the lunar year (code 13).
    LateTagu,
    /// Kason days past the end of the lunar year (code 14).
    LateKason,
}

const ALL: [Month; 15] = [
    Month::FirstWaso,
    Month::Tagu,
    Month::Kason,
    Month::Nayon,
    Month::Waso,
    Month::Wagaung,
    Month::Tawthalin,
    Month::Thadingyut,
    Month::Tazaungmon,
    Month::Nadaw,
    Month::Pyatho,
    Month::Tabodwe,
    Month::Tabaung,
    Month::LateTagu,
    Month::LateKason,
];

impl Month {
    /// Returns the month code (0..=14).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Creates a month from its code.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `number` is not in
    /// 0..=14.
    pub fn from_number(number: u8) -> Result<Self, CalendarError> {
        ALL.get(number as usize)
            .copied()
            .ok_or(CalendarError::InvalidMonth { month: number })
    }

    /// Whether this is a late-cycle month (Late Tagu or Late Kason).
    pub fn is_late_cycle(self) -> bool {
        matches!(self, Month::LateTagu | Month::LateKason)
    }

    /// Returns the base month code with the late-cycle offset removed
    /// (Late Tagu behaves as Tagu, Late Kason as Kason).
    pub(crate) fn base_number(self) -> u8 {
        let n = self.number();
        n % 13 + n / 13
    }

    /// Returns the English transliteration of the month name.
    pub fn name(self) -> &'static str {
        match self {
            Month::FirstWaso => "First Waso",
            Month::Tagu => "Tagu",
            Month::Kason => "Kason",
            Month::Nayon => "Nayon",
            Month::Waso => "Waso",
            Month::Wagaung => "Wagaung",
            Month::Tawthalin => "Tawthalin",
            Month::Thadingyut => "Thadingyut",
            Month::Tazaungmon => "Tazaungmon",
            Month::Nadaw => "Nadaw",
            Month::Pyatho => "Pyatho",
            Month::Tabodwe => "Tabodwe",
            Month::Tabaung => "Tabaung",
            Month::LateTagu => "Late Tagu",
            Month::LateKason => "Late Kason",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = CalendarError;

    /// Parses a month from its code or its (case- and
    /// separator-insensitive) English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(number) = s.parse::<u8>() {
            return Month::from_number(number);
        }
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        ALL.iter()
            .find(|m| {
                m.name()
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .collect::<String>()
                    .to_ascii_lowercase()
                    == normalized
            })
            .copied()
            .ok_or_else(|| CalendarError::UnknownMonthName {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for number in 0..=14u8 {
            let month = Month::from_number(number).unwrap();
            assert_eq!(month.number(), number);
        }
    }

    #[test]
    fn out_of_range_code_rejected() {
        assert_eq!(
            Month::from_number(15).unwrap_err(),
            CalendarError::InvalidMonth { month: 15 }
        );
    }

    #[test]
    fn late_cycle_months() {
        assert!(Month::LateTagu.is_late_cycle());
        assert!(Month::LateKason.is_late_cycle());
        assert!(!Month::Tagu.is_late_cycle());
        assert!(!Month::FirstWaso.is_late_cycle());
    }

    #[test]
    fn base_number_folds_late_months() {
        assert_eq!(Month::LateTagu.base_number(), Month::Tagu.number());
        assert_eq!(Month::LateKason.base_number(), Month::Kason.number());
        assert_eq!(Month::Waso.base_number(), 4);
        assert_eq!(Month::FirstWaso.base_number(), 0);
    }

    #[test]
    fn parse_by_name_and_code() {
        assert_eq!("tagu".parse::<Month>().unwrap(), Month::Tagu);
        assert_eq!("First Waso".parse::<Month>().unwrap(), Month::FirstWaso);
        assert_eq!("first-waso".parse::<Month>().unwrap(), Month::FirstWaso);
        assert_eq!("late tagu".parse::<Month>().unwrap(), Month::LateTagu);
        assert_eq!("4".parse::<Month>().unwrap(), Month::Waso);
        assert!("notamonth".parse::<Month>().is_err());
    }
}
