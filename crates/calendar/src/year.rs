//! Resolved per-year calendar context.

use tracing::trace;

use crate::constants::{ANCHOR_TO_TAGU_DAYS, COMMON_YEAR_DAYS};
use crate::era::WatatAnchor;
use crate::error::CalendarError;
use crate::month::Month;

/// The intercalation class of a Myanmar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearType {
    /// A 354-day year without an intercalary month.
    Common,
    /// A 384-day year inserting the first Waso month.
    LittleWatat,
    /// A 385-day year inserting the first Waso month and an extra day
    /// at the end of Nayon.
    BigWatat,
}

impl YearType {
    /// Whether the year inserts an intercalary month.
    pub fn is_watat(self) -> bool {
        !matches!(self, YearType::Common)
    }

    /// Returns the type code (0..=2).
    pub fn number(self) -> u8 {
        self as u8
    }
}

/// A Myanmar year with its synchronization context resolved.
///
/// Holds the year's own watat anchor, the nearest prior watat anchor
/// the month chain counts from, and everything derived from the pair:
/// year type, year length and the first day of Tagu. Resolved eagerly
/// and immutable afterwards, so no caller can observe a half-updated
/// mix of derived fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MyanmarYear {
    year: i32,
    anchor: WatatAnchor,
    prior: WatatAnchor,
    year_type: YearType,
    length: i64,
    first_tagu_day: i64,
}

impl MyanmarYear {
    /// Resolves the calendar context of a Myanmar year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedEra`] for years before the
    /// earliest tabulated era (including the first years of the era
    /// table, whose prior-watat scan has nothing to reach back to).
    pub fn resolve(year: i32) -> Result<Self, CalendarError> {
        let anchor = WatatAnchor::resolve(year)?;
        let prior = WatatAnchor::nearest_prior(year)?;

        let year_type = if !anchor.is_watat() {
            YearType::Common
        } else {
            let gap =
                (anchor.second_waso_full_moon() - prior.second_waso_full_moon()).rem_euclid(COMMON_YEAR_DAYS);
            if gap / 31 == 0 {
                YearType::LittleWatat
            } else {
                YearType::BigWatat
            }
        };

        let length = COMMON_YEAR_DAYS
            + if year_type.is_watat() { 30 } else { 0 }
            + if year_type == YearType::BigWatat { 1 } else { 0 };

        let elapsed_years = i64::from(year - prior.year());
        let first_tagu_day = prior.second_waso_full_moon() + COMMON_YEAR_DAYS * elapsed_years
            - ANCHOR_TO_TAGU_DAYS;

        trace!(year, ?year_type, length, first_tagu_day, "resolved year");

        Ok(Self {
            year,
            anchor,
            prior,
            year_type,
            length,
            first_tagu_day,
        })
    }

    /// The Myanmar year number.
    pub fn year(self) -> i32 {
        self.year
    }

    /// The year's own watat anchor.
    pub fn anchor(self) -> WatatAnchor {
        self.anchor
    }

    /// The nearest prior watat anchor the year counts from.
    pub fn prior_anchor(self) -> WatatAnchor {
        self.prior
    }

    /// The intercalation class of the year.
    pub fn year_type(self) -> YearType {
        self.year_type
    }

    /// Number of days in the year (354, 384 or 385).
    pub fn length(self) -> i64 {
        self.length
    }

    /// Day count of the first day of Tagu.
    pub fn first_tagu_day(self) -> i64 {
        self.first_tagu_day
    }

    /// Number of days in a month of this year.
    ///
    /// Odd-numbered months have 29 days, even-numbered ones 30; Nayon
    /// gains a day in big watat years. Late-cycle months follow their
    /// base month.
    pub fn month_length(self, month: Month) -> u8 {
        let mut length = 30 - month.base_number() % 2;
        if month == Month::Nayon && self.year_type == YearType::BigWatat {
            length += 1;
        }
        length
    }
}
