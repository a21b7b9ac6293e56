//! # mmcal-format
//!
//! Burmese rendering of Myanmar dates: Myanmar-digit numerals, month,
//! phase and weekday names, the customary short date string, and a
//! token-pattern formatter.
//!
//! Formatting is a pure function of the read-only fields a decomposed
//! [`MyanmarDate`](mmcal_calendar::MyanmarDate) exposes (plus the
//! astrological qualities for the `&A` and `&D` tokens).
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `names` | Burmese names and numerals |
//! | `pattern` | The `&`-token pattern formatter |

mod names;
mod pattern;

pub use names::{
    astro_day_name, direction_name, month_name, month_name_of, moon_phase_name,
    myanmar_digits, padded_myanmar_digits, weekday_name,
};
pub use pattern::{format_date, short_date, DEFAULT_PATTERN};
