//! # mmcal-astro
//!
//! Astrological day qualities of the Myanmar calendar.
//!
//! Everything here is a pure table lookup keyed on the read-only
//! fields a decomposed [`MyanmarDate`](mmcal_calendar::MyanmarDate)
//! exposes — month, day, fortnight day and weekday. Nothing feeds back
//! into the calendar engine.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `days` | Boolean day-quality predicates (sabbath, yatyaza, ...) |
//! | `signs` | Year and month signs (mahabote, nakhat, dragon head) |

mod days;
mod signs;

pub use days::{
    astro_days, is_amyeittasote, is_mahayatkyan, is_nagapor, is_pyathada, is_sabbath,
    is_sabbath_eve, is_shanyat, is_thamanyo, is_thamaphyu, is_warameittu_gyi,
    is_warameittu_nge, is_yatpote, is_yatyaza, is_yatyotema, AstroDay,
};
pub use signs::{dragon_head_direction, mahabote, nakhat, Direction, Mahabote, Nakhat};
