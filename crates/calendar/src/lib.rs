//! # mmcal-calendar
//!
//! The Myanmar lunisolar calendar engine.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["JulianDay"] -->|"MyanmarDate::from_julian"| D["MyanmarDate"]
//!     Y["year number"] -->|"era_rule()"| R["WatatRule (5 eras)"]
//!     R -->|"WatatAnchor::resolve"| W["WatatAnchor"]
//!     W -->|"MyanmarYear::resolve"| C["MyanmarYear"]
//!     C --> D
//!     D -->|"add_days()"| D
//!     M["(year, month, day)"] -->|"MyanmarDate::from_myanmar"| D
//! ```
//!
//! The engine decomposes a Julian day into Myanmar fields and composes
//! them back. Both directions hang off the same synchronization
//! reference: the second Waso full moon of the nearest prior watat
//! year, estimated by the era rule covering the year. The round trip
//! `compose(decompose(jdn)) == jdn` is the correctness oracle — no
//! independent ground truth exists beyond the era tables.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mmcal_calendar::{Month, MoonPhase, MyanmarDate};
//! use mmcal_julian::{CalendarMode, CivilDate};
//!
//! let civil = CivilDate::new(2024, 4, 17)?;
//! let date = MyanmarDate::from_civil(civil, CalendarMode::Gregorian)?;
//! assert_eq!(date.year(), 1386);
//! assert_eq!(date.month(), Month::Tagu);
//! assert_eq!(date.day(), 1);
//!
//! let lent = MyanmarDate::from_fortnight(1375, Month::Waso, MoonPhase::FullMoon, 1)?;
//! assert_eq!(lent.civil().year(), 2013);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `constants` | The numerical constants table |
//! | `era` | Era watat rules, the selector and year anchors |
//! | `year` | Resolved per-year context |
//! | `month` | Month numbering |
//! | `phase` | Moon phase classification |
//! | `weekday` | Saturday-first weekdays |
//! | `date` | The `MyanmarDate` value object |
//! | `error` | Error types |

pub mod constants;

mod compose;
mod date;
mod decompose;
mod era;
mod error;
mod month;
mod phase;
mod weekday;
mod year;

pub use date::MyanmarDate;
pub use era::{era_rule, WatatAnchor, WatatRule};
pub use error::CalendarError;
pub use month::Month;
pub use phase::MoonPhase;
pub use weekday::Weekday;
pub use year::{MyanmarYear, YearType};
