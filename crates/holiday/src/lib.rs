//! # mmcal-holiday
//!
//! Holiday rules of the Myanmar calendar.
//!
//! Four independent rule families contribute to a day's holidays: the
//! Thingyan transition cycle around the solar new year, fixed
//! western-calendar anniversaries, the Myanmar full-moon holidays, and
//! a table of one-off substitute holidays. Each family is a pure
//! lookup keyed on the read-only fields a decomposed
//! [`MyanmarDate`](mmcal_calendar::MyanmarDate) exposes.

mod rules;
mod thingyan;

pub use rules::{holidays, Holiday};
