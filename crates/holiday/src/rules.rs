//! The holiday rule families and their aggregation.

use mmcal_calendar::{Month, MoonPhase, MyanmarDate};

use crate::thingyan::thingyan_holiday;

/// A public holiday of the Myanmar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Holiday {
    /// The Myanmar new-year day, the day after the Thingyan atat.
    MyanmarNewYearDay,
    /// The Thingyan atat (ascent) day.
    ThingyanAtat,
    /// A Thingyan akyat day between akya and atat.
    ThingyanAkyat,
    /// The Thingyan akya (descent) day.
    ThingyanAkya,
    /// The Thingyan akyo (welcoming) day.
    ThingyanAkyo,
    /// An extended Thingyan holiday.
    ThingyanHoliday,
    /// January 1 (observed 2018 through 2021).
    NewYearDay,
    /// January 4, from 1948.
    IndependenceDay,
    /// February 12, from 1947.
    UnionDay,
    /// March 2, from 1958.
    PeasantsDay,
    /// March 27, from 1945.
    ResistanceDay,
    /// May 1, from 1923.
    LabourDay,
    /// July 19, from 1947.
    MartyrsDay,
    /// December 25, from 1752.
    ChristmasDay,
    /// The Kason full moon.
    BuddhaDay,
    /// The Waso full moon opening the Buddhist lent.
    StartOfBuddhistLent,
    /// The Thadingyut full moon closing the Buddhist lent.
    EndOfBuddhistLent,
    /// The Tazaungmon full moon.
    Tazaungdaing,
    /// Tazaungmon 25, from ME 1282.
    NationalDay,
    /// Pyatho 1.
    KarenNewYearDay,
    /// The Tabaung full moon.
    TabaungPwe,
    /// A gazetted holiday without its own name (bridge and
    /// substitute days).
    PublicHoliday,
}

impl Holiday {
    /// Returns the English name of the holiday.
    pub fn name(self) -> &'static str {
        match self {
            Holiday::MyanmarNewYearDay => "Myanmar New Year Day",
            Holiday::ThingyanAtat => "Thingyan Atat Day",
            Holiday::ThingyanAkyat => "Thingyan Akyat Day",
            Holiday::ThingyanAkya => "Thingyan Akya Day",
            Holiday::ThingyanAkyo => "Thingyan Akyo Day",
            Holiday::ThingyanHoliday => "Thingyan Holiday",
            Holiday::NewYearDay => "New Year Day",
            Holiday::IndependenceDay => "Independence Day",
            Holiday::UnionDay => "Union Day",
            Holiday::PeasantsDay => "Peasants Day",
            Holiday::ResistanceDay => "Resistance Day",
            Holiday::LabourDay => "Labour Day",
            Holiday::MartyrsDay => "Martyrs Day",
            Holiday::ChristmasDay => "Christmas Day",
            Holiday::BuddhaDay => "Buddha Day",
            Holiday::StartOfBuddhistLent => "Start of Buddhist Lent",
            Holiday::EndOfBuddhistLent => "End of Buddhist Lent",
            Holiday::Tazaungdaing => "Tazaungdaing Festival",
            Holiday::NationalDay => "National Day",
            Holiday::KarenNewYearDay => "Karen New Year Day",
            Holiday::TabaungPwe => "Tabaung Pwe",
            Holiday::PublicHoliday => "Public Holiday",
        }
    }
}

/// Substitute holidays gazetted for 2019 through 2021, by Julian day.
#[rustfmt::skip]
const SUBSTITUTE_DAYS: [i64; 21] = [
    // 2019
    2_458_768, 2_458_772, 2_458_785, 2_458_800,
    // 2020
    2_458_855, 2_458_918, 2_458_950, 2_459_051, 2_459_062,
    2_459_152, 2_459_156, 2_459_167, 2_459_181, 2_459_184,
    // 2021
    2_459_300, 2_459_303, 2_459_323, 2_459_324,
    2_459_335, 2_459_548, 2_459_573,
];

/// Collects every holiday the date carries.
///
/// Each rule family contributes at most one entry, in the order
/// Thingyan, western anniversaries, Myanmar holidays, substitutes.
pub fn holidays(date: &MyanmarDate) -> Vec<Holiday> {
    [
        thingyan_holiday(date),
        western_holiday(date),
        myanmar_holiday(date),
        substitute_holiday(date),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Fixed anniversaries of the civil calendar.
fn western_holiday(date: &MyanmarDate) -> Option<Holiday> {
    let civil = date.civil();
    let (year, month, day) = (civil.year(), civil.month(), civil.day());
    match (month, day) {
        (1, 1) if (2018..=2021).contains(&year) => Some(Holiday::NewYearDay),
        (1, 4) if year >= 1948 => Some(Holiday::IndependenceDay),
        (2, 12) if year >= 1947 => Some(Holiday::UnionDay),
        (3, 2) if year >= 1958 => Some(Holiday::PeasantsDay),
        (3, 27) if year >= 1945 => Some(Holiday::ResistanceDay),
        (5, 1) if year >= 1923 => Some(Holiday::LabourDay),
        (7, 19) if year >= 1947 => Some(Holiday::MartyrsDay),
        (12, 25) if year >= 1752 => Some(Holiday::ChristmasDay),
        (12, 30) if year == 2017 => Some(Holiday::PublicHoliday),
        (12, 31) if (2017..=2021).contains(&year) => Some(Holiday::PublicHoliday),
        _ => None,
    }
}

/// Holidays keyed on the Myanmar month and moon phase.
fn myanmar_holiday(date: &MyanmarDate) -> Option<Holiday> {
    let full_moon = date.moon_phase() == MoonPhase::FullMoon;
    match date.month() {
        Month::Kason if full_moon => Some(Holiday::BuddhaDay),
        Month::Waso if full_moon => Some(Holiday::StartOfBuddhistLent),
        Month::Thadingyut if full_moon => Some(Holiday::EndOfBuddhistLent),
        Month::Thadingyut if date.year() >= 1379 && [14, 16].contains(&date.day()) => {
            Some(Holiday::PublicHoliday)
        }
        Month::Tazaungmon if full_moon => Some(Holiday::Tazaungdaing),
        Month::Tazaungmon if date.year() >= 1379 && date.day() == 14 => {
            Some(Holiday::PublicHoliday)
        }
        Month::Tazaungmon if date.year() >= 1282 && date.day() == 25 => {
            Some(Holiday::NationalDay)
        }
        Month::Pyatho if date.day() == 1 => Some(Holiday::KarenNewYearDay),
        Month::Tabaung if full_moon => Some(Holiday::TabaungPwe),
        _ => None,
    }
}

/// One-off substitute holidays, matched by Julian day.
fn substitute_holiday(date: &MyanmarDate) -> Option<Holiday> {
    let civil_year = date.civil().year();
    if !(2019..=2021).contains(&civil_year) {
        return None;
    }
    SUBSTITUTE_DAYS
        .contains(&date.julian_day().day_number())
        .then_some(Holiday::PublicHoliday)
}
