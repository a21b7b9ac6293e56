//! The `show` subcommand: civil date to Myanmar date.

use anyhow::{bail, Context, Result};
use tracing::info;

use mmcal_astro::{astro_days, dragon_head_direction, mahabote, nakhat};
use mmcal_calendar::{MyanmarDate, YearType};
use mmcal_format::{format_date, short_date};
use mmcal_holiday::holidays;
use mmcal_julian::CivilDate;

use crate::cli::{parse_mode, ShowArgs};

pub fn run(args: ShowArgs) -> Result<()> {
    let mode = parse_mode(&args.mode)?;
    let date = match args.date {
        Some(ref text) => {
            let civil = parse_civil_date(text)?;
            MyanmarDate::from_civil(civil, mode)
                .with_context(|| format!("converting {civil}"))?
        }
        None => MyanmarDate::today().context("reading the system clock")?,
    };
    info!(jdn = date.julian_day().day_number(), "decomposed date");

    if let Some(pattern) = args.pattern {
        println!("{}", format_date(&date, &pattern));
        return Ok(());
    }

    print_report(&date);
    Ok(())
}

fn print_report(date: &MyanmarDate) {
    let year_type = match date.year_type() {
        YearType::Common => "common",
        YearType::LittleWatat => "little watat",
        YearType::BigWatat => "big watat",
    };

    println!("{} ({})", date.civil(), date.weekday());
    println!(
        "Myanmar date : {} {} ({} {}), {} ME",
        date.month(),
        date.day(),
        date.moon_phase(),
        date.fortnight_day(),
        date.year(),
    );
    println!("Sasana year  : {}", date.sasana_year());
    println!(
        "Year type    : {year_type} ({} days, month of {} days)",
        date.year_length(),
        date.month_length(),
    );
    println!("Julian day   : {}", date.julian_day().day_number());
    println!("Burmese      : {}", short_date(date));
    println!(
        "Signs        : mahabote {}, nakhat {}, dragon head {}",
        mahabote(date).name(),
        nakhat(date).name(),
        dragon_head_direction(date).name(),
    );

    let qualities = astro_days(date);
    if !qualities.is_empty() {
        let names: Vec<_> = qualities.into_iter().map(|q| q.name()).collect();
        println!("Astro days   : {}", names.join(", "));
    }

    let observed = holidays(date);
    if !observed.is_empty() {
        let names: Vec<_> = observed.into_iter().map(|h| h.name()).collect();
        println!("Holidays     : {}", names.join(", "));
    }
}

/// Parses a `YYYY-MM-DD` date string.
fn parse_civil_date(text: &str) -> Result<CivilDate> {
    let parts: Vec<&str> = text.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        bail!("expected YYYY-MM-DD, got {text:?}");
    };
    let year: i32 = year.parse().with_context(|| format!("invalid year in {text:?}"))?;
    let month: u8 = month.parse().with_context(|| format!("invalid month in {text:?}"))?;
    let day: u8 = day.parse().with_context(|| format!("invalid day in {text:?}"))?;
    CivilDate::new(year, month, day).map_err(Into::into)
}
