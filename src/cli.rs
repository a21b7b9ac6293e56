use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use mmcal_julian::CalendarMode;

/// Myanmar calendar converter.
#[derive(Parser)]
#[command(name = "mmcal", version, about = "Myanmar calendar converter")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the Myanmar date of a civil date (today by default).
    Show(ShowArgs),
    /// Find the civil date of a Myanmar date.
    Find(FindArgs),
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Civil date as YYYY-MM-DD; the current date if omitted.
    #[arg(short, long)]
    pub date: Option<String>,

    /// Calendar mode: british, gregorian or julian.
    #[arg(short, long, default_value = "british")]
    pub mode: String,

    /// Render with a custom token pattern instead of the full report.
    #[arg(short, long)]
    pub pattern: Option<String>,
}

/// Arguments for the `find` subcommand.
#[derive(clap::Args)]
pub struct FindArgs {
    /// Myanmar year.
    #[arg(short, long)]
    pub year: i32,

    /// Month name or code (0..=14).
    #[arg(short, long)]
    pub month: String,

    /// Day of the month (1..=30).
    #[arg(short, long, conflicts_with_all = ["phase", "fortnight_day"])]
    pub day: Option<u8>,

    /// Moon phase (waxing, full-moon, waning, new-moon).
    #[arg(long, requires = "fortnight_day")]
    pub phase: Option<String>,

    /// Fortnight day (1..=15), used with --phase.
    #[arg(long, requires = "phase")]
    pub fortnight_day: Option<u8>,
}

/// Parses a calendar mode name into the corresponding enum variant.
pub fn parse_mode(s: &str) -> Result<CalendarMode> {
    match s.to_lowercase().as_str() {
        "british" | "mixed" => Ok(CalendarMode::British),
        "gregorian" => Ok(CalendarMode::Gregorian),
        "julian" => Ok(CalendarMode::Julian),
        other => bail!("unknown calendar mode: {other:?}"),
    }
}
