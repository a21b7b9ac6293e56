//! The `find` subcommand: Myanmar date to civil date.

use anyhow::{bail, Context, Result};
use tracing::info;

use mmcal_calendar::{Month, MoonPhase, MyanmarDate};

use crate::cli::FindArgs;

pub fn run(args: FindArgs) -> Result<()> {
    let month: Month = args
        .month
        .parse()
        .with_context(|| format!("invalid month {:?}", args.month))?;

    let date = match (args.day, args.phase, args.fortnight_day) {
        (Some(day), None, None) => MyanmarDate::from_myanmar(args.year, month, day)
            .with_context(|| format!("resolving {month} {day}, {} ME", args.year))?,
        (None, Some(ref phase), Some(fortnight_day)) => {
            let phase: MoonPhase = phase
                .parse()
                .with_context(|| format!("invalid moon phase {phase:?}"))?;
            MyanmarDate::from_fortnight(args.year, month, phase, fortnight_day)
                .with_context(|| {
                    format!("resolving {month} {phase} {fortnight_day}, {} ME", args.year)
                })?
        }
        (None, None, None) => bail!("pass either --day or --phase with --fortnight-day"),
        _ => bail!("--day and --phase/--fortnight-day are mutually exclusive"),
    };
    info!(jdn = date.julian_day().day_number(), "composed date");

    let civil = date.civil();
    println!(
        "{:04}-{:02}-{:02} ({}) = {} {} ({} {}), {} ME",
        civil.year(),
        civil.month(),
        civil.day(),
        date.weekday(),
        date.month(),
        date.day(),
        date.moon_phase(),
        date.fortnight_day(),
        date.year(),
    );
    Ok(())
}
