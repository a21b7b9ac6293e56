//! The `&`-token date pattern formatter.

use mmcal_astro::{astro_days, dragon_head_direction};
use mmcal_calendar::MyanmarDate;

use crate::names::{
    astro_day_name, direction_name, month_name_of, moon_phase_name, myanmar_digits,
    padded_myanmar_digits, weekday_name,
};

/// The pattern used when no explicit format is given.
pub const DEFAULT_PATTERN: &str = "&y &M &P &f";

/// Renders a date against a token pattern.
///
/// Tokens, replaced in this order (longer tokens before their
/// prefixes):
///
/// | Token | Replacement |
/// |-------|-------------|
/// | `&yyyy` | Myanmar year, four digits |
/// | `&YYYY` | Sasana year, four digits |
/// | `&y` | Myanmar year |
/// | `&mm` | month number, two digits |
/// | `&M` | month name |
/// | `&m` | month number |
/// | `&P` | moon phase name |
/// | `&dd` | day of month, two digits |
/// | `&d` | day of month |
/// | `&ff` | fortnight day, two digits |
/// | `&f` | fortnight day |
/// | `&W` | weekday name |
/// | `&w` | weekday number |
/// | `&A` | astrological day qualities |
/// | `&D` | dragon head direction |
///
/// All numbers render in Myanmar digits.
pub fn format_date(date: &MyanmarDate, pattern: &str) -> String {
    let year = date.year().unsigned_abs();
    let sasana = date.sasana_year().unsigned_abs();

    let qualities = astro_days(date)
        .into_iter()
        .map(astro_day_name)
        .collect::<Vec<_>>()
        .join("၊ ");

    pattern
        .replace("&yyyy", &padded_myanmar_digits(year, 4))
        .replace("&YYYY", &padded_myanmar_digits(sasana, 4))
        .replace("&y", &myanmar_digits(year))
        .replace("&mm", &padded_myanmar_digits(u32::from(date.month().number()), 2))
        .replace("&M", &month_name_of(date))
        .replace("&m", &myanmar_digits(u32::from(date.month().number())))
        .replace("&P", moon_phase_name(date.moon_phase()))
        .replace("&dd", &padded_myanmar_digits(u32::from(date.day()), 2))
        .replace("&d", &myanmar_digits(u32::from(date.day())))
        .replace("&ff", &padded_myanmar_digits(u32::from(date.fortnight_day()), 2))
        .replace("&f", &myanmar_digits(u32::from(date.fortnight_day())))
        .replace("&W", weekday_name(date.weekday()))
        .replace("&w", &myanmar_digits(u32::from(date.weekday().number())))
        .replace("&A", &qualities)
        .replace("&D", direction_name(dragon_head_direction(date)))
}

/// Renders the customary short date string: year, month and phase,
/// with the fortnight day appended on waxing and waning days.
pub fn short_date(date: &MyanmarDate) -> String {
    use mmcal_calendar::MoonPhase;

    let mut rendered = format!(
        "{} ခု၊ {} {}",
        myanmar_digits(date.year().unsigned_abs()),
        month_name_of(date),
        moon_phase_name(date.moon_phase()),
    );
    if matches!(date.moon_phase(), MoonPhase::Waxing | MoonPhase::Waning) {
        rendered.push_str(&format!(
            " {} ရက်",
            myanmar_digits(u32::from(date.fortnight_day()))
        ));
    }
    rendered
}
