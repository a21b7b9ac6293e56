//! Burmese names and numerals.

use mmcal_astro::{AstroDay, Direction};
use mmcal_calendar::{Month, MoonPhase, MyanmarDate, Weekday, YearType};

const DIGITS: [char; 10] = ['၀', '၁', '၂', '၃', '၄', '၅', '၆', '၇', '၈', '၉'];

/// Renders a non-negative number in Myanmar digits.
pub fn myanmar_digits(number: u32) -> String {
    number
        .to_string()
        .chars()
        .map(|c| DIGITS[c.to_digit(10).expect("decimal rendering yields digits") as usize])
        .collect()
}

/// Renders a number in Myanmar digits, zero-padded to `width`
/// characters.
pub fn padded_myanmar_digits(number: u32, width: usize) -> String {
    let rendered = myanmar_digits(number);
    let count = rendered.chars().count();
    if count >= width {
        rendered
    } else {
        DIGITS[0].to_string().repeat(width - count) + &rendered
    }
}

/// Returns the Burmese name of a month.
pub fn month_name(month: Month) -> &'static str {
    match month {
        Month::FirstWaso => "ပ-ဝါဆို",
        Month::Tagu => "တန်ခူး",
        Month::Kason => "ကဆုန်",
        Month::Nayon => "နယုန်",
        Month::Waso => "ဝါဆို",
        Month::Wagaung => "ဝါခေါင်",
        Month::Tawthalin => "တော်သလင်း",
        Month::Thadingyut => "သီတင်းကျွတ်",
        Month::Tazaungmon => "တန်ဆောင်မုန်း",
        Month::Nadaw => "နတ်တော်",
        Month::Pyatho => "ပြာသို",
        Month::Tabodwe => "တပိုတွဲ",
        Month::Tabaung => "တပေါင်း",
        Month::LateTagu => "နှောင်းတန်ခူး",
        Month::LateKason => "နှောင်းကဆုန်",
    }
}

/// Returns the Burmese name of the date's month, marking the Waso of a
/// watat year as the second Waso.
pub fn month_name_of(date: &MyanmarDate) -> String {
    let name = month_name(date.month());
    if date.month() == Month::Waso && date.year_type() != YearType::Common {
        format!("ဒု-{name}")
    } else {
        name.to_string()
    }
}

/// Returns the Burmese name of a moon phase.
pub fn moon_phase_name(phase: MoonPhase) -> &'static str {
    match phase {
        MoonPhase::Waxing => "လဆန်း",
        MoonPhase::FullMoon => "လပြည့်",
        MoonPhase::Waning => "လဆုတ်",
        MoonPhase::NewMoon => "လကွယ်",
    }
}

/// Returns the Burmese name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Saturday => "စနေ",
        Weekday::Sunday => "တနင်္ဂနွေ",
        Weekday::Monday => "တနင်္လာ",
        Weekday::Tuesday => "အင်္ဂါ",
        Weekday::Wednesday => "ဗုဒ္ဓဟူး",
        Weekday::Thursday => "ကြာသပတေး",
        Weekday::Friday => "သောကြာ",
    }
}

/// Returns the Burmese name of an astrological day quality.
pub fn astro_day_name(quality: AstroDay) -> &'static str {
    match quality {
        AstroDay::SabbathEve => "အဖိတ်နေ့",
        AstroDay::Sabbath => "ဥပုသ်နေ့",
        AstroDay::Yatyaza => "ရက်ရာဇာ",
        AstroDay::Pyathada => "ပြဿဒါး",
        AstroDay::Thamanyo => "သမားညို",
        AstroDay::Thamaphyu => "သမားဖြူ",
        AstroDay::Amyeittasote => "အမြိတ္တစုတ်",
        AstroDay::WarameittuGyi => "ဝါရမိတ္တုကြီး",
        AstroDay::WarameittuNge => "ဝါရမိတ္တုငယ်",
        AstroDay::Yatpote => "ရက်ပုပ်",
        AstroDay::Nagapor => "နဂါးပေါ်",
        AstroDay::Yatyotema => "ရက်ယုတ်မာ",
        AstroDay::Mahayatkyan => "မဟာရက်ကြမ်း",
        AstroDay::Shanyat => "ရှမ်းရက်",
    }
}

/// Returns the Burmese name of a direction.
pub fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::West => "အနောက်",
        Direction::North => "မြောက်",
        Direction::East => "အရှေ့",
        Direction::South => "တောင်",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_render() {
        assert_eq!(myanmar_digits(1386), "၁၃၈၆");
        assert_eq!(myanmar_digits(0), "၀");
        assert_eq!(myanmar_digits(205), "၂၀၅");
    }

    #[test]
    fn padding_counts_characters_not_bytes() {
        assert_eq!(padded_myanmar_digits(7, 2), "၀၇");
        assert_eq!(padded_myanmar_digits(15, 2), "၁၅");
        assert_eq!(padded_myanmar_digits(1386, 2), "၁၃၈၆");
        assert_eq!(padded_myanmar_digits(9, 4), "၀၀၀၉");
    }

    #[test]
    fn waso_gains_the_second_prefix_in_watat_years() {
        let watat = MyanmarDate::from_myanmar(1374, Month::Waso, 15).unwrap();
        assert_eq!(month_name_of(&watat), "ဒု-ဝါဆို");

        let common = MyanmarDate::from_myanmar(1386, Month::Waso, 15).unwrap();
        assert_eq!(month_name_of(&common), "ဝါဆို");

        let first = MyanmarDate::from_myanmar(1374, Month::FirstWaso, 15).unwrap();
        assert_eq!(month_name_of(&first), "ပ-ဝါဆို");
    }
}
