//! Boolean day-quality predicates.
//!
//! The tables are the traditional month/weekday/fortnight-day rules;
//! where a rule names a month it works on the month code with the late
//! cycle folded onto the base months and the first Waso treated as
//! Waso.

use mmcal_calendar::{Month, MyanmarDate, Weekday};

/// A day quality a date can carry.
///
/// A date can carry several at once; see [`astro_days`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AstroDay {
    /// The eve of a sabbath day.
    SabbathEve,
    /// A Buddhist sabbath (uposatha) day.
    Sabbath,
    /// An auspicious royal day.
    Yatyaza,
    /// An inauspicious day for undertakings.
    Pyathada,
    /// Thamanyo.
    Thamanyo,
    /// Thamaphyu.
    Thamaphyu,
    /// Amyeittasote.
    Amyeittasote,
    /// Greater warameittu.
    WarameittuGyi,
    /// Lesser warameittu.
    WarameittuNge,
    /// Yatpote.
    Yatpote,
    /// Nagapor.
    Nagapor,
    /// Yatyotema.
    Yatyotema,
    /// Mahayatkyan.
    Mahayatkyan,
    /// Shanyat.
    Shanyat,
}

impl AstroDay {
    /// Returns the transliterated name of the quality.
    pub fn name(self) -> &'static str {
        match self {
            AstroDay::SabbathEve => "sabbath eve",
            AstroDay::Sabbath => "sabbath",
            AstroDay::Yatyaza => "yatyaza",
            AstroDay::Pyathada => "pyathada",
            AstroDay::Thamanyo => "thamanyo",
            AstroDay::Thamaphyu => "thamaphyu",
            AstroDay::Amyeittasote => "amyeittasote",
            AstroDay::WarameittuGyi => "warameittu gyi",
            AstroDay::WarameittuNge => "warameittu nge",
            AstroDay::Yatpote => "yatpote",
            AstroDay::Nagapor => "nagapor",
            AstroDay::Yatyotema => "yatyotema",
            AstroDay::Mahayatkyan => "mahayatkyan",
            AstroDay::Shanyat => "shanyat",
        }
    }
}

/// Month code with the late cycle folded back onto the base months,
/// and first Waso read as Waso (code 4).
fn folded_month(month: Month) -> i64 {
    let code = i64::from(month.number());
    let folded = code % 13 + code / 13;
    if folded <= 0 {
        4
    } else {
        folded
    }
}

/// Sabbath eves fall the day before each sabbath.
pub fn is_sabbath_eve(date: &MyanmarDate) -> bool {
    let day = date.day();
    [7, 14, 22].contains(&day) || day == date.month_length() - 1
}

/// Sabbath days are the quarter days of the month: the eighth of each
/// half plus the full and new moons.
pub fn is_sabbath(date: &MyanmarDate) -> bool {
    let day = date.day();
    [8, 15, 23].contains(&day) || day == date.month_length()
}

/// Yatyaza pairs each month-of-four group with two favored weekdays.
pub fn is_yatyaza(date: &MyanmarDate) -> bool {
    let m1 = i64::from(date.month().number()) % 4;
    let wd1 = m1 / 2 + 4;
    let wd2 = ((1 - m1 / 2) + m1 % 2) * (1 + 2 * (m1 % 2));
    let weekday = i64::from(date.weekday().number());
    weekday == wd1 || weekday == wd2
}

/// Pyathada pairs each month-of-four group with an adverse weekday.
pub fn is_pyathada(date: &MyanmarDate) -> bool {
    const GROUP_BY_WEEKDAY: [i64; 7] = [1, 3, 3, 0, 2, 1, 2];
    let m1 = i64::from(date.month().number()) % 4;
    m1 == GROUP_BY_WEEKDAY[date.weekday().number() as usize]
}

pub fn is_thamanyo(date: &MyanmarDate) -> bool {
    let month = folded_month(date.month());
    let m1 = month - 1 - month / 9;
    let wd1 = (m1 * 2 - m1 / 8).rem_euclid(7);
    let wd2 = (i64::from(date.weekday().number()) + 7 - wd1) % 7;
    wd2 <= 1
}

pub fn is_thamaphyu(date: &MyanmarDate) -> bool {
    const BY_WEEKDAY: [[u8; 2]; 7] = [[1, 0], [2, 1], [6, 0], [6, 0], [5, 0], [6, 3], [7, 3]];
    let fortnight_day = date.fortnight_day();
    BY_WEEKDAY[date.weekday().number() as usize].contains(&fortnight_day)
        || (fortnight_day == 4 && date.weekday() == Weekday::Thursday)
}

pub fn is_amyeittasote(date: &MyanmarDate) -> bool {
    const BY_WEEKDAY: [u8; 7] = [5, 8, 3, 7, 2, 4, 1];
    date.fortnight_day() == BY_WEEKDAY[date.weekday().number() as usize]
}

pub fn is_warameittu_gyi(date: &MyanmarDate) -> bool {
    const BY_WEEKDAY: [u8; 7] = [7, 1, 4, 8, 9, 6, 3];
    date.fortnight_day() == BY_WEEKDAY[date.weekday().number() as usize]
}

pub fn is_warameittu_nge(date: &MyanmarDate) -> bool {
    let offset = (i64::from(date.weekday().number()) + 6) % 7;
    12 - i64::from(date.fortnight_day()) == offset
}

pub fn is_yatpote(date: &MyanmarDate) -> bool {
    const BY_WEEKDAY: [u8; 7] = [8, 1, 4, 6, 9, 8, 7];
    date.fortnight_day() == BY_WEEKDAY[date.weekday().number() as usize]
}

pub fn is_nagapor(date: &MyanmarDate) -> bool {
    const BY_WEEKDAY: [[u8; 2]; 7] = [
        [26, 17],
        [21, 19],
        [2, 1],
        [10, 0],
        [18, 9],
        [2, 0],
        [21, 0],
    ];
    let day = date.day();
    let weekday = date.weekday();
    BY_WEEKDAY[weekday.number() as usize].contains(&day)
        || (day == 2 && weekday == Weekday::Sunday)
        || ([12, 4, 18].contains(&day) && weekday == Weekday::Monday)
}

pub fn is_yatyotema(date: &MyanmarDate) -> bool {
    let month = folded_month(date.month());
    let m1 = if month % 2 != 0 {
        month
    } else {
        (month + 9) % 12
    };
    let m1 = (m1 + 4) % 12 + 1;
    i64::from(date.fortnight_day()) == m1
}

pub fn is_mahayatkyan(date: &MyanmarDate) -> bool {
    let month = if date.month() == Month::FirstWaso {
        i64::from(Month::Waso.number())
    } else {
        i64::from(date.month().number())
    };
    let m1 = (month % 12) / 2 + 4;
    let m1 = m1 % 6 + 1;
    i64::from(date.fortnight_day()) == m1
}

pub fn is_shanyat(date: &MyanmarDate) -> bool {
    const BY_MONTH: [u8; 12] = [8, 8, 2, 2, 9, 3, 3, 5, 1, 4, 7, 4];
    let month = folded_month(date.month());
    date.fortnight_day() == BY_MONTH[(month - 1) as usize]
}

/// Collects every quality the date carries, in the traditional listing
/// order.
pub fn astro_days(date: &MyanmarDate) -> Vec<AstroDay> {
    let checks: [(AstroDay, fn(&MyanmarDate) -> bool); 14] = [
        (AstroDay::SabbathEve, is_sabbath_eve),
        (AstroDay::Sabbath, is_sabbath),
        (AstroDay::Yatyaza, is_yatyaza),
        (AstroDay::Pyathada, is_pyathada),
        (AstroDay::Thamanyo, is_thamanyo),
        (AstroDay::Thamaphyu, is_thamaphyu),
        (AstroDay::Amyeittasote, is_amyeittasote),
        (AstroDay::WarameittuGyi, is_warameittu_gyi),
        (AstroDay::WarameittuNge, is_warameittu_nge),
        (AstroDay::Yatpote, is_yatpote),
        (AstroDay::Nagapor, is_nagapor),
        (AstroDay::Yatyotema, is_yatyotema),
        (AstroDay::Mahayatkyan, is_mahayatkyan),
        (AstroDay::Shanyat, is_shanyat),
    ];
    checks
        .into_iter()
        .filter_map(|(quality, check)| check(date).then_some(quality))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mmcal_calendar::{Month, MoonPhase, MyanmarDate};

    fn date(year: i32, month: Month, day: u8) -> MyanmarDate {
        MyanmarDate::from_myanmar(year, month, day).unwrap()
    }

    #[test]
    fn new_year_day_1386_is_yatyaza_only() {
        // 2024-04-17: Tagu 1, a Wednesday.
        let d = date(1386, Month::Tagu, 1);
        assert_eq!(astro_days(&d), vec![AstroDay::Yatyaza]);
    }

    #[test]
    fn full_moons_are_sabbath_days() {
        let d = date(1375, Month::Waso, 15);
        assert!(is_sabbath(&d));
        assert!(!is_sabbath_eve(&d));
        assert_eq!(d.moon_phase(), MoonPhase::FullMoon);
    }

    #[test]
    fn day_14_is_a_sabbath_eve() {
        let d = date(1375, Month::Waso, 14);
        assert!(is_sabbath_eve(&d));
        assert!(!is_sabbath(&d));
    }

    #[test]
    fn last_day_of_month_is_a_sabbath() {
        let d = date(1386, Month::Tagu, 29);
        assert!(is_sabbath(&d));
        let eve = date(1386, Month::Tagu, 28);
        assert!(is_sabbath_eve(&eve));
    }

    #[test]
    fn millennium_day_qualities() {
        // 2000-01-01: Nadaw 17, 1361 ME, a Saturday.
        let d = date(1361, Month::Nadaw, 17);
        assert!(is_pyathada(&d));
        assert!(is_thamanyo(&d));
        assert!(is_nagapor(&d));
        assert!(is_yatyotema(&d));
        assert!(!is_yatyaza(&d));
        assert!(!is_sabbath(&d));
        assert_eq!(
            astro_days(&d),
            vec![
                AstroDay::Pyathada,
                AstroDay::Thamanyo,
                AstroDay::Nagapor,
                AstroDay::Yatyotema,
            ]
        );
    }

    #[test]
    fn first_waso_folds_to_waso() {
        // The first Waso full moon of 1385 ME: sabbath, and the
        // month-keyed rules read it as Waso.
        let d = date(1385, Month::FirstWaso, 15);
        assert!(is_sabbath(&d));
        assert!(!is_yatyaza(&d));
        assert!(!is_shanyat(&d));
    }

    #[test]
    fn nayon_new_moon_1377_is_yatyaza() {
        // Nayon 30 of the big watat year 1377 ME fell on a Tuesday.
        let d = date(1377, Month::Nayon, 30);
        assert!(is_yatyaza(&d));
        assert!(is_sabbath(&d));
        assert!(!is_pyathada(&d));
    }
}
