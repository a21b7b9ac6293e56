//! Era-specific watat rules and the year anchors they produce.
//!
//! The insertion rule for intercalary months changed across five
//! historical eras. Each era is a [`WatatRule`] implementation carrying
//! its own empirical correction constants; [`era_rule`] is the pure
//! year-to-rule selector. The decomposition engine never inspects era
//! internals — it only consumes [`WatatAnchor`] records.
//!
//! The first-era reckonings decide watat years by position in the
//! 19-year cycle; the second and third eras compare the lunar excess of
//! the year against an era-specific threshold. In both schemes the
//! anchor estimate counts four and a half lunar months past the last
//! whole lunation before the new year and applies the era's day offset.

use tracing::trace;

use crate::constants::{
    EXCESS_EPOCH_YEARS, LATE_MAKARANTA_FIRST_YEAR, LUNAR_MONTH, SECOND_ERA_FIRST_YEAR,
    SECOND_WASO_MONTHS, SOLAR_YEAR, THANDEIKTA_FIRST_YEAR, THIRD_ERA_FIRST_YEAR, ZERO_YEAR_JDN,
};
use crate::error::CalendarError;

/// A watat-insertion rule for one historical era.
///
/// Implementations are stateless; the year is passed to every call so
/// the selector can hand out `'static` instances.
pub trait WatatRule: std::fmt::Debug + Sync {
    /// Human-readable era name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Whether the year inserts an intercalary month.
    fn is_watat(&self, year: i32) -> bool;

    /// Estimated day count (noon-aligned JDN) of the year's second
    /// Waso full moon.
    ///
    /// For common years the estimate still exists but only watat
    /// years' anchors participate in the synchronization chain.
    fn second_waso_full_moon(&self, year: i32) -> i64;
}

/// Lunar excess of a year: the fraction of a lunation left over at the
/// new year, raised by one month when below the era's adjustment
/// threshold.
fn excess_days(year: i32, month_count: f64) -> f64 {
    let threshold = (SOLAR_YEAR / 12.0 - LUNAR_MONTH) * (12.0 - month_count);
    let mut excess = (SOLAR_YEAR * (f64::from(year) + EXCESS_EPOCH_YEARS)) % LUNAR_MONTH;
    if excess < threshold {
        excess += LUNAR_MONTH;
    }
    excess
}

/// Anchor-day estimate shared by all eras.
fn full_moon_estimate(year: i32, day_offset: f64, month_count: f64) -> i64 {
    (SOLAR_YEAR * f64::from(year) + ZERO_YEAR_JDN - excess_days(year, month_count)
        + SECOND_WASO_MONTHS * LUNAR_MONTH
        + day_offset)
        .round() as i64
}

/// Watat test of the first-era reckonings: position in the 19-year
/// cycle.
fn cycle_watat(year: i32) -> bool {
    (i64::from(year) * 7 + 2).rem_euclid(19) / 12 >= 1
}

/// Watat test of the later eras: the lunar excess reaches the era
/// threshold.
fn excess_watat(year: i32, month_count: f64) -> bool {
    let threshold = LUNAR_MONTH - (SOLAR_YEAR / 12.0 - LUNAR_MONTH) * (12.0 - month_count);
    excess_days(year, month_count) >= threshold
}

#[derive(Debug)]
struct EarlyMakaranta;

impl WatatRule for EarlyMakaranta {
    fn name(&self) -> &'static str {
        "early Makaranta"
    }

    fn is_watat(&self, year: i32) -> bool {
        cycle_watat(year)
    }

    fn second_waso_full_moon(&self, year: i32) -> i64 {
        full_moon_estimate(year, -1.1, -1.0)
    }
}

#[derive(Debug)]
struct LateMakaranta;

impl WatatRule for LateMakaranta {
    fn name(&self) -> &'static str {
        "late Makaranta"
    }

    fn is_watat(&self, year: i32) -> bool {
        cycle_watat(year)
    }

    fn second_waso_full_moon(&self, year: i32) -> i64 {
        full_moon_estimate(year, -1.1, -1.0)
    }
}

#[derive(Debug)]
struct Thandeikta;

impl WatatRule for Thandeikta {
    fn name(&self) -> &'static str {
        "Thandeikta"
    }

    fn is_watat(&self, year: i32) -> bool {
        cycle_watat(year)
    }

    fn second_waso_full_moon(&self, year: i32) -> i64 {
        full_moon_estimate(year, -0.85, -1.0)
    }
}

#[derive(Debug)]
struct SecondEra;

impl SecondEra {
    const DAY_OFFSET: f64 = -1.0;
    const MONTH_COUNT: f64 = 4.0;
}

impl WatatRule for SecondEra {
    fn name(&self) -> &'static str {
        "second era"
    }

    fn is_watat(&self, year: i32) -> bool {
        excess_watat(year, Self::MONTH_COUNT)
    }

    fn second_waso_full_moon(&self, year: i32) -> i64 {
        full_moon_estimate(year, Self::DAY_OFFSET, Self::MONTH_COUNT)
    }
}

#[derive(Debug)]
struct ThirdEra;

impl ThirdEra {
    const DAY_OFFSET: f64 = 7.0;
    const MONTH_COUNT: f64 = 6.0;
}

impl WatatRule for ThirdEra {
    fn name(&self) -> &'static str {
        "third era"
    }

    fn is_watat(&self, year: i32) -> bool {
        excess_watat(year, Self::MONTH_COUNT)
    }

    fn second_waso_full_moon(&self, year: i32) -> i64 {
        full_moon_estimate(year, Self::DAY_OFFSET, Self::MONTH_COUNT)
    }
}

/// Selects the watat rule covering a Myanmar year.
///
/// # Errors
///
/// Returns [`CalendarError::UnsupportedEra`] for years before the
/// earliest tabulated era.
pub fn era_rule(year: i32) -> Result<&'static dyn WatatRule, CalendarError> {
    if year < 0 {
        return Err(CalendarError::UnsupportedEra { year });
    }
    Ok(match year {
        y if y >= THIRD_ERA_FIRST_YEAR => &ThirdEra,
        y if y >= SECOND_ERA_FIRST_YEAR => &SecondEra,
        y if y >= THANDEIKTA_FIRST_YEAR => &Thandeikta,
        y if y >= LATE_MAKARANTA_FIRST_YEAR => &LateMakaranta,
        _ => &EarlyMakaranta,
    })
}

/// The per-year synchronization record: whether the year is watat and
/// where its second Waso full moon falls.
///
/// Immutable once computed; the engine derives everything else from a
/// year's own anchor and its nearest prior watat anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatatAnchor {
    year: i32,
    is_watat: bool,
    second_waso_full_moon: i64,
}

impl WatatAnchor {
    /// Computes the anchor for a year under its era's rule.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedEra`] for years before the
    /// earliest tabulated era.
    pub fn resolve(year: i32) -> Result<Self, CalendarError> {
        let rule = era_rule(year)?;
        let anchor = Self {
            year,
            is_watat: rule.is_watat(year),
            second_waso_full_moon: rule.second_waso_full_moon(year),
        };
        trace!(
            year,
            era = rule.name(),
            watat = anchor.is_watat,
            full_moon = anchor.second_waso_full_moon,
            "resolved watat anchor"
        );
        Ok(anchor)
    }

    /// Finds the nearest prior watat anchor for a year.
    ///
    /// Scans back at most three years and stops at the first watat
    /// year; when none of the three qualifies the scan settles on the
    /// third regardless, matching the bounded lookup the month chain
    /// assumes.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedEra`] when the scan runs
    /// past the earliest tabulated era.
    pub fn nearest_prior(year: i32) -> Result<Self, CalendarError> {
        let mut anchor = Self::resolve(year - 1)?;
        for back in 2..=3 {
            if anchor.is_watat {
                return Ok(anchor);
            }
            anchor = Self::resolve(year - back)?;
        }
        Ok(anchor)
    }

    /// The year this anchor describes.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Whether the year inserts an intercalary month.
    pub fn is_watat(self) -> bool {
        self.is_watat
    }

    /// Day count of the year's second Waso full moon.
    pub fn second_waso_full_moon(self) -> i64 {
        self.second_waso_full_moon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_picks_era_by_year_range() {
        assert_eq!(era_rule(0).unwrap().name(), "early Makaranta");
        assert_eq!(era_rule(797).unwrap().name(), "early Makaranta");
        assert_eq!(era_rule(798).unwrap().name(), "late Makaranta");
        assert_eq!(era_rule(1099).unwrap().name(), "late Makaranta");
        assert_eq!(era_rule(1100).unwrap().name(), "Thandeikta");
        assert_eq!(era_rule(1216).unwrap().name(), "Thandeikta");
        assert_eq!(era_rule(1217).unwrap().name(), "second era");
        assert_eq!(era_rule(1311).unwrap().name(), "second era");
        assert_eq!(era_rule(1312).unwrap().name(), "third era");
        assert_eq!(era_rule(2100).unwrap().name(), "third era");
    }

    #[test]
    fn negative_year_is_unsupported() {
        assert_eq!(
            era_rule(-1).unwrap_err(),
            CalendarError::UnsupportedEra { year: -1 }
        );
    }

    #[test]
    fn third_era_watat_years() {
        let watat: Vec<i32> = (1370..1400).filter(|&y| {
            WatatAnchor::resolve(y).unwrap().is_watat()
        }).collect();
        assert_eq!(
            watat,
            vec![1372, 1374, 1377, 1380, 1383, 1385, 1388, 1391, 1393, 1396, 1399]
        );
    }

    #[test]
    fn third_era_anchor_values() {
        // 1385 ME: the watat year anchoring the 1386 new year.
        let anchor = WatatAnchor::resolve(1385).unwrap();
        assert!(anchor.is_watat());
        assert_eq!(anchor.second_waso_full_moon(), 2_460_166);

        // 1374 ME, a little watat year.
        let anchor = WatatAnchor::resolve(1374).unwrap();
        assert!(anchor.is_watat());
        assert_eq!(anchor.second_waso_full_moon(), 2_456_149);
    }

    #[test]
    fn watat_frequency_tracks_seven_in_nineteen() {
        // Both watat schemes repay the solar-lunar gap at the same
        // long-run rate.
        for (lo, hi) in [(100, 700), (1320, 1920)] {
            let count = (lo..hi)
                .filter(|&y| WatatAnchor::resolve(y).unwrap().is_watat())
                .count();
            let expected = (hi - lo) as f64 * 7.0 / 19.0;
            let deviation = (count as f64 - expected).abs();
            assert!(
                deviation < 10.0,
                "{count} watat years in {lo}..{hi}, expected about {expected}"
            );
        }
    }

    #[test]
    fn nearest_prior_stops_at_first_watat() {
        // 1385 is watat, so 1386 anchors one year back.
        let prior = WatatAnchor::nearest_prior(1386).unwrap();
        assert_eq!(prior.year(), 1385);
        assert!(prior.is_watat());

        // 1377 is watat; 1380 is too, so 1379 must reach back two
        // years and 1378 one.
        assert_eq!(WatatAnchor::nearest_prior(1379).unwrap().year(), 1377);
        assert_eq!(WatatAnchor::nearest_prior(1378).unwrap().year(), 1377);
    }

    #[test]
    fn nearest_prior_settles_on_third_year_back() {
        // Wherever three consecutive non-watat years precede a year,
        // the scan must return year - 3 whether or not it is watat.
        for year in 20..2400 {
            let prior = WatatAnchor::nearest_prior(year).unwrap();
            assert!(prior.year() >= year - 3 && prior.year() < year);
            if !prior.is_watat() {
                assert_eq!(prior.year(), year - 3);
            }
        }
    }

    #[test]
    fn early_years_cannot_resolve_a_prior() {
        assert!(WatatAnchor::nearest_prior(2).is_err());
        assert!(WatatAnchor::nearest_prior(3).is_ok());
    }

    #[test]
    fn cycle_watat_positions() {
        // Remainders 2, 5, 7, 10, 13, 15 and 18 of year mod 19 are the
        // intercalary positions of the first-era cycle.
        let positions: Vec<i32> = (0..19).filter(|&r| cycle_watat(r)).collect();
        assert_eq!(positions, vec![2, 5, 7, 10, 13, 15, 18]);
    }
}
