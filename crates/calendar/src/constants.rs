//! Numerical constants of the Myanmar calendar.
//!
//! Every load-bearing literal of the era rules and the decomposition
//! algorithm lives here so the whole table can be eyeballed (and
//! tested) in one place.

/// Mean length of a Myanmar solar year in days (1577917828 / 4320000).
pub const SOLAR_YEAR: f64 = 1_577_917_828.0 / 4_320_000.0;

/// Mean length of a lunar month in days (1577917828 / 53433336).
pub const LUNAR_MONTH: f64 = 1_577_917_828.0 / 53_433_336.0;

/// Julian date of the start of Myanmar year zero.
pub const ZERO_YEAR_JDN: f64 = 1_954_168.050_623;

/// Year offset folding the pre-era day count into the lunar excess
/// computation.
pub const EXCESS_EPOCH_YEARS: f64 = 3739.0;

/// Lunar months between the new year and the second Waso full moon.
pub const SECOND_WASO_MONTHS: f64 = 4.5;

/// Days in a common (non-watat) year.
pub const COMMON_YEAR_DAYS: i64 = 354;

/// Days from the prior second-Waso anchor back to the first day of
/// Tagu, after stepping whole common years.
pub const ANCHOR_TO_TAGU_DAYS: i64 = 102;

/// Slope of the linear fit inverting the cumulative 29/30-day month
/// table.
pub const MONTH_FIT_SLOPE: f64 = 29.544;

/// Offset of the linear month fit.
pub const MONTH_FIT_OFFSET: f64 = 29.26;

/// Bias and span of the intercalary-day threshold: a year's day count
/// crosses into the adjusted regime at `(days + 423) / 512`.
pub const EXTRA_DAY_BIAS: i64 = 423;
/// See [`EXTRA_DAY_BIAS`].
pub const EXTRA_DAY_SPAN: i64 = 512;

/// First year of the third era (after independence).
pub const THIRD_ERA_FIRST_YEAR: i32 = 1312;

/// First year of the second era (under British rule).
pub const SECOND_ERA_FIRST_YEAR: i32 = 1217;

/// First year of the Thandeikta reckoning of the first era.
pub const THANDEIKTA_FIRST_YEAR: i32 = 1100;

/// First year of the late Makaranta reckoning of the first era.
pub const LATE_MAKARANTA_FIRST_YEAR: i32 = 798;
