//! Julian day newtype.

/// A Julian Day Number with a fractional time component.
///
/// The integer part counts days; the fraction is the offset from noon,
/// so integer values fall exactly on noon. This keeps a civil date and
/// its preceding midnight inside the same day number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Creates a `JulianDay` from a raw day value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw day value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the day count, rounding the time component to the
    /// nearest day boundary.
    ///
    /// A fraction of exactly -0.5 (midnight) rounds into the day it
    /// starts.
    pub fn day_number(self) -> i64 {
        self.0.round() as i64
    }

    /// Returns the offset from noon in fractional days.
    pub fn day_fraction(self) -> f64 {
        self.0 - self.day_number() as f64
    }

    /// Returns a new `JulianDay` shifted by a whole number of days.
    ///
    /// The time component is preserved.
    pub fn add_days(self, days: i64) -> Self {
        Self(self.0 + days as f64)
    }
}

impl From<i64> for JulianDay {
    fn from(day: i64) -> Self {
        Self(day as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn integer_day_is_noon() {
        let jd = JulianDay::new(2_460_418.0);
        assert_eq!(jd.day_number(), 2_460_418);
        assert_relative_eq!(jd.day_fraction(), 0.0);
    }

    #[test]
    fn midnight_rounds_into_the_starting_day() {
        let jd = JulianDay::new(2_460_417.5);
        assert_eq!(jd.day_number(), 2_460_418);
        assert_relative_eq!(jd.day_fraction(), -0.5);
    }

    #[test]
    fn late_evening_stays_in_the_day() {
        let jd = JulianDay::new(2_460_418.4);
        assert_eq!(jd.day_number(), 2_460_418);
    }

    #[test]
    fn add_days_preserves_fraction() {
        let jd = JulianDay::new(2_460_418.25).add_days(-7);
        assert_eq!(jd.day_number(), 2_460_411);
        assert_relative_eq!(jd.day_fraction(), 0.25);
    }

    #[test]
    fn ordering_follows_time() {
        assert!(JulianDay::new(2_460_418.0) < JulianDay::new(2_460_418.1));
        assert!(JulianDay::new(2_460_417.9) < JulianDay::new(2_460_418.0));
    }

    #[test]
    fn from_day_number() {
        let jd = JulianDay::from(2_451_545);
        assert_relative_eq!(jd.value(), 2_451_545.0);
    }
}
