use crate::civil::CivilDate;
use crate::consts::CIVIL_EPOCH;
use crate::prelude::*;
use crate::types::is_leap_year;

/// A Julian Day Number: the continuous day count used as the common
/// intermediate between calendar systems.
///
/// Values produced by [`JulianDay::from_civil`] land on the start of the
/// civil day and therefore always carry the `.5` fraction of the
/// midnight-based epoch definitions.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Into)]
#[display(fmt = "{_0}")]
pub struct JulianDay(f64);

impl JulianDay {
    /// Wraps a raw Julian Day Number.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the day count as f64
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Computes the Julian Day Number at the start of the given civil date.
    ///
    /// Incremental proleptic-Gregorian formula: days of all prior years
    /// with leap corrections, a month offset, a leap-year adjustment for
    /// dates past February, then the day of month. All terms are exact
    /// integer arithmetic; only the final epoch addition is floating-point.
    pub fn from_civil(date: &CivilDate) -> Self {
        let year = i64::from(date.year());
        let month = i64::from(date.month());
        let day = i64::from(date.day());

        let prior_years = year - 1;
        let mut days = 365 * prior_years
            + prior_years.div_euclid(4)
            - prior_years.div_euclid(100)
            + prior_years.div_euclid(400)
            + (367 * month - 362).div_euclid(12);

        if month > 2 {
            days -= if is_leap_year(date.year()) { 1 } else { 2 };
        }
        days += day;

        Self(CIVIL_EPOCH - 1.0 + days as f64)
    }
}

impl From<&CivilDate> for JulianDay {
    fn from(date: &CivilDate) -> Self {
        Self::from_civil(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jd(year: u16, month: u8, day: u8) -> f64 {
        JulianDay::from_civil(&CivilDate::new(year, month, day).unwrap()).value()
    }

    #[test]
    fn test_known_julian_days() {
        // Reference values for midnight UT of each civil date
        assert_eq!(jd(2000, 1, 1), 2_451_544.5);
        assert_eq!(jd(1970, 1, 1), 2_440_587.5);
        assert_eq!(jd(2025, 7, 7), 2_460_863.5);
        assert_eq!(jd(1, 1, 1), 1_721_425.5);
    }

    #[test]
    fn test_islamic_epoch_alignment() {
        // 19 July 622 (proleptic Gregorian) is the tabular Islamic epoch
        assert_eq!(jd(622, 7, 19), 1_948_439.5);
    }

    #[test]
    fn test_leap_year_adjustment() {
        // The post-February branch differs between leap and common years
        assert_eq!(jd(2024, 2, 29), 2_460_369.5);
        assert_eq!(jd(2024, 3, 1), 2_460_370.5);
        assert_eq!(jd(2023, 3, 1), 2_460_004.5);
        assert_eq!(jd(2023, 2, 28) + 1.0, jd(2023, 3, 1));
    }

    #[test]
    fn test_consecutive_days_increment_by_one() {
        let mut date = CivilDate::new(1999, 12, 1).unwrap();
        let mut previous = JulianDay::from_civil(&date).value();
        // Walk across a year boundary, a leap February, and a century year
        for _ in 0..500 {
            date = date.succ().unwrap();
            let current = JulianDay::from_civil(&date).value();
            assert_eq!(
                current,
                previous + 1.0,
                "non-consecutive Julian Day at {date}"
            );
            previous = current;
        }
    }

    #[test]
    fn test_half_day_fraction() {
        let value = jd(2025, 6, 28);
        assert_eq!(value.fract(), 0.5);
    }

    #[test]
    fn test_conversions() {
        let jd = JulianDay::new(2_451_544.5);
        assert_eq!(jd.value(), 2_451_544.5);
        assert_eq!(f64::from(jd), 2_451_544.5);
        assert_eq!(JulianDay::from(2_451_544.5), jd);
        assert_eq!(jd.to_string(), "2451544.5");
    }
}
