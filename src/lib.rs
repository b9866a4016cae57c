mod civil;
mod consts;
mod julian;
mod locale;
mod prelude;
mod range;
mod types;

pub use civil::CivilDate;
pub use consts::*;
pub use julian::JulianDay;
pub use locale::{Locale, format_civil_as_hijri};
pub use range::{CivilRange, RangeError};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::str::FromStr;

/// A date in the tabular Hijri (Islamic civil) calendar.
///
/// Produced from a civil date by a fixed epoch-based arithmetic conversion:
/// 30-year cycles of 10631 days partitioned with the 354.367-day mean year,
/// months resolved against the alternating 30/29 table. This is the civil
/// approximation of the Umm-al-Qura calendar, not the observational one;
/// converted dates can differ from officially sighted dates by a day or two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct HijriDate {
    year: i32,
    month: u8,
    day: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Invalid day {day} for Hijri month {year}-{month:02}")]
    InvalidHijriDay { month: u8, day: u8, year: i32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

/// Length of a Hijri month under the fixed tabular scheme, or `None` for a
/// month outside `1..=12`.
pub const fn days_in_hijri_month(month: u8) -> Option<u8> {
    match month {
        MUHARRAM..=MAX_MONTH => Some(HIJRI_MONTH_LENGTHS[(month - 1) as usize]),
        _ => None,
    }
}

impl HijriDate {
    /// Creates a Hijri date from raw fields, validated against the fixed
    /// 30/29 month-length table.
    ///
    /// Conversion results come from [`HijriDate::from_civil`] instead; this
    /// constructor is for programmatic construction and deserialization.
    ///
    /// # Errors
    /// Returns `DateError` if the month is outside `1..=12` or the day is
    /// outside the month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let Some(length) = days_in_hijri_month(month) else {
            return Err(DateError::InvalidMonth(month));
        };
        if !(MIN_DAY..=length).contains(&day) {
            return Err(DateError::InvalidHijriDay { month, day, year });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the Hijri year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the Hijri month (1 = Muharram)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the Hijri month
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Converts a civil date through its Julian Day Number.
    pub fn from_civil(date: &CivilDate) -> Self {
        Self::from_julian_day(date.julian_day())
    }

    /// Resolves a Julian Day Number to a tabular Hijri date.
    ///
    /// The day count since the Islamic epoch is partitioned into 30-year
    /// cycles of 10631 days; the year within a cycle falls out of the
    /// 354.367-day mean year, and the remaining day-of-year is walked
    /// through the fixed month table. Division is Euclidean throughout so
    /// pre-epoch day counts resolve deterministically.
    ///
    /// The arithmetic is used as-is, with no normalization of its two
    /// boundary artifacts: the first day of each 30-year cycle resolves to
    /// day 0 of Muharram, and the 355th day of an overlong mean-partition
    /// year walks past the table into month 13, day 1.
    pub fn from_julian_day(jd: JulianDay) -> Self {
        let days_since_epoch = (jd.value() - ISLAMIC_EPOCH).floor() as i64 + 1;

        let cycle = (days_since_epoch - 1).div_euclid(DAYS_PER_CYCLE) + 1;
        let rem_in_cycle = (days_since_epoch - 1).rem_euclid(DAYS_PER_CYCLE);
        let year_in_cycle = (rem_in_cycle as f64 / MEAN_HIJRI_YEAR).floor() as i64;
        let mut day_of_year =
            rem_in_cycle - (year_in_cycle as f64 * MEAN_HIJRI_YEAR).floor() as i64;

        let year = YEARS_PER_CYCLE * (cycle - 1) + year_in_cycle + 1;

        let mut month = MUHARRAM;
        for length in HIJRI_MONTH_LENGTHS {
            // A day landing exactly on a month boundary stays in that month
            if day_of_year > i64::from(length) {
                day_of_year -= i64::from(length);
                month += 1;
            } else {
                break;
            }
        }

        Self {
            year: year as i32,
            month,
            day: day_of_year as u8,
        }
    }
}

impl FromStr for HijriDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed}"
            )));
        }

        let year = parts[0]
            .parse::<i32>()
            .map_err(|_| DateError::InvalidFormat(parts[0].to_owned()))?;
        let month = parts[1]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[1].to_owned()))?;
        let day = parts[2]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[2].to_owned()))?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for HijriDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HijriDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
