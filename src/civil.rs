use std::str::FromStr;

use crate::julian::JulianDay;
use crate::prelude::*;
use crate::types::{Day, Month, Year, days_in_month};
use crate::{DateError, HijriDate};
use crate::consts::{DATE_SEPARATOR, DECEMBER, JANUARY, MAX_YEAR, MIN_DAY};

/// A proleptic Gregorian calendar date.
///
/// Construction validates all three fields (leap-aware), so every value of
/// this type is a real calendar date. Ordering is plain calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CivilDate {
    year: Year,
    month: Month,
    day: Day,
}

impl CivilDate {
    /// Creates a date from raw year, month, and day values.
    ///
    /// # Errors
    /// Returns `DateError` if any field is out of range for the proleptic
    /// Gregorian calendar.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_t = Year::new(year)?;
        let month_t = Month::new(month)?;
        let day_t = Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Returns the year (1..=9999)
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1..=12)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month (1..=31)
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Julian Day Number at the start of this date.
    pub fn julian_day(&self) -> JulianDay {
        JulianDay::from_civil(self)
    }

    /// This date in the tabular Hijri calendar.
    pub fn to_hijri(&self) -> HijriDate {
        HijriDate::from_civil(self)
    }

    /// The next calendar day, rolling over month and year boundaries.
    /// Returns `None` past 9999-12-31.
    pub fn succ(self) -> Option<Self> {
        let (year, month, day) = (self.year(), self.month(), self.day());
        let (next_year, next_month, next_day) = if day < days_in_month(year, month) {
            (year, month, day + 1)
        } else if month < DECEMBER {
            (year, month + 1, MIN_DAY)
        } else if year < MAX_YEAR {
            (year + 1, JANUARY, MIN_DAY)
        } else {
            return None;
        };
        // Components were rolled over within their valid ranges
        Self::new(next_year, next_month, next_day).ok()
    }
}

impl FromStr for CivilDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // ISO format only: YYYY-MM-DD
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed}"
            )));
        }

        let year = parse_u16(parts[0])?;
        let month = parse_u8(parts[1])?;
        let day = parse_u8(parts[2])?;

        Self::new(year, month, day)
    }
}

/// Helper to parse u16 with better error messages
fn parse_u16(s: &str) -> Result<u16, DateError> {
    s.parse::<u16>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, DateError> {
    s.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
