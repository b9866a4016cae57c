use std::str::FromStr;

use crate::civil::CivilDate;
use crate::consts::RANGE_SEPARATOR;
use crate::prelude::*;
use crate::{DateError, HijriDate};

/// An inclusive range of civil dates, for batch conversion.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct CivilRange {
    start: CivilDate,
    end: CivilDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: CivilDate, end: CivilDate },

    /// Error parsing a date endpoint.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl CivilRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: CivilDate, end: CivilDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> CivilDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> CivilDate {
        self.end
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: &CivilDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if this range overlaps with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Iterates the range day by day, both endpoints included.
    pub fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }

    /// Converts the range day by day, yielding each civil date with its
    /// Hijri counterpart.
    pub fn to_hijri(&self) -> impl Iterator<Item = (CivilDate, HijriDate)> {
        self.days().map(|date| (date, HijriDate::from_civil(&date)))
    }
}

/// Day-by-day iterator over a [`CivilRange`], both endpoints included.
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<CivilDate>,
    end: CivilDate,
}

impl Iterator for Days {
    type Item = CivilDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current == self.end {
            None
        } else {
            current.succ()
        };
        Some(current)
    }
}

impl std::iter::FusedIterator for Days {}

impl FromStr for CivilRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // ISO 8601 interval form: start and end separated by RANGE_SEPARATOR
        let mut endpoints = trimmed.split(RANGE_SEPARATOR);
        let (Some(start), Some(end), None) =
            (endpoints.next(), endpoints.next(), endpoints.next())
        else {
            return Err(RangeError::InvalidFormat(format!(
                "Expected start{RANGE_SEPARATOR}end, found {trimmed}"
            )));
        };

        Self::new(start.parse::<CivilDate>()?, end.parse::<CivilDate>()?)
    }
}

impl serde::Serialize for CivilRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CivilRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CivilDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_validates_order() {
        let start = date("2025-06-01");
        let end = date("2025-06-30");
        let range = CivilRange::new(start, end).unwrap();
        assert_eq!(range.start(), start);
        assert_eq!(range.end(), end);

        assert!(matches!(
            CivilRange::new(end, start),
            Err(RangeError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_single_day_range() {
        let day = date("2025-06-28");
        let range = CivilRange::new(day, day).unwrap();
        assert_eq!(range.days().collect::<Vec<_>>(), vec![day]);
    }

    #[test]
    fn test_contains() {
        let range: CivilRange = "2025-06-01/2025-06-30".parse().unwrap();
        assert!(range.contains(&date("2025-06-01")));
        assert!(range.contains(&date("2025-06-15")));
        assert!(range.contains(&date("2025-06-30")));
        assert!(!range.contains(&date("2025-05-31")));
        assert!(!range.contains(&date("2025-07-01")));
    }

    #[test]
    fn test_overlaps() {
        let june: CivilRange = "2025-06-01/2025-06-30".parse().unwrap();
        let late_june: CivilRange = "2025-06-20/2025-07-10".parse().unwrap();
        let august: CivilRange = "2025-08-01/2025-08-31".parse().unwrap();
        assert!(june.overlaps(&late_june));
        assert!(late_june.overlaps(&june));
        assert!(!june.overlaps(&august));
    }

    #[test]
    fn test_days_iteration_counts() {
        // Leap February
        let range: CivilRange = "2024-02-01/2024-03-01".parse().unwrap();
        assert_eq!(range.days().count(), 30);

        // Across a year boundary
        let range: CivilRange = "2024-12-30/2025-01-02".parse().unwrap();
        let days: Vec<String> = range.days().map(|d| d.to_string()).collect();
        assert_eq!(
            days,
            ["2024-12-30", "2024-12-31", "2025-01-01", "2025-01-02"]
        );
    }

    #[test]
    fn test_days_is_fused() {
        let range: CivilRange = "2025-06-28/2025-06-29".parse().unwrap();
        let mut days = range.days();
        assert!(days.next().is_some());
        assert!(days.next().is_some());
        assert!(days.next().is_none());
        assert!(days.next().is_none());
    }

    #[test]
    fn test_batch_conversion() {
        // The tabular year 1447 begins on 28 June 2025
        let range: CivilRange = "2025-06-26/2025-06-29".parse().unwrap();
        let hijri: Vec<(i32, u8, u8)> = range
            .to_hijri()
            .map(|(_, h)| (h.year(), h.month(), h.day()))
            .collect();
        assert_eq!(
            hijri,
            [(1446, 12, 29), (1446, 13, 1), (1447, 1, 1), (1447, 1, 2)]
        );
    }

    #[test]
    fn test_batch_conversion_is_monotone() {
        let range: CivilRange = "2019-08-01/2019-10-01".parse().unwrap();
        let mut previous = None;
        for (civil, hijri) in range.to_hijri() {
            let current = (hijri.year(), hijri.month(), hijri.day());
            if let Some(p) = previous {
                assert!(current > p, "regressed at {civil}: {p:?} -> {current:?}");
            }
            previous = Some(current);
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(
            "2025-06-01".parse::<CivilRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2025-06-01/2025-06-30/2025-07-31".parse::<CivilRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2025-06-XX/2025-06-30".parse::<CivilRange>(),
            Err(RangeError::Date(DateError::InvalidFormat(_)))
        ));
        assert!(matches!(
            "2025-06-30/2025-06-01".parse::<CivilRange>(),
            Err(RangeError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_serde_string_form() {
        let range: CivilRange = "2025-06-01/2025-06-30".parse().unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#""2025-06-01/2025-06-30""#);
        let parsed: CivilRange = serde_json::from_str(&json).unwrap();
        assert_eq!(range, parsed);

        let result: Result<CivilRange, _> =
            serde_json::from_str(r#""2025-06-30/2025-06-01""#);
        assert!(result.is_err());
    }
}
