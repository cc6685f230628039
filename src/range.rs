use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CanonicalDate, OPEN_BOUND, ParseError, RANGE_SEPARATOR};

/// Optional inclusive bounds on the selectable dates.
///
/// Either side may be absent. Bounds are not required to be ordered: an
/// inverted range is representable and simply contains nothing, see
/// [`DateRange::is_empty`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateRange {
    min: Option<CanonicalDate>,
    max: Option<CanonicalDate>,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Lower bound is after upper bound.
    #[error("Invalid date range: min ({min}) is after max ({max})")]
    InvalidRange { min: CanonicalDate, max: CanonicalDate },

    /// Error parsing a bound.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    pub const fn new(min: Option<CanonicalDate>, max: Option<CanonicalDate>) -> Self {
        Self { min, max }
    }

    /// A range that accepts every date.
    pub const fn unbounded() -> Self {
        Self { min: None, max: None }
    }

    /// Creates a range, rejecting bounds that are out of order.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if min > max.
    pub fn checked(
        min: Option<CanonicalDate>,
        max: Option<CanonicalDate>,
    ) -> Result<Self, RangeError> {
        let range = Self::new(min, max);
        range.validate()?;
        Ok(range)
    }

    /// Returns the inclusive lower bound, if any.
    pub const fn min(&self) -> Option<CanonicalDate> {
        self.min
    }

    /// Returns the inclusive upper bound, if any.
    pub const fn max(&self) -> Option<CanonicalDate> {
        self.max
    }

    /// `false` when the candidate falls before `min` or after `max`; a
    /// missing bound never excludes anything.
    pub fn contains(&self, candidate: &CanonicalDate) -> bool {
        let above_min = self.min.is_none_or(|min| *candidate >= min);
        let below_max = self.max.is_none_or(|max| *candidate <= max);
        above_min && below_max
    }

    /// True when both bounds are set and inverted, so no date qualifies.
    pub fn is_empty(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }

    /// # Errors
    /// Returns `RangeError::InvalidRange` if both bounds are set and min > max.
    pub fn validate(&self) -> Result<(), RangeError> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(RangeError::InvalidRange { min, max }),
            _ => Ok(()),
        }
    }
}

/// Gate applied to every candidate selection, whether it arrives from a
/// day cell or from the "Today" action.
pub fn within_range(candidate: &CanonicalDate, range: &DateRange) -> bool {
    range.contains(candidate)
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.min {
            Some(min) => write!(f, "{min}")?,
            None => f.write_str(OPEN_BOUND)?,
        }
        write!(f, "{RANGE_SEPARATOR}")?;
        match self.max {
            Some(max) => write!(f, "{max}"),
            None => f.write_str(OPEN_BOUND),
        }
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some((min, max)) = trimmed.split_once(RANGE_SEPARATOR) else {
            return Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            )));
        };
        if max.contains(RANGE_SEPARATOR) {
            return Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: {s}"
            )));
        }

        let bound = |text: &str| -> Result<Option<CanonicalDate>, RangeError> {
            let text = text.trim();
            if text.is_empty() || text == OPEN_BOUND {
                Ok(None)
            } else {
                Ok(Some(text.parse()?))
            }
        };

        Self::checked(bound(min)?, bound(max)?)
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
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
    use crate::test_utils::{bounded, date};

    #[test]
    fn test_contains_cases() {
        struct TestCase {
            candidate: &'static str,
            expected: bool,
            description: &'static str,
        }

        let range = bounded("2024-01-01", "2024-01-31");
        let cases = [
            TestCase { candidate: "2024-01-01", expected: true, description: "min is inclusive" },
            TestCase { candidate: "2024-01-15", expected: true, description: "inside" },
            TestCase { candidate: "2024-01-31", expected: true, description: "max is inclusive" },
            TestCase { candidate: "2023-12-31", expected: false, description: "day before min" },
            TestCase { candidate: "2024-02-01", expected: false, description: "day after max" },
        ];

        for case in &cases {
            let candidate = CanonicalDate::parse(case.candidate).unwrap();
            assert_eq!(
                within_range(&candidate, &range),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_open_bounds() {
        let far_past = date(1, 1, 1);
        let far_future = date(9999, 12, 31);

        assert!(DateRange::unbounded().contains(&far_past));
        assert!(DateRange::unbounded().contains(&far_future));

        let from = DateRange::new(Some(date(2024, 6, 1)), None);
        assert!(from.contains(&far_future));
        assert!(!from.contains(&date(2024, 5, 31)));

        let until = DateRange::new(None, Some(date(2024, 6, 1)));
        assert!(until.contains(&far_past));
        assert!(!until.contains(&date(2024, 6, 2)));
    }

    #[test]
    fn test_monotonic_against_text_comparison() {
        let min = "2020-03-15";
        let max = "2021-07-04";
        let range = bounded(min, max);
        for year in 2019..=2022u16 {
            for month in 1..=12u8 {
                for day in [1, 14, 15, 16, 28] {
                    let d = date(year, month, day);
                    let text = d.format();
                    let expected = min <= text.as_str() && text.as_str() <= max;
                    assert_eq!(range.contains(&d), expected, "{text}");
                }
            }
        }
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = bounded("2024-02-01", "2024-01-01");
        assert!(range.is_empty());
        assert!(!range.contains(&date(2024, 1, 15)));
        assert!(matches!(range.validate(), Err(RangeError::InvalidRange { .. })));
        assert!(DateRange::checked(range.min(), range.max()).is_err());
        assert!(!bounded("2024-01-01", "2024-01-01").is_empty());
    }

    #[test]
    fn test_display_and_parse() {
        let range = bounded("2024-01-01", "2024-01-31");
        assert_eq!(range.to_string(), "2024-01-01/2024-01-31");
        assert_eq!("2024-01-01/2024-01-31".parse::<DateRange>().unwrap(), range);

        let open = DateRange::new(None, Some(date(2024, 12, 31)));
        assert_eq!(open.to_string(), "../2024-12-31");
        assert_eq!("../2024-12-31".parse::<DateRange>().unwrap(), open);
        assert_eq!("/2024-12-31".parse::<DateRange>().unwrap(), open);
        assert_eq!("../..".parse::<DateRange>().unwrap(), DateRange::unbounded());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "2024-01-01".parse::<DateRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-01-01/2024-01-02/2024-01-03".parse::<DateRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-02-30/..".parse::<DateRange>(),
            Err(RangeError::ParseError(ParseError::InvalidDay { .. }))
        ));
        assert!(matches!(
            "2024-02-01/2024-01-01".parse::<DateRange>(),
            Err(RangeError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_serde() {
        let range = bounded("2024-01-01", "2024-01-31");
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, "\"2024-01-01/2024-01-31\"");
        let parsed: DateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, range);
    }
}
