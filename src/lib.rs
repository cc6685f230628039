mod clock;
mod config;
mod consts;
mod grid;
mod listeners;
mod navigation;
mod picker;
mod prelude;
mod range;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, PickerConfig, YearRange};
pub use consts::*;
pub use grid::{CalendarCell, build, weeks};
pub use listeners::{ListenerHost, ListenerKind, NoListeners};
pub use navigation::{ViewMonth, YearList};
pub use picker::{CellView, Outcome, Picker, PickerEvent, SelectError, SelectionState};
pub use range::{DateRange, RangeError, within_range};
pub use types::{Day, Month, Year, is_leap_year};

use crate::prelude::*;
use crate::types::weekday_from_sunday;
use std::str::FromStr;

/// A real calendar date in canonical `YYYY-MM-DD` form.
///
/// Construction always goes through day-in-month validation, so a value of
/// this type can never hold an auto-normalized overflow such as `2023-02-30`.
/// Ordering follows the calendar and agrees with the lexicographic order of
/// the canonical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{}-{}", year, month, day)]
pub struct CanonicalDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid month index: {} (must be 0-{})", "_0", "MAX_MONTH - 1")]
    InvalidMonthIndex(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CanonicalDate {
    /// `0001-01-01`
    pub const MIN: Self = Self {
        year: Year::MIN,
        month: Month::JANUARY,
        day: Day::first(),
    };

    /// `9999-12-31`
    pub const MAX: Self = Self {
        year: Year::MAX,
        month: Month::DECEMBER,
        day: Day::last_of_year(),
    };

    /// Builds a date from its numeric components, rejecting anything the
    /// calendar would have to roll over.
    ///
    /// # Errors
    /// Returns the `ParseError` naming the first invalid component.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Lenient entry point for host-supplied text: any invalid or empty
    /// input yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    /// Canonical `YYYY-MM-DD` text, the inverse of [`CanonicalDate::parse`].
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Presentation form `dd/mm/yyyy`.
    pub fn display(&self) -> String {
        format!(
            "{}{DISPLAY_SEPARATOR}{}{DISPLAY_SEPARATOR}{}",
            self.day, self.month, self.year
        )
    }

    /// Returns the year number.
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the one-based month number.
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month.
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// The month this date falls in, as a navigable view.
    pub const fn view_month(&self) -> ViewMonth {
        ViewMonth::from_parts(self.year, self.month)
    }

    /// Day of week, 0 = Sunday ..= 6 = Saturday
    pub const fn weekday(&self) -> u8 {
        weekday_from_sunday(self.year, self.month, self.day)
    }

    fn parse_group<T: FromStr>(group: &str) -> Result<T, ParseError> {
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(group.to_owned()));
        }
        group
            .parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(group.to_owned()))
    }
}

impl FromStr for CanonicalDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected 3 {DATE_SEPARATOR}-separated groups, found {}: {trimmed}",
                parts.len()
            )));
        };

        Self::from_ymd(
            Self::parse_group(year)?,
            Self::parse_group(month)?,
            Self::parse_group(day)?,
        )
    }
}

impl serde::Serialize for CanonicalDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CanonicalDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
