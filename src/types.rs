use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MONTH_NAMES,
};
use std::fmt;
use std::num::{NonZeroU8, NonZeroU16};

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999).
/// Four digits always suffice, which keeps canonical text sortable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    pub const MIN: Self = Self(NonZeroU16::MIN);
    pub const MAX: Self = Self(NonZeroU16::MIN.saturating_add(MAX_YEAR - 1));

    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        match NonZeroU16::new(value) {
            Some(year) if value <= MAX_YEAR => Ok(Self(year)),
            _ => Err(ParseError::InvalidYear(value)),
        }
    }

    /// Returns the year number.
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.get())
    }
}

/// A calendar month, stored one-based (1..=12).
///
/// The picker addresses months by zero-based index (January = 0), so both
/// views are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    pub const JANUARY: Self = Self(NonZeroU8::MIN);
    pub const DECEMBER: Self = Self(NonZeroU8::MIN.saturating_add(MAX_MONTH - 1));

    /// Creates a new Month from its one-based number.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        match NonZeroU8::new(value) {
            Some(month) if value <= MAX_MONTH => Ok(Self(month)),
            _ => Err(ParseError::InvalidMonth(value)),
        }
    }

    /// Creates a Month from its zero-based index (January = 0).
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonthIndex` if the index is > 11.
    pub fn from_index(index: u8) -> Result<Self, ParseError> {
        index
            .checked_add(1)
            .and_then(|value| Self::new(value).ok())
            .ok_or(ParseError::InvalidMonthIndex(index))
    }

    /// One-based month number
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based month index
    #[inline]
    pub const fn index(self) -> u8 {
        self.0.get() - 1
    }

    /// English month name
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.index() as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

/// A day of month, validated against its year and month on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it exists in the given year and month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        let day = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > days_in_month(year, month) {
            return Err(invalid());
        }
        Ok(Self(day))
    }

    /// The first day of any month
    pub(crate) const fn first() -> Self {
        Self(NonZeroU8::MIN)
    }

    /// December 31st's day number
    pub(crate) const fn last_of_year() -> Self {
        Self(NonZeroU8::MIN.saturating_add(DAYS_IN_MONTH[MAX_MONTH as usize] - 1))
    }

    /// Returns the day of month.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) const fn days_in_month(year: Year, month: Month) -> u8 {
    if month.get() == FEBRUARY && is_leap_year(year.get()) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}

/// Day of week for a proleptic Gregorian date, 0 = Sunday ..= 6 = Saturday.
pub(crate) const fn weekday_from_sunday(year: Year, month: Month, day: Day) -> u8 {
    const MONTH_OFFSETS: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

    // Year is at least 1, so the January/February shift cannot underflow.
    let mut y = year.get() as u32;
    if month.get() < 3 {
        y -= 1;
    }
    let sum =
        y + y / 4 - y / 100 + y / 400 + MONTH_OFFSETS[month.index() as usize] + day.get() as u32;
    (sum % 7) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year_month(year: u16, month: u8) -> (Year, Month) {
        (Year::new(year).unwrap(), Month::new(month).unwrap())
    }

    #[test]
    fn test_year_bounds() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(9999).is_ok());
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(Year::new(10000), Err(ParseError::InvalidYear(10000))));
    }

    #[test]
    fn test_extreme_constants() {
        assert_eq!(Year::MIN.get(), 1);
        assert_eq!(Year::MAX.get(), 9999);
        assert_eq!(Month::JANUARY.index(), 0);
        assert_eq!(Month::DECEMBER.get(), 12);
        assert_eq!(Day::last_of_year().get(), 31);
    }

    #[test]
    fn test_year_display_is_four_digits() {
        assert_eq!(Year::new(7).unwrap().to_string(), "0007");
        assert_eq!(Year::new(2024).unwrap().to_string(), "2024");
    }

    #[test]
    fn test_month_number_and_index() {
        let march = Month::new(3).unwrap();
        assert_eq!(march.get(), 3);
        assert_eq!(march.index(), 2);
        assert_eq!(march.name(), "March");
        assert_eq!(Month::from_index(2).unwrap(), march);
        assert_eq!(march.to_string(), "03");
    }

    #[test]
    fn test_month_out_of_bounds() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
        assert!(matches!(Month::from_index(12), Err(ParseError::InvalidMonthIndex(12))));
        assert!(matches!(Month::from_index(255), Err(ParseError::InvalidMonthIndex(255))));
    }

    #[test]
    fn test_day_validated_against_month() {
        let y2023 = Year::new(2023).unwrap();
        let y2024 = Year::new(2024).unwrap();
        let feb = Month::new(2).unwrap();
        let apr = Month::new(4).unwrap();

        assert!(Day::new(28, y2023, feb).is_ok());
        assert!(Day::new(29, y2023, feb).is_err());
        assert!(Day::new(29, y2024, feb).is_ok());
        assert!(Day::new(30, y2024, feb).is_err());
        assert!(Day::new(30, y2024, apr).is_ok());
        assert!(matches!(
            Day::new(31, y2024, apr),
            Err(ParseError::InvalidDay {
                year: 2024,
                month: 4,
                day: 31
            })
        ));
        assert!(Day::new(0, y2024, apr).is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
        }

        let cases = [
            TestCase { year: 2024, is_leap: true },
            TestCase { year: 2023, is_leap: false },
            TestCase { year: 1900, is_leap: false },
            TestCase { year: 2100, is_leap: false },
            TestCase { year: 2000, is_leap: true },
            TestCase { year: 2400, is_leap: true },
        ];

        for case in &cases {
            assert_eq!(is_leap_year(case.year), case.is_leap, "year {}", case.year);
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12u8 {
            let (y, m) = year_month(2023, month);
            assert_eq!(days_in_month(y, m), expected[month as usize]);
        }
        for (year, february) in [(2024, 29), (2000, 29), (1900, 28)] {
            let (y, m) = year_month(year, 2);
            assert_eq!(days_in_month(y, m), february, "{year}");
        }
    }

    #[test]
    fn test_weekday_known_dates() {
        struct TestCase {
            date: (u16, u8, u8),
            weekday: u8,
            description: &'static str,
        }

        let cases = [
            TestCase { date: (2024, 2, 1), weekday: 4, description: "Thursday" },
            TestCase { date: (2023, 2, 1), weekday: 3, description: "Wednesday" },
            TestCase { date: (2000, 1, 1), weekday: 6, description: "Saturday" },
            TestCase { date: (1970, 1, 1), weekday: 4, description: "Thursday" },
            TestCase { date: (2024, 12, 1), weekday: 0, description: "Sunday" },
            TestCase { date: (1, 1, 1), weekday: 1, description: "Monday" },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            let (year, month) = year_month(y, m);
            let day = Day::new(d, year, month).unwrap();
            assert_eq!(
                weekday_from_sunday(year, month, day),
                case.weekday,
                "{y:04}-{m:02}-{d:02} should be a {}",
                case.description
            );
        }
    }
}
