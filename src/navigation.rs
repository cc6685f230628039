use crate::consts::{
    DEFAULT_YEARS_AHEAD, DEFAULT_YEARS_BEHIND, MAX_YEAR, MIN_DAY, MIN_YEAR, MONTHS_PER_YEAR,
    YEAR_SCROLL_LEAD_ROWS,
};
use crate::prelude::*;
use crate::types::{Day, Month, Year, days_in_month, weekday_from_sunday};
use crate::{CanonicalDate, ParseError};

/// The month currently shown by the picker, independent of the selected value.
///
/// Always denotes the first day of that month. Months are addressed by
/// zero-based index (January = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{}", year, month)]
pub struct ViewMonth {
    year: Year,
    month: Month,
}

impl ViewMonth {
    /// # Errors
    /// Returns `ParseError::InvalidYear` or `ParseError::InvalidMonthIndex` for
    /// components outside `1..=9999` and `0..=11`.
    pub fn new(year: u16, month_index: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::from_index(month_index)?,
        })
    }

    pub(crate) const fn from_parts(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Returns the year number.
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the zero-based month index.
    pub const fn month_index(&self) -> u8 {
        self.month.index()
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn first_day(&self) -> CanonicalDate {
        CanonicalDate {
            year: self.year,
            month: self.month,
            day: Day::first(),
        }
    }

    /// Weekday of the first day, 0 = Sunday
    pub const fn first_weekday(&self) -> u8 {
        weekday_from_sunday(self.year, self.month, Day::first())
    }

    pub const fn day_count(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Every date of the month in ascending order.
    pub fn days(&self) -> impl Iterator<Item = CanonicalDate> + use<> {
        let (year, month) = (self.year, self.month);
        (MIN_DAY..=self.day_count()).filter_map(move |day| {
            Day::new(day, year, month)
                .ok()
                .map(|day| CanonicalDate { year, month, day })
        })
    }

    /// Steps by `delta` months, carrying into the year. Saturates at
    /// `0001-01` and `9999-12`.
    pub fn add_months(self, delta: i32) -> Self {
        let lowest = i64::from(MIN_YEAR) * MONTHS_PER_YEAR;
        let highest = i64::from(MAX_YEAR) * MONTHS_PER_YEAR + (MONTHS_PER_YEAR - 1);
        let total = (i64::from(self.year.get()) * MONTHS_PER_YEAR
            + i64::from(self.month.index())
            + i64::from(delta))
        .clamp(lowest, highest);

        let year = u16::try_from(total.div_euclid(MONTHS_PER_YEAR));
        let month_index = u8::try_from(total.rem_euclid(MONTHS_PER_YEAR));
        match (year, month_index) {
            (Ok(year), Ok(month_index)) => Self::new(year, month_index).unwrap_or(self),
            _ => self,
        }
    }

    pub fn previous(self) -> Self {
        self.add_months(-1)
    }

    pub fn next(self) -> Self {
        self.add_months(1)
    }

    /// Same year, different month; used by the month quick-picker.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonthIndex` if the index is > 11.
    pub fn with_month_index(self, month_index: u8) -> Result<Self, ParseError> {
        Ok(Self {
            month: Month::from_index(month_index)?,
            ..self
        })
    }

    /// Same month, different year; used by the year quick-picker.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the year is outside `1..=9999`.
    pub fn with_year(self, year: u16) -> Result<Self, ParseError> {
        Ok(Self {
            year: Year::new(year)?,
            ..self
        })
    }

    /// Header text such as `March 2024`.
    pub fn label(&self) -> String {
        format!("{} {}", self.month.name(), self.year.get())
    }
}

/// Years offered by the year quick-picker, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}..={}", oldest, newest)]
pub struct YearList {
    newest: u16,
    oldest: u16,
}

impl YearList {
    /// Bounds may be given in either order and are clamped to `1..=9999`.
    pub fn new(from: u16, to: u16) -> Self {
        let clamp = |year: u16| year.clamp(MIN_YEAR, MAX_YEAR);
        Self {
            newest: clamp(from.max(to)),
            oldest: clamp(from.min(to)),
        }
    }

    /// Default list: ten years ahead of `current_year` down to fifty behind.
    pub fn around(current_year: u16) -> Self {
        Self::new(
            current_year.saturating_sub(DEFAULT_YEARS_BEHIND),
            current_year.saturating_add(DEFAULT_YEARS_AHEAD),
        )
    }

    /// Returns the first (latest) year listed.
    pub const fn newest(&self) -> u16 {
        self.newest
    }

    /// Returns the last (earliest) year listed.
    pub const fn oldest(&self) -> u16 {
        self.oldest
    }

    pub fn years(&self) -> impl Iterator<Item = u16> + use<> {
        (self.oldest..=self.newest).rev()
    }

    pub const fn contains(&self, year: u16) -> bool {
        self.oldest <= year && year <= self.newest
    }

    /// Row of `year` in the descending list.
    pub fn position(&self, year: u16) -> Option<usize> {
        self.contains(year)
            .then(|| usize::from(self.newest - year))
    }

    /// Scroll offset that brings `year` into view with two rows of context
    /// above it. Zero when the year is not listed.
    pub fn scroll_offset(&self, year: u16, row_height: f32) -> f32 {
        self.position(year)
            .and_then(|index| u16::try_from(index).ok())
            .map_or(0.0, |index| {
                (f32::from(index) * row_height - YEAR_SCROLL_LEAD_ROWS * row_height).max(0.0)
            })
    }
}
