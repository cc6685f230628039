//! Month grid construction.
//!
//! A grid is a flat, Sunday-first sequence of cells covering whole weeks:
//! blanks before the first of the month, one cell per day, then blanks up to
//! the end of the last week. Grids are rebuilt for every view month and never
//! edited in place.

use crate::consts::{DAYS_PER_WEEK, MIN_DAY};
use crate::{CanonicalDate, ViewMonth};

/// One slot of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarCell {
    /// Padding before the first or after the last day of the month
    Blank,
    /// A day of the view month
    Day(CanonicalDate),
}

impl CalendarCell {
    pub const fn date(&self) -> Option<CanonicalDate> {
        match self {
            Self::Day(date) => Some(*date),
            Self::Blank => None,
        }
    }

    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

/// Builds the grid for `view`. The result length is always a multiple of 7.
pub fn build(view: ViewMonth) -> Vec<CalendarCell> {
    let leading = usize::from(view.first_weekday());
    let total = (leading + usize::from(view.day_count())).div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;

    let mut cells = Vec::with_capacity(total);
    cells.resize(leading, CalendarCell::Blank);
    cells.extend(view.days().map(CalendarCell::Day));
    cells.resize(total, CalendarCell::Blank);

    debug_assert_eq!(cells.len() % DAYS_PER_WEEK, 0);
    debug_assert!(
        cells
            .iter()
            .find_map(CalendarCell::date)
            .is_none_or(|first| first.day() == MIN_DAY)
    );
    cells
}

/// Splits a grid into week rows.
pub fn weeks(cells: &[CalendarCell]) -> impl Iterator<Item = &[CalendarCell]> {
    cells.chunks(DAYS_PER_WEEK)
}
