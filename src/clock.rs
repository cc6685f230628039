use chrono::{Datelike, Local, NaiveDate};

use crate::CanonicalDate;

/// Source of "today" for anchoring the view and for the Today action.
pub trait Clock {
    fn today(&self) -> CanonicalDate;
}

/// Reads the local calendar date from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CanonicalDate {
        let today = Local::now().date_naive();
        from_naive(today).unwrap_or_else(|| {
            tracing::warn!(%today, "system date outside the supported calendar, clamping");
            if today.year() > 0 {
                CanonicalDate::MAX
            } else {
                CanonicalDate::MIN
            }
        })
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CanonicalDate);

impl Clock for FixedClock {
    fn today(&self) -> CanonicalDate {
        self.0
    }
}

fn from_naive(date: NaiveDate) -> Option<CanonicalDate> {
    let year = u16::try_from(date.year()).ok()?;
    let month = u8::try_from(date.month()).ok()?;
    let day = u8::try_from(date.day()).ok()?;
    CanonicalDate::from_ymd(year, month, day).ok()
}
