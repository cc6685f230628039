/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days per month in a common year (index 0 is unused, months are 1-indexed)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// English month names, indexed by zero-based month
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Columns of the calendar grid (Sunday through Saturday)
pub const DAYS_PER_WEEK: usize = 7;

/// Months per year, used for month arithmetic
pub const MONTHS_PER_YEAR: i64 = 12;

/// Default number of years after the current one offered by the year picker
pub const DEFAULT_YEARS_AHEAD: u16 = 10;
/// Default number of years before the current one offered by the year picker
pub const DEFAULT_YEARS_BEHIND: u16 = 50;

/// Rows kept visible above the highlighted year when the year list opens
pub const YEAR_SCROLL_LEAD_ROWS: f32 = 2.0;

pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator of the canonical form
pub const DATE_SEPARATOR: char = '-';
/// Date component separator of the `dd/mm/yyyy` display form
pub const DISPLAY_SEPARATOR: char = '/';
/// Separator between the bounds of a textual range
pub const RANGE_SEPARATOR: char = '/';
/// Marker for an open range bound (ISO 8601 extended form)
pub const OPEN_BOUND: &str = "..";
