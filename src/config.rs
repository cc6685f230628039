use serde::{Deserialize, Deserializer, Serialize};

use crate::{CanonicalDate, DateRange, RangeError, YearList};

/// Host-supplied picker configuration.
///
/// Every field is optional in serialized form; keys are camelCase so the
/// same document a web host sends can be read directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    /// Earliest selectable date. An empty string means unset.
    #[serde(deserialize_with = "empty_as_none")]
    pub min: Option<CanonicalDate>,

    /// Latest selectable date. An empty string means unset.
    #[serde(deserialize_with = "empty_as_none")]
    pub max: Option<CanonicalDate>,

    /// Years offered by the year picker. Defaults to ten years ahead of
    /// today down to fifty years behind.
    pub year_range: Option<YearRange>,

    /// Offer the "Today" action.
    pub show_today: bool,

    /// Offer the "Clear" action.
    pub show_clear: bool,

    /// Ignore the trigger entirely.
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub from: u16,
    pub to: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("year range {from}..{to} lies outside 1..=9999")]
    YearRange { from: u16, to: u16 },
}

impl PickerConfig {
    pub const fn range(&self) -> DateRange {
        DateRange::new(self.min, self.max)
    }

    /// Year list for the quick-picker, falling back to the default window
    /// around `current_year`.
    pub fn year_list(&self, current_year: u16) -> YearList {
        self.year_range
            .map_or_else(|| YearList::around(current_year), |r| YearList::new(r.from, r.to))
    }

    /// Strict check for hosts that want to reject bad configuration up front.
    /// The picker itself tolerates both cases: an inverted range selects
    /// nothing and the year range is clamped.
    ///
    /// # Errors
    /// Returns `ConfigError` for inverted min/max or a year range with no
    /// year inside `1..=9999`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.range().validate()?;
        match self.year_range {
            Some(YearRange { from, to }) if from.max(to) == 0 || from.min(to) > crate::MAX_YEAR => {
                Err(ConfigError::YearRange { from, to })
            }
            _ => Ok(()),
        }
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<CanonicalDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;
    match text.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
