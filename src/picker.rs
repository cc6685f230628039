//! The picker's interaction lifecycle.
//!
//! [`Picker`] owns the selection state, the view month and the controlled
//! value, and is the only part of the crate with an outward side effect: the
//! `on_change` callback, invoked exactly once per accepted commit. Rejected
//! selections are reported to the caller of [`Picker::handle`] as
//! [`Outcome::Rejected`] and never reach the callback.

use std::fmt;

use crate::clock::{Clock, SystemClock};
use crate::config::PickerConfig;
use crate::consts::MONTH_NAMES;
use crate::grid::{CalendarCell, build};
use crate::listeners::{ListenerHost, ListenerScope, NoListeners};
use crate::navigation::{ViewMonth, YearList};
use crate::range::DateRange;
use crate::{CanonicalDate, ParseError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SelectionState {
    #[default]
    Closed,
    Open,
    MonthPickerOpen,
    YearPickerOpen,
}

impl SelectionState {
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Discrete interaction events delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// The field or button that toggles the picker
    Trigger,
    OutsideInteraction,
    Escape,
    /// Header month button
    OpenMonthPicker,
    /// Header year button
    OpenYearPicker,
    /// Zero-based month index from the month quick-picker
    ChooseMonth(u8),
    ChooseYear(u16),
    PreviousMonth,
    NextMonth,
    ChooseDay(CanonicalDate),
    Today,
    Clear,
}

/// What a single event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The event does not apply in the current state.
    Ignored,
    StateChanged {
        from: SelectionState,
        to: SelectionState,
    },
    /// The view month moved; carries the new view.
    Navigated(ViewMonth),
    /// A value was emitted through `on_change`; `None` for a cleared value.
    Committed(Option<CanonicalDate>),
    /// The selection was refused; nothing was emitted and nothing changed.
    Rejected(SelectError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error(transparent)]
    InvalidInput(#[from] ParseError),

    #[error("{date} is outside the selectable range {range}")]
    OutOfRange { date: CanonicalDate, range: DateRange },

    #[error("year {year} is not offered by the year list ({list})")]
    YearNotListed { year: u16, list: YearList },
}

/// A grid cell annotated for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub cell: CalendarCell,
    /// Outside the configured range; choosing it is rejected.
    pub disabled: bool,
    /// Holds the current value.
    pub selected: bool,
    pub today: bool,
}

pub struct Picker {
    config: PickerConfig,
    value: Option<CanonicalDate>,
    view: ViewMonth,
    state: SelectionState,
    listeners: ListenerScope,
    clock: Box<dyn Clock>,
    on_change: Box<dyn FnMut(String)>,
}

impl Picker {
    /// Creates a closed picker with no value, reading today from the system
    /// clock and without listener subscriptions.
    pub fn new(config: PickerConfig, on_change: impl FnMut(String) + 'static) -> Self {
        let clock: Box<dyn Clock> = Box::new(SystemClock);
        let view = clock.today().view_month();
        if config.range().is_empty() {
            tracing::warn!(range = %config.range(), "configured range is inverted, no date is selectable");
        }
        Self {
            config,
            value: None,
            view,
            state: SelectionState::Closed,
            listeners: ListenerScope::new(Box::new(NoListeners)),
            clock,
            on_change: Box::new(on_change),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self.view = self.anchor();
        self
    }

    /// Replaces the listener host. Listeners held through the previous host
    /// are released first.
    #[must_use]
    pub fn with_listeners(mut self, host: impl ListenerHost + 'static) -> Self {
        self.listeners = ListenerScope::new(Box::new(host));
        if self.state.is_open() {
            self.listeners.acquire();
        }
        self
    }

    #[must_use]
    pub fn with_value(mut self, text: &str) -> Self {
        self.set_value(text);
        self.view = self.anchor();
        self
    }

    /// Returns the current selection state.
    pub const fn state(&self) -> SelectionState {
        self.state
    }

    /// Returns the month being shown.
    pub const fn view(&self) -> ViewMonth {
        self.view
    }

    /// Returns the current value, if any.
    pub const fn value(&self) -> Option<CanonicalDate> {
        self.value
    }

    /// The value in its exchanged form: canonical text or `""`.
    pub fn value_text(&self) -> String {
        self.value.map(|date| date.format()).unwrap_or_default()
    }

    /// Returns the active configuration.
    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Whether the outside-interaction and Escape listeners are held.
    pub const fn is_listening(&self) -> bool {
        self.listeners.is_active()
    }

    /// Updates the controlled value. Unparseable or impossible dates
    /// degrade to no selection.
    pub fn set_value(&mut self, text: &str) {
        self.value = if text.trim().is_empty() {
            None
        } else {
            match text.parse::<CanonicalDate>() {
                Ok(date) => Some(date),
                Err(err) => {
                    tracing::debug!(%err, text, "ignoring invalid picker value");
                    None
                }
            }
        };
    }

    /// Applies new configuration. Becoming disabled closes an open picker
    /// without emitting.
    pub fn set_config(&mut self, config: PickerConfig) {
        if config.range().is_empty() {
            tracing::warn!(range = %config.range(), "configured range is inverted, no date is selectable");
        }
        self.config = config;
        if self.config.disabled && self.state.is_open() {
            self.transition(SelectionState::Closed);
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        let config = PickerConfig {
            disabled,
            ..self.config.clone()
        };
        self.set_config(config);
    }

    pub fn handle(&mut self, event: PickerEvent) -> Outcome {
        use PickerEvent as E;
        use SelectionState as S;

        let from = self.state;
        let outcome = match (from, event) {
            (S::Closed, E::Trigger) if self.config.disabled => Outcome::Ignored,
            (S::Closed, E::Trigger) => {
                self.view = self.anchor();
                self.transition(S::Open)
            }
            (
                S::Open | S::MonthPickerOpen | S::YearPickerOpen,
                E::Trigger | E::OutsideInteraction | E::Escape,
            ) => self.transition(S::Closed),
            (S::Open, E::OpenMonthPicker) => self.transition(S::MonthPickerOpen),
            (S::Open, E::OpenYearPicker) => self.transition(S::YearPickerOpen),
            (S::MonthPickerOpen, E::ChooseMonth(index)) => self.choose_month(index),
            (S::YearPickerOpen, E::ChooseYear(year)) => self.choose_year(year),
            (S::Open, E::PreviousMonth) => self.navigate(self.view.previous()),
            (S::Open, E::NextMonth) => self.navigate(self.view.next()),
            (S::Open, E::ChooseDay(date)) => self.commit_date(date),
            (S::Open, E::Today) if self.config.show_today => {
                let today = self.clock.today();
                self.commit_date(today)
            }
            (S::Open | S::MonthPickerOpen | S::YearPickerOpen, E::Clear)
                if self.config.show_clear && self.value.is_some() =>
            {
                self.commit(None)
            }
            _ => Outcome::Ignored,
        };

        tracing::debug!(?event, ?from, to = ?self.state, ?outcome, "picker event");
        outcome
    }

    /// Chooses a day from typed text instead of a grid cell. Goes through
    /// the same range gate as [`PickerEvent::ChooseDay`].
    pub fn choose_text(&mut self, text: &str) -> Outcome {
        match text.parse::<CanonicalDate>() {
            Ok(date) => self.handle(PickerEvent::ChooseDay(date)),
            Err(err) if self.state == SelectionState::Open => {
                tracing::debug!(%err, text, "rejected typed date");
                Outcome::Rejected(err.into())
            }
            Err(_) => Outcome::Ignored,
        }
    }

    /// The view month's grid with range, selection and today flags.
    pub fn cells(&self) -> Vec<CellView> {
        let range = self.config.range();
        let today = self.clock.today();
        build(self.view)
            .into_iter()
            .map(|cell| {
                let date = cell.date();
                CellView {
                    cell,
                    disabled: date.is_some_and(|d| !range.contains(&d)),
                    selected: date.is_some() && date == self.value,
                    today: date == Some(today),
                }
            })
            .collect()
    }

    pub const fn month_names(&self) -> &'static [&'static str; 12] {
        &MONTH_NAMES
    }

    pub fn year_list(&self) -> YearList {
        self.config.year_list(self.clock.today().year())
    }

    /// Best-effort scroll position for the year list so the view year is
    /// visible when it opens.
    pub fn year_scroll_offset(&self, row_height: f32) -> f32 {
        self.year_list().scroll_offset(self.view.year(), row_height)
    }

    /// Text for the trigger field: the value in `dd/mm/yyyy`, or empty.
    pub fn trigger_label(&self) -> String {
        self.value.map(|date| date.display()).unwrap_or_default()
    }

    pub fn header_label(&self) -> String {
        self.view.label()
    }

    fn anchor(&self) -> ViewMonth {
        self.value.unwrap_or_else(|| self.clock.today()).view_month()
    }

    fn transition(&mut self, to: SelectionState) -> Outcome {
        let from = self.state;
        self.state = to;
        if to.is_open() {
            self.listeners.acquire();
        } else {
            self.listeners.release();
        }
        Outcome::StateChanged { from, to }
    }

    fn navigate(&mut self, view: ViewMonth) -> Outcome {
        self.view = view;
        Outcome::Navigated(view)
    }

    fn choose_month(&mut self, index: u8) -> Outcome {
        match self.view.with_month_index(index) {
            Ok(view) => {
                self.transition(SelectionState::Open);
                self.navigate(view)
            }
            Err(err) => Outcome::Rejected(err.into()),
        }
    }

    fn choose_year(&mut self, year: u16) -> Outcome {
        let list = self.year_list();
        if !list.contains(year) {
            tracing::debug!(year, ?list, "year not in the year list");
            return Outcome::Rejected(SelectError::YearNotListed { year, list });
        }
        match self.view.with_year(year) {
            Ok(view) => {
                self.transition(SelectionState::Open);
                self.navigate(view)
            }
            Err(err) => Outcome::Rejected(err.into()),
        }
    }

    fn commit_date(&mut self, date: CanonicalDate) -> Outcome {
        let range = self.config.range();
        if !range.contains(&date) {
            tracing::debug!(%date, %range, "selection outside range");
            return Outcome::Rejected(SelectError::OutOfRange { date, range });
        }
        self.commit(Some(date))
    }

    fn commit(&mut self, value: Option<CanonicalDate>) -> Outcome {
        self.value = value;
        let text = self.value_text();
        tracing::debug!(value = %text, "committing picker value");
        (self.on_change)(text);
        self.transition(SelectionState::Closed);
        Outcome::Committed(value)
    }
}

impl fmt::Debug for Picker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Picker")
            .field("config", &self.config)
            .field("value", &self.value)
            .field("view", &self.view)
            .field("state", &self.state)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
