//! Method dispatch by name over loosely typed arguments.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use kalendar_calendar::{Day, Week};
use serde::Serialize;
use tracing::debug;

use crate::args::{Arg, usage};
use crate::controller::DateController;
use crate::error::ControllerError;
use crate::state::{ControllerState, Transition};

/// A controller method callable through [`DateController::call`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    SetDate,
    SetSelectedDate,
    PickDate,
    SelectDate,
    SetDateNextMonth,
    SetDatePrevMonth,
    FormattedDate,
    FormattedSelectedDate,
    DateNextMonth,
    DatePrevMonth,
    Day,
    Month,
    DaysInMonth,
    WeeksInMonth,
    DayLabelsInWeek,
    DateIsInRange,
    IsWithinRange,
    IsHighlightedDay,
    IsSelectedDay,
    State,
}

impl Method {
    /// Every method, mutators first.
    pub const ALL: [Self; 20] = [
        Self::SetDate,
        Self::SetSelectedDate,
        Self::PickDate,
        Self::SelectDate,
        Self::SetDateNextMonth,
        Self::SetDatePrevMonth,
        Self::FormattedDate,
        Self::FormattedSelectedDate,
        Self::DateNextMonth,
        Self::DatePrevMonth,
        Self::Day,
        Self::Month,
        Self::DaysInMonth,
        Self::WeeksInMonth,
        Self::DayLabelsInWeek,
        Self::DateIsInRange,
        Self::IsWithinRange,
        Self::IsHighlightedDay,
        Self::IsSelectedDay,
        Self::State,
    ];

    /// Snake-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::SetDate => "set_date",
            Self::SetSelectedDate => "set_selected_date",
            Self::PickDate => "pick_date",
            Self::SelectDate => "select_date",
            Self::SetDateNextMonth => "set_date_next_month",
            Self::SetDatePrevMonth => "set_date_prev_month",
            Self::FormattedDate => "formatted_date",
            Self::FormattedSelectedDate => "formatted_selected_date",
            Self::DateNextMonth => "date_next_month",
            Self::DatePrevMonth => "date_prev_month",
            Self::Day => "day",
            Self::Month => "month",
            Self::DaysInMonth => "days_in_month",
            Self::WeeksInMonth => "weeks_in_month",
            Self::DayLabelsInWeek => "day_labels_in_week",
            Self::DateIsInRange => "date_is_in_range",
            Self::IsWithinRange => "is_within_range",
            Self::IsHighlightedDay => "is_highlighted_day",
            Self::IsSelectedDay => "is_selected_day",
            Self::State => "state",
        }
    }

    /// camelCase alias, as used by JavaScript hosts.
    pub fn alias(self) -> &'static str {
        match self {
            Self::SetDate => "setDate",
            Self::SetSelectedDate => "setSelectedDate",
            Self::PickDate => "pickDate",
            Self::SelectDate => "selectDate",
            Self::SetDateNextMonth => "setDateNextMonth",
            Self::SetDatePrevMonth => "setDatePrevMonth",
            Self::FormattedDate => "getFormattedDate",
            Self::FormattedSelectedDate => "getSelectedDate",
            Self::DateNextMonth => "getDateNextMonth",
            Self::DatePrevMonth => "getDatePrevMonth",
            Self::Day => "getDay",
            Self::Month => "getMonth",
            Self::DaysInMonth => "getDaysInMonth",
            Self::WeeksInMonth => "getWeeksInMonth",
            Self::DayLabelsInWeek => "getDayLabelsInWeek",
            Self::DateIsInRange => "dateIsInRange",
            Self::IsWithinRange => "isWithinRange",
            Self::IsHighlightedDay => "isHighlightedDay",
            Self::IsSelectedDay => "isSelectedDay",
            Self::State => "getState",
        }
    }

    /// `true` for methods that may change state.
    pub fn is_mutator(self) -> bool {
        matches!(
            self,
            Self::SetDate
                | Self::SetSelectedDate
                | Self::PickDate
                | Self::SelectDate
                | Self::SetDateNextMonth
                | Self::SetDatePrevMonth
        )
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unknown method name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown method: {0:?}")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s || m.alias() == s)
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

/// The value a dispatched call produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Text(String),
    Date(NaiveDate),
    Number(i64),
    Bool(bool),
    Days(Vec<Day>),
    Weeks(Vec<Week>),
    Labels(Vec<String>),
    State(ControllerState),
    Transition(Transition),
}

impl DateController {
    /// Invokes `method` with loosely typed `args`.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Usage`] when `args` does not match any
    /// shape `method` accepts, or whatever the method itself returns.
    pub fn call(&mut self, method: Method, args: &[Arg]) -> Result<Outcome, ControllerError> {
        debug!(%method, args = args.len(), "call");
        let misuse = || usage(method.name(), args);

        let outcome = match (method, args) {
            (Method::SetDate, [date]) => Outcome::Transition(self.set_date(date)?),
            (Method::SetSelectedDate, [date]) => Outcome::Transition(self.set_selected_date(date)?),
            (Method::PickDate | Method::SelectDate, [date]) => {
                Outcome::Transition(self.pick_date(date)?)
            }
            (Method::SetDateNextMonth, []) => Outcome::Transition(self.set_date_next_month()?),
            (Method::SetDatePrevMonth, []) => Outcome::Transition(self.set_date_prev_month()?),

            (Method::FormattedDate, _) => Outcome::Text(self.get_formatted_date(args)?),
            (Method::FormattedSelectedDate, []) => Outcome::Text(self.selected_formatted()),
            (Method::FormattedSelectedDate, [Arg::Text(pattern)]) => {
                Outcome::Text(self.formatted_selected_date(pattern))
            }
            (Method::DateNextMonth, _) => Outcome::Date(self.get_date_next_month(args)?),
            (Method::DatePrevMonth, _) => Outcome::Date(self.get_date_prev_month(args)?),

            (Method::Day, []) => Outcome::Number(i64::from(self.day())),
            (Method::Day, [date]) => Outcome::Number(i64::from(self.day_of(date)?)),
            (Method::Month, []) => Outcome::Text(self.month("MMM")?),
            (Method::Month, [Arg::Text(format)]) => Outcome::Text(self.month(format)?),
            (Method::Month, [Arg::Text(format), date]) => {
                Outcome::Text(self.month_of(format, date)?)
            }

            (Method::DaysInMonth, []) => Outcome::Days(self.days_in_month()),
            (Method::DaysInMonth, [date]) => Outcome::Days(self.days_in_month_of(date)?),
            (Method::WeeksInMonth, _) => Outcome::Weeks(self.get_weeks_in_month(args)?),
            (Method::DayLabelsInWeek, []) => Outcome::Labels(self.day_labels()),
            (Method::DayLabelsInWeek, [Arg::Text(format)]) => {
                Outcome::Labels(self.day_labels_in_week(format))
            }

            (Method::DateIsInRange, [date, start, end]) => {
                Outcome::Bool(self.date_is_in_range(date, start, end)?)
            }
            (Method::IsWithinRange, [date, other]) => {
                Outcome::Bool(self.is_within_range(date, other)?)
            }
            (Method::IsHighlightedDay, [Arg::Int(n)]) => {
                Outcome::Bool(u32::try_from(*n).is_ok_and(|d| self.is_highlighted_day(d)))
            }
            (Method::IsSelectedDay, [Arg::Int(n)]) => {
                Outcome::Bool(u32::try_from(*n).is_ok_and(|d| self.is_selected_day(d)))
            }
            (Method::State, []) => Outcome::State(self.state()),

            _ => return Err(misuse()),
        };
        Ok(outcome)
    }
}
