//! The date-state controller.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use chrono::NaiveDate;
use kalendar_calendar::date::{
    add_months, day_of_month, difference_in_days, is_same_month, is_same_year, sub_months,
};
use kalendar_calendar::{
    CalendarError, Day, IntoDate, MonthFormat, Pattern, Week, WeekLayout, WeekStart,
    days_in_month, weekday_labels, weeks_in_month,
};
use tracing::{debug, warn};

use crate::args::{Arg, FormatRequest, MonthShift, WeeksRequest};
use crate::clock::{Clock, SystemClock};
use crate::config::{ControllerConfig, InvalidSeed, Seed};
use crate::error::ControllerError;
use crate::listeners::{ListenerId, Listeners};
use crate::state::{ControllerState, Transition};

/// Label pattern used by [`DateController::day_labels`].
pub const DEFAULT_LABEL_FORMAT: &str = "ddd";

/// Owns a current date and a selected date, derives calendar data from them
/// and notifies listeners when they change.
///
/// Every mutator validates its input before touching state, so a failed call
/// leaves the controller unchanged. A successful call that changes something
/// runs exactly one notification pass. Listeners receive the controller
/// mutably; mutations they make are queued and notified after the current
/// pass, each against the state it replaced.
pub struct DateController {
    state: ControllerState,
    default_format: Pattern,
    week_start: WeekStart,
    week_layout: WeekLayout,
    listeners: Listeners,
    registered: BTreeSet<ListenerId>,
    next_listener: u64,
    pending: VecDeque<Transition>,
    dispatching: bool,
}

impl DateController {
    /// Creates a controller, taking "today" from the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::InvalidConfig`] if `config` fails
    /// validation, or an invalid-date error for an invalid seed under
    /// [`InvalidSeed::Reject`].
    pub fn new(config: &ControllerConfig) -> Result<Self, ControllerError> {
        Self::with_clock(config, &SystemClock)
    }

    /// Creates a controller, taking "today" from `clock`.
    ///
    /// # Errors
    ///
    /// Same as [`DateController::new`].
    pub fn with_clock(
        config: &ControllerConfig,
        clock: &impl Clock,
    ) -> Result<Self, ControllerError> {
        config.validate()?;
        let policy = config.invalid_seed();
        let date = resolve_seed("initial_date", config.initial_date(), policy, clock)?;
        let selected_date = resolve_seed(
            "initial_selected_date",
            config.initial_selected_date(),
            policy,
            clock,
        )?;

        debug!(%date, %selected_date, start_week_at = config.start_week_at(), "controller created");
        Ok(Self {
            state: ControllerState {
                date,
                selected_date,
            },
            default_format: Pattern::parse(config.default_format()),
            week_start: WeekStart::new(config.start_week_at())?,
            week_layout: config.week_layout(),
            listeners: Listeners::default(),
            registered: BTreeSet::new(),
            next_listener: 0,
            pending: VecDeque::new(),
            dispatching: false,
        })
    }

    // --- State ---

    /// A copy of the current state.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// The current date.
    pub fn date(&self) -> NaiveDate {
        self.state.date
    }

    /// The selected date.
    pub fn selected_date(&self) -> NaiveDate {
        self.state.selected_date
    }

    /// The pattern used when none is given.
    pub fn default_format(&self) -> &str {
        self.default_format.as_str()
    }

    /// The configured first day of the week.
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// The configured week layout.
    pub fn week_layout(&self) -> WeekLayout {
        self.week_layout
    }

    // --- Mutators ---

    /// Replaces the current date.
    ///
    /// # Errors
    ///
    /// Returns an invalid-date error, without changing state, if `date` is
    /// not a date.
    pub fn set_date(&mut self, date: impl IntoDate) -> Result<Transition, ControllerError> {
        let date = date.into_date()?;
        Ok(self.apply(ControllerState { date, ..self.state }))
    }

    /// Replaces the selected date.
    ///
    /// # Errors
    ///
    /// Same as [`DateController::set_date`].
    pub fn set_selected_date(
        &mut self,
        date: impl IntoDate,
    ) -> Result<Transition, ControllerError> {
        let selected_date = date.into_date()?;
        Ok(self.apply(ControllerState {
            selected_date,
            ..self.state
        }))
    }

    /// Replaces both dates in one transition.
    ///
    /// # Errors
    ///
    /// Same as [`DateController::set_date`].
    pub fn pick_date(&mut self, date: impl IntoDate) -> Result<Transition, ControllerError> {
        let date = date.into_date()?;
        Ok(self.apply(ControllerState {
            date,
            selected_date: date,
        }))
    }

    /// Alias of [`DateController::pick_date`].
    ///
    /// # Errors
    ///
    /// Same as [`DateController::set_date`].
    pub fn select_date(&mut self, date: impl IntoDate) -> Result<Transition, ControllerError> {
        self.pick_date(date)
    }

    /// Moves the current date one month forward.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error at the upper bound of [`NaiveDate`].
    pub fn set_date_next_month(&mut self) -> Result<Transition, ControllerError> {
        let next = self.date_next_month(MonthShift::default())?;
        self.set_date(next)
    }

    /// Moves the current date one month back.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error at the lower bound of [`NaiveDate`].
    pub fn set_date_prev_month(&mut self) -> Result<Transition, ControllerError> {
        let prev = self.date_prev_month(MonthShift::default())?;
        self.set_date(prev)
    }

    fn apply(&mut self, next: ControllerState) -> Transition {
        let transition = Transition::new(self.state, next);
        self.state = next;
        if transition.is_change() {
            debug!(
                date = %next.date,
                selected_date = %next.selected_date,
                nested = self.dispatching,
                "state changed"
            );
            self.pending.push_back(transition);
            if !self.dispatching {
                self.flush();
            }
        }
        transition
    }

    /// Dispatches queued transitions until the queue is empty.
    ///
    /// If a listener panics, the listeners are restored, queued transitions
    /// are dropped and the panic is resumed, so the controller stays usable
    /// when the caller catches it.
    #[tracing::instrument(level = "debug", skip_all, fields(pending = self.pending.len()))]
    fn flush(&mut self) {
        self.dispatching = true;
        let mut listeners = std::mem::take(&mut self.listeners);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            while let Some(transition) = self.pending.pop_front() {
                listeners.notify(self, &transition);
                // Listeners added during the pass see later transitions only.
                listeners.append(std::mem::take(&mut self.listeners));
            }
        }));
        listeners.append(std::mem::take(&mut self.listeners));
        listeners.retain(|id| self.registered.contains(&id));
        self.listeners = listeners;
        self.dispatching = false;

        if let Err(payload) = outcome {
            warn!(dropped = self.pending.len(), "listener panicked, notification pass abandoned");
            self.pending.clear();
            panic::resume_unwind(payload);
        }
    }

    // --- Listeners ---

    /// Registers `f` to run with the new date whenever the current date changes.
    pub fn on_date_change(
        &mut self,
        f: impl FnMut(&mut DateController, NaiveDate) + 'static,
    ) -> ListenerId {
        let id = self.next_id();
        self.listeners.push_date(id, Box::new(f));
        id
    }

    /// Registers `f` to run with the new selected date whenever it changes.
    pub fn on_selected_change(
        &mut self,
        f: impl FnMut(&mut DateController, NaiveDate) + 'static,
    ) -> ListenerId {
        let id = self.next_id();
        self.listeners.push_selected(id, Box::new(f));
        id
    }

    /// Registers `f` to run with the new state after any change, once the
    /// field-specific listeners have run.
    pub fn on_change(
        &mut self,
        f: impl FnMut(&mut DateController, ControllerState) + 'static,
    ) -> ListenerId {
        let id = self.next_id();
        self.listeners.push_change(id, Box::new(f));
        id
    }

    /// Unregisters a listener. Returns `false` if `id` was not registered.
    ///
    /// Takes effect immediately, including for the rest of a running pass.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let removed = self.registered.remove(&id);
        if removed && !self.dispatching {
            self.listeners.retain(|other| other != id);
        }
        removed
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.registered.len()
    }

    pub(crate) fn is_registered(&self, id: ListenerId) -> bool {
        self.registered.contains(&id)
    }

    fn next_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.registered.insert(id);
        id
    }

    // --- Formatting ---

    /// Formats the current date with the default pattern.
    pub fn formatted(&self) -> String {
        self.default_format.format(self.state.date)
    }

    /// Formats the requested date with the requested pattern.
    pub fn formatted_date(&self, request: &FormatRequest) -> String {
        let date = request.date.unwrap_or(self.state.date);
        match &request.pattern {
            Some(pattern) => kalendar_calendar::format(date, pattern),
            None => self.default_format.format(date),
        }
    }

    /// [`DateController::formatted_date`] over loosely typed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Usage`] for shapes other than `()`,
    /// `(date)`, `(pattern)` and `(date, pattern)`.
    pub fn get_formatted_date(&self, args: &[Arg]) -> Result<String, ControllerError> {
        Ok(self.formatted_date(&FormatRequest::resolve(args)?))
    }

    /// Formats the selected date with `pattern`.
    pub fn formatted_selected_date(&self, pattern: &str) -> String {
        kalendar_calendar::format(self.state.selected_date, pattern)
    }

    /// Formats the selected date with the default pattern.
    pub fn selected_formatted(&self) -> String {
        self.default_format.format(self.state.selected_date)
    }

    // --- Navigation ---

    /// The date `shift.amount` months after the base date.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if the result is not representable.
    pub fn date_next_month(&self, shift: MonthShift) -> Result<NaiveDate, ControllerError> {
        Ok(add_months(
            shift.from.unwrap_or(self.state.date),
            shift.amount,
        )?)
    }

    /// The date `shift.amount` months before the base date.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if the result is not representable.
    pub fn date_prev_month(&self, shift: MonthShift) -> Result<NaiveDate, ControllerError> {
        Ok(sub_months(
            shift.from.unwrap_or(self.state.date),
            shift.amount,
        )?)
    }

    /// [`DateController::date_next_month`] over loosely typed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Usage`] for shapes other than `()`, `(n)`,
    /// `(date)` and `(date, n)`.
    pub fn get_date_next_month(&self, args: &[Arg]) -> Result<NaiveDate, ControllerError> {
        self.date_next_month(MonthShift::resolve("date_next_month", args)?)
    }

    /// [`DateController::date_prev_month`] over loosely typed arguments.
    ///
    /// # Errors
    ///
    /// Same as [`DateController::get_date_next_month`].
    pub fn get_date_prev_month(&self, args: &[Arg]) -> Result<NaiveDate, ControllerError> {
        self.date_prev_month(MonthShift::resolve("date_prev_month", args)?)
    }

    // --- Day and month ---

    /// Day of the month of the current date.
    pub fn day(&self) -> u32 {
        day_of_month(self.state.date)
    }

    /// Day of the month of `date`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-date error if `date` is not a date.
    pub fn day_of(&self, date: impl IntoDate) -> Result<u32, ControllerError> {
        Ok(day_of_month(date.into_date()?))
    }

    /// Month of the current date rendered with `format`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-month-format error unless `format` is one of `M`,
    /// `Mo`, `MM`, `MMM`, `MMMM`.
    pub fn month(&self, format: &str) -> Result<String, ControllerError> {
        Ok(MonthFormat::parse(format)?.format(self.state.date))
    }

    /// Month of `date` rendered with `format`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-month-format or invalid-date error.
    pub fn month_of(&self, format: &str, date: impl IntoDate) -> Result<String, ControllerError> {
        let format = MonthFormat::parse(format)?;
        Ok(format.format(date.into_date()?))
    }

    // --- Enumeration ---

    /// Every day of the current month.
    pub fn days_in_month(&self) -> Vec<Day> {
        days_in_month(self.state.date)
    }

    /// Every day of the month containing `date`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-date error if `date` is not a date.
    pub fn days_in_month_of(&self, date: impl IntoDate) -> Result<Vec<Day>, ControllerError> {
        Ok(days_in_month(date.into_date()?))
    }

    /// Weeks of the current month, starting on the configured weekday.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error at the bounds of [`NaiveDate`].
    pub fn weeks_in_month(&self) -> Result<Vec<Week>, ControllerError> {
        Ok(weeks_in_month(
            self.state.date,
            self.week_start,
            self.week_layout,
        )?)
    }

    /// Weeks of the month containing `date`, starting on `start`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-date or out-of-range error.
    pub fn weeks_in_month_of(
        &self,
        date: impl IntoDate,
        start: WeekStart,
    ) -> Result<Vec<Week>, ControllerError> {
        Ok(weeks_in_month(date.into_date()?, start, self.week_layout)?)
    }

    /// [`DateController::weeks_in_month_of`] over loosely typed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Usage`] for shapes other than `()`,
    /// `(date)` and `(date, start_index)`.
    pub fn get_weeks_in_month(&self, args: &[Arg]) -> Result<Vec<Week>, ControllerError> {
        let request = WeeksRequest::resolve(args)?;
        self.weeks_in_month_of(
            request.date.unwrap_or(self.state.date),
            request.start.unwrap_or(self.week_start),
        )
    }

    /// Seven weekday labels rendered with `format`, starting on the
    /// configured weekday. Independent of the current date.
    pub fn day_labels_in_week(&self, format: &str) -> Vec<String> {
        weekday_labels(self.week_start, format)
    }

    /// Weekday labels in the `ddd` format (`Sun`, `Mon`, ...).
    pub fn day_labels(&self) -> Vec<String> {
        self.day_labels_in_week(DEFAULT_LABEL_FORMAT)
    }

    // --- Predicates ---

    /// `true` if `start <= date <= end`; `false` whenever `start > end`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-date error if any argument is not a date.
    pub fn date_is_in_range(
        &self,
        date: impl IntoDate,
        start: impl IntoDate,
        end: impl IntoDate,
    ) -> Result<bool, ControllerError> {
        let (date, start, end) = (date.into_date()?, start.into_date()?, end.into_date()?);
        Ok(start <= end && start <= date && date <= end)
    }

    /// `true` if `date` is on or after `other`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-date error if either argument is not a date.
    pub fn is_within_range(
        &self,
        date: impl IntoDate,
        other: impl IntoDate,
    ) -> Result<bool, ControllerError> {
        Ok(difference_in_days(date.into_date()?, other.into_date()?) >= 0)
    }

    /// `true` if `day` is the day of the month of the selected date.
    pub fn is_highlighted_day(&self, day: u32) -> bool {
        day == day_of_month(self.state.selected_date)
    }

    /// `true` if the current and selected dates share month and year and
    /// `day` is the selected day.
    pub fn is_selected_day(&self, day: u32) -> bool {
        let ControllerState {
            date,
            selected_date,
        } = self.state;
        is_same_month(date, selected_date)
            && is_same_year(date, selected_date)
            && self.is_highlighted_day(day)
    }
}

impl fmt::Debug for DateController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateController")
            .field("state", &self.state)
            .field("default_format", &self.default_format.as_str())
            .field("week_start", &self.week_start)
            .field("week_layout", &self.week_layout)
            .field("listeners", &self.listeners.len())
            .field("pending", &self.pending.len())
            .finish()
    }
}

fn resolve_seed(
    field: &'static str,
    seed: &Seed,
    policy: InvalidSeed,
    clock: &impl Clock,
) -> Result<NaiveDate, ControllerError> {
    match seed {
        Seed::Today => Ok(clock.today()),
        Seed::Date(date) => Ok(*date),
        Seed::Invalid(reason) => match policy {
            InvalidSeed::Fallback => {
                let today = clock.today();
                warn!(field, %reason, %today, "invalid initial date, using today");
                Ok(today)
            }
            InvalidSeed::Reject => Err(CalendarError::invalid_date(reason).into()),
        },
    }
}
