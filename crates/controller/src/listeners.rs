//! Change listeners and the notification pass.

use std::fmt;

use chrono::NaiveDate;
use tracing::trace;

use crate::controller::DateController;
use crate::state::{ControllerState, Transition};

/// Handle returned by listener registration, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub(crate) u64);

/// Callback receiving one of the two dates.
pub type DateListener = Box<dyn FnMut(&mut DateController, NaiveDate)>;

/// Callback receiving the whole state.
pub type StateListener = Box<dyn FnMut(&mut DateController, ControllerState)>;

/// Registered callbacks, grouped by the event they observe.
#[derive(Default)]
pub(crate) struct Listeners {
    date: Vec<(ListenerId, DateListener)>,
    selected: Vec<(ListenerId, DateListener)>,
    change: Vec<(ListenerId, StateListener)>,
}

impl Listeners {
    pub(crate) fn push_date(&mut self, id: ListenerId, f: DateListener) {
        self.date.push((id, f));
    }

    pub(crate) fn push_selected(&mut self, id: ListenerId, f: DateListener) {
        self.selected.push((id, f));
    }

    pub(crate) fn push_change(&mut self, id: ListenerId, f: StateListener) {
        self.change.push((id, f));
    }

    /// Runs one pass for `transition`: date listeners, then selected-date
    /// listeners, then change listeners. Listeners unregistered on `host`
    /// are skipped, even when removed earlier in the same pass.
    pub(crate) fn notify(&mut self, host: &mut DateController, transition: &Transition) {
        let current = transition.current();
        let changed = transition.changed();

        if changed.date {
            for (id, f) in &mut self.date {
                if host.is_registered(*id) {
                    trace!(listener = id.0, "on_date_change");
                    f(host, current.date);
                }
            }
        }
        if changed.selected_date {
            for (id, f) in &mut self.selected {
                if host.is_registered(*id) {
                    trace!(listener = id.0, "on_selected_change");
                    f(host, current.selected_date);
                }
            }
        }
        if changed.any() {
            for (id, f) in &mut self.change {
                if host.is_registered(*id) {
                    trace!(listener = id.0, "on_change");
                    f(host, current);
                }
            }
        }
    }

    /// Moves every listener of `other` to the end of `self`.
    pub(crate) fn append(&mut self, mut other: Listeners) {
        self.date.append(&mut other.date);
        self.selected.append(&mut other.selected);
        self.change.append(&mut other.change);
    }

    /// Keeps only listeners whose id satisfies `keep`.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(ListenerId) -> bool) {
        self.date.retain(|(id, _)| keep(*id));
        self.selected.retain(|(id, _)| keep(*id));
        self.change.retain(|(id, _)| keep(*id));
    }

    pub(crate) fn len(&self) -> usize {
        self.date.len() + self.selected.len() + self.change.len()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("date", &self.date.len())
            .field("selected", &self.selected.len())
            .field("change", &self.change.len())
            .finish()
    }
}
