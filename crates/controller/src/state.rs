//! Controller state and state transitions.

use chrono::NaiveDate;
use serde::Serialize;

/// The two dates a controller owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ControllerState {
    /// The current date, driving month and week derivations.
    pub date: NaiveDate,
    /// The user-picked date.
    pub selected_date: NaiveDate,
}

/// Which fields differ between two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Changed {
    /// `date` changed.
    pub date: bool,
    /// `selected_date` changed.
    pub selected_date: bool,
}

impl Changed {
    /// `true` if either field changed.
    pub fn any(self) -> bool {
        self.date || self.selected_date
    }
}

/// The result of one mutation: state before, state after, and the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    previous: ControllerState,
    current: ControllerState,
    changed: Changed,
}

impl Transition {
    /// Compares `previous` and `current` field by field.
    pub fn new(previous: ControllerState, current: ControllerState) -> Self {
        Self {
            previous,
            current,
            changed: Changed {
                date: previous.date != current.date,
                selected_date: previous.selected_date != current.selected_date,
            },
        }
    }

    /// State before the mutation.
    pub fn previous(&self) -> ControllerState {
        self.previous
    }

    /// State after the mutation.
    pub fn current(&self) -> ControllerState {
        self.current
    }

    /// Which fields changed.
    pub fn changed(&self) -> Changed {
        self.changed
    }

    /// `true` if the mutation changed anything.
    pub fn is_change(&self) -> bool {
        self.changed.any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(date: (i32, u32, u32), selected: (i32, u32, u32)) -> ControllerState {
        ControllerState {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            selected_date: NaiveDate::from_ymd_opt(selected.0, selected.1, selected.2).unwrap(),
        }
    }

    #[test]
    fn no_change() {
        let s = state((1996, 5, 23), (1996, 5, 23));
        let t = Transition::new(s, s);
        assert!(!t.is_change());
        assert_eq!(t.changed(), Changed::default());
    }

    #[test]
    fn date_only() {
        let t = Transition::new(
            state((1996, 5, 23), (1996, 5, 23)),
            state((1996, 6, 23), (1996, 5, 23)),
        );
        assert_eq!(
            t.changed(),
            Changed {
                date: true,
                selected_date: false
            }
        );
        assert!(t.is_change());
    }

    #[test]
    fn both_fields() {
        let t = Transition::new(
            state((1996, 5, 23), (1996, 5, 23)),
            state((2020, 1, 1), (2020, 1, 1)),
        );
        assert!(t.changed().date && t.changed().selected_date);
        assert_eq!(t.previous().date, NaiveDate::from_ymd_opt(1996, 5, 23).unwrap());
        assert_eq!(t.current().date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }

    #[test]
    fn state_serializes() {
        let json = serde_json::to_value(state((2020, 1, 1), (2020, 1, 2))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "date": "2020-01-01", "selected_date": "2020-01-02" })
        );
    }
}
