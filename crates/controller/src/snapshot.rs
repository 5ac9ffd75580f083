//! The render boundary.

use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use serde_json::Value;

use crate::controller::DateController;
use crate::state::ControllerState;

/// Caller-supplied values passed through to the render callback untouched.
pub type Extras = BTreeMap<String, Value>;

/// What a render callback receives: the state at the start of the render,
/// the caller's extras, and the controller itself through `Deref`/`DerefMut`.
pub struct Snapshot<'a> {
    state: ControllerState,
    extras: Extras,
    controller: &'a mut DateController,
}

impl Snapshot<'_> {
    /// The state captured when the render started.
    ///
    /// Mutations made through the snapshot are visible through the
    /// controller's own accessors, not here.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// All extras.
    pub fn extras(&self) -> &Extras {
        &self.extras
    }

    /// One extra by key.
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extras.get(key)
    }

    /// The captured state and the extras as one JSON object. Extras win on
    /// key collisions.
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("date".to_string(), Value::String(self.state.date.to_string()));
        map.insert(
            "selected_date".to_string(),
            Value::String(self.state.selected_date.to_string()),
        );
        for (key, value) in &self.extras {
            map.insert(key.clone(), value.clone());
        }
        Value::Object(map)
    }
}

impl Deref for Snapshot<'_> {
    type Target = DateController;

    fn deref(&self) -> &DateController {
        self.controller
    }
}

impl DerefMut for Snapshot<'_> {
    fn deref_mut(&mut self) -> &mut DateController {
        self.controller
    }
}

impl DateController {
    /// Hands a [`Snapshot`] of this controller and `extras` to `render` and
    /// returns whatever it produces.
    pub fn render<R>(&mut self, extras: Extras, render: impl FnOnce(&mut Snapshot<'_>) -> R) -> R {
        let mut snapshot = Snapshot {
            state: self.state(),
            extras,
            controller: self,
        };
        render(&mut snapshot)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::clock::FixedClock;
    use crate::config::ControllerConfig;

    fn controller() -> DateController {
        let date = NaiveDate::from_ymd_opt(1996, 5, 23).unwrap();
        DateController::with_clock(&ControllerConfig::new(), &FixedClock(date)).unwrap()
    }

    #[test]
    fn extras_pass_through() {
        let mut c = controller();
        let mut extras = Extras::new();
        extras.insert("title".to_string(), json!("Agenda"));
        let title = c.render(extras, |s| s.extra("title").cloned());
        assert_eq!(title, Some(json!("Agenda")));
    }

    #[test]
    fn derivations_through_deref() {
        let mut c = controller();
        let text = c.render(Extras::new(), |s| s.formatted());
        assert_eq!(text, "05/23/96");
    }

    #[test]
    fn mutation_through_snapshot() {
        let mut c = controller();
        let captured = c.render(Extras::new(), |s| {
            s.set_date_next_month().unwrap();
            s.state()
        });
        assert_eq!(captured.date, NaiveDate::from_ymd_opt(1996, 5, 23).unwrap());
        assert_eq!(c.date(), NaiveDate::from_ymd_opt(1996, 6, 23).unwrap());
    }

    #[test]
    fn json_merges_state_and_extras() {
        let mut c = controller();
        let mut extras = Extras::new();
        extras.insert("theme".to_string(), json!({ "dark": true }));
        let value = c.render(extras, |s| s.to_json());
        assert_eq!(
            value,
            json!({
                "date": "1996-05-23",
                "selected_date": "1996-05-23",
                "theme": { "dark": true },
            })
        );
    }
}
