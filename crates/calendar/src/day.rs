//! Day and week descriptors produced by month enumeration.

use chrono::NaiveDate;
use serde::Serialize;

use crate::date::{day_of_month, day_of_week};

/// One calendar day with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Day {
    date: NaiveDate,
    label: u32,
    day_of_week: u32,
}

impl Day {
    /// Describes `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            label: day_of_month(date),
            day_of_week: day_of_week(date),
        }
    }

    /// Returns the date.
    pub fn date(self) -> NaiveDate {
        self.date
    }

    /// Returns the day of the month (1..=31).
    pub fn label(self) -> u32 {
        self.label
    }

    /// Returns the day of the week (0 = Sunday ..= 6 = Saturday).
    pub fn day_of_week(self) -> u32 {
        self.day_of_week
    }
}

impl From<NaiveDate> for Day {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

/// An ordered run of days forming one calendar week.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Week {
    days: Vec<Day>,
}

impl Week {
    /// Returns the days of this week in order.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Number of days in this week (7 unless clipped to a month).
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// `true` if the week holds no days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// First day of the week, if any.
    pub fn first(&self) -> Option<Day> {
        self.days.first().copied()
    }

    /// Last day of the week, if any.
    pub fn last(&self) -> Option<Day> {
        self.days.last().copied()
    }

    /// `true` if `date` is one of this week's days.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.iter().any(|d| d.date == date)
    }

    /// Iterates over the days.
    pub fn iter(&self) -> std::slice::Iter<'_, Day> {
        self.days.iter()
    }
}

impl From<Vec<Day>> for Week {
    fn from(days: Vec<Day>) -> Self {
        Self { days }
    }
}

impl<'a> IntoIterator for &'a Week {
    type Item = &'a Day;
    type IntoIter = std::slice::Iter<'a, Day>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
