//! Date arithmetic over [`chrono::NaiveDate`].
//!
//! Month arithmetic clamps the day to the length of the target month, so
//! January 31 plus one month is the last day of February.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::CalendarError;
use crate::week_start::WeekStart;

/// Number of days in the month containing `date`.
pub fn month_length(date: NaiveDate) -> u32 {
    end_of_month(date).day()
}

/// Shifts `date` by `amount` months (negative moves backwards).
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result is not representable.
pub fn add_months(date: NaiveDate, amount: i32) -> Result<NaiveDate, CalendarError> {
    let months = Months::new(amount.unsigned_abs());
    let shifted = if amount >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    shifted.ok_or(CalendarError::OutOfRange {
        date,
        op: "add_months",
    })
}

/// Shifts `date` back by `amount` months.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result is not representable.
pub fn sub_months(date: NaiveDate, amount: i32) -> Result<NaiveDate, CalendarError> {
    let negated = amount.checked_neg().ok_or(CalendarError::OutOfRange {
        date,
        op: "sub_months",
    })?;
    add_months(date, negated)
}

/// Shifts `date` by `amount` days (negative moves backwards).
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result is not representable.
pub fn add_days(date: NaiveDate, amount: i64) -> Result<NaiveDate, CalendarError> {
    let days = Days::new(amount.unsigned_abs());
    let shifted = if amount >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    };
    shifted.ok_or(CalendarError::OutOfRange {
        date,
        op: "add_days",
    })
}

/// Shifts `date` by `amount` weeks.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result is not representable.
pub fn add_weeks(date: NaiveDate, amount: i64) -> Result<NaiveDate, CalendarError> {
    let days = amount.checked_mul(7).ok_or(CalendarError::OutOfRange {
        date,
        op: "add_weeks",
    })?;
    add_days(date, days)
}

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    match start_of_month(date).checked_add_months(Months::new(1)) {
        Some(next) => next.pred_opt().expect("a first of month has a predecessor"),
        // Only the last month of the range has no successor, and it is a December.
        None => date.with_day(31).expect("December has 31 days"),
    }
}

/// First day of the week containing `date`, with weeks starting on `start`.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] near the lower bound of [`NaiveDate`].
pub fn start_of_week(date: NaiveDate, start: WeekStart) -> Result<NaiveDate, CalendarError> {
    let offset = start.offset_of(date.weekday());
    date.checked_sub_days(Days::new(u64::from(offset)))
        .ok_or(CalendarError::OutOfRange {
            date,
            op: "start_of_week",
        })
}

/// Last day of the week containing `date`, with weeks starting on `start`.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] near either bound of [`NaiveDate`].
pub fn end_of_week(date: NaiveDate, start: WeekStart) -> Result<NaiveDate, CalendarError> {
    add_days(start_of_week(date, start)?, 6)
}

/// `true` when both dates fall in the same month of the same year.
pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// `true` when both dates fall in the same year.
pub fn is_same_year(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year()
}

/// Whole days from `b` to `a` (positive when `a` is later).
pub fn difference_in_days(a: NaiveDate, b: NaiveDate) -> i64 {
    a.signed_duration_since(b).num_days()
}

/// Day of the month (1..=31).
pub fn day_of_month(date: NaiveDate) -> u32 {
    date.day()
}

/// Day of the week (0 = Sunday ..= 6 = Saturday).
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}
