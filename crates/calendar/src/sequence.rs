//! Day and week enumeration for a calendar month.

use chrono::{Days, NaiveDate};

use crate::date::{add_days, add_weeks, end_of_month, is_same_month, start_of_month, start_of_week};
use crate::day::{Day, Week};
use crate::error::CalendarError;
use crate::pattern::Pattern;
use crate::week_start::WeekStart;

/// How the weeks at either edge of a month are shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeekLayout {
    /// Every week has 7 days; the first and last week may include days of
    /// the neighbouring months.
    #[default]
    Full,
    /// Days outside the month are dropped, so the first and last week may
    /// be shorter than 7 days.
    Clipped,
}

/// Every date from `start` to `end`, inclusive.
///
/// Returns an empty vector when `start > end`.
///
/// # Example
///
/// ```ignore
/// let dates = each_day(ymd(2000, 12, 30), ymd(2001, 1, 2));
/// assert_eq!(dates.len(), 4);
/// // Dec 30, Dec 31, Jan 1 (2001), Jan 2 (2001)
/// ```
pub fn each_day(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// One [`Day`] for every day of the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> Vec<Day> {
    each_day(start_of_month(date), end_of_month(date))
        .into_iter()
        .map(Day::new)
        .collect()
}

/// The weeks of the month containing `date`.
///
/// Enumeration starts at the week containing the first of the month and
/// advances one week at a time while the next week still starts inside the
/// month.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] when a week would extend past the
/// range representable by [`NaiveDate`].
pub fn weeks_in_month(
    date: NaiveDate,
    start: WeekStart,
    layout: WeekLayout,
) -> Result<Vec<Week>, CalendarError> {
    let mut weeks = Vec::with_capacity(6);
    let mut first_day = start_of_week(start_of_month(date), start)?;

    loop {
        let last_day = add_days(first_day, 6)?;
        let mut days: Vec<Day> = each_day(first_day, last_day)
            .into_iter()
            .map(Day::new)
            .collect();
        if layout == WeekLayout::Clipped {
            days.retain(|d| is_same_month(d.date(), date));
        }
        weeks.push(Week::from(days));

        let next = add_weeks(first_day, 1)?;
        if !is_same_month(next, date) {
            break;
        }
        first_day = next;
    }

    Ok(weeks)
}

/// Weekday labels in display order, starting on `start`.
///
/// Each weekday is rendered with `pattern` (`ddd` gives `Sun`, `Mon`, ...)
/// against a fixed reference week, so the result does not depend on any
/// particular date.
pub fn weekday_labels(start: WeekStart, pattern: &str) -> Vec<String> {
    let pattern = Pattern::parse(pattern);
    // 2023-01-01 is a Sunday.
    let sunday = NaiveDate::from_ymd_opt(2023, 1, 1).expect("2023-01-01 is a valid date");
    start
        .days()
        .into_iter()
        .map(|weekday| {
            let offset = Days::new(u64::from(weekday.num_days_from_sunday()));
            let day = sunday
                .checked_add_days(offset)
                .expect("reference week lies inside the NaiveDate range");
            pattern.format(day)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn each_day_empty_when_reversed() {
        assert!(each_day(ymd(2000, 1, 2), ymd(2000, 1, 1)).is_empty());
    }

    #[test]
    fn each_day_single() {
        assert_eq!(each_day(ymd(2000, 6, 15), ymd(2000, 6, 15)), [ymd(2000, 6, 15)]);
    }

    #[test]
    fn each_day_year_transition() {
        let dates = each_day(ymd(2000, 12, 30), ymd(2001, 1, 2));
        assert_eq!(
            dates,
            [
                ymd(2000, 12, 30),
                ymd(2000, 12, 31),
                ymd(2001, 1, 1),
                ymd(2001, 1, 2)
            ]
        );
    }

    #[test]
    fn days_in_month_lengths() {
        assert_eq!(days_in_month(ymd(1996, 5, 23)).len(), 31);
        assert_eq!(days_in_month(ymd(1996, 2, 1)).len(), 29);
        assert_eq!(days_in_month(ymd(1997, 2, 1)).len(), 28);
        assert_eq!(days_in_month(ymd(1997, 4, 30)).len(), 30);
    }

    #[test]
    fn days_in_month_labels() {
        let days = days_in_month(ymd(1996, 5, 23));
        for (i, day) in days.iter().enumerate() {
            assert_eq!(day.label() as usize, i + 1);
            assert_eq!(day.date(), ymd(1996, 5, i as u32 + 1));
        }
        // 1996-05-01 was a Wednesday.
        assert_eq!(days[0].day_of_week(), 3);
    }

    #[test]
    fn weeks_may_1996_sunday() {
        let weeks = weeks_in_month(ymd(1996, 5, 23), WeekStart::SUNDAY, WeekLayout::Full).unwrap();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0].first().unwrap().date(), ymd(1996, 4, 28));
        assert_eq!(weeks[4].last().unwrap().date(), ymd(1996, 6, 1));
        assert!(weeks.iter().all(|w| w.len() == 7));
    }

    #[test]
    fn weeks_may_1996_monday() {
        let weeks = weeks_in_month(ymd(1996, 5, 23), WeekStart::MONDAY, WeekLayout::Full).unwrap();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0].first().unwrap().date(), ymd(1996, 4, 29));
        assert_eq!(weeks[4].last().unwrap().date(), ymd(1996, 6, 2));
    }

    #[test]
    fn weeks_six_rows() {
        // 2020-08-01 was a Saturday: the month spans six Sunday-start weeks.
        let weeks = weeks_in_month(ymd(2020, 8, 10), WeekStart::SUNDAY, WeekLayout::Full).unwrap();
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[5].first().unwrap().date(), ymd(2020, 8, 30));
    }

    #[test]
    fn weeks_four_rows() {
        // 2015-02-01 was a Sunday and February 2015 had 28 days.
        let weeks = weeks_in_month(ymd(2015, 2, 14), WeekStart::SUNDAY, WeekLayout::Full).unwrap();
        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[0].first().unwrap().date(), ymd(2015, 2, 1));
        assert_eq!(weeks[3].last().unwrap().date(), ymd(2015, 2, 28));
    }

    #[test]
    fn weeks_clipped() {
        let weeks =
            weeks_in_month(ymd(1996, 5, 23), WeekStart::SUNDAY, WeekLayout::Clipped).unwrap();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0].len(), 4); // May 1..=4
        assert_eq!(weeks[4].len(), 6); // May 26..=31
        let total: usize = weeks.iter().map(Week::len).sum();
        assert_eq!(total, 31);
    }

    #[test]
    fn weeks_out_of_range() {
        let result = weeks_in_month(NaiveDate::MAX, WeekStart::SUNDAY, WeekLayout::Full);
        assert!(matches!(result, Err(CalendarError::OutOfRange { .. })));
    }

    #[test]
    fn labels_default_pattern() {
        let labels = weekday_labels(WeekStart::SUNDAY, "ddd");
        assert_eq!(labels, ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
    }

    #[test]
    fn labels_shifted_start() {
        let labels = weekday_labels(WeekStart::SATURDAY, "dd");
        assert_eq!(labels, ["Sa", "Su", "Mo", "Tu", "We", "Th", "Fr"]);
    }

    #[test]
    fn labels_render_weekday_tokens_only() {
        let labels = weekday_labels(WeekStart::MONDAY, "dddd [#]d");
        assert_eq!(labels[0], "Monday #1");
        assert_eq!(labels[6], "Sunday #0");
    }
}
