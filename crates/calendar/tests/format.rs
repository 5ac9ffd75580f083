use chrono::NaiveDate;
use kalendar_calendar::{CalendarError, MonthFormat, WeekStart, date, format, weekday_labels};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn next_month_round_trip() {
    let d = ymd(1996, 5, 23);
    for pattern in ["MM/DD/YYYY", "MMMM Do, YYYY", "MMM Mo"] {
        let next = date::add_months(d, 1).unwrap();
        assert_eq!(format(next, pattern), format(ymd(1996, 6, 23), pattern));
    }
}

#[test]
fn formatting_is_idempotent() {
    let d = ymd(2020, 2, 29);
    assert_eq!(format(d, "dddd, MMMM Do YYYY"), format(d, "dddd, MMMM Do YYYY"));
    assert_eq!(format(d, "dddd, MMMM Do YYYY"), "Saturday, February 29th 2020");
}

#[test]
fn month_formats_for_every_month() {
    let short = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];
    for (i, name) in short.iter().enumerate() {
        let d = ymd(2001, i as u32 + 1, 1);
        assert_eq!(MonthFormat::Short.format(d), *name);
        assert_eq!(MonthFormat::TwoDigit.format(d), format!("{:02}", i + 1));
        assert!(MonthFormat::Long.format(d).starts_with(name));
    }
}

#[test]
fn month_format_from_str() {
    assert_eq!("Mo".parse::<MonthFormat>().unwrap(), MonthFormat::Ordinal);
    assert!(matches!(
        "DD".parse::<MonthFormat>(),
        Err(CalendarError::InvalidMonthFormat { .. })
    ));
}

#[test]
fn labels_follow_week_start() {
    let days = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];
    for (index, expected) in days.iter().enumerate() {
        let start = WeekStart::new(index as i64).unwrap();
        let labels = weekday_labels(start, "ddd");
        assert_eq!(labels.len(), 7);
        assert_eq!(labels[0].to_lowercase(), *expected);
    }
}
