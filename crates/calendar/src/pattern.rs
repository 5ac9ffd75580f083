//! Token-based date formatting.
//!
//! Patterns use the moment-style tokens (`MM/DD/YY`, `MMMM Do, YYYY`,
//! `ddd`). Text inside `[...]` is copied without the brackets and any
//! character that does not start a token is copied verbatim. Dates carry no
//! time of day, so the time tokens always render midnight.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Year4,
    Year2,
    IsoYear4,
    IsoYear2,
    Quarter,
    QuarterOrdinal,
    MonthLong,
    MonthShort,
    Month2,
    MonthOrdinal,
    Month,
    DayOfYear3,
    DayOfYearOrdinal,
    DayOfYear,
    Day2,
    DayOrdinal,
    Day,
    WeekdayLong,
    WeekdayShort,
    WeekdayMin,
    WeekdayOrdinal,
    Weekday,
    IsoWeekday,
    IsoWeek2,
    IsoWeekOrdinal,
    IsoWeek,
    UnixSeconds,
    UnixMillis,
    Hour24Padded,
    Hour24,
    Hour12Padded,
    Hour12,
    Minute2,
    Minute,
    Second2,
    Second,
    Millis3,
    Millis2,
    Millis,
    MeridiemUpper,
    MeridiemLower,
}

/// Tokens ordered longest first so the first prefix match wins.
const TOKENS: &[(&str, Token)] = &[
    ("YYYY", Token::Year4),
    ("GGGG", Token::IsoYear4),
    ("MMMM", Token::MonthLong),
    ("DDDD", Token::DayOfYear3),
    ("DDDo", Token::DayOfYearOrdinal),
    ("dddd", Token::WeekdayLong),
    ("MMM", Token::MonthShort),
    ("DDD", Token::DayOfYear),
    ("ddd", Token::WeekdayShort),
    ("SSS", Token::Millis3),
    ("YY", Token::Year2),
    ("GG", Token::IsoYear2),
    ("Qo", Token::QuarterOrdinal),
    ("MM", Token::Month2),
    ("Mo", Token::MonthOrdinal),
    ("DD", Token::Day2),
    ("Do", Token::DayOrdinal),
    ("dd", Token::WeekdayMin),
    ("do", Token::WeekdayOrdinal),
    ("WW", Token::IsoWeek2),
    ("Wo", Token::IsoWeekOrdinal),
    ("HH", Token::Hour24Padded),
    ("hh", Token::Hour12Padded),
    ("mm", Token::Minute2),
    ("ss", Token::Second2),
    ("SS", Token::Millis2),
    ("Q", Token::Quarter),
    ("M", Token::Month),
    ("D", Token::Day),
    ("d", Token::Weekday),
    ("E", Token::IsoWeekday),
    ("W", Token::IsoWeek),
    ("X", Token::UnixSeconds),
    ("x", Token::UnixMillis),
    ("H", Token::Hour24),
    ("h", Token::Hour12),
    ("m", Token::Minute),
    ("s", Token::Second),
    ("S", Token::Millis),
    ("A", Token::MeridiemUpper),
    ("a", Token::MeridiemLower),
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    Token(Token),
    Literal(String),
}

/// A parsed formatting pattern.
///
/// Parsing never fails: anything that is not a token is literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    items: Vec<Item>,
}

impl Pattern {
    /// Parses `source` into tokens and literal runs.
    pub fn parse(source: &str) -> Self {
        let mut items = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(c) = rest.chars().next() {
            if c == '[' {
                if let Some(close) = rest.find(']') {
                    literal.push_str(&rest[1..close]);
                    rest = &rest[close + 1..];
                    continue;
                }
            }
            if let Some(&(text, token)) = TOKENS.iter().find(|(text, _)| rest.starts_with(text)) {
                if !literal.is_empty() {
                    items.push(Item::Literal(std::mem::take(&mut literal)));
                }
                items.push(Item::Token(token));
                rest = &rest[text.len()..];
                continue;
            }
            literal.push(c);
            rest = &rest[c.len_utf8()..];
        }
        if !literal.is_empty() {
            items.push(Item::Literal(literal));
        }

        Self {
            source: source.to_string(),
            items,
        }
    }

    /// Returns the pattern text this was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Renders `date` with this pattern.
    pub fn format(&self, date: NaiveDate) -> String {
        let mut out = String::with_capacity(self.source.len() + 8);
        for item in &self.items {
            match item {
                Item::Literal(text) => out.push_str(text),
                Item::Token(token) => out.push_str(&render(*token, date)),
            }
        }
        out
    }
}

impl FromStr for Pattern {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Formats `date` with `pattern`.
///
/// ```
/// use chrono::NaiveDate;
/// use kalendar_calendar::format;
///
/// let date = NaiveDate::from_ymd_opt(1996, 5, 23).unwrap();
/// assert_eq!(format(date, "MM/DD/YY"), "05/23/96");
/// assert_eq!(format(date, "MMMM Do, YYYY"), "May 23rd, 1996");
/// ```
pub fn format(date: NaiveDate, pattern: &str) -> String {
    Pattern::parse(pattern).format(date)
}

/// English ordinal for `n` (1st, 2nd, 3rd, 4th, 11th, 21st).
pub fn ordinal(n: i64) -> String {
    let suffix = match (n.rem_euclid(100), n.rem_euclid(10)) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn unix_days(date: NaiveDate) -> i64 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).expect("1970-01-01 is a valid date");
    date.signed_duration_since(epoch).num_days()
}

fn render(token: Token, date: NaiveDate) -> String {
    let month = date.month();
    let month_name = MONTH_NAMES[date.month0() as usize];
    let weekday = date.weekday().num_days_from_sunday();
    let weekday_name = WEEKDAY_NAMES[weekday as usize];
    let quarter = (month - 1) / 3 + 1;
    let iso = date.iso_week();

    match token {
        Token::Year4 => format!("{:04}", date.year()),
        Token::Year2 => format!("{:02}", date.year().rem_euclid(100)),
        Token::IsoYear4 => format!("{:04}", iso.year()),
        Token::IsoYear2 => format!("{:02}", iso.year().rem_euclid(100)),
        Token::Quarter => quarter.to_string(),
        Token::QuarterOrdinal => ordinal(i64::from(quarter)),
        Token::MonthLong => month_name.to_string(),
        Token::MonthShort => month_name[..3].to_string(),
        Token::Month2 => format!("{month:02}"),
        Token::MonthOrdinal => ordinal(i64::from(month)),
        Token::Month => month.to_string(),
        Token::DayOfYear3 => format!("{:03}", date.ordinal()),
        Token::DayOfYearOrdinal => ordinal(i64::from(date.ordinal())),
        Token::DayOfYear => date.ordinal().to_string(),
        Token::Day2 => format!("{:02}", date.day()),
        Token::DayOrdinal => ordinal(i64::from(date.day())),
        Token::Day => date.day().to_string(),
        Token::WeekdayLong => weekday_name.to_string(),
        Token::WeekdayShort => weekday_name[..3].to_string(),
        Token::WeekdayMin => weekday_name[..2].to_string(),
        Token::WeekdayOrdinal => ordinal(i64::from(weekday)),
        Token::Weekday => weekday.to_string(),
        Token::IsoWeekday => date.weekday().number_from_monday().to_string(),
        Token::IsoWeek2 => format!("{:02}", iso.week()),
        Token::IsoWeekOrdinal => ordinal(i64::from(iso.week())),
        Token::IsoWeek => iso.week().to_string(),
        Token::UnixSeconds => (unix_days(date) * 86_400).to_string(),
        Token::UnixMillis => (unix_days(date) * 86_400_000).to_string(),
        Token::Millis3 => "000".to_string(),
        Token::Hour24Padded | Token::Minute2 | Token::Second2 | Token::Millis2 => {
            "00".to_string()
        }
        Token::Hour24 | Token::Minute | Token::Second | Token::Millis => "0".to_string(),
        Token::Hour12Padded | Token::Hour12 => "12".to_string(),
        Token::MeridiemUpper => "AM".to_string(),
        Token::MeridiemLower => "am".to_string(),
    }
}

/// The month formats accepted where only a month may be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MonthFormat {
    /// `M`: 1..12
    Numeric,
    /// `Mo`: 1st..12th
    Ordinal,
    /// `MM`: 01..12
    TwoDigit,
    /// `MMM`: Jan..Dec
    #[default]
    Short,
    /// `MMMM`: January..December
    Long,
}

impl MonthFormat {
    /// Every accepted format.
    pub const ALL: [Self; 5] = [
        Self::Numeric,
        Self::Ordinal,
        Self::TwoDigit,
        Self::Short,
        Self::Long,
    ];

    /// Resolves a month format string.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonthFormat`] for anything outside
    /// the whitelist.
    pub fn parse(format: &str) -> Result<Self, CalendarError> {
        Self::ALL
            .into_iter()
            .find(|f| f.token() == format)
            .ok_or_else(|| CalendarError::InvalidMonthFormat {
                format: format.to_string(),
            })
    }

    /// The pattern token for this format.
    pub fn token(self) -> &'static str {
        match self {
            Self::Numeric => "M",
            Self::Ordinal => "Mo",
            Self::TwoDigit => "MM",
            Self::Short => "MMM",
            Self::Long => "MMMM",
        }
    }

    /// Renders the month of `date`.
    pub fn format(self, date: NaiveDate) -> String {
        format(date, self.token())
    }
}

impl FromStr for MonthFormat {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_controller_format() {
        assert_eq!(format(ymd(1996, 5, 23), "MM/DD/YY"), "05/23/96");
        assert_eq!(format(ymd(2020, 1, 1), "MM/DD/YY"), "01/01/20");
        assert_eq!(format(ymd(2005, 11, 9), "MM/DD/YY"), "11/09/05");
    }

    #[test]
    fn long_forms() {
        let d = ymd(1996, 5, 23);
        assert_eq!(format(d, "MMMM Do, YYYY"), "May 23rd, 1996");
        assert_eq!(format(d, "dddd"), "Thursday");
        assert_eq!(format(d, "ddd"), "Thu");
        assert_eq!(format(d, "dd"), "Th");
        assert_eq!(format(d, "MMM Mo"), "May 5th");
    }

    #[test]
    fn numeric_forms() {
        let d = ymd(1996, 2, 3);
        assert_eq!(format(d, "M/D/YYYY"), "2/3/1996");
        assert_eq!(format(d, "DDD"), "34");
        assert_eq!(format(d, "DDDD"), "034");
        assert_eq!(format(d, "DDDo"), "34th");
        assert_eq!(format(d, "Q Qo"), "1 1st");
        assert_eq!(format(d, "d do E"), "6 6th 6");
    }

    #[test]
    fn iso_week_tokens() {
        // 2021-01-01 belongs to ISO week 53 of 2020.
        let d = ymd(2021, 1, 1);
        assert_eq!(format(d, "W WW Wo"), "53 53 53rd");
        assert_eq!(format(d, "GGGG GG"), "2020 20");
    }

    #[test]
    fn unix_timestamps() {
        assert_eq!(format(ymd(1970, 1, 2), "X"), "86400");
        assert_eq!(format(ymd(1970, 1, 2), "x"), "86400000");
        assert_eq!(format(ymd(1969, 12, 31), "X"), "-86400");
    }

    #[test]
    fn time_tokens_render_midnight() {
        assert_eq!(format(ymd(2020, 6, 1), "HH:mm:ss h A a"), "00:00:00 12 AM am");
    }

    #[test]
    fn fractional_seconds_render_zero() {
        let d = ymd(2020, 6, 1);
        assert_eq!(format(d, "HH:mm:ss.SSS"), "00:00:00.000");
        assert_eq!(format(d, "S SS SSS"), "0 00 000");
        assert_eq!(format(d, "SSSS"), "0000");
    }

    #[test]
    fn bracket_literals() {
        let d = ymd(1996, 5, 23);
        assert_eq!(format(d, "[Day] D [of] MMMM"), "Day 23 of May");
        assert_eq!(format(d, "[ D"), "[ 23");
    }

    #[test]
    fn unknown_characters_are_literal() {
        assert_eq!(format(ymd(1996, 5, 23), "YYYY-MM-DD!"), "1996-05-23!");
        assert_eq!(format(ymd(1996, 5, 23), "  "), "  ");
        assert_eq!(format(ymd(1996, 5, 23), ""), "");
    }

    #[test]
    fn ordinals() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (101, "101st"),
            (111, "111th"),
            (0, "0th"),
        ];
        for (n, expected) in cases {
            assert_eq!(ordinal(n), expected, "ordinal({n})");
        }
    }

    #[test]
    fn pattern_reuse() {
        let pattern = Pattern::parse("MMM D");
        assert_eq!(pattern.as_str(), "MMM D");
        assert_eq!(pattern.format(ymd(2020, 1, 1)), "Jan 1");
        assert_eq!(pattern.format(ymd(2020, 12, 31)), "Dec 31");
    }

    #[test]
    fn month_format_whitelist() {
        let d = ymd(1996, 5, 23);
        let rendered: Vec<String> = MonthFormat::ALL.iter().map(|f| f.format(d)).collect();
        assert_eq!(rendered, ["5", "5th", "05", "May", "May"]);
        assert_eq!(MonthFormat::parse("MMMM").unwrap().format(ymd(1996, 9, 1)), "September");
        assert_eq!(MonthFormat::default(), MonthFormat::Short);
    }

    #[test]
    fn month_format_rejects_others() {
        for bad in ["", "YYYY", "MMMMM", "mm", "MM/DD", "Month"] {
            assert_eq!(
                MonthFormat::parse(bad).unwrap_err(),
                CalendarError::InvalidMonthFormat {
                    format: bad.to_string()
                },
                "format {bad:?}"
            );
        }
    }

    #[test]
    fn name_tables() {
        assert_eq!(MONTH_NAMES.len(), 12);
        assert_eq!(WEEKDAY_NAMES[0], "Sunday");
        assert!(MONTH_NAMES.iter().all(|m| m.len() >= 3));
    }
}
