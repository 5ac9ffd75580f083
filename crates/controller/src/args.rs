//! Loosely typed arguments and overload resolution.
//!
//! Several controller methods accept more than one argument shape. Typed
//! callers build a request value directly; hosts that only hold loose values
//! (command lines, scripting bridges) go through [`Arg`] slices, which each
//! request type resolves with one `match` on the shape.

use std::fmt;

use chrono::NaiveDate;
use kalendar_calendar::{CalendarError, IntoDate, WeekStart, parse_date};

use crate::error::ControllerError;

/// One loosely typed argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// A calendar date.
    Date(NaiveDate),
    /// An integer.
    Int(i64),
    /// Any other text, typically a format pattern.
    Text(String),
}

impl Arg {
    /// Classifies a raw string: ISO dates become [`Arg::Date`], integers
    /// become [`Arg::Int`], everything else stays [`Arg::Text`].
    pub fn parse(raw: &str) -> Self {
        if let Ok(date) = parse_date(raw) {
            return Self::Date(date);
        }
        if let Ok(n) = raw.trim().parse::<i64>() {
            return Self::Int(n);
        }
        Self::Text(raw.to_string())
    }

    /// Short name of the argument kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Date(_) => "date",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{d}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<NaiveDate> for Arg {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl IntoDate for &Arg {
    fn into_date(self) -> Result<NaiveDate, CalendarError> {
        match self {
            Arg::Date(d) => Ok(*d),
            Arg::Text(s) => parse_date(s),
            Arg::Int(n) => Err(CalendarError::invalid_date(n)),
        }
    }
}

impl IntoDate for Arg {
    fn into_date(self) -> Result<NaiveDate, CalendarError> {
        (&self).into_date()
    }
}

/// Builds the usage error for `method` called with `args`.
pub(crate) fn usage(method: &'static str, args: &[Arg]) -> ControllerError {
    let kinds: Vec<&str> = args.iter().map(Arg::kind).collect();
    ControllerError::Usage {
        method,
        shape: format!("({})", kinds.join(", ")),
    }
}

/// Which date to format and with which pattern.
///
/// Missing parts fall back to the controller's current date and default
/// pattern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatRequest {
    /// Date to format, or the current date.
    pub date: Option<NaiveDate>,
    /// Pattern to use, or the default pattern.
    pub pattern: Option<String>,
}

impl FormatRequest {
    /// Formats `date` with the default pattern.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            pattern: None,
        }
    }

    /// Formats the current date with `pattern`.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self {
            date: None,
            pattern: Some(pattern.into()),
        }
    }

    /// Replaces the pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Accepts `()`, `(date)`, `(pattern)` and `(date, pattern)`.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Usage`] for any other shape.
    pub fn resolve(args: &[Arg]) -> Result<Self, ControllerError> {
        match args {
            [] => Ok(Self::default()),
            [Arg::Date(d)] => Ok(Self::of(*d)),
            [Arg::Text(p)] => Ok(Self::pattern(p.as_str())),
            [Arg::Date(d), Arg::Text(p)] => Ok(Self::of(*d).with_pattern(p.as_str())),
            _ => Err(usage("formatted_date", args)),
        }
    }
}

/// A month offset from an optional base date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthShift {
    /// Base date, or the current date.
    pub from: Option<NaiveDate>,
    /// Number of months to move.
    pub amount: i32,
}

impl Default for MonthShift {
    fn default() -> Self {
        Self {
            from: None,
            amount: 1,
        }
    }
}

impl MonthShift {
    /// Moves `amount` months from the current date.
    pub fn months(amount: i32) -> Self {
        Self {
            from: None,
            amount,
        }
    }

    /// Moves one month from `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            from: Some(date),
            amount: 1,
        }
    }

    /// Replaces the amount.
    pub fn with_amount(mut self, amount: i32) -> Self {
        self.amount = amount;
        self
    }

    /// Accepts `()`, `(n)`, `(date)` and `(date, n)`; `method` names the
    /// caller in usage errors.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Usage`] for any other shape, or when `n`
    /// does not fit in an `i32`.
    pub fn resolve(method: &'static str, args: &[Arg]) -> Result<Self, ControllerError> {
        let amount = |n: i64| i32::try_from(n).map_err(|_| usage(method, args));
        match args {
            [] => Ok(Self::default()),
            [Arg::Int(n)] => Ok(Self::months(amount(*n)?)),
            [Arg::Date(d)] => Ok(Self::of(*d)),
            [Arg::Date(d), Arg::Int(n)] => Ok(Self::of(*d).with_amount(amount(*n)?)),
            _ => Err(usage(method, args)),
        }
    }
}

/// Which month to split into weeks and where weeks start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeeksRequest {
    /// Any date in the month, or the current date.
    pub date: Option<NaiveDate>,
    /// First day of the week, or the configured one.
    pub start: Option<WeekStart>,
}

impl WeeksRequest {
    /// Accepts `()`, `(date)` and `(date, start_index)`.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Usage`] for any other shape and
    /// [`CalendarError::InvalidWeekStart`] for an index outside 0..=6.
    pub fn resolve(args: &[Arg]) -> Result<Self, ControllerError> {
        match args {
            [] => Ok(Self::default()),
            [Arg::Date(d)] => Ok(Self {
                date: Some(*d),
                start: None,
            }),
            [Arg::Date(d), Arg::Int(i)] => Ok(Self {
                date: Some(*d),
                start: Some(WeekStart::new(*i)?),
            }),
            _ => Err(usage("weeks_in_month", args)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_classifies() {
        assert_eq!(Arg::parse("1996-05-23"), Arg::Date(ymd(1996, 5, 23)));
        assert_eq!(Arg::parse("-3"), Arg::Int(-3));
        assert_eq!(Arg::parse("MMMM Do"), Arg::Text("MMMM Do".to_string()));
        assert_eq!(Arg::parse("2020-02-30"), Arg::Text("2020-02-30".to_string()));
    }

    #[test]
    fn arg_into_date() {
        assert_eq!(Arg::Date(ymd(2020, 1, 1)).into_date().unwrap(), ymd(2020, 1, 1));
        assert_eq!(Arg::from("2020-01-01").into_date().unwrap(), ymd(2020, 1, 1));
        assert!(Arg::Int(5).into_date().is_err());
        assert!(Arg::from("tomorrow").into_date().is_err());
    }

    #[test]
    fn usage_lists_kinds() {
        let err = usage("formatted_date", &[Arg::Int(1), Arg::from("x")]);
        assert_eq!(
            err,
            ControllerError::Usage {
                method: "formatted_date",
                shape: "(int, text)".to_string(),
            }
        );
    }

    #[test]
    fn format_request_shapes() {
        let d = ymd(1996, 5, 23);
        assert_eq!(FormatRequest::resolve(&[]).unwrap(), FormatRequest::default());
        assert_eq!(FormatRequest::resolve(&[d.into()]).unwrap(), FormatRequest::of(d));
        assert_eq!(
            FormatRequest::resolve(&["YYYY".into()]).unwrap(),
            FormatRequest::pattern("YYYY")
        );
        assert_eq!(
            FormatRequest::resolve(&[d.into(), "YYYY".into()]).unwrap(),
            FormatRequest::of(d).with_pattern("YYYY")
        );
    }

    #[test]
    fn format_request_rejects_other_shapes() {
        let d = ymd(1996, 5, 23);
        for args in [
            vec![Arg::Int(1)],
            vec![Arg::from("YYYY"), d.into()],
            vec![d.into(), d.into()],
            vec![d.into(), "YYYY".into(), "x".into()],
        ] {
            let err = FormatRequest::resolve(&args).unwrap_err();
            assert!(err.is_usage(), "{args:?}");
        }
    }

    #[test]
    fn month_shift_shapes() {
        let d = ymd(1996, 5, 23);
        assert_eq!(MonthShift::resolve("m", &[]).unwrap(), MonthShift::default());
        assert_eq!(MonthShift::resolve("m", &[3.into()]).unwrap(), MonthShift::months(3));
        assert_eq!(MonthShift::resolve("m", &[d.into()]).unwrap(), MonthShift::of(d));
        assert_eq!(
            MonthShift::resolve("m", &[d.into(), (-2).into()]).unwrap(),
            MonthShift::of(d).with_amount(-2)
        );
    }

    #[test]
    fn month_shift_rejects_other_shapes() {
        let d = ymd(1996, 5, 23);
        let err = MonthShift::resolve("date_next_month", &["x".into()]).unwrap_err();
        assert_eq!(
            err,
            ControllerError::Usage {
                method: "date_next_month",
                shape: "(text)".to_string(),
            }
        );
        assert!(MonthShift::resolve("m", &[1.into(), d.into()]).unwrap_err().is_usage());
        assert!(MonthShift::resolve("m", &[Arg::Int(i64::MAX)]).unwrap_err().is_usage());
    }

    #[test]
    fn weeks_request_shapes() {
        let d = ymd(2020, 8, 1);
        assert_eq!(WeeksRequest::resolve(&[]).unwrap(), WeeksRequest::default());
        let req = WeeksRequest::resolve(&[d.into(), 1.into()]).unwrap();
        assert_eq!(req.date, Some(d));
        assert_eq!(req.start, Some(WeekStart::MONDAY));
        assert!(WeeksRequest::resolve(&["x".into()]).unwrap_err().is_usage());
        assert!(WeeksRequest::resolve(&[d.into(), "x".into()]).unwrap_err().is_usage());
        assert!(matches!(
            WeeksRequest::resolve(&[d.into(), 9.into()]).unwrap_err(),
            ControllerError::Calendar(CalendarError::InvalidWeekStart { .. })
        ));
    }
}
