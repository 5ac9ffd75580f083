//! Conversion of loosely typed values into validated dates.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::CalendarError;

/// Values that may or may not name a calendar date.
///
/// Anything that is not a valid date converts to
/// [`CalendarError::InvalidDate`].
pub trait IntoDate {
    /// Validates and converts `self`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] when `self` is not a date.
    fn into_date(self) -> Result<NaiveDate, CalendarError>;
}

impl IntoDate for NaiveDate {
    fn into_date(self) -> Result<NaiveDate, CalendarError> {
        Ok(self)
    }
}

impl IntoDate for &NaiveDate {
    fn into_date(self) -> Result<NaiveDate, CalendarError> {
        Ok(*self)
    }
}

impl IntoDate for NaiveDateTime {
    fn into_date(self) -> Result<NaiveDate, CalendarError> {
        Ok(self.date())
    }
}

impl IntoDate for Option<NaiveDate> {
    fn into_date(self) -> Result<NaiveDate, CalendarError> {
        self.ok_or_else(|| CalendarError::invalid_date("none"))
    }
}

/// `(year, month, day)`.
impl IntoDate for (i32, u32, u32) {
    fn into_date(self) -> Result<NaiveDate, CalendarError> {
        let (y, m, d) = self;
        NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| CalendarError::invalid_date(format!("{y:04}-{m:02}-{d:02}")))
    }
}

impl IntoDate for &str {
    fn into_date(self) -> Result<NaiveDate, CalendarError> {
        parse_date(self)
    }
}

impl IntoDate for String {
    fn into_date(self) -> Result<NaiveDate, CalendarError> {
        parse_date(&self)
    }
}

impl IntoDate for &String {
    fn into_date(self) -> Result<NaiveDate, CalendarError> {
        parse_date(self)
    }
}

/// Parses an ISO `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if `input` is not a valid ISO date.
pub fn parse_date(input: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| CalendarError::invalid_date(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_date_is_always_valid() {
        let d = NaiveDate::from_ymd_opt(1996, 5, 23).unwrap();
        assert_eq!(d.into_date().unwrap(), d);
        assert_eq!((&d).into_date().unwrap(), d);
    }

    #[test]
    fn datetime_drops_time() {
        let dt = NaiveDate::from_ymd_opt(1996, 5, 23)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(
            dt.into_date().unwrap(),
            NaiveDate::from_ymd_opt(1996, 5, 23).unwrap()
        );
    }

    #[test]
    fn none_is_invalid() {
        assert_eq!(
            None::<NaiveDate>.into_date().unwrap_err(),
            CalendarError::invalid_date("none")
        );
    }

    #[test]
    fn tuples() {
        assert!((2020, 2, 29).into_date().is_ok());
        assert_eq!(
            (2021, 2, 29).into_date().unwrap_err(),
            CalendarError::invalid_date("2021-02-29")
        );
        assert!((2021, 13, 1).into_date().is_err());
        assert!((2021, 1, 0).into_date().is_err());
    }

    #[test]
    fn iso_strings() {
        assert_eq!(
            "1996-05-23".into_date().unwrap(),
            NaiveDate::from_ymd_opt(1996, 5, 23).unwrap()
        );
        assert!(" 2020-01-01 ".into_date().is_ok());
        assert_eq!(
            "false".into_date().unwrap_err(),
            CalendarError::invalid_date("false")
        );
        assert!("".into_date().is_err());
        assert!("2020-02-30".to_string().into_date().is_err());
        assert!("05/23/96".into_date().is_err());
    }
}
