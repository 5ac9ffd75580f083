//! Error types for the kalendar-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the kalendar-calendar crate.
///
/// This enum covers rejected date inputs, month formats outside the
/// whitelist, week-start indices outside Sunday..=Saturday, and arithmetic
/// that would leave the range representable by [`NaiveDate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a value expected to be a calendar date is not one.
    #[error("invalid date: {input:?} is not a calendar date")]
    InvalidDate {
        /// Description of the rejected input.
        input: String,
    },

    /// Returned when a month format is not one of `M`, `Mo`, `MM`, `MMM`, `MMMM`.
    #[error("invalid month format: {format:?} (expected one of M, Mo, MM, MMM, MMMM)")]
    InvalidMonthFormat {
        /// The rejected format string.
        format: String,
    },

    /// Returned when a week-start index is outside 0..=6.
    #[error("invalid week start: {index} (must be 0..=6, Sunday = 0)")]
    InvalidWeekStart {
        /// The rejected index.
        index: i64,
    },

    /// Returned when date arithmetic leaves the representable range.
    #[error("date out of range: {op} from {date}")]
    OutOfRange {
        /// The date the operation started from.
        date: NaiveDate,
        /// Name of the operation that overflowed.
        op: &'static str,
    },
}

impl CalendarError {
    /// Builds an [`CalendarError::InvalidDate`] from anything printable.
    pub fn invalid_date(input: impl std::fmt::Display) -> Self {
        Self::InvalidDate {
            input: input.to_string(),
        }
    }
}
