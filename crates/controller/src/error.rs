//! Error types for the kalendar-controller crate.

use kalendar_calendar::CalendarError;

/// Error type for all fallible operations in the kalendar-controller crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ControllerError {
    /// Returned when an overloaded method receives an argument shape it does
    /// not recognise.
    #[error("invalid usage of `{method}`: unsupported arguments {shape}")]
    Usage {
        /// Name of the method that was misused.
        method: &'static str,
        /// The argument kinds that were supplied, e.g. `(int, text)`.
        shape: String,
    },

    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Calendar error (invalid date, invalid month format, range overflow).
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

impl ControllerError {
    /// `true` if this wraps [`CalendarError::InvalidDate`].
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Self::Calendar(CalendarError::InvalidDate { .. }))
    }

    /// `true` if this wraps [`CalendarError::InvalidMonthFormat`].
    pub fn is_invalid_month_format(&self) -> bool {
        matches!(self, Self::Calendar(CalendarError::InvalidMonthFormat { .. }))
    }

    /// `true` for [`ControllerError::Usage`].
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}
