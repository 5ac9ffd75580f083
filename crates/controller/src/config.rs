//! Configuration for a [`DateController`](crate::DateController).

use chrono::NaiveDate;
use kalendar_calendar::{CalendarError, IntoDate, WeekLayout};

use crate::error::ControllerError;

/// Pattern used by `formatted_date` when none is given.
pub const DEFAULT_FORMAT: &str = "MM/DD/YY";

/// Where an initial date comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Seed {
    /// Today's date according to the controller's clock.
    #[default]
    Today,
    /// A fixed date.
    Date(NaiveDate),
    /// A value that was not a date, kept as text; resolved according to
    /// [`InvalidSeed`].
    Invalid(String),
}

impl Seed {
    /// Validates `input`, recording invalid values instead of failing.
    pub fn from_input(input: impl IntoDate) -> Self {
        match input.into_date() {
            Ok(date) => Self::Date(date),
            Err(CalendarError::InvalidDate { input }) => Self::Invalid(input),
            Err(err) => Self::Invalid(err.to_string()),
        }
    }
}

/// What construction does with an [`Seed::Invalid`] initial date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InvalidSeed {
    /// Substitute today's date and log a warning.
    #[default]
    Fallback,
    /// Fail construction with an invalid-date error.
    Reject,
}

/// Configuration for a date controller.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use kalendar_controller::ControllerConfig;
///
/// let config = ControllerConfig::new()
///     .with_initial_date("1996-05-23")
///     .with_start_week_at(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct ControllerConfig {
    initial_date: Seed,
    initial_selected_date: Seed,
    default_format: String,
    start_week_at: i64,
    week_layout: WeekLayout,
    invalid_seed: InvalidSeed,
}

impl ControllerConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: both dates seeded from today, `default_format = "MM/DD/YY"`,
    /// `start_week_at = 0` (Sunday), full weeks, invalid seeds fall back to
    /// today.
    pub fn new() -> Self {
        Self {
            initial_date: Seed::Today,
            initial_selected_date: Seed::Today,
            default_format: DEFAULT_FORMAT.to_string(),
            start_week_at: 0,
            week_layout: WeekLayout::Full,
            invalid_seed: InvalidSeed::Fallback,
        }
    }

    /// Sets the initial current date.
    pub fn with_initial_date(mut self, date: impl IntoDate) -> Self {
        self.initial_date = Seed::from_input(date);
        self
    }

    /// Sets the initial selected date.
    pub fn with_initial_selected_date(mut self, date: impl IntoDate) -> Self {
        self.initial_selected_date = Seed::from_input(date);
        self
    }

    /// Sets the pattern used when no explicit format is given.
    pub fn with_default_format(mut self, format: impl Into<String>) -> Self {
        self.default_format = format.into();
        self
    }

    /// Sets the first day of the week (0 = Sunday ..= 6 = Saturday).
    pub fn with_start_week_at(mut self, index: i64) -> Self {
        self.start_week_at = index;
        self
    }

    /// Sets how edge weeks of a month are shaped.
    pub fn with_week_layout(mut self, layout: WeekLayout) -> Self {
        self.week_layout = layout;
        self
    }

    /// Sets how invalid initial dates are handled.
    pub fn with_invalid_seed(mut self, policy: InvalidSeed) -> Self {
        self.invalid_seed = policy;
        self
    }

    // --- Accessors ---

    /// Returns the initial current date seed.
    pub fn initial_date(&self) -> &Seed {
        &self.initial_date
    }

    /// Returns the initial selected date seed.
    pub fn initial_selected_date(&self) -> &Seed {
        &self.initial_selected_date
    }

    /// Returns the default pattern.
    pub fn default_format(&self) -> &str {
        &self.default_format
    }

    /// Returns the configured week-start index.
    pub fn start_week_at(&self) -> i64 {
        self.start_week_at
    }

    /// Returns the week layout.
    pub fn week_layout(&self) -> WeekLayout {
        self.week_layout
    }

    /// Returns the invalid-seed policy.
    pub fn invalid_seed(&self) -> InvalidSeed {
        self.invalid_seed
    }

    /// Validates this configuration.
    ///
    /// Checks that `start_week_at` is in 0..=6 and that `default_format` is
    /// not empty.
    pub fn validate(&self) -> Result<(), ControllerError> {
        if !(0..=6).contains(&self.start_week_at) {
            return Err(ControllerError::InvalidConfig {
                reason: format!(
                    "start_week_at must be in 0..=6 (Sunday = 0), got {}",
                    self.start_week_at
                ),
            });
        }
        if self.default_format.is_empty() {
            return Err(ControllerError::InvalidConfig {
                reason: "default_format must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ControllerConfig::new();
        assert_eq!(cfg.initial_date(), &Seed::Today);
        assert_eq!(cfg.initial_selected_date(), &Seed::Today);
        assert_eq!(cfg.default_format(), "MM/DD/YY");
        assert_eq!(cfg.start_week_at(), 0);
        assert_eq!(cfg.week_layout(), WeekLayout::Full);
        assert_eq!(cfg.invalid_seed(), InvalidSeed::Fallback);
    }

    #[test]
    fn builder_chaining() {
        let cfg = ControllerConfig::new()
            .with_initial_date("1996-05-23")
            .with_initial_selected_date((2020, 1, 1))
            .with_default_format("MMMM Do, YYYY")
            .with_start_week_at(1)
            .with_week_layout(WeekLayout::Clipped)
            .with_invalid_seed(InvalidSeed::Reject);

        assert_eq!(
            cfg.initial_date(),
            &Seed::Date(NaiveDate::from_ymd_opt(1996, 5, 23).unwrap())
        );
        assert_eq!(
            cfg.initial_selected_date(),
            &Seed::Date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
        );
        assert_eq!(cfg.default_format(), "MMMM Do, YYYY");
        assert_eq!(cfg.start_week_at(), 1);
        assert_eq!(cfg.week_layout(), WeekLayout::Clipped);
        assert_eq!(cfg.invalid_seed(), InvalidSeed::Reject);
    }

    #[test]
    fn invalid_seed_is_recorded() {
        let cfg = ControllerConfig::new().with_initial_date("not a date");
        assert!(matches!(cfg.initial_date(), Seed::Invalid(msg) if msg.contains("not a date")));
    }

    #[test]
    fn validate_ok() {
        assert!(ControllerConfig::new().validate().is_ok());
        for i in 0..=6 {
            assert!(ControllerConfig::new().with_start_week_at(i).validate().is_ok());
        }
    }

    #[test]
    fn validate_bad_week_start() {
        for bad in [-1, 7, 100] {
            let err = ControllerConfig::new()
                .with_start_week_at(bad)
                .validate()
                .unwrap_err();
            assert!(matches!(err, ControllerError::InvalidConfig { .. }), "index {bad}");
        }
    }

    #[test]
    fn validate_empty_format() {
        assert!(
            ControllerConfig::new()
                .with_default_format("")
                .validate()
                .is_err()
        );
    }
}
