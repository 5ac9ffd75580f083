//! # kalendar-calendar
//!
//! Gregorian date arithmetic, pattern formatting and month enumeration on top
//! of [`chrono::NaiveDate`].
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["IntoDate"] -->|".into_date()"| B["NaiveDate"]
//!     B -->|"add_months / start_of_week"| B
//!     B -->|"format(pattern)"| C["String"]
//!     B -->|"days_in_month()"| D["Vec of Day"]
//!     B -->|"weeks_in_month(WeekStart)"| E["Vec of Week"]
//!     F["WeekStart (0..=6)"] --> E
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use kalendar_calendar::{WeekLayout, WeekStart, format, weeks_in_month};
//!
//! let date = NaiveDate::from_ymd_opt(1996, 5, 23).unwrap();
//! assert_eq!(format(date, "MM/DD/YY"), "05/23/96");
//!
//! let weeks = weeks_in_month(date, WeekStart::SUNDAY, WeekLayout::Full)?;
//! assert_eq!(weeks.len(), 5);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Month, week and day arithmetic |
//! | `input` | Validation of loosely typed date inputs |
//! | `pattern` | Token-based formatting and the month-format whitelist |
//! | `week_start` | First-day-of-week newtype |
//! | `day` | Day and week descriptors |
//! | `sequence` | Day, week and weekday-label enumeration |
//! | `error` | Error types |

pub mod date;
mod day;
mod error;
mod input;
mod pattern;
mod sequence;
mod week_start;

pub use day::{Day, Week};
pub use error::CalendarError;
pub use input::{IntoDate, parse_date};
pub use pattern::{MonthFormat, Pattern, format, ordinal};
pub use sequence::{WeekLayout, days_in_month, each_day, weekday_labels, weeks_in_month};
pub use week_start::WeekStart;
