//! # kalendar-controller
//!
//! A calendar date-state controller: owns a current date and a selected
//! date, derives formatted strings and month/week/day groupings from them,
//! and notifies listeners when they change.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["ControllerConfig + Clock"] -->|"with_clock()"| B["DateController"]
//!     B -->|"set_date / pick_date"| C["Transition"]
//!     C -->|"notification pass"| D["Listeners"]
//!     D -.->|"nested mutation (queued)"| B
//!     B -->|"render(extras, f)"| E["Snapshot"]
//!     F["&[Arg]"] -->|"call(Method)"| G["Outcome"]
//!     B --> G
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use kalendar_controller::{ControllerConfig, DateController, FixedClock};
//!
//! let config = ControllerConfig::new().with_initial_date("1996-05-23");
//! let mut controller = DateController::with_clock(&config, &FixedClock(today))?;
//! assert_eq!(controller.formatted(), "05/23/96");
//!
//! controller.on_change(|_, state| println!("now {}", state.date));
//! controller.pick_date("2020-01-01")?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `controller` | `DateController`: mutators, derivations, listener registration |
//! | `config` | Builder-style configuration and seed handling |
//! | `clock` | Injectable source of today's date |
//! | `state` | State and transition values |
//! | `args` | Loose arguments and overload resolution |
//! | `listeners` | Listener storage and the notification pass |
//! | `snapshot` | The render boundary |
//! | `dispatch` | Name-based method dispatch |
//! | `error` | Error types |

mod args;
mod clock;
mod config;
mod controller;
mod dispatch;
mod error;
mod listeners;
mod snapshot;
mod state;

pub use args::{Arg, FormatRequest, MonthShift, WeeksRequest};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ControllerConfig, DEFAULT_FORMAT, InvalidSeed, Seed};
pub use controller::{DEFAULT_LABEL_FORMAT, DateController};
pub use dispatch::{Method, Outcome, UnknownMethod};
pub use error::ControllerError;
pub use listeners::{DateListener, ListenerId, StateListener};
pub use snapshot::{Extras, Snapshot};
pub use state::{Changed, ControllerState, Transition};
