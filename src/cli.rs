use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Kalendar calendar date-state controller.
#[derive(Parser)]
#[command(
    name = "kalendar",
    version,
    about = "Calendar date-state controller: month grids and date derivations"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Render the month grid around a date.
    Month(MonthArgs),
    /// Invoke one controller method by name.
    Call(CallArgs),
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Path to TOML configuration file (default: ./kalendar.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Current date (YYYY-MM-DD); defaults to config, then today.
    #[arg(short, long)]
    pub date: Option<String>,

    /// Selected date (YYYY-MM-DD); defaults to config, then today.
    #[arg(short, long)]
    pub selected: Option<String>,

    /// First day of the week (0 = Sunday ..= 6 = Saturday).
    #[arg(short = 'w', long = "week-start")]
    pub week_start: Option<i64>,

    /// Week layout: "full" or "clipped".
    #[arg(short, long)]
    pub layout: Option<String>,

    /// Pattern for the header line.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Print the rendered snapshot as JSON instead of a text grid.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `call` subcommand.
#[derive(clap::Args)]
pub struct CallArgs {
    /// Path to TOML configuration file (default: ./kalendar.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Method name, snake_case (`formatted_date`) or camelCase (`getFormattedDate`).
    pub method: String,

    /// Method arguments; ISO dates and integers are recognised, anything else is text.
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Print the outcome as JSON.
    #[arg(long)]
    pub json: bool,
}
