mod call_cmd;
mod cli;
mod config;
mod convert;
mod logging;
mod month_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Month(args) => month_cmd::run(args),
        Command::Call(args) => call_cmd::run(args),
    }
}
