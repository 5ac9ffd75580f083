//! Call command: invoke one controller method through dynamic dispatch.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use kalendar_controller::{Arg, DateController, Method, Outcome};

use crate::cli::CallArgs;
use crate::config::KalendarConfig;
use crate::convert;

/// Run the call command.
pub fn run(args: CallArgs) -> Result<()> {
    let _cmd = info_span!("call", method = %args.method).entered();

    let config = KalendarConfig::load(args.config.as_deref())?;
    let controller_cfg = convert::build_controller_config(&config.controller)?;
    let mut controller =
        DateController::new(&controller_cfg).context("failed to create date controller")?;

    let method: Method = args.method.parse()?;
    let call_args: Vec<Arg> = args.args.iter().map(|a| Arg::parse(a)).collect();
    debug!(?call_args, "resolved arguments");

    let outcome = controller
        .call(method, &call_args)
        .with_context(|| format!("{method} failed"))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", describe(&outcome));
    }
    Ok(())
}

/// Plain-text rendering of an outcome.
pub fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Text(s) => s.clone(),
        Outcome::Date(d) => d.to_string(),
        Outcome::Number(n) => n.to_string(),
        Outcome::Bool(b) => b.to_string(),
        Outcome::Days(days) => days
            .iter()
            .map(|d| d.label().to_string())
            .collect::<Vec<_>>()
            .join(" "),
        Outcome::Weeks(weeks) => weeks
            .iter()
            .map(|w| {
                w.iter()
                    .map(|d| d.date().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Outcome::Labels(labels) => labels.join(" "),
        Outcome::State(s) => format!("date: {}\nselected_date: {}", s.date, s.selected_date),
        Outcome::Transition(t) => {
            let (prev, cur) = (t.previous(), t.current());
            format!(
                "date: {} -> {}\nselected_date: {} -> {}",
                prev.date, cur.date, prev.selected_date, cur.selected_date
            )
        }
    }
}
