//! Month command: render a month grid through the controller's render boundary.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{info, info_span};

use kalendar_calendar::date::is_same_month;
use kalendar_controller::{DateController, FormatRequest, Snapshot};

use crate::cli::MonthArgs;
use crate::config::KalendarConfig;
use crate::convert::{self, Overrides};

/// Run the month command.
pub fn run(args: MonthArgs) -> Result<()> {
    let _cmd = info_span!("month").entered();

    let config = KalendarConfig::load(args.config.as_deref())?;
    let base = convert::build_controller_config(&config.controller)?;
    let controller_cfg = convert::apply_overrides(
        base,
        &Overrides {
            date: args.date.as_deref(),
            selected: args.selected.as_deref(),
            week_start: args.week_start,
            layout: args.layout.as_deref(),
        },
    )?;
    let mut controller =
        DateController::new(&controller_cfg).context("failed to create date controller")?;
    info!(date = %controller.date(), selected = %controller.selected_date(), "controller ready");

    let header_format = args
        .format
        .unwrap_or_else(|| config.render.header_format.clone());
    let extras = config.render.extras_json()?;
    let label_format = config.render.label_format;

    let output = controller.render(extras, |s| {
        if args.json {
            month_json(s, &header_format, &label_format)
        } else {
            month_grid(s, &header_format, &label_format)
        }
    })?;
    println!("{output}");
    Ok(())
}

/// Renders the month as a text grid. The selected day is marked with `*`.
pub fn month_grid(s: &Snapshot<'_>, header_format: &str, label_format: &str) -> Result<String> {
    let labels = s.day_labels_in_week(label_format);
    let weeks = s.weeks_in_month()?;
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0).max(3);

    let mut out = String::new();
    if let Some(Value::String(title)) = s.extra("title") {
        writeln!(out, "{title}")?;
    }
    let header = s.formatted_date(&FormatRequest::pattern(header_format));
    let total = (width + 1) * 7 - 1;
    writeln!(out, "{header:^total$}")?;

    let line: Vec<String> = labels.iter().map(|l| format!("{l:>width$}")).collect();
    writeln!(out, "{}", line.join(" "))?;

    for (i, week) in weeks.iter().enumerate() {
        let mut cells: Vec<String> = Vec::with_capacity(7);
        if i == 0 {
            cells.extend(std::iter::repeat_n(" ".repeat(width), 7 - week.len()));
        }
        for day in week {
            let in_month = is_same_month(day.date(), s.date());
            let cell = if in_month && s.is_selected_day(day.label()) {
                format!("*{}", day.label())
            } else {
                day.label().to_string()
            };
            cells.push(format!("{cell:>width$}"));
        }
        writeln!(out, "{}", cells.join(" ").trim_end())?;
    }
    Ok(out.trim_end().to_string())
}

/// Renders the month as a JSON document: state, extras, header, labels and weeks.
pub fn month_json(s: &Snapshot<'_>, header_format: &str, label_format: &str) -> Result<String> {
    let mut value = s.to_json();
    if let Value::Object(map) = &mut value {
        map.insert(
            "header".to_string(),
            Value::String(s.formatted_date(&FormatRequest::pattern(header_format))),
        );
        map.insert(
            "day_labels".to_string(),
            serde_json::to_value(s.day_labels_in_week(label_format))?,
        );
        map.insert("weeks".to_string(), serde_json::to_value(s.weeks_in_month()?)?);
    }
    serde_json::to_string_pretty(&value).context("failed to serialize month")
}
