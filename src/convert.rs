//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use kalendar_calendar::{WeekLayout, parse_date};
use kalendar_controller::{ControllerConfig, InvalidSeed};

use crate::config::ControllerToml;

/// Parses a week layout name into the corresponding enum variant.
pub fn parse_week_layout(s: &str) -> Result<WeekLayout> {
    match s.to_lowercase().as_str() {
        "full" => Ok(WeekLayout::Full),
        "clipped" => Ok(WeekLayout::Clipped),
        other => bail!("unknown week layout: {other:?}"),
    }
}

/// Parses an invalid-seed policy name into the corresponding enum variant.
pub fn parse_invalid_seed(s: &str) -> Result<InvalidSeed> {
    match s.to_lowercase().as_str() {
        "fallback" => Ok(InvalidSeed::Fallback),
        "reject" => Ok(InvalidSeed::Reject),
        other => bail!("unknown invalid_seed policy: {other:?}"),
    }
}

/// Builds a [`ControllerConfig`] from the TOML controller section.
///
/// Invalid initial dates are kept as invalid seeds; the configured policy
/// decides what the controller does with them.
pub fn build_controller_config(c: &ControllerToml) -> Result<ControllerConfig> {
    let mut cfg = ControllerConfig::new()
        .with_default_format(&c.default_format)
        .with_start_week_at(c.start_week_at)
        .with_week_layout(parse_week_layout(&c.week_layout)?)
        .with_invalid_seed(parse_invalid_seed(&c.invalid_seed)?);
    if let Some(ref d) = c.initial_date {
        cfg = cfg.with_initial_date(d);
    }
    if let Some(ref d) = c.initial_selected_date {
        cfg = cfg.with_initial_selected_date(d);
    }
    cfg.validate().context("invalid [controller] configuration")?;
    Ok(cfg)
}

/// Command-line overrides for the controller configuration.
#[derive(Debug, Default)]
pub struct Overrides<'a> {
    pub date: Option<&'a str>,
    pub selected: Option<&'a str>,
    pub week_start: Option<i64>,
    pub layout: Option<&'a str>,
}

/// Applies command-line overrides on top of a file-derived config.
///
/// Dates given on the command line must be valid ISO dates.
pub fn apply_overrides(mut cfg: ControllerConfig, o: &Overrides<'_>) -> Result<ControllerConfig> {
    if let Some(d) = o.date {
        cfg = cfg.with_initial_date(parse_date(d).with_context(|| format!("--date {d:?}"))?);
    }
    if let Some(d) = o.selected {
        cfg = cfg
            .with_initial_selected_date(parse_date(d).with_context(|| format!("--selected {d:?}"))?);
    }
    if let Some(i) = o.week_start {
        cfg = cfg.with_start_week_at(i);
    }
    if let Some(l) = o.layout {
        cfg = cfg.with_week_layout(parse_week_layout(l)?);
    }
    cfg.validate().context("invalid command-line options")?;
    Ok(cfg)
}
