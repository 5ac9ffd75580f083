use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "kalendar.toml";

/// Top-level Kalendar configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct KalendarConfig {
    /// Controller settings.
    #[serde(default)]
    pub controller: ControllerToml,

    /// Extra values passed through to the render callback.
    #[serde(default)]
    pub render: RenderToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControllerToml {
    pub initial_date: Option<String>,
    pub initial_selected_date: Option<String>,
    #[serde(default = "default_format")]
    pub default_format: String,
    #[serde(default)]
    pub start_week_at: i64,
    #[serde(default = "default_week_layout")]
    pub week_layout: String,
    #[serde(default = "default_invalid_seed")]
    pub invalid_seed: String,
}

impl Default for ControllerToml {
    fn default() -> Self {
        Self {
            initial_date: None,
            initial_selected_date: None,
            default_format: default_format(),
            start_week_at: 0,
            week_layout: default_week_layout(),
            invalid_seed: default_invalid_seed(),
        }
    }
}

fn default_format() -> String {
    kalendar_controller::DEFAULT_FORMAT.to_string()
}
fn default_week_layout() -> String {
    "full".to_string()
}
fn default_invalid_seed() -> String {
    "fallback".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderToml {
    #[serde(default = "default_header_format")]
    pub header_format: String,
    #[serde(default = "default_label_format")]
    pub label_format: String,
    #[serde(default)]
    pub extras: toml::Table,
}

impl Default for RenderToml {
    fn default() -> Self {
        Self {
            header_format: default_header_format(),
            label_format: default_label_format(),
            extras: toml::Table::new(),
        }
    }
}

fn default_header_format() -> String {
    "MMMM YYYY".to_string()
}
fn default_label_format() -> String {
    kalendar_controller::DEFAULT_LABEL_FORMAT.to_string()
}

impl KalendarConfig {
    /// Reads `path`. Without a path, reads `kalendar.toml` from the working
    /// directory if present and otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG).is_file() => Path::new(DEFAULT_CONFIG),
            None => return Ok(Self::default()),
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

impl RenderToml {
    /// The `[render.extras]` table as JSON values.
    pub fn extras_json(&self) -> Result<kalendar_controller::Extras> {
        self.extras
            .iter()
            .map(|(key, value)| {
                let json = serde_json::to_value(value)
                    .with_context(|| format!("render extra {key:?} is not representable as JSON"))?;
                Ok((key.clone(), json))
            })
            .collect::<Result<_>>()
    }
}
