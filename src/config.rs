use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use rpgcal_calendar::LunarCycle;
use rpgcal_report::ReportStyle;

/// Top-level rpgcal configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RpgcalConfig {
    /// Starting date and lunar cycle.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Report settings.
    #[serde(default)]
    pub report: ReportToml,
}

impl RpgcalConfig {
    /// Reads and parses a TOML config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse config TOML: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_one")]
    pub day: u8,
    #[serde(default = "default_one")]
    pub week: u8,
    #[serde(default = "default_one")]
    pub month: u8,
    #[serde(default)]
    pub year: i64,
    #[serde(default)]
    pub lunar_cycle: LunarCycle,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            day: 1,
            week: 1,
            month: 1,
            year: 0,
            lunar_cycle: LunarCycle::Weekly,
        }
    }
}

fn default_one() -> u8 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportToml {
    #[serde(default = "default_styles")]
    pub styles: Vec<ReportStyle>,
    #[serde(default)]
    pub each_step: bool,
}

impl Default for ReportToml {
    fn default() -> Self {
        Self {
            styles: default_styles(),
            each_step: false,
        }
    }
}

fn default_styles() -> Vec<ReportStyle> {
    vec![ReportStyle::Immersive]
}
