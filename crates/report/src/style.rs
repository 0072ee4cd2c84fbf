//! Named report styles, selectable from config or the command line.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ReportError;

/// The ways a date can be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportStyle {
    /// Labelled field per line.
    #[serde(alias = "long")]
    LongAndTall,
    /// Numbers on one line with the moon spelled out.
    OneLiner,
    /// A sentence with the month, season and moon by name.
    Immersive,
    /// A sentence counting day, week and month of season.
    Farmers,
    /// Comma-joined six-tuple.
    Machine,
    /// Comma-joined six-tuple led by the day of the month.
    MachineDom,
    /// The six-tuple as a JSON object.
    Json,
}

impl ReportStyle {
    /// All styles, in the order they are documented.
    pub const ALL: [ReportStyle; 7] = [
        ReportStyle::LongAndTall,
        ReportStyle::OneLiner,
        ReportStyle::Immersive,
        ReportStyle::Farmers,
        ReportStyle::Machine,
        ReportStyle::MachineDom,
        ReportStyle::Json,
    ];

    /// The canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            ReportStyle::LongAndTall => "long-and-tall",
            ReportStyle::OneLiner => "one-liner",
            ReportStyle::Immersive => "immersive",
            ReportStyle::Farmers => "farmers",
            ReportStyle::Machine => "machine",
            ReportStyle::MachineDom => "machine-dom",
            ReportStyle::Json => "json",
        }
    }
}

impl fmt::Display for ReportStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportStyle {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        if wanted == "long" {
            return Ok(ReportStyle::LongAndTall);
        }
        Self::ALL
            .into_iter()
            .find(|style| style.name() == wanted)
            .ok_or_else(|| ReportError::UnknownStyle {
                name: s.to_string(),
            })
    }
}
