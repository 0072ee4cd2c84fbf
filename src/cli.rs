use std::path::PathBuf;

use clap::{Parser, Subcommand};

use rpgcal_calendar::LunarCycle;
use rpgcal_report::ReportStyle;

/// Fictional RPG calendar.
#[derive(Parser)]
#[command(
    name = "rpgcal",
    version,
    about = "Fictional RPG calendar with weekly or yearly lunar cycles"
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
    /// Walk a calendar through a fixed demonstration script.
    Demo(DemoArgs),
    /// Build a date, apply steps to it and print reports.
    Run(RunArgs),
}

/// Arguments for the `demo` subcommand.
#[derive(clap::Args)]
pub struct DemoArgs {
    /// Lunar cycle of the demonstrated calendar (weekly or yearly).
    #[arg(long, default_value = "weekly")]
    pub lunar: LunarCycle,
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the starting date from config, as `day,week,month,year`.
    #[arg(short, long)]
    pub start: Option<String>,

    /// Override the lunar cycle from config.
    #[arg(long)]
    pub lunar: Option<LunarCycle>,

    /// Report style to print; repeat for several. Overrides config.
    #[arg(long = "style")]
    pub styles: Vec<ReportStyle>,

    /// Print the reports after every step, not just the last.
    #[arg(long)]
    pub each: bool,

    /// Steps to apply in order, e.g. `forward-days=6`, `back-season`, `years=-3`.
    pub steps: Vec<String>,
}
