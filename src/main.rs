//! `rpgcal`: step a fictional RPG calendar and print dated reports.
//!
//! ```text
//! rpgcal demo --lunar yearly
//! rpgcal -v run --start 7,4,12,0 --style machine forward-day years=-3
//! ```

mod cli;
mod config;
mod convert;
mod demo_cmd;
mod logging;
mod run_cmd;
mod step;

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
        Command::Demo(args) => demo_cmd::run(args),
        Command::Run(args) => run_cmd::run(args),
    }
}
