//! Demo command: walk a calendar through a fixed script and print reports.

use anyhow::Result;
use tracing::{debug, info, info_span};

use rpgcal_calendar::{CalendarDate, LunarCycle, YearlyLunarPhase};
use rpgcal_report::{farmers, immersive, long_and_tall, machine, machine_dom, one_liner};

use crate::cli::DemoArgs;

/// Run the demonstration script for the chosen lunar cycle.
pub fn run(args: DemoArgs) -> Result<()> {
    let _cmd = info_span!("demo", lunar = %args.lunar).entered();
    let lines = match args.lunar {
        LunarCycle::Weekly => weekly_script(),
        LunarCycle::Yearly => yearly_script(),
    };
    info!(n_lines = lines.len(), "script finished");
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// A tour of the weekly-moon calendar: day, week and year rollovers, lunar
/// and season jumps, then a borrow back across a season boundary.
fn weekly_script() -> Vec<String> {
    let mut date = CalendarDate::default();
    let mut lines = vec![immersive(&date)];

    date.forward_days(6);
    lines.push(farmers(&date));
    date.forward_day();
    lines.push(immersive(&date));
    date.forward_week();
    lines.push(immersive(&date));
    date.forward_week();
    lines.push(immersive(&date));
    date.forward_year();
    lines.push(immersive(&date));
    date.forward_lunar_phase();
    lines.push(immersive(&date));
    date.forward_lunar_phase();
    lines.push(immersive(&date));
    date.forward_season();
    lines.push(immersive(&date));
    date.back_weeks(2);
    lines.push(immersive(&date));

    debug!(args = ?date.generation_args(), "weekly script done");
    lines
}

/// A tour of the yearly-moon calendar, showing every report style.
fn yearly_script() -> Vec<String> {
    let mut date = CalendarDate::start_of(YearlyLunarPhase, 0);
    let mut lines = vec![long_and_tall(&date)];

    date.forward_days(8);
    lines.push(long_and_tall(&date));
    date.forward_weeks(2);
    lines.push(long_and_tall(&date));
    lines.push(date.day_of_month().to_string());
    date.forward_months(4);
    lines.push(long_and_tall(&date));
    date.forward_months(8);
    lines.push(long_and_tall(&date));

    lines.push(one_liner(&date));
    lines.push(immersive(&date));
    lines.push(farmers(&date));
    lines.push(machine(&date));
    lines.push(machine_dom(&date));
    lines.push(args_list(&date));

    date.forward_years(2);
    lines.push(args_list(&date));
    lines.push(farmers(&date));

    debug!(args = ?date.generation_args(), "yearly script done");
    lines
}

fn args_list(date: &CalendarDate<YearlyLunarPhase>) -> String {
    let args = date.generation_args();
    format!("[{}, {}, {}, {}]", args.day, args.week, args.month, args.year)
}
