//! Run command: build a date, apply steps and print the chosen reports.

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use rpgcal_calendar::{CalendarDate, LunarCycle};
use rpgcal_report::{ReportStyle, render};

use crate::cli::RunArgs;
use crate::config::RpgcalConfig;
use crate::convert;
use crate::step::Step;

/// Run the step pipeline and print reports to stdout.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("run").entered();

    // 1. Load config, or fall back to defaults
    let config = match args.config {
        Some(ref path) => {
            info!(path = %path.display(), "reading config");
            RpgcalConfig::from_path(path)?
        }
        None => RpgcalConfig::default(),
    };

    // 2. Merge CLI flags over config
    let mut date = convert::build_date(&config.calendar, args.start.as_deref(), args.lunar)?;
    let styles = convert::resolve_styles(&config.report, &args.styles)?;
    let each_step = args.each || config.report.each_step;
    info!(
        start = ?date.generation_args(),
        lunar = %date.policy(),
        n_steps = args.steps.len(),
        "starting date built"
    );

    // 3. Parse every step before touching the date
    let steps = args
        .steps
        .iter()
        .map(|s| s.parse::<Step>())
        .collect::<Result<Vec<_>>>()?;

    // 4. Apply steps, reporting along the way if asked
    for line in walk(&mut date, &steps, &styles, each_step)? {
        println!("{line}");
    }
    Ok(())
}

/// Applies `steps` in order and returns the rendered reports.
///
/// With `each_step` the reports follow the starting date and every step,
/// otherwise only the final date is reported.
fn walk(
    date: &mut CalendarDate<LunarCycle>,
    steps: &[Step],
    styles: &[ReportStyle],
    each_step: bool,
) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    if each_step {
        report(date, styles, &mut lines)?;
    }
    for step in steps {
        step.apply(date);
        debug!(%step, now = ?date.generation_args(), "applied step");
        if each_step {
            report(date, styles, &mut lines)?;
        }
    }
    if !each_step {
        report(date, styles, &mut lines)?;
    }
    Ok(lines)
}

fn report(
    date: &CalendarDate<LunarCycle>,
    styles: &[ReportStyle],
    lines: &mut Vec<String>,
) -> Result<()> {
    for &style in styles {
        let text = render(style, date).with_context(|| format!("failed to render {style}"))?;
        lines.push(text);
    }
    Ok(())
}
