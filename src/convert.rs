//! Pure conversion functions: TOML config structs and flags -> library types.

use anyhow::{Context, Result, bail};

use rpgcal_calendar::{CalendarDate, GenerationArgs, LunarCycle};
use rpgcal_report::ReportStyle;

use crate::config::{CalendarToml, ReportToml};

/// Parses a `day,week,month,year` starting date.
pub fn parse_start(s: &str) -> Result<GenerationArgs> {
    let fields: Vec<&str> = s.split(',').map(str::trim).collect();
    let [day, week, month, year] = fields.as_slice() else {
        bail!(
            "start date must be day,week,month,year, got {} field(s) in {s:?}",
            fields.len()
        );
    };
    Ok(GenerationArgs {
        day: day.parse().with_context(|| format!("invalid day in {s:?}"))?,
        week: week.parse().with_context(|| format!("invalid week in {s:?}"))?,
        month: month
            .parse()
            .with_context(|| format!("invalid month in {s:?}"))?,
        year: year.parse().with_context(|| format!("invalid year in {s:?}"))?,
    })
}

/// Builds the starting date from config, with `--start` and `--lunar`
/// taking precedence over the `[calendar]` table.
pub fn build_date(
    calendar: &CalendarToml,
    start: Option<&str>,
    lunar: Option<LunarCycle>,
) -> Result<CalendarDate<LunarCycle>> {
    let args = match start {
        Some(s) => parse_start(s)?,
        None => GenerationArgs {
            day: calendar.day,
            week: calendar.week,
            month: calendar.month,
            year: calendar.year,
        },
    };
    let policy = lunar.unwrap_or(calendar.lunar_cycle);
    args.into_date_with(policy)
        .context("invalid starting date")
}

/// Chooses the report styles: flags if any were given, else config.
pub fn resolve_styles(report: &ReportToml, flags: &[ReportStyle]) -> Result<Vec<ReportStyle>> {
    let styles = if flags.is_empty() {
        report.styles.clone()
    } else {
        flags.to_vec()
    };
    if styles.is_empty() {
        bail!("no report styles selected: set [report].styles or pass --style");
    }
    Ok(styles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_start_accepts_negative_year() {
        let args = parse_start("3, 2, 11, -40").unwrap();
        assert_eq!((args.day, args.week, args.month, args.year), (3, 2, 11, -40));
    }

    #[test]
    fn parse_start_rejects_wrong_shape() {
        let err = parse_start("1,1,1").unwrap_err();
        assert!(err.to_string().contains("3 field(s)"));
        assert!(parse_start("1,1,1,x").is_err());
        assert!(parse_start("1,1,300,0").is_err());
    }

    #[test]
    fn build_date_from_config() {
        let calendar = CalendarToml {
            day: 4,
            week: 3,
            month: 9,
            year: 12,
            lunar_cycle: LunarCycle::Yearly,
        };
        let date = build_date(&calendar, None, None).unwrap();
        assert_eq!(
            (date.day(), date.week(), date.month(), date.year()),
            (4, 3, 9, 12)
        );
        assert_eq!(date.policy(), LunarCycle::Yearly);
    }

    #[test]
    fn flags_override_config() {
        let calendar = CalendarToml::default();
        let date = build_date(&calendar, Some("7,4,12,99"), Some(LunarCycle::Yearly)).unwrap();
        assert_eq!(
            (date.day(), date.week(), date.month(), date.year()),
            (7, 4, 12, 99)
        );
        assert_eq!(date.policy(), LunarCycle::Yearly);
    }

    #[test]
    fn build_date_rejects_out_of_range_config() {
        let calendar = CalendarToml {
            week: 5,
            ..CalendarToml::default()
        };
        let err = build_date(&calendar, None, None).unwrap_err();
        assert!(format!("{err:#}").contains("invalid week: 5"));
    }

    #[test]
    fn style_flags_replace_config_styles() {
        let report = ReportToml::default();
        assert_eq!(
            resolve_styles(&report, &[]).unwrap(),
            vec![ReportStyle::Immersive]
        );
        assert_eq!(
            resolve_styles(&report, &[ReportStyle::Machine, ReportStyle::Json]).unwrap(),
            vec![ReportStyle::Machine, ReportStyle::Json]
        );
    }

    #[test]
    fn empty_styles_are_an_error() {
        let report = ReportToml {
            styles: Vec::new(),
            each_step: false,
        };
        assert!(resolve_styles(&report, &[]).is_err());
    }
}
