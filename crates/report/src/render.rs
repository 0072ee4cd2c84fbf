//! Text renderings of a date.

use rpgcal_calendar::{CalendarDate, LunarPhasePolicy};

use crate::error::ReportError;
use crate::machine::MachineRecord;
use crate::ordinal::{ordinal, title_case};
use crate::style::ReportStyle;

/// Renders `date` in the given style.
///
/// # Errors
///
/// Returns [`ReportError::Json`] if the JSON style fails to encode.
pub fn render<P: LunarPhasePolicy>(
    style: ReportStyle,
    date: &CalendarDate<P>,
) -> Result<String, ReportError> {
    Ok(match style {
        ReportStyle::LongAndTall => long_and_tall(date),
        ReportStyle::OneLiner => one_liner(date),
        ReportStyle::Immersive => immersive(date),
        ReportStyle::Farmers => farmers(date),
        ReportStyle::Machine => machine(date),
        ReportStyle::MachineDom => machine_dom(date),
        ReportStyle::Json => MachineRecord::from_date(date).to_json()?,
    })
}

/// One labelled field per line, followed by a blank line.
pub fn long_and_tall<P: LunarPhasePolicy>(date: &CalendarDate<P>) -> String {
    format!(
        "Day: {}\nWeek: {}\nMonth: {}\nYear: {}\nSeason: {}\nLunar Phase: {}\n\n",
        date.day(),
        date.week(),
        date.month(),
        date.year(),
        date.season().get(),
        date.lunar_phase().get(),
    )
}

/// `Day 1, Week 1, Month 1, Year 0. Lunar Phase: Waxing.`
pub fn one_liner<P: LunarPhasePolicy>(date: &CalendarDate<P>) -> String {
    format!(
        "Day {}, Week {}, Month {}, Year {}. Lunar Phase: {}.",
        date.day(),
        date.week(),
        date.month(),
        date.year(),
        title_case(date.lunar_phase().name()),
    )
}

/// `It is the 10th of Springswax, of the year 0. It is Spring and the moon is full.`
pub fn immersive<P: LunarPhasePolicy>(date: &CalendarDate<P>) -> String {
    format!(
        "It is the {} of {}, of the year {}. It is {} and the moon is {}.",
        ordinal(i64::from(date.day_of_month())),
        title_case(date.month_name()),
        date.year(),
        title_case(date.season().name()),
        date.lunar_phase().name(),
    )
}

/// `It is the 3rd day of the 2nd week of the 1st month of Spring. The moon is full.`
///
/// The month is counted within the season via
/// [`CalendarDate::month_of_season`], so the third month of a season reads
/// as the "0th".
pub fn farmers<P: LunarPhasePolicy>(date: &CalendarDate<P>) -> String {
    format!(
        "It is the {} day of the {} week of the {} month of {}. The moon is {}.",
        ordinal(i64::from(date.day())),
        ordinal(i64::from(date.week())),
        ordinal(i64::from(date.month_of_season())),
        title_case(date.season().name()),
        date.lunar_phase().name(),
    )
}

/// `day,week,month,year,season,lunar_phase`
pub fn machine<P: LunarPhasePolicy>(date: &CalendarDate<P>) -> String {
    MachineRecord::from_date(date).to_string()
}

/// Like [`machine`], with the day of the month in the first field.
pub fn machine_dom<P: LunarPhasePolicy>(date: &CalendarDate<P>) -> String {
    MachineRecord::from_date_dom(date).to_string()
}
