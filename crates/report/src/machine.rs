//! The comma-joined machine record and its JSON form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use rpgcal_calendar::{
    CalendarDate, CalendarError, DAYS_PER_WEEK, GenerationArgs, LunarPhasePolicy,
};

use crate::error::ReportError;

/// A date flattened to six integers:
/// `day, week, month, year, season, lunar_phase`.
///
/// The first field holds either the day of the week or the day of the month;
/// [`MachineRecord::generation_args`] accepts both, since the day of the
/// month exceeds 7 from the second week on and equals the day of the week in
/// the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineRecord {
    pub day: u8,
    pub week: u8,
    pub month: u8,
    pub year: i64,
    pub season: u8,
    pub lunar_phase: u8,
}

impl MachineRecord {
    /// Record with the day of the week in the first field.
    pub fn from_date<P: LunarPhasePolicy>(date: &CalendarDate<P>) -> Self {
        Self {
            day: date.day(),
            week: date.week(),
            month: date.month(),
            year: date.year(),
            season: date.season().get(),
            lunar_phase: date.lunar_phase().get(),
        }
    }

    /// Record with the day of the month in the first field.
    pub fn from_date_dom<P: LunarPhasePolicy>(date: &CalendarDate<P>) -> Self {
        Self {
            day: date.day_of_month(),
            ..Self::from_date(date)
        }
    }

    /// Recovers the `(day, week, month, year)` reconstruction tuple.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Calendar`] if the week is zero or the first
    /// field cannot be a day in that week.
    pub fn generation_args(&self) -> Result<GenerationArgs, ReportError> {
        let day = if self.day > DAYS_PER_WEEK {
            let week_offset = self
                .week
                .checked_sub(1)
                .ok_or(CalendarError::InvalidWeek { week: self.week })?
                .saturating_mul(DAYS_PER_WEEK);
            self.day.saturating_sub(week_offset)
        } else {
            self.day
        };
        if !(1..=DAYS_PER_WEEK).contains(&day) {
            return Err(CalendarError::InvalidDay { day: self.day }.into());
        }
        Ok(GenerationArgs {
            day,
            week: self.week,
            month: self.month,
            year: self.year,
        })
    }

    /// Rebuilds the date under `policy`, checking the recorded season and
    /// lunar phase against the re-derived ones.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the fields are out of range or the derived
    /// values disagree with the record.
    pub fn to_date<P: LunarPhasePolicy>(&self, policy: P) -> Result<CalendarDate<P>, ReportError> {
        let date = self.generation_args()?.into_date_with(policy)?;
        let derived = date.season().get();
        if derived != self.season {
            return Err(ReportError::SeasonMismatch {
                recorded: self.season,
                derived,
            });
        }
        let derived = date.lunar_phase().get();
        if derived != self.lunar_phase {
            return Err(ReportError::LunarPhaseMismatch {
                recorded: self.lunar_phase,
                derived,
            });
        }
        Ok(date)
    }

    /// Encodes the record as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for MachineRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.day, self.week, self.month, self.year, self.season, self.lunar_phase
        )
    }
}

impl FromStr for MachineRecord {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.trim().split(',').map(str::trim).collect();
        if fields.len() != 6 {
            return Err(ReportError::FieldCount {
                found: fields.len(),
            });
        }
        Ok(Self {
            day: parse_field(&fields, 0)?,
            week: parse_field(&fields, 1)?,
            month: parse_field(&fields, 2)?,
            year: parse_field(&fields, 3)?,
            season: parse_field(&fields, 4)?,
            lunar_phase: parse_field(&fields, 5)?,
        })
    }
}

fn parse_field<T: FromStr>(fields: &[&str], index: usize) -> Result<T, ReportError> {
    fields[index].parse().map_err(|_| ReportError::BadField {
        index,
        value: fields[index].to_string(),
    })
}
