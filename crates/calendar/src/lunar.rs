//! Lunar phases and the policies that derive them.
//!
//! A policy answers two questions: which phase a date is in, and what "one
//! phase step" means. The engine never inspects the policy beyond
//! [`LunarPhasePolicy::dependency`], which tells it when to re-derive.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::tables::{LUNAR_PHASE_NAMES, LUNAR_PHASES_PER_CYCLE};
use crate::unit::{Direction, Unit};

/// The four phases of the moon, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LunarPhase {
    Waxing = 1,
    Full = 2,
    Waning = 3,
    New = 4,
}

impl LunarPhase {
    /// Maps a 1-based counter onto the cycle: 1 → waxing, 4 → new, 5 → waxing.
    ///
    /// Uses a euclidean remainder, so zero and negative counters wrap too
    /// (0 → new, -1 → waning).
    pub fn from_index(index: i64) -> Self {
        match index.rem_euclid(i64::from(LUNAR_PHASES_PER_CYCLE)) {
            1 => LunarPhase::Waxing,
            2 => LunarPhase::Full,
            3 => LunarPhase::Waning,
            _ => LunarPhase::New,
        }
    }

    /// Returns the 1-based phase number (1..=4).
    pub fn get(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase phase name.
    pub fn name(self) -> &'static str {
        LUNAR_PHASE_NAMES[usize::from(self.get() - 1)]
    }
}

impl fmt::Display for LunarPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::WeeklyLunarPhase {}
    impl Sealed for super::YearlyLunarPhase {}
    impl Sealed for super::LunarCycle {}
}

/// Strategy deriving the lunar phase of a [`CalendarDate`].
///
/// Sealed: the phase steps rely on engine internals that are not public.
pub trait LunarPhasePolicy:
    sealed::Sealed + Copy + Default + fmt::Debug + PartialEq + Eq + std::hash::Hash
{
    /// The unit whose mutation invalidates the derived phase.
    fn dependency(&self) -> Unit;

    /// Derives the phase from the date's current fields.
    fn derive(&self, date: &CalendarDate<Self>) -> LunarPhase;

    /// Moves `date` one phase forward or backward.
    fn step(&self, date: &mut CalendarDate<Self>, direction: Direction);
}

/// Default policy: the moon cycles with the week counter, one phase per week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WeeklyLunarPhase;

impl LunarPhasePolicy for WeeklyLunarPhase {
    fn dependency(&self) -> Unit {
        Unit::Week
    }

    fn derive(&self, date: &CalendarDate<Self>) -> LunarPhase {
        phase_for_week(date.week())
    }

    /// Lands on day 1 of the next (or previous) week.
    fn step(&self, date: &mut CalendarDate<Self>, direction: Direction) {
        step_by_week(date, direction);
    }
}

/// Each phase lasts a whole year: waxing in year 0, full in 1, waning in 2,
/// new in 3, waxing again in 4.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct YearlyLunarPhase;

impl LunarPhasePolicy for YearlyLunarPhase {
    fn dependency(&self) -> Unit {
        Unit::Year
    }

    fn derive(&self, date: &CalendarDate<Self>) -> LunarPhase {
        phase_for_year(date.year())
    }

    /// Lands on the first day of the next (or previous) year.
    fn step(&self, date: &mut CalendarDate<Self>, direction: Direction) {
        step_by_year(date, direction);
    }
}

/// Lunar policy chosen at runtime, e.g. from a config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LunarCycle {
    #[default]
    Weekly,
    Yearly,
}

impl LunarPhasePolicy for LunarCycle {
    fn dependency(&self) -> Unit {
        match self {
            LunarCycle::Weekly => Unit::Week,
            LunarCycle::Yearly => Unit::Year,
        }
    }

    fn derive(&self, date: &CalendarDate<Self>) -> LunarPhase {
        match self {
            LunarCycle::Weekly => phase_for_week(date.week()),
            LunarCycle::Yearly => phase_for_year(date.year()),
        }
    }

    fn step(&self, date: &mut CalendarDate<Self>, direction: Direction) {
        match self {
            LunarCycle::Weekly => step_by_week(date, direction),
            LunarCycle::Yearly => step_by_year(date, direction),
        }
    }
}

impl FromStr for LunarCycle {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(LunarCycle::Weekly),
            "yearly" => Ok(LunarCycle::Yearly),
            other => Err(CalendarError::UnknownLunarCycle {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for LunarCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LunarCycle::Weekly => "weekly",
            LunarCycle::Yearly => "yearly",
        })
    }
}

fn phase_for_week(week: u8) -> LunarPhase {
    LunarPhase::from_index(i64::from(week))
}

// Year 0 is waxing.
fn phase_for_year(year: i64) -> LunarPhase {
    LunarPhase::from_index(year.rem_euclid(i64::from(LUNAR_PHASES_PER_CYCLE)) + 1)
}

fn step_by_week<P: LunarPhasePolicy>(date: &mut CalendarDate<P>, direction: Direction) {
    date.rewind_to_week_start();
    match direction {
        Direction::Forward => date.forward_week(),
        Direction::Backward => date.back_week(),
    }
}

fn step_by_year<P: LunarPhasePolicy>(date: &mut CalendarDate<P>, direction: Direction) {
    date.rewind_to_year_start();
    match direction {
        Direction::Forward => date.forward_year(),
        Direction::Backward => date.back_year(),
    }
}
