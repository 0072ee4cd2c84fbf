//! The calendar engine: a date that steps through the day → week → month →
//! year cascade and keeps its season and lunar phase derived.

use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::error::CalendarError;
use crate::lunar::{LunarPhase, LunarPhasePolicy, WeeklyLunarPhase};
use crate::season::Season;
use crate::tables::{
    DAYS_PER_WEEK, MONTHS_PER_SEASON, MONTHS_PER_YEAR, WEEKS_PER_MONTH, month_name,
};
use crate::unit::{Direction, Unit};

/// The `(day, week, month, year)` tuple that fully determines a date.
///
/// Season and lunar phase are left out because a new [`CalendarDate`] derives
/// them on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenerationArgs {
    pub day: u8,
    pub week: u8,
    pub month: u8,
    pub year: i64,
}

impl GenerationArgs {
    /// Builds a date with the default weekly lunar policy.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if any field is out of range.
    pub fn into_date(self) -> Result<CalendarDate, CalendarError> {
        CalendarDate::from_generation_args(self)
    }

    /// Builds a date governed by `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if any field is out of range.
    pub fn into_date_with<P: LunarPhasePolicy>(
        self,
        policy: P,
    ) -> Result<CalendarDate<P>, CalendarError> {
        CalendarDate::with_policy(policy, self.day, self.week, self.month, self.year)
    }
}

impl From<(u8, u8, u8, i64)> for GenerationArgs {
    fn from((day, week, month, year): (u8, u8, u8, i64)) -> Self {
        Self {
            day,
            week,
            month,
            year,
        }
    }
}

/// A date in the RPG calendar.
///
/// Every public operation leaves `day` in 1..=7, `week` in 1..=4 and `month`
/// in 1..=12, with `season` and `lunar_phase` re-derived for the new fields.
/// Stepping is total: overflow at one unit wraps it and carries a single step
/// into the next coarser unit, and `year` has no bound in either direction.
///
/// The type parameter selects the [`LunarPhasePolicy`]; use
/// [`LunarCycle`](crate::LunarCycle) to pick one at runtime.
#[derive(Debug, Clone, Copy)]
pub struct CalendarDate<P: LunarPhasePolicy = WeeklyLunarPhase> {
    day: u8,
    week: u8,
    month: u8,
    year: i64,
    season: Season,
    lunar_phase: LunarPhase,
    policy: P,
}

impl Default for CalendarDate {
    /// Day 1, week 1, month 1 of year 0 with the weekly lunar policy.
    fn default() -> Self {
        Self::start_of(WeeklyLunarPhase, 0)
    }
}

// Derived fields follow from the rest, so they take no part in comparisons.
impl<P: LunarPhasePolicy> PartialEq for CalendarDate<P> {
    fn eq(&self, other: &Self) -> bool {
        self.generation_args() == other.generation_args() && self.policy == other.policy
    }
}

impl<P: LunarPhasePolicy> Eq for CalendarDate<P> {}

impl<P: LunarPhasePolicy> Hash for CalendarDate<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.generation_args().hash(state);
        self.policy.hash(state);
    }
}

impl CalendarDate {
    /// Creates a date with the default weekly lunar policy.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if `day`, `week` or `month` is out of range.
    pub fn new(day: u8, week: u8, month: u8, year: i64) -> Result<Self, CalendarError> {
        Self::with_policy(WeeklyLunarPhase, day, week, month, year)
    }

    /// Rebuilds a date from the tuple returned by [`Self::generation_args`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if any field is out of range.
    pub fn from_generation_args(args: GenerationArgs) -> Result<Self, CalendarError> {
        Self::new(args.day, args.week, args.month, args.year)
    }
}

impl<P: LunarPhasePolicy> CalendarDate<P> {
    /// Creates a date governed by `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if `day`, `week` or `month` is out of range.
    pub fn with_policy(
        policy: P,
        day: u8,
        week: u8,
        month: u8,
        year: i64,
    ) -> Result<Self, CalendarError> {
        if !(1..=DAYS_PER_WEEK).contains(&day) {
            return Err(CalendarError::InvalidDay { day });
        }
        if !(1..=WEEKS_PER_MONTH).contains(&week) {
            return Err(CalendarError::InvalidWeek { week });
        }
        if !(1..=MONTHS_PER_YEAR).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let mut date = Self::start_of(policy, year);
        date.day = day;
        date.week = week;
        date.month = month;
        date.derive_all();
        Ok(date)
    }

    /// Returns the first day of `year` under `policy`.
    pub fn start_of(policy: P, year: i64) -> Self {
        let mut date = Self {
            day: 1,
            week: 1,
            month: 1,
            year,
            season: Season::Spring,
            lunar_phase: LunarPhase::Waxing,
            policy,
        };
        date.derive_all();
        date
    }

    // getters

    /// Returns the day of the week (1..=7).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the week of the month (1..=4).
    pub fn week(&self) -> u8 {
        self.week
    }

    /// Returns the month of the year (1..=12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the year, which may be negative.
    pub fn year(&self) -> i64 {
        self.year
    }

    /// Returns the season derived from the month.
    pub fn season(&self) -> Season {
        self.season
    }

    /// Returns the lunar phase derived by the policy.
    pub fn lunar_phase(&self) -> LunarPhase {
        self.lunar_phase
    }

    /// Returns the lunar policy governing this date.
    pub fn policy(&self) -> P {
        self.policy
    }

    /// Returns the lowercase name of the current month.
    pub fn month_name(&self) -> &'static str {
        // month is validated on construction and kept in range by stepping
        month_name(self.month).unwrap_or_default()
    }

    // queries

    /// Day number within the month, counting weeks as flattened:
    /// `(week - 1) * 7 + day`, in 1..=28.
    pub fn day_of_month(&self) -> u8 {
        (self.week - 1) * DAYS_PER_WEEK + self.day
    }

    /// Month number within the season, as `month % 3`.
    ///
    /// The first two months of a season give 1 and 2; the third gives 0.
    pub fn month_of_season(&self) -> u8 {
        self.month % MONTHS_PER_SEASON
    }

    /// Returns the tuple needed to rebuild an equivalent date.
    pub fn generation_args(&self) -> GenerationArgs {
        GenerationArgs {
            day: self.day,
            week: self.week,
            month: self.month,
            year: self.year,
        }
    }

    // days

    /// Advances one day, carrying into the week after day 7.
    pub fn forward_day(&mut self) {
        self.day += 1;
        if self.day > DAYS_PER_WEEK {
            self.day = 1;
            self.forward_week();
        }
        self.settle(Unit::Day);
    }

    /// Retreats one day, borrowing from the week before day 1.
    pub fn back_day(&mut self) {
        self.day -= 1;
        if self.day < 1 {
            self.day = DAYS_PER_WEEK;
            self.back_week();
        }
        self.settle(Unit::Day);
    }

    /// Advances `n` days, one at a time.
    pub fn forward_days(&mut self, n: u32) {
        for _ in 0..n {
            self.forward_day();
        }
    }

    /// Retreats `n` days, one at a time.
    pub fn back_days(&mut self, n: u32) {
        for _ in 0..n {
            self.back_day();
        }
    }

    // weeks

    /// Advances one week, carrying into the month after week 4.
    pub fn forward_week(&mut self) {
        self.week += 1;
        if self.week > WEEKS_PER_MONTH {
            trace!(month = self.month, "week rolled over");
            self.week = 1;
            self.forward_month();
        }
        self.settle(Unit::Week);
    }

    /// Retreats one week, borrowing from the month before week 1.
    pub fn back_week(&mut self) {
        self.week -= 1;
        if self.week < 1 {
            trace!(month = self.month, "week rolled back");
            self.week = WEEKS_PER_MONTH;
            self.back_month();
        }
        self.settle(Unit::Week);
    }

    /// Advances `n` weeks, one at a time.
    pub fn forward_weeks(&mut self, n: u32) {
        for _ in 0..n {
            self.forward_week();
        }
    }

    /// Retreats `n` weeks, one at a time.
    pub fn back_weeks(&mut self, n: u32) {
        for _ in 0..n {
            self.back_week();
        }
    }

    // months

    /// Advances one month, carrying into the year after month 12.
    pub fn forward_month(&mut self) {
        self.month += 1;
        if self.month > MONTHS_PER_YEAR {
            trace!(year = self.year, "month rolled over");
            self.month = 1;
            self.forward_year();
        }
        self.settle(Unit::Month);
    }

    /// Retreats one month, borrowing from the year before month 1.
    pub fn back_month(&mut self) {
        self.month -= 1;
        if self.month < 1 {
            trace!(year = self.year, "month rolled back");
            self.month = MONTHS_PER_YEAR;
            self.back_year();
        }
        self.settle(Unit::Month);
    }

    /// Advances `n` months, one at a time.
    pub fn forward_months(&mut self, n: u32) {
        for _ in 0..n {
            self.forward_month();
        }
    }

    /// Retreats `n` months, one at a time.
    pub fn back_months(&mut self, n: u32) {
        for _ in 0..n {
            self.back_month();
        }
    }

    // years

    /// Advances one year.
    ///
    /// Years saturate at `i64::MAX`, so stepping stays total at the bound.
    pub fn forward_year(&mut self) {
        self.year = self.year.saturating_add(1);
        self.settle(Unit::Year);
    }

    /// Retreats one year; year 0 is followed by year -1.
    ///
    /// Re-derives the yearly lunar phase, as [`forward_year`](Self::forward_year)
    /// does. Saturates at `i64::MIN`.
    pub fn back_year(&mut self) {
        self.year = self.year.saturating_sub(1);
        self.settle(Unit::Year);
    }

    /// Advances `n` years in a single delta, saturating at `i64::MAX`.
    pub fn forward_years(&mut self, n: u32) {
        self.year = self.year.saturating_add(i64::from(n));
        self.settle(Unit::Year);
    }

    /// Retreats `n` years in a single delta, saturating at `i64::MIN`.
    pub fn back_years(&mut self, n: u32) {
        self.year = self.year.saturating_sub(i64::from(n));
        self.settle(Unit::Year);
    }

    // seasons

    /// Jumps to day 1, week 1 of the first month of the next season.
    ///
    /// This is "start of next season", not "three months later": any date
    /// inside a season lands on the same result. Winter rolls into spring of
    /// the following year.
    pub fn forward_season(&mut self) {
        let (next, new_year) = self.season.next();
        self.jump_to_season(next);
        if new_year {
            self.forward_year();
        }
    }

    /// Jumps to day 1, week 1 of the first month of the previous season.
    ///
    /// Spring rolls back into winter of the preceding year.
    pub fn back_season(&mut self) {
        let (previous, old_year) = self.season.previous();
        self.jump_to_season(previous);
        if old_year {
            self.back_year();
        }
    }

    fn jump_to_season(&mut self, season: Season) {
        self.day = 1;
        self.week = 1;
        self.month = season.first_month();
        self.settle(Unit::Week);
        self.settle(Unit::Month);
    }

    // lunar phases

    /// Moves to the start of the next lunar phase, as the policy defines it.
    pub fn forward_lunar_phase(&mut self) {
        let policy = self.policy;
        policy.step(self, Direction::Forward);
    }

    /// Moves to the start of the previous lunar phase, as the policy defines it.
    pub fn back_lunar_phase(&mut self) {
        let policy = self.policy;
        policy.step(self, Direction::Backward);
    }

    // signed dispatch

    /// Steps `delta` units of `unit`: forward when positive, backward when
    /// negative, nothing when zero.
    ///
    /// Years move in a single saturating delta. Other deltas beyond
    /// `u32::MAX` in magnitude are applied in several batches.
    pub fn step(&mut self, unit: Unit, delta: i64) {
        let Some(direction) = Direction::of(delta) else {
            return;
        };
        let (forward, back): (fn(&mut Self, u32), fn(&mut Self, u32)) = match unit {
            Unit::Day => (Self::forward_days, Self::back_days),
            Unit::Week => (Self::forward_weeks, Self::back_weeks),
            Unit::Month => (Self::forward_months, Self::back_months),
            Unit::Year => {
                self.year = self.year.saturating_add(delta);
                self.settle(Unit::Year);
                return;
            }
        };
        let apply = match direction {
            Direction::Forward => forward,
            Direction::Backward => back,
        };
        let mut remaining = delta.unsigned_abs();
        while remaining > 0 {
            let n = u32::try_from(remaining).unwrap_or(u32::MAX);
            remaining -= u64::from(n);
            apply(self, n);
        }
    }

    // policy hooks

    /// Resets the day to 1 without touching the week.
    pub(crate) fn rewind_to_week_start(&mut self) {
        self.day = 1;
    }

    /// Resets day, week and month to 1, leaving the year alone.
    pub(crate) fn rewind_to_year_start(&mut self) {
        self.day = 1;
        self.week = 1;
        self.month = 1;
        self.settle(Unit::Week);
        self.settle(Unit::Month);
    }

    // derivation

    /// Re-derives whatever depends on `unit` after it has settled in range.
    ///
    /// | settled unit | re-derived |
    /// |---|---|
    /// | month | season |
    /// | policy dependency (week or year) | lunar phase |
    fn settle(&mut self, unit: Unit) {
        if unit == Unit::Month {
            self.season = Season::from_month(self.month);
        }
        if unit == self.policy.dependency() {
            self.lunar_phase = self.policy.derive(self);
        }
    }

    fn derive_all(&mut self) {
        self.season = Season::from_month(self.month);
        self.lunar_phase = self.policy.derive(self);
    }
}
