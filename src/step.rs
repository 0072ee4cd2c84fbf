//! Command-line step syntax.
//!
//! A step is `[forward-|back-]TARGET[=COUNT]` where `TARGET` is one of
//! `day(s)`, `week(s)`, `month(s)`, `year(s)`, `season(s)` or
//! `lunar-phase(s)`. With a direction prefix the count is a repeat count
//! (default 1). Without one, only the cascade units are allowed and the count
//! is signed, so `years=-3` steps three years back.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, bail};

use rpgcal_calendar::{CalendarDate, Direction, LunarPhasePolicy, Unit};

/// One parsed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moves `delta` units through the cascade; negative moves back.
    Units { unit: Unit, delta: i64 },
    /// Jumps to the first day of the next or previous season.
    Season { direction: Direction, times: u32 },
    /// Advances or rewinds the moon by one phase.
    LunarPhase { direction: Direction, times: u32 },
}

enum Target {
    Unit(Unit),
    Season,
    LunarPhase,
}

impl Step {
    /// Applies this step to `date`.
    pub fn apply<P: LunarPhasePolicy>(self, date: &mut CalendarDate<P>) {
        match self {
            Step::Units { unit, delta } => date.step(unit, delta),
            Step::Season { direction, times } => {
                for _ in 0..times {
                    match direction {
                        Direction::Forward => date.forward_season(),
                        Direction::Backward => date.back_season(),
                    }
                }
            }
            Step::LunarPhase { direction, times } => {
                for _ in 0..times {
                    match direction {
                        Direction::Forward => date.forward_lunar_phase(),
                        Direction::Backward => date.back_lunar_phase(),
                    }
                }
            }
        }
    }
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, count) = match s.split_once('=') {
            Some((name, count)) => (name, Some(count.trim())),
            None => (s, None),
        };
        let name = name.trim().to_lowercase();

        let (direction, target) = if let Some(rest) = name.strip_prefix("forward-") {
            (Some(Direction::Forward), rest)
        } else if let Some(rest) = name.strip_prefix("back-") {
            (Some(Direction::Backward), rest)
        } else {
            (None, name.as_str())
        };

        let target = match target {
            "day" | "days" => Target::Unit(Unit::Day),
            "week" | "weeks" => Target::Unit(Unit::Week),
            "month" | "months" => Target::Unit(Unit::Month),
            "year" | "years" => Target::Unit(Unit::Year),
            "season" | "seasons" => Target::Season,
            "lunar-phase" | "lunar-phases" => Target::LunarPhase,
            _ => bail!("unknown step: {s:?}"),
        };

        let Some(direction) = direction else {
            let Target::Unit(unit) = target else {
                bail!("step {s:?} needs a forward- or back- prefix");
            };
            let delta = match count {
                Some(c) => c
                    .parse::<i64>()
                    .with_context(|| format!("invalid count in step {s:?}"))?,
                None => 1,
            };
            return Ok(Step::Units { unit, delta });
        };

        let times = match count {
            Some(c) => c
                .parse::<u32>()
                .with_context(|| format!("invalid repeat count in step {s:?}"))?,
            None => 1,
        };

        Ok(match target {
            Target::Unit(unit) => {
                let delta = i64::from(times);
                Step::Units {
                    unit,
                    delta: match direction {
                        Direction::Forward => delta,
                        Direction::Backward => -delta,
                    },
                }
            }
            Target::Season => Step::Season { direction, times },
            Target::LunarPhase => Step::LunarPhase { direction, times },
        })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (direction, times, what) = match *self {
            Step::Units { unit, delta } => {
                let direction = match Direction::of(delta) {
                    Some(Direction::Backward) => "back",
                    _ => "forward",
                };
                return write!(f, "{direction}-{unit}s={}", delta.unsigned_abs());
            }
            Step::Season { direction, times } => (direction, times, "season"),
            Step::LunarPhase { direction, times } => (direction, times, "lunar-phase"),
        };
        let direction = match direction {
            Direction::Forward => "forward",
            Direction::Backward => "back",
        };
        write!(f, "{direction}-{what}s={times}")
    }
}

#[cfg(test)]
mod tests {
    use rpgcal_calendar::{LunarPhase, Season, YearlyLunarPhase};

    use super::*;

    fn parse(s: &str) -> Step {
        s.parse().unwrap()
    }

    #[test]
    fn direction_prefix_with_count() {
        assert_eq!(
            parse("forward-days=6"),
            Step::Units {
                unit: Unit::Day,
                delta: 6
            }
        );
        assert_eq!(
            parse("back-months=14"),
            Step::Units {
                unit: Unit::Month,
                delta: -14
            }
        );
    }

    #[test]
    fn count_defaults_to_one() {
        assert_eq!(
            parse("back-week"),
            Step::Units {
                unit: Unit::Week,
                delta: -1
            }
        );
        assert_eq!(
            parse("forward-season"),
            Step::Season {
                direction: Direction::Forward,
                times: 1
            }
        );
        assert_eq!(
            parse("back-lunar-phase"),
            Step::LunarPhase {
                direction: Direction::Backward,
                times: 1
            }
        );
    }

    #[test]
    fn bare_unit_takes_signed_count() {
        assert_eq!(
            parse("years=-3"),
            Step::Units {
                unit: Unit::Year,
                delta: -3
            }
        );
        assert_eq!(
            parse("day"),
            Step::Units {
                unit: Unit::Day,
                delta: 1
            }
        );
    }

    #[test]
    fn case_and_spaces_are_forgiven() {
        assert_eq!(
            parse("Forward-Lunar-Phases = 2"),
            Step::LunarPhase {
                direction: Direction::Forward,
                times: 2
            }
        );
    }

    #[test]
    fn rejects_malformed_steps() {
        for bad in [
            "sideways-day",
            "hours=3",
            "forward-days=-1",
            "back-weeks=many",
            "season",
            "lunar-phase=2",
            "days=",
        ] {
            assert!(bad.parse::<Step>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn display_round_trips() {
        for text in [
            "forward-days=6",
            "back-weeks=2",
            "forward-seasons=3",
            "back-lunar-phases=1",
        ] {
            assert_eq!(parse(text).to_string(), text);
        }
        assert_eq!(parse("years=-3").to_string(), "back-years=3");
    }

    #[test]
    fn apply_moves_the_date() {
        let mut date = CalendarDate::default();
        for step in ["forward-days=6", "forward-day", "forward-season", "years=-3"] {
            parse(step).apply(&mut date);
        }
        assert_eq!(
            (date.day(), date.week(), date.month(), date.year()),
            (1, 1, 4, -3)
        );
        assert_eq!(date.season(), Season::Summer);
    }

    #[test]
    fn apply_lunar_phase_on_yearly_calendar() {
        let mut date = CalendarDate::start_of(YearlyLunarPhase, 0);
        parse("forward-lunar-phases=2").apply(&mut date);
        assert_eq!(date.year(), 2);
        assert_eq!(date.lunar_phase(), LunarPhase::Waning);
    }
}
