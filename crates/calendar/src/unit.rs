//! Cascade levels and stepping direction.

use std::fmt;

/// A level of the day → week → month → year cascade.
///
/// Ordered from finest to coarsest, so `Unit::Day < Unit::Year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Day,
    Week,
    Month,
    Year,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        })
    }
}

/// Which way a step moves through the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Returns the direction a signed delta points in, or `None` for zero.
    pub fn of(delta: i64) -> Option<Self> {
        match delta.signum() {
            1 => Some(Direction::Forward),
            -1 => Some(Direction::Backward),
            _ => None,
        }
    }
}
