//! Seasons, derived from the month.

use std::fmt;

use crate::tables::{MONTHS_PER_SEASON, SEASON_NAMES};

/// One of the four seasons. Each season spans three consecutive months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Season {
    /// Months 1-3.
    Spring = 1,
    /// Months 4-6.
    Summer = 2,
    /// Months 7-9.
    Fall = 3,
    /// Months 10-12.
    Winter = 4,
}

impl Season {
    /// All seasons in calendar order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Returns the season containing `month`.
    ///
    /// Months above 12 are treated as winter; callers only pass months that a
    /// [`CalendarDate`](crate::CalendarDate) has already validated.
    pub fn from_month(month: u8) -> Self {
        match month {
            0..=3 => Season::Spring,
            4..=6 => Season::Summer,
            7..=9 => Season::Fall,
            _ => Season::Winter,
        }
    }

    /// Returns the 1-based season number (1..=4).
    pub fn get(self) -> u8 {
        self as u8
    }

    /// Returns the first month of this season.
    pub fn first_month(self) -> u8 {
        (self.get() - 1) * MONTHS_PER_SEASON + 1
    }

    /// Returns the season after this one, and whether the year rolled over.
    pub fn next(self) -> (Self, bool) {
        match self {
            Season::Spring => (Season::Summer, false),
            Season::Summer => (Season::Fall, false),
            Season::Fall => (Season::Winter, false),
            Season::Winter => (Season::Spring, true),
        }
    }

    /// Returns the season before this one, and whether the year rolled back.
    pub fn previous(self) -> (Self, bool) {
        match self {
            Season::Spring => (Season::Winter, true),
            Season::Summer => (Season::Spring, false),
            Season::Fall => (Season::Summer, false),
            Season::Winter => (Season::Fall, false),
        }
    }

    /// Returns the lowercase season name.
    pub fn name(self) -> &'static str {
        SEASON_NAMES[usize::from(self.get() - 1)]
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
