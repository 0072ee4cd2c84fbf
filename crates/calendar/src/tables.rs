//! Fixed shape of the calendar and its name tables.

/// Days in one week.
pub const DAYS_PER_WEEK: u8 = 7;

/// Weeks in one month.
pub const WEEKS_PER_MONTH: u8 = 4;

/// Months in one year.
pub const MONTHS_PER_YEAR: u8 = 12;

/// Seasons in one year.
pub const SEASONS_PER_YEAR: u8 = 4;

/// Lunar phases in one full cycle, whichever unit drives the cycle.
pub const LUNAR_PHASES_PER_CYCLE: u8 = 4;

// Seasons must tile the year exactly.
const _: () = assert!(
    MONTHS_PER_YEAR % SEASONS_PER_YEAR == 0,
    "months per year must be a multiple of seasons per year"
);

/// Months in one season.
pub const MONTHS_PER_SEASON: u8 = MONTHS_PER_YEAR / SEASONS_PER_YEAR;

/// Days in one month.
pub const DAYS_PER_MONTH: u16 = DAYS_PER_WEEK as u16 * WEEKS_PER_MONTH as u16;

/// Days in one year (336, roughly 92% of a solar year).
pub const DAYS_PER_YEAR: u16 = DAYS_PER_MONTH * MONTHS_PER_YEAR as u16;

/// Month names, index 0 = month 1.
pub const MONTH_NAMES: [&str; MONTHS_PER_YEAR as usize] = [
    "springswax",
    "springtide",
    "springswane",
    "summerswax",
    "summertide",
    "summerswane",
    "fallswax",
    "falltide",
    "fallswane",
    "winterswax",
    "wintertide",
    "winterswane",
];

/// Season names, index 0 = season 1.
pub const SEASON_NAMES: [&str; SEASONS_PER_YEAR as usize] = ["spring", "summer", "fall", "winter"];

/// Lunar phase names, index 0 = phase 1.
pub const LUNAR_PHASE_NAMES: [&str; LUNAR_PHASES_PER_CYCLE as usize] =
    ["waxing", "full", "waning", "new"];

/// Returns the lowercase name of `month` (1..=12), or `None` if out of range.
pub fn month_name(month: u8) -> Option<&'static str> {
    MONTH_NAMES.get(usize::from(month).checked_sub(1)?).copied()
}
