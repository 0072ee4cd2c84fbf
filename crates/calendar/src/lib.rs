//! # rpgcal-calendar
//!
//! Carry/borrow date arithmetic for a fictional RPG calendar: 7-day weeks,
//! 4-week months, 12-month years, four seasons and a four-phase moon.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["forward_day()"] -->|"day > 7"| B["forward_week()"]
//!     B -->|"week > 4"| C["forward_month()"]
//!     C -->|"month > 12"| D["forward_year()"]
//!     B -->|"settle(Week)"| E["lunar phase (weekly)"]
//!     C -->|"settle(Month)"| F["season"]
//!     D -->|"settle(Year)"| G["lunar phase (yearly)"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use rpgcal_calendar::{CalendarDate, LunarPhase, Season, YearlyLunarPhase};
//!
//! // The last day of year 0 rolls into year 1.
//! let mut date = CalendarDate::new(7, 4, 12, 0).unwrap();
//! date.forward_day();
//! assert_eq!((date.day(), date.week(), date.month(), date.year()), (1, 1, 1, 1));
//! assert_eq!(date.season(), Season::Spring);
//!
//! // A moon that changes phase once per year.
//! let mut odd = CalendarDate::start_of(YearlyLunarPhase, 0);
//! odd.forward_lunar_phase();
//! assert_eq!(odd.lunar_phase(), LunarPhase::Full);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | The engine: `CalendarDate` and its stepping operations |
//! | `lunar` | Lunar phases and the weekly/yearly policies |
//! | `season` | Seasons derived from the month |
//! | `tables` | Calendar shape constants and name tables |
//! | `unit` | Cascade levels and stepping direction |
//! | `error` | Error types |

mod date;
mod error;
mod lunar;
mod season;
mod tables;
mod unit;

pub use date::{CalendarDate, GenerationArgs};
pub use error::CalendarError;
pub use lunar::{LunarCycle, LunarPhase, LunarPhasePolicy, WeeklyLunarPhase, YearlyLunarPhase};
pub use season::Season;
pub use tables::{
    DAYS_PER_MONTH, DAYS_PER_WEEK, DAYS_PER_YEAR, LUNAR_PHASE_NAMES, LUNAR_PHASES_PER_CYCLE,
    MONTH_NAMES, MONTHS_PER_SEASON, MONTHS_PER_YEAR, SEASON_NAMES, SEASONS_PER_YEAR,
    WEEKS_PER_MONTH, month_name,
};
pub use unit::{Direction, Unit};
