//! # rpgcal-report
//!
//! Human- and machine-readable renderings of an
//! [`rpgcal_calendar::CalendarDate`].
//!
//! ## Quick Start
//!
//! ```
//! use rpgcal_calendar::CalendarDate;
//! use rpgcal_report::{MachineRecord, ReportStyle, immersive, render};
//!
//! let date = CalendarDate::new(3, 2, 1, 0).unwrap();
//! assert_eq!(
//!     immersive(&date),
//!     "It is the 10th of Springswax, of the year 0. It is Spring and the moon is full."
//! );
//!
//! // The machine record reads back into an equal date.
//! let text = render(ReportStyle::MachineDom, &date).unwrap();
//! let record: MachineRecord = text.parse().unwrap();
//! assert_eq!(record.to_date(date.policy()).unwrap(), date);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `render` | The text report styles |
//! | `machine` | Comma-joined six-tuple and its JSON form |
//! | `style` | Report style names |
//! | `ordinal` | Ordinal suffixes and title casing |
//! | `error` | Error types |

mod error;
mod machine;
mod ordinal;
mod render;
mod style;

pub use error::ReportError;
pub use machine::MachineRecord;
pub use ordinal::ordinal;
pub use render::{farmers, immersive, long_and_tall, machine, machine_dom, one_liner, render};
pub use style::ReportStyle;
