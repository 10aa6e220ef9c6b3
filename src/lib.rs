//! A Bikram-Sambat (Nepali) month calendar.
//!
//! Month lengths in BS vary from year to year and are read from a bundled
//! table ([`table`]). On top of it, [`Date`] provides validated days with
//! day arithmetic and [`Calendar`] materializes one month at a time, lets
//! callers attach events to its days and navigates between months and years.
//!
//! ```
//! use patro::Calendar;
//!
//! let mut calendar = Calendar::new("2081/5/10")?;
//! calendar.set_event(15, "Holiday")?;
//! assert_eq!(calendar.month_days(), 31);
//!
//! calendar.next_month()?;
//! assert_eq!(calendar.current().to_string(), "2081/6/1");
//! # Ok::<(), patro::Error>(())
//! ```

pub mod calendar;
pub mod config;
pub mod convert;
pub mod date;
pub mod error;
pub mod lang;
pub mod table;

pub use calendar::{Calendar, DateInput, Day, DayKey, Days, Event};
pub use date::Date;
pub use error::{Error, ErrorKind, Result};
