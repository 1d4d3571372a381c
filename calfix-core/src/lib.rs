//! Core of calfix.
//!
//! This crate holds everything the `calfix` CLI needs that is not terminal I/O:
//! - `ics` module: unfolding, event splitting and per-event rewriting of .ics text
//! - `fix` module: the single-pass pipeline that ties the stages together
//! - configuration types and the persisted settings file

pub mod calfix;
pub mod calfix_config;
pub mod constants;
pub mod error;
pub mod fix;
pub mod ics;
pub mod keywords;
pub mod timezone;

pub use error::{CalFixError, CalFixResult};
pub use fix::{FixOptions, FixOutcome, UnterminatedEvent, fix_calendar, fix_calendar_with_keywords};
pub use keywords::KeywordSet;
pub use timezone::TargetTimezone;
