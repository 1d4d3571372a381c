//! Line-level handling of .ics documents.
//!
//! Processing happens in three stages:
//! - `unfold`: rejoin folded continuation lines and split into logical lines
//! - `splitter`: group logical lines into VEVENT blocks and passthrough lines
//! - `transform`: keep/drop each event and pin its DTSTART/DTEND to a timezone

mod content_line;
mod splitter;
mod transform;
mod unfold;

pub use content_line::ContentLine;
pub use splitter::{EventBlock, Segment, SplitDocument, split_events};
pub use transform::{pin_timezone, should_keep, transform_event};
pub use unfold::{logical_lines, unfold};
