//! The calfix pipeline: unfold, split, filter and rewrite, reassemble.

use std::borrow::Cow;

use serde::Serialize;
use tracing::{debug, warn};

use crate::constants::CRLF;
use crate::ics::{Segment, logical_lines, split_events, transform_event, unfold};
use crate::keywords::KeywordSet;
use crate::timezone::TargetTimezone;

/// Inputs for one run, passed explicitly rather than read from settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixOptions {
    pub keywords: KeywordSet,
    pub timezone: TargetTimezone,
}

impl FixOptions {
    pub fn new(keywords: &str, timezone: TargetTimezone) -> Self {
        FixOptions {
            keywords: KeywordSet::parse(keywords),
            timezone,
        }
    }
}

/// An event that was still open when the document ended.
///
/// Its lines are not part of the output and it is not counted in `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnterminatedEvent {
    pub line_count: usize,
    pub summary: Option<String>,
}

/// Result of fixing one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    /// Output document, CRLF-terminated lines.
    pub output: String,
    /// Complete VEVENT blocks seen.
    pub total: usize,
    /// Events that survived filtering. Always `<= total`.
    pub kept: usize,
    pub unterminated: Option<UnterminatedEvent>,
}

impl FixOutcome {
    pub fn dropped(&self) -> usize {
        self.total - self.kept
    }
}

/// Filter `document` by keyword and pin DTSTART/DTEND to the target timezone.
///
/// Lines outside events are copied unchanged and in order. This never fails:
/// malformed input degrades to passthrough, or to a dropped trailing event.
#[tracing::instrument(skip_all, fields(bytes = document.len(), keywords = options.keywords.len()))]
pub fn fix_calendar(document: &str, options: &FixOptions) -> FixOutcome {
    let unfolded = unfold(document);
    let split = split_events(logical_lines(&unfolded));

    let mut output: Vec<Cow<'_, str>> = Vec::new();
    let mut total = 0;
    let mut kept = 0;

    for segment in split.segments {
        match segment {
            Segment::Passthrough(line) => output.push(Cow::Borrowed(line)),
            Segment::Event(block) => {
                total += 1;
                match transform_event(&block, &options.keywords, &options.timezone) {
                    Some(lines) => {
                        kept += 1;
                        output.extend(lines);
                    }
                    None => debug!(summary = block.summary().unwrap_or_default(), "dropping event"),
                }
            }
        }
    }

    let unterminated = split.unterminated.map(|block| {
        warn!(
            lines = block.len(),
            summary = block.summary().unwrap_or_default(),
            "input ended inside an event, discarding it"
        );
        UnterminatedEvent {
            line_count: block.len(),
            summary: block.summary().map(str::to_string),
        }
    });

    debug!(total, kept, "calendar processed");

    FixOutcome {
        output: output.join(CRLF),
        total,
        kept,
        unterminated,
    }
}

/// Fix `document` with a raw keyword string and the default timezone.
///
/// Returns `(output, total, kept)`.
pub fn fix_calendar_with_keywords(document: &str, keywords: &str) -> (String, usize, usize) {
    let options = FixOptions::new(keywords, TargetTimezone::default());
    let outcome = fix_calendar(document, &options);
    (outcome.output, outcome.total, outcome.kept)
}
