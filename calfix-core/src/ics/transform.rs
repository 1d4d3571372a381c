//! Per-event keep/drop decision and timezone pinning.

use std::borrow::Cow;

use tracing::trace;

use super::content_line::ContentLine;
use super::splitter::EventBlock;
use crate::keywords::KeywordSet;
use crate::timezone::TargetTimezone;

/// Properties whose date-time values get a TZID parameter.
const DATE_TIME_PROPERTIES: [&str; 2] = ["DTSTART", "DTEND"];

/// Decide whether an event survives keyword filtering.
///
/// With an empty keyword set every event is kept. Otherwise the event is kept
/// when the value of any SUMMARY property contains one of the keywords.
/// Events without a SUMMARY are dropped.
pub fn should_keep(block: &EventBlock<'_>, keywords: &KeywordSet) -> bool {
    if keywords.keeps_all() {
        return true;
    }

    block
        .lines()
        .iter()
        .copied()
        .map(ContentLine::new)
        .filter(|line| line.is_property("SUMMARY"))
        .filter_map(|line| line.value())
        .any(|summary| keywords.matches(summary))
}

/// Rewrite a DTSTART/DTEND line to carry `TZID=<timezone>`.
///
/// `DTSTART:20240115T090000Z` becomes
/// `DTSTART;TZID=Europe/Brussels:20240115T090000`. Existing parameters are
/// replaced. Lines without a value, DATE values (no `T`) and all other
/// properties are returned unchanged.
pub fn pin_timezone<'a>(line: &'a str, timezone: &TargetTimezone) -> Cow<'a, str> {
    let content = ContentLine::new(line);

    if !DATE_TIME_PROPERTIES
        .iter()
        .any(|name| content.is_property(name))
    {
        return Cow::Borrowed(line);
    }

    let Some((key, value)) = content.split() else {
        return Cow::Borrowed(line);
    };

    if !value.contains('T') {
        return Cow::Borrowed(line);
    }

    let value = value.strip_suffix('Z').unwrap_or(value);
    let base_property = key.split(';').next().unwrap_or(key);

    trace!(property = base_property, value, "pinning timezone");
    Cow::Owned(format!("{base_property};TZID={timezone}:{value}"))
}

/// Filter and rewrite one event block.
///
/// Returns `None` when the event is dropped, otherwise its lines with
/// DTSTART/DTEND pinned to `timezone`.
pub fn transform_event<'a>(
    block: &EventBlock<'a>,
    keywords: &KeywordSet,
    timezone: &TargetTimezone,
) -> Option<Vec<Cow<'a, str>>> {
    if !should_keep(block, keywords) {
        return None;
    }

    Some(
        block
            .lines()
            .iter()
            .map(|&line| pin_timezone(line, timezone))
            .collect(),
    )
}
