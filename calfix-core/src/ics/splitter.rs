//! Grouping of logical lines into VEVENT blocks.

use tracing::debug;

use super::content_line::ContentLine;

/// Lines from `BEGIN:VEVENT` to `END:VEVENT`, both included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBlock<'a> {
    lines: Vec<&'a str>,
}

impl<'a> EventBlock<'a> {
    pub fn new(lines: Vec<&'a str>) -> Self {
        EventBlock { lines }
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    pub(crate) fn len(&self) -> usize {
        self.lines.len()
    }

    /// Value of the first SUMMARY property, if any.
    pub fn summary(&self) -> Option<&'a str> {
        self.lines
            .iter()
            .copied()
            .map(ContentLine::new)
            .find(|line| line.is_property("SUMMARY"))
            .and_then(|line| line.value())
    }
}

/// One piece of a split document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A line outside any event, emitted unchanged.
    Passthrough(&'a str),
    Event(EventBlock<'a>),
}

/// Result of splitting a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDocument<'a> {
    pub segments: Vec<Segment<'a>>,
    /// Lines of an event still open when input ended. Never emitted.
    pub unterminated: Option<EventBlock<'a>>,
}

enum SplitState<'a> {
    Outside,
    InsideEvent(Vec<&'a str>),
}

impl<'a> SplitState<'a> {
    fn step(self, line: &'a str, segments: &mut Vec<Segment<'a>>) -> Self {
        let content = ContentLine::new(line);

        // BEGIN:VEVENT always opens a fresh block, even inside an open one
        if content.is_event_begin() {
            if let SplitState::InsideEvent(partial) = self {
                debug!(discarded = partial.len(), "BEGIN:VEVENT inside an open event, restarting block");
            }
            return SplitState::InsideEvent(vec![line]);
        }

        match self {
            SplitState::Outside => {
                segments.push(Segment::Passthrough(line));
                SplitState::Outside
            }
            SplitState::InsideEvent(mut lines) => {
                lines.push(line);
                if content.is_event_end() {
                    segments.push(Segment::Event(EventBlock::new(lines)));
                    SplitState::Outside
                } else {
                    SplitState::InsideEvent(lines)
                }
            }
        }
    }
}

/// Partition logical lines into passthrough lines and event blocks.
pub fn split_events<'a, I>(lines: I) -> SplitDocument<'a>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut segments = Vec::new();
    let mut state = SplitState::Outside;

    for line in lines {
        state = state.step(line, &mut segments);
    }

    let unterminated = match state {
        SplitState::Outside => None,
        SplitState::InsideEvent(lines) => Some(EventBlock::new(lines)),
    };

    SplitDocument {
        segments,
        unterminated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_count(split: &SplitDocument<'_>) -> usize {
        split
            .segments
            .iter()
            .filter(|s| matches!(s, Segment::Event(_)))
            .count()
    }

    #[test]
    fn separates_events_from_passthrough_lines() {
        let lines = vec![
            "BEGIN:VCALENDAR",
            "VERSION:2.0",
            "BEGIN:VEVENT",
            "SUMMARY:Math 101",
            "END:VEVENT",
            "END:VCALENDAR",
        ];

        let split = split_events(lines);

        assert_eq!(
            split.segments,
            vec![
                Segment::Passthrough("BEGIN:VCALENDAR"),
                Segment::Passthrough("VERSION:2.0"),
                Segment::Event(EventBlock::new(vec![
                    "BEGIN:VEVENT",
                    "SUMMARY:Math 101",
                    "END:VEVENT",
                ])),
                Segment::Passthrough("END:VCALENDAR"),
            ]
        );
        assert!(split.unterminated.is_none());
    }

    #[test]
    fn vtimezone_blocks_pass_through() {
        let lines = vec![
            "BEGIN:VTIMEZONE",
            "TZID:Europe/Brussels",
            "END:VTIMEZONE",
        ];

        let split = split_events(lines);

        assert_eq!(event_count(&split), 0);
        assert_eq!(split.segments.len(), 3);
    }

    #[test]
    fn unterminated_event_is_reported_not_emitted() {
        let lines = vec![
            "BEGIN:VCALENDAR",
            "BEGIN:VEVENT",
            "SUMMARY:Dangling",
        ];

        let split = split_events(lines);

        assert_eq!(split.segments, vec![Segment::Passthrough("BEGIN:VCALENDAR")]);
        let dangling = split.unterminated.expect("Should report the open event");
        assert_eq!(dangling.len(), 2);
        assert_eq!(dangling.summary(), Some("Dangling"));
    }

    #[test]
    fn nested_begin_restarts_the_block() {
        let lines = vec![
            "BEGIN:VEVENT",
            "SUMMARY:Lost",
            "BEGIN:VEVENT",
            "SUMMARY:Found",
            "END:VEVENT",
        ];

        let split = split_events(lines);

        assert_eq!(event_count(&split), 1);
        match &split.segments[0] {
            Segment::Event(block) => assert_eq!(block.summary(), Some("Found")),
            other => panic!("Expected event, got {:?}", other),
        }
    }

    #[test]
    fn boundaries_tolerate_trailing_characters() {
        let lines = vec!["BEGIN:VEVENT  ", "UID:1", "END:VEVENT\t"];
        assert_eq!(event_count(&split_events(lines)), 1);
    }

    #[test]
    fn stray_end_outside_event_passes_through() {
        let split = split_events(vec!["END:VEVENT"]);
        assert_eq!(split.segments, vec![Segment::Passthrough("END:VEVENT")]);
    }
}
