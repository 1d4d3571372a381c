use calfix_core::{FixOptions, TargetTimezone, fix_calendar, fix_calendar_with_keywords};
use icalendar::parser::read_calendar;
use icalendar::{CalendarDateTime, DatePerhapsTime};

const SCHEDULE: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Test//EN\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:Europe/Brussels\r\n\
END:VTIMEZONE\r\n\
BEGIN:VEVENT\r\n\
UID:math-101@school\r\n\
SUMMARY:Math 101\r\n\
DESCRIPTION:Room 4 - see https://school.example/math\r\n\
DTSTART:20240115T090000Z\r\n\
DTEND:20240115T103000Z\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:history-201@school\r\n\
SUMMARY:History 201\r\n\
DTSTART:20240116T130000Z\r\n\
DTEND:20240116T143000Z\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:holiday@school\r\n\
SUMMARY:Spring break (no math)\r\n\
DTSTART;VALUE=DATE:20240401\r\n\
DTEND;VALUE=DATE:20240408\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

#[test]
fn end_to_end_keyword_filtering() {
    let (output, total, kept) = fix_calendar_with_keywords(SCHEDULE, "math");

    assert_eq!(total, 3);
    assert_eq!(kept, 2);
    assert!(output.contains("SUMMARY:Math 101"));
    assert!(!output.contains("History 201"));
    assert!(output.contains("DTSTART;TZID=Europe/Brussels:20240115T090000\r\n"));
    assert!(output.contains("DTEND;TZID=Europe/Brussels:20240115T103000\r\n"));
    // all-day values keep their VALUE=DATE parameter and get no TZID
    assert!(output.contains("DTSTART;VALUE=DATE:20240401\r\n"));
    assert!(output.contains("DTEND;VALUE=DATE:20240408\r\n"));
}

#[test]
fn passthrough_lines_survive_in_order() {
    let (output, _, _) = fix_calendar_with_keywords(SCHEDULE, "chemistry");

    assert_eq!(
        output,
        "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Test//EN\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:Europe/Brussels\r\n\
END:VTIMEZONE\r\n\
END:VCALENDAR\r\n"
    );
}

#[test]
fn second_keep_all_pass_is_a_no_op() {
    let (first, total, kept) = fix_calendar_with_keywords(SCHEDULE, "");
    assert_eq!(total, kept);

    let (second, total_again, kept_again) = fix_calendar_with_keywords(&first, "");
    assert_eq!(second, first);
    assert_eq!((total_again, kept_again), (total, kept));
}

#[test]
fn counters_never_exceed_complete_events() {
    let inputs = [
        "",
        "BEGIN:VCALENDAR\nEND:VCALENDAR",
        "BEGIN:VEVENT\nSUMMARY:a\nEND:VEVENT\nBEGIN:VEVENT\nSUMMARY:b",
        "END:VEVENT\nBEGIN:VEVENT\nEND:VEVENT",
        "BEGIN:VEVENT\nBEGIN:VEVENT\nSUMMARY:math\nEND:VEVENT",
        SCHEDULE,
    ];
    let expected_totals = [0, 0, 1, 1, 1, 3];

    for (input, expected_total) in inputs.iter().zip(expected_totals) {
        for keywords in ["", "math", "a, b", "zzz"] {
            let outcome = fix_calendar(input, &FixOptions::new(keywords, TargetTimezone::default()));
            assert_eq!(outcome.total, expected_total, "input: {:?}", input);
            assert!(outcome.kept <= outcome.total, "input: {:?}", input);
            if keywords.is_empty() {
                assert_eq!(outcome.kept, outcome.total, "input: {:?}", input);
            }
        }
    }
}

#[test]
fn folded_input_is_filtered_on_the_unfolded_summary() {
    let input = "BEGIN:VCALENDAR\r\n\
BEGIN:VEVENT\r\n\
SUMMARY:Advanced Phys\r\n ics Lab\r\n\
DTSTART:20240115T090000Z\r\n\
END:VEVENT\r\n\
END:VCALENDAR";

    let (output, total, kept) = fix_calendar_with_keywords(input, "physics");

    assert_eq!((total, kept), (1, 1));
    assert!(output.contains("SUMMARY:Advanced Physics Lab\r\n"));
}

#[test]
fn custom_timezone_is_written() {
    let options = FixOptions::new("history", TargetTimezone::parse("America/New_York").unwrap());
    let outcome = fix_calendar(SCHEDULE, &options);

    assert_eq!(outcome.kept, 1);
    assert!(outcome.output.contains("DTSTART;TZID=America/New_York:20240116T130000"));
}

#[test]
fn output_is_still_a_readable_calendar() {
    let (output, _, _) = fix_calendar_with_keywords(SCHEDULE, "math");

    let calendar = read_calendar(&output).expect("Output should parse");
    let events: Vec<_> = calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .collect();
    assert_eq!(events.len(), 2);

    let math = events
        .iter()
        .find(|e| e.find_prop("UID").map(|p| p.val.to_string()).as_deref() == Some("math-101@school"))
        .expect("Math event should be kept");

    let start = DatePerhapsTime::try_from(math.find_prop("DTSTART").unwrap()).unwrap();
    match start {
        DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone { date_time, tzid }) => {
            assert_eq!(tzid, "Europe/Brussels");
            assert_eq!(date_time.to_string(), "2024-01-15 09:00:00");
        }
        other => panic!("Expected zoned DTSTART, got {:?}", other),
    }

    let description = math.find_prop("DESCRIPTION").unwrap();
    assert_eq!(description.val.to_string(), "Room 4 - see https://school.example/math");
}
