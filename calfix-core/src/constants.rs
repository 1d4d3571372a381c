/// Timezone attached to rewritten DTSTART/DTEND values unless configured otherwise
pub const DEFAULT_TIMEZONE: &str = "Europe/Brussels";

/// Appended to the input file stem to name the output file
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_filtered";

/// Extension given to every output file
pub const ICS_EXTENSION: &str = "ics";

/// Line terminator used when assembling output documents
pub const CRLF: &str = "\r\n";
