//! Target timezone for rewritten DTSTART/DTEND properties.

use std::fmt;

use chrono_tz::Tz;

use crate::error::{CalFixError, CalFixResult};

/// IANA timezone written into the `TZID` parameter of rewritten date-times.
///
/// Only names known to the tz database are accepted, so a typo in the
/// config file can't end up in every event of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetTimezone(Tz);

impl TargetTimezone {
    pub fn parse(name: &str) -> CalFixResult<Self> {
        name.trim()
            .parse::<Tz>()
            .map(TargetTimezone)
            .map_err(|_| CalFixError::UnknownTimezone(name.to_string()))
    }

    /// The timezone name as written after `TZID=`.
    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}

impl Default for TargetTimezone {
    fn default() -> Self {
        TargetTimezone(chrono_tz::Europe::Brussels)
    }
}

impl fmt::Display for TargetTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
