//! Line unfolding.

/// Rejoin folded lines: a line break followed by a single space is removed.
///
/// Only space continuations are recognized. A continuation starting with a
/// tab is left as its own line.
pub fn unfold(content: &str) -> String {
    content.replace("\r\n ", "").replace("\n ", "")
}

/// Split unfolded text into logical lines on `\r\n` or `\n`.
///
/// A trailing line break yields a trailing empty line, so the terminator
/// survives when the lines are joined again.
pub fn logical_lines(unfolded: &str) -> Vec<&str> {
    unfolded
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
