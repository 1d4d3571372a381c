use std::io::IsTerminal;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown on stderr while a calendar is being fixed.
///
/// Hidden when stderr is not a terminal, so piped `--stdout`/`--json` runs
/// produce no spinner noise.
pub fn processing_spinner(input: &Path) -> ProgressBar {
    if !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }

    let name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("Fixing {msg} {spinner}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(name);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
