//! Terminal rendering for calfix results.
//!
//! Extension traits that add colored output with owo_colors.

use owo_colors::OwoColorize;

use crate::commands::fix::FixReport;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for FixReport {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        let headline = format!(
            "Kept {} of {} {}",
            self.kept,
            self.total,
            pluralize("event", self.total)
        );
        lines.push(format!("{} {}", "✓".green(), headline.bold()));

        if self.dropped > 0 {
            lines.push(format!("   {} {}", "-".red(), format!("{} dropped", self.dropped).red()));
        }

        let keywords = if self.keywords.is_empty() {
            "(none, keeping all events)".to_string()
        } else {
            self.keywords.join(", ")
        };
        lines.push(format!("   {} {}", "Keywords:".dimmed(), keywords));
        lines.push(format!("   {} {}", "Timezone:".dimmed(), self.timezone));

        match &self.output {
            Some(path) => lines.push(format!("   {} {}", "Saved to:".dimmed(), path.display())),
            None => lines.push(format!("   {}", "Nothing written".dimmed())),
        }

        if let Some(dangling) = &self.unterminated {
            let name = dangling
                .summary
                .as_deref()
                .map(|s| format!(" \"{}\"", s))
                .unwrap_or_default();
            let warning = format!(
                "Discarded an unterminated event{} ({} {}, no END:VEVENT)",
                name,
                dangling.line_count,
                pluralize("line", dangling.line_count)
            );
            lines.push(format!("{} {}", "!".yellow(), warning.yellow()));
        }

        lines.join("\n")
    }
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
