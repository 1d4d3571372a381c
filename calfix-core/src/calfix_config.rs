//! Persisted calfix settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_OUTPUT_SUFFIX, DEFAULT_TIMEZONE};
use crate::error::{CalFixError, CalFixResult};
use crate::fix::FixOptions;
use crate::timezone::TargetTimezone;

fn is_default_timezone(tz: &String) -> bool {
    tz == DEFAULT_TIMEZONE
}

fn is_default_output_suffix(suffix: &String) -> bool {
    suffix == DEFAULT_OUTPUT_SUFFIX
}

/// Settings at ~/.config/calfix/config.toml
///
/// The keyword list is remembered between runs so the same courses are
/// kept every time a new export is fixed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct CalfixConfig {
    /// Comma-separated keywords; empty keeps every event.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub keywords: String,

    #[serde(skip_serializing_if = "is_default_timezone")]
    pub timezone: String,

    /// Where output files go. Next to the input file when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "is_default_output_suffix")]
    pub output_suffix: String,
}

impl Default for CalfixConfig {
    fn default() -> Self {
        CalfixConfig {
            keywords: String::new(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            output_dir: None,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }
}

impl CalfixConfig {
    pub fn config_path() -> CalFixResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalFixError::Config("Could not determine config directory".into()))?
            .join("calfix");

        Ok(config_dir.join("config.toml"))
    }

    /// Validated options for a run using these settings.
    pub fn fix_options(&self) -> CalFixResult<FixOptions> {
        let timezone = TargetTimezone::parse(&self.timezone)?;
        Ok(FixOptions::new(&self.keywords, timezone))
    }

    pub fn save_to(&self, path: &Path) -> CalFixResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CalFixError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalFixError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| CalFixError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalFixResult<()> {
        let contents = format!(
            "\
# calfix configuration

# Events whose SUMMARY contains one of these (comma separated) are kept.
# Leave empty to keep every event.
# keywords = \"math, physics\"

# Timezone written into DTSTART/DTEND:
# timezone = \"{}\"

# Directory for fixed calendars (defaults to the input file's directory):
# output_dir = \"~/Documents/calendars\"

# Appended to the input file name:
# output_suffix = \"{}\"
",
            DEFAULT_TIMEZONE, DEFAULT_OUTPUT_SUFFIX
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalFixError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalFixError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
