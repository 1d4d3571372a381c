//! Loaded calfix settings and output path handling.

use std::path::{Path, PathBuf};

use config::{Config, File};
use tracing::debug;

use crate::calfix_config::CalfixConfig;
use crate::constants::ICS_EXTENSION;
use crate::error::{CalFixError, CalFixResult};
use crate::fix::FixOptions;

#[derive(Clone, Debug)]
pub struct Calfix {
    config: CalfixConfig,
    config_path: PathBuf,
}

impl Calfix {
    /// Load settings from ~/.config/calfix/config.toml, creating the file if missing.
    pub fn load() -> CalFixResult<Self> {
        Self::load_from(CalfixConfig::config_path()?)
    }

    pub fn load_from(config_path: impl Into<PathBuf>) -> CalFixResult<Self> {
        let config_path = config_path.into();

        if !config_path.exists() {
            debug!(path = %config_path.display(), "creating default config");
            CalfixConfig::create_default_config(&config_path)?;
        }

        let config: CalfixConfig = Config::builder()
            .add_source(File::from(config_path.clone()).required(false))
            .build()
            .map_err(|e| CalFixError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalFixError::Config(e.to_string()))?;

        Ok(Calfix {
            config,
            config_path,
        })
    }

    pub fn config(&self) -> &CalfixConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut CalfixConfig {
        &mut self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write the current settings back to the file they were loaded from.
    pub fn save(&self) -> CalFixResult<()> {
        self.config.save_to(&self.config_path)
    }

    pub fn fix_options(&self) -> CalFixResult<FixOptions> {
        self.config.fix_options()
    }

    /// Configured output directory with `~` expanded.
    pub fn output_dir(&self) -> Option<PathBuf> {
        self.config.output_dir.as_ref().map(|dir| {
            PathBuf::from(shellexpand::tilde(&dir.to_string_lossy()).into_owned())
        })
    }

    /// Where the fixed version of `input` is written.
    pub fn output_path_for(&self, input: &Path) -> CalFixResult<PathBuf> {
        output_path_for(input, self.output_dir().as_deref(), &self.config.output_suffix)
    }
}

/// `dir/name.ics` -> `dir/name<suffix>.ics`, or `<output_dir>/name<suffix>.ics`.
pub fn output_path_for(input: &Path, output_dir: Option<&Path>, suffix: &str) -> CalFixResult<PathBuf> {
    let stem = input
        .file_stem()
        .ok_or_else(|| CalFixError::NoFileName(input.to_path_buf()))?;

    let mut file_name = stem.to_os_string();
    file_name.push(suffix);
    file_name.push(".");
    file_name.push(ICS_EXTENSION);

    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    Ok(dir.join(file_name))
}
