use std::path::PathBuf;

use anyhow::Result;
use calfix_core::TargetTimezone;
use calfix_core::calfix::Calfix;
use owo_colors::OwoColorize;

pub struct ConfigChanges {
    pub keywords: Option<String>,
    pub timezone: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub output_suffix: Option<String>,
}

pub fn show() -> Result<()> {
    let calfix = Calfix::load()?;
    let config = calfix.config();

    println!("{}", "Paths".bold());
    println!("  Config:     {}", calfix.config_path().display());
    println!(
        "  Output dir: {}",
        calfix
            .output_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|| "(next to input file)".to_string())
    );

    println!();
    println!("{}", "Settings".bold());
    println!(
        "  Keywords:   {}",
        if config.keywords.trim().is_empty() {
            "(none, keeping all events)"
        } else {
            config.keywords.as_str()
        }
    );
    println!("  Timezone:   {}", config.timezone);
    println!("  Suffix:     {}", config.output_suffix);

    Ok(())
}

pub fn set(changes: ConfigChanges) -> Result<()> {
    let mut calfix = Calfix::load()?;
    apply(&mut calfix, changes)?;
    calfix.save()?;

    println!("{} {}", "Saved".green(), calfix.config_path().display());
    Ok(())
}

fn apply(calfix: &mut Calfix, changes: ConfigChanges) -> Result<()> {
    if let Some(timezone) = changes.timezone {
        TargetTimezone::parse(&timezone)?;
        calfix.config_mut().timezone = timezone.trim().to_string();
    }

    let config = calfix.config_mut();
    if let Some(keywords) = changes.keywords {
        config.keywords = keywords;
    }
    if let Some(dir) = changes.output_dir {
        config.output_dir = Some(dir);
    }
    if let Some(suffix) = changes.output_suffix {
        config.output_suffix = suffix;
    }

    Ok(())
}
