use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calfix_core::calfix::Calfix;
use calfix_core::{CalFixError, FixOutcome, UnterminatedEvent, fix_calendar};
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::render::Render;
use crate::utils::tui::processing_spinner;

pub struct FixArgs {
    pub input: PathBuf,
    pub keywords: Option<String>,
    pub timezone: Option<String>,
    pub output: Option<PathBuf>,
    pub stdout: bool,
    pub dry_run: bool,
    pub json: bool,
    pub save: bool,
}

/// Summary of one run, printed as text or JSON.
#[derive(Debug, Serialize)]
pub struct FixReport {
    pub input: PathBuf,
    /// None for dry runs and --stdout
    pub output: Option<PathBuf>,
    pub total: usize,
    pub kept: usize,
    pub dropped: usize,
    pub timezone: String,
    /// Empty when every event is kept
    pub keywords: Vec<String>,
    pub unterminated: Option<UnterminatedEvent>,
}

pub async fn run(args: FixArgs) -> Result<()> {
    let mut calfix = Calfix::load()?;
    let (report, outcome) = fix_file(&mut calfix, &args).await?;

    if args.stdout {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(outcome.output.as_bytes()).await?;
        stdout.flush().await?;
        eprintln!("{}", report.render());
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render());
    }

    Ok(())
}

/// Read, fix and (unless dry-run or stdout) write one calendar file.
pub async fn fix_file(calfix: &mut Calfix, args: &FixArgs) -> Result<(FixReport, FixOutcome)> {
    if let Some(keywords) = &args.keywords {
        calfix.config_mut().keywords = keywords.clone();
    }
    if let Some(timezone) = &args.timezone {
        calfix.config_mut().timezone = timezone.clone();
    }

    let options = calfix.fix_options()?;

    let output_path = if args.dry_run || args.stdout {
        None
    } else {
        let path = match &args.output {
            Some(path) => path.clone(),
            None => calfix.output_path_for(&args.input)?,
        };
        if is_same_file(&args.input, &path) {
            anyhow::bail!(
                "Refusing to overwrite the input file {}. Use --output or change output_suffix.",
                args.input.display()
            );
        }
        Some(path)
    };

    let document = read_document(&args.input).await?;

    let spinner = processing_spinner(&args.input);
    let task_options = options.clone();
    let outcome = tokio::task::spawn_blocking(move || fix_calendar(&document, &task_options))
        .await
        .context("Calendar processing task failed")?;
    spinner.finish_and_clear();

    info!(
        total = outcome.total,
        kept = outcome.kept,
        keywords = %options.keywords,
        "fixed {}",
        args.input.display()
    );

    if let Some(path) = &output_path {
        tokio::fs::write(path, &outcome.output)
            .await
            .with_context(|| format!("Could not write {}", path.display()))?;
    }

    if args.save {
        calfix.save()?;
        info!(path = %calfix.config_path().display(), "saved settings");
    }

    let report = FixReport {
        input: args.input.clone(),
        output: output_path,
        total: outcome.total,
        kept: outcome.kept,
        dropped: outcome.dropped(),
        timezone: options.timezone.to_string(),
        keywords: options.keywords.iter().map(str::to_string).collect(),
        unterminated: outcome.unterminated.clone(),
    };

    Ok((report, outcome))
}

/// True when `output` names the same file as `input`, however it is spelled.
///
/// The output may not exist yet, so its parent directory is resolved and the
/// file name joined back on.
fn is_same_file(input: &Path, output: &Path) -> bool {
    let Ok(input) = std::fs::canonicalize(input) else {
        return false;
    };

    if std::fs::canonicalize(output).is_ok_and(|output| output == input) {
        return true;
    }

    let Some(file_name) = output.file_name() else {
        return false;
    };
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::canonicalize(parent).is_ok_and(|parent| parent.join(file_name) == input)
}

/// Read a file as UTF-8 text.
pub async fn read_document(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Could not read {}", path.display()))?;

    String::from_utf8(bytes).map_err(|_| {
        CalFixError::Decode {
            path: path.to_path_buf(),
        }
        .into()
    })
}
