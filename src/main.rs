mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use commands::fix::FixArgs;

#[derive(Parser)]
#[command(name = "calfix")]
#[command(about = "Filter .ics calendars by keyword and pin event times to a named timezone")]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a calendar file and pin its DTSTART/DTEND to a timezone
    Fix {
        /// The .ics file to fix
        input: PathBuf,

        /// Comma-separated keywords; events whose SUMMARY contains one are kept
        /// (defaults to the saved keywords, empty keeps everything)
        #[arg(short, long)]
        keywords: Option<String>,

        /// Timezone written into DTSTART/DTEND (e.g. "Europe/Brussels")
        #[arg(short = 'z', long)]
        timezone: Option<String>,

        /// Output file (defaults to <input>_filtered.ics)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the fixed calendar to stdout instead of a file
        #[arg(long, conflicts_with_all = ["output", "json", "dry_run"])]
        stdout: bool,

        /// Only count events, don't write anything
        #[arg(long)]
        dry_run: bool,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,

        /// Remember --keywords and --timezone for future runs
        #[arg(long)]
        save: bool,
    },
    /// Show saved settings, or change them with `config set`
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Change saved settings
    Set {
        /// Comma-separated keywords ("" to keep every event)
        #[arg(short, long)]
        keywords: Option<String>,

        /// Timezone written into DTSTART/DTEND
        #[arg(short = 'z', long)]
        timezone: Option<String>,

        /// Directory for fixed calendars
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Appended to the input file name
        #[arg(long)]
        output_suffix: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::logging::init_tracing(cli.verbose, cli.quiet)?;

    match cli.command {
        Commands::Fix {
            input,
            keywords,
            timezone,
            output,
            stdout,
            dry_run,
            json,
            save,
        } => {
            commands::fix::run(FixArgs {
                input,
                keywords,
                timezone,
                output,
                stdout,
                dry_run,
                json,
                save,
            })
            .await
        }
        Commands::Config { action: None } => commands::config::show(),
        Commands::Config {
            action:
                Some(ConfigAction::Set {
                    keywords,
                    timezone,
                    output_dir,
                    output_suffix,
                }),
        } => commands::config::set(commands::config::ConfigChanges {
            keywords,
            timezone,
            output_dir,
            output_suffix,
        }),
    }
}
