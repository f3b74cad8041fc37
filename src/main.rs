use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use console::style;
use log::{debug, info};
use std::path::PathBuf;
use std::process::ExitCode;
use ytdlp_renamer::RenameError;
use ytdlp_renamer::component::MetadataRenamer;
use ytdlp_renamer::config::Config;
use ytdlp_renamer::init;

/// Rename videos downloaded by yt-dlp using their `.json` info files
#[derive(Debug, Parser)]
#[command(name = "ytdlp-renamer", version)]
struct Cli {
    /// Directory containing the videos and their info files
    directory: Option<PathBuf>,

    /// JSON settings file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    init::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Program error: {e:?}");
            eprintln!("{} {:#}", style("error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(directory) = cli.directory else {
        let usage = Cli::command().render_usage().to_string();
        return Err(RenameError::Usage(usage).into());
    };

    let config = Config::new(cli.config.as_deref()).context("failed to load settings")?;
    let report = MetadataRenamer::new(config)
        .run(&directory)
        .with_context(|| format!("failed to rename videos in {}", directory.display()))?;

    info!(
        "Done: {} records, {} renamed, {} already named",
        report.records_loaded,
        report.renamed.len(),
        report.unchanged
    );

    print_unmatched(&report.unmatched);
    Ok(())
}

fn print_unmatched(unmatched: &[PathBuf]) {
    if unmatched.is_empty() {
        return;
    }

    eprintln!("{}", style("unmatched files:").yellow());
    for path in unmatched {
        eprintln!("{}", path.display());
    }
}
