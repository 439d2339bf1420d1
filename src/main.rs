//! docprep - prepare a markdown documentation tree for publishing.

mod cli;
mod config;
mod logger;
mod pipeline;
mod process;

use std::process::ExitCode;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::PrepConfig;
use process::Processor;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = PrepConfig::load(&cli)?;
    if let Some(path) = &config.config_path {
        debug!("config"; "loaded {}", path.display());
    }

    let source_dir = config.source_dir();
    log!("docprep"; "repository root: {}", config.get_root().display());
    log!("docprep"; "source directory: {}", source_dir.display());
    if config.dry_run {
        log!("docprep"; "dry run, no files will be written");
    }

    let summary = Processor::new(&config)?.run(&source_dir);
    Ok(ExitCode::from(summary.exit_code()))
}
