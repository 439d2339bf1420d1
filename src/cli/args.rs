//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Prepare a markdown documentation tree for publishing
///
/// Strips YAML frontmatter, unwraps `<figure>` elements and flattens
/// `SUMMARY.md` headings, rewriting files in place.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Repository root the source directory is resolved against.
    ///
    /// Defaults to the directory holding the config file, or two levels
    /// above the directory holding this executable.
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Config file name, searched upward from the current directory
    #[arg(short = 'C', long, default_value = "docprep.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Report what would change without writing any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
