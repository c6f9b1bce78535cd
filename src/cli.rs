use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::chart::ImageFormat;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "sortbench")]
#[command(author, version, about = "Sorting benchmark charts - turn measurement tables into a chart battery")]
#[command(long_about = "Reads semicolon-delimited sorting benchmark tables, reconciles their \
    statistics and renders a fixed battery of comparison charts per algorithm.\n\n\
    Exit codes:\n  \
    0 - All requested algorithms rendered or skipped\n  \
    1 - At least one algorithm failed\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the chart battery of one or more algorithms
    Render(RenderArgs),

    /// Print reconciled statistics of a measurement file
    Stats(StatsArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Algorithms to render, by configuration key (default: all configured)
    pub algorithms: Vec<String>,

    /// Render every configured algorithm
    #[arg(long, conflicts_with = "algorithms")]
    pub all: bool,

    /// Project root the configured directories are relative to
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Measurement file to use instead of the newest one (single algorithm only)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory to write charts to (single algorithm only)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Image format [possible values: png, svg]
    #[arg(short, long, default_value = "png")]
    pub format: ImageFormat,
}

#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Measurement file to analyze
    pub file: PathBuf,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".sortbench.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
