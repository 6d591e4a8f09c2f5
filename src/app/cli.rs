use std::path::PathBuf;

use clap::Parser;

/// Recomputes local scores from private leaderboard snapshots and prints a
/// ranked, time-annotated table.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file (default: ./leaderboard_report.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Event year
    #[arg(long)]
    pub year: Option<i32>,

    /// Days to report, "first..last" or a single day
    #[arg(long)]
    pub days: Option<String>,

    /// Snapshot file mask, e.g. "json/{year}/*.json"
    #[arg(long)]
    pub mask: Option<String>,

    /// Snapshot ids to skip (comma separated, repeatable)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable terminal colors
    #[arg(long)]
    pub no_color: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
