use std::fs;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use leaderboard_report::app::cli::Cli;
use leaderboard_report::app::config::Config;
use leaderboard_report::app::loader::load_snapshots;
use leaderboard_report::app::logging::init_logging;
use leaderboard_report::core::{build_report, render};

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_cli(&cli);

    let _log_guards = init_logging(
        config.logging.console,
        config.log_file_path(),
        config.logging.verbose,
    );

    // Validate everything before touching the output
    let options = config.report_options()?;
    let snapshots = load_snapshots(&config.snapshot_mask(), &config.snapshots.exclude)?;

    let report = build_report(snapshots, options.days);
    let mut buf = Vec::new();
    render(&report, &options, &mut buf)?;

    match config.output_path() {
        Some(path) => {
            fs::write(&path, &buf)?;
            info!(path = %path.display(), members = report.members.len(), "Report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&buf)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Logging may not be initialized yet, so report on stderr directly
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
