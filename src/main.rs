use anyhow::Result;
use assetrank::cli::Cli;
use assetrank::commands::{self, RunSummary};
use assetrank::config::RunConfig;
use assetrank::observability::install_panic_hook;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    install_panic_hook();
    let config = Cli::parse().into_config();
    init_logging(&config);

    match run(&config) {
        Ok(summary) => {
            print_summary(&summary, config.verbosity);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RunConfig) -> Result<RunSummary> {
    Ok(commands::run(config)?)
}

// RUST_LOG wins over -v when set
fn init_logging(config: &RunConfig) {
    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn print_summary(summary: &RunSummary, verbosity: u8) {
    println!("{} Prioritized {} assets.", "✓".green(), summary.prioritized);
    if verbosity > 0 {
        println!("  Skipped lines: {}", summary.skipped);
        if let Some(top) = summary.top_score {
            println!("  Top score:     {}", top);
        }
        if !summary.histogram.is_empty() {
            let buckets: Vec<String> = summary
                .histogram
                .iter()
                .map(|(score, count)| format!("{score}x{count}"))
                .collect();
            println!("  Scores:        {}", buckets.join(", "));
        }
        println!("  Output:        {}", summary.output_path.display());
    }
}
