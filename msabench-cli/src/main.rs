use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;
mod report;

use crate::cli::{Cli, Commands};
use msabench_core::MsabenchError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<MsabenchError>() {
            Some(MsabenchError::Configuration(_)) => 2,
            Some(MsabenchError::Io(_)) => 3,
            Some(MsabenchError::Parse(_)) => 4,
            Some(MsabenchError::InvalidInput(_)) => 5,
            Some(MsabenchError::Network(_)) => 6,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

/// `RUST_LOG` wins if set, then `MSABENCH_LOG`, then the level implied
/// by `-v` repetition.
fn init_logging(verbose: u8) {
    let log_level =
        std::env::var("MSABENCH_LOG").unwrap_or_else(|_| verbosity_level(verbose).to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();
}

fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Prepare(args) => crate::cli::commands::prepare::run(args),
        Commands::Bench(args) => crate::cli::commands::bench::run(args),
        Commands::Download(args) => crate::cli::commands::download::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(verbosity_level(0), "warn");
        assert_eq!(verbosity_level(1), "info");
        assert_eq!(verbosity_level(2), "debug");
        assert_eq!(verbosity_level(3), "trace");
        assert_eq!(verbosity_level(9), "trace");
    }
}
