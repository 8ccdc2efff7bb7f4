pub mod commands;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "msabench",
    about = "Benchmark multiple sequence aligners over extHomFam-v2 datasets",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Prepare benchmark datasets without running any aligner
    Prepare(commands::prepare::PrepareArgs),
    /// Run the alignment benchmark and write a CSV report
    Bench(commands::bench::BenchArgs),
    /// Download a Pfam family as FASTA from the InterPro API
    Download(commands::download::DownloadArgs),
}
