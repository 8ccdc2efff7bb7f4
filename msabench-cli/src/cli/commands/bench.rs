//! Benchmark command

use crate::cli::commands::prepare::prepare_datasets;
use crate::report;
use anyhow::Result;
use clap::Args;
use indexmap::IndexMap;
use indicatif::{ProgressBar, ProgressStyle};
use msabench_core::{msabench_results_dir, BenchmarkResults, MsabenchError};
use msabench_tools::{aligner_by_name, default_aligners, run_benchmark, MsaAligner};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[derive(Args)]
pub struct BenchArgs {
    /// Number of threads passed to each aligner (0 = all cores)
    #[arg(short, long, default_value_t = 0)]
    pub threads: usize,

    /// Benchmark the whole extHomFam-v2 corpus instead of the synthetic tiers
    #[arg(long)]
    pub whole: bool,

    /// Seed for the partition shuffle (reproducible datasets)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Aligners to run (repeatable; defaults to famsa, famsa-medoid, kalign3)
    #[arg(long = "aligner", value_name = "NAME")]
    pub aligners: Vec<String>,

    /// Keep aligner outputs in this directory instead of a scratch dir
    #[arg(long, value_name = "DIR")]
    pub keep_output: Option<PathBuf>,
}

pub fn run(args: BenchArgs) -> Result<()> {
    let threads = if args.threads == 0 {
        num_cpus::get()
    } else {
        args.threads
    };

    let datasets = prepare_datasets(args.whole, args.seed)?;
    let aligners = select_aligners(&args.aligners)?;

    // Scratch dir for alignment outputs; dropped (deleted) at the end
    // unless the caller asked to keep them.
    let (_scratch, output_dir) = match &args.keep_output {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            (None, dir.clone())
        }
        None => {
            let scratch = TempDir::new()?;
            let path = scratch.path().to_path_buf();
            (Some(scratch), path)
        }
    };
    tracing::info!(dir = %output_dir.display(), "alignment outputs");

    let pb = ProgressBar::new(datasets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} datasets")?
            .progress_chars("##-"),
    );

    let mut results = BenchmarkResults::new();
    for (label, path) in &datasets {
        let single = IndexMap::from([(label.clone(), path.clone())]);
        run_benchmark(&aligners, &single, threads, &output_dir, &mut results)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    let results_dir = msabench_results_dir();
    fs::create_dir_all(&results_dir)?;
    let suffix = if args.whole { "whole" } else { "synthetic" };
    let report_path = results_dir.join(format!("MSA-results_{}_{}.csv", threads, suffix));
    report::csv::write_report(&report_path, &results)?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn select_aligners(names: &[String]) -> Result<Vec<Box<dyn MsaAligner>>> {
    if names.is_empty() {
        return Ok(default_aligners());
    }
    names
        .iter()
        .map(|name| {
            aligner_by_name(name).ok_or_else(|| {
                MsabenchError::InvalidInput(format!("unknown aligner: {}", name)).into()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_default_aligners() {
        let aligners = select_aligners(&[]).unwrap();
        assert_eq!(aligners.len(), 3);
    }

    #[test]
    fn test_select_named_aligners() {
        let names = vec!["clustalo".to_string(), "mafft-parttree".to_string()];
        let aligners = select_aligners(&names).unwrap();
        let got: Vec<&str> = aligners.iter().map(|a| a.name()).collect();
        assert_eq!(got, ["clustalo", "mafft-parttree"]);
    }

    #[test]
    fn test_select_unknown_aligner_fails() {
        let err = select_aligners(&["muscle".to_string()]).unwrap_err();
        assert!(err.to_string().contains("unknown aligner: muscle"));
    }
}
