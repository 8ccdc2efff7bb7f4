//! Benchmark execution loop

use crate::metrics::RunTracker;
use crate::traits::MsaAligner;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use msabench_core::BenchmarkResults;
use std::path::{Path, PathBuf};

/// Run every aligner over every dataset, recording one metrics entry per
/// (aligner, dataset-size) pair.
///
/// Datasets run in map order, so the recorded results (and the report
/// built from them) follow the caller's ordering. Aligners whose binary
/// is not on PATH are skipped with a warning; a failing run aborts the
/// benchmark with the tool's error.
pub fn run_benchmark(
    aligners: &[Box<dyn MsaAligner>],
    datasets: &IndexMap<String, PathBuf>,
    threads: usize,
    output_dir: &Path,
    results: &mut BenchmarkResults,
) -> Result<()> {
    for (label, input) in datasets {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("dataset");
        tracing::info!(dataset = %label, input = %input.display(), "aligning dataset");

        for aligner in aligners {
            if !aligner.is_available() {
                tracing::warn!(tool = aligner.name(), "binary not found, skipping");
                continue;
            }

            let output = output_dir.join(format!("{}-{}.fasta", stem, aligner.name()));
            let tracker = RunTracker::start()?;
            aligner
                .align(input, &output, threads)
                .with_context(|| format!("{} failed on {} dataset", aligner.name(), label))?;
            let metrics = tracker.finish(threads);

            tracing::info!(
                tool = aligner.name(),
                dataset = %label,
                minutes = metrics.elapsed_minutes,
                "run complete"
            );
            results.record(aligner.name(), label, metrics);
        }
    }
    Ok(())
}
