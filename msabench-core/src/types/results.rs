//! Benchmark results collector
//!
//! Shared between the aligner-invocation layer (which records one
//! `RunMetrics` per (aligner, dataset-size) pair) and the reporting
//! layer (which flattens the collector into a table).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Report column order, matching the CSV layout
pub const REPORT_COLUMNS: [&str; 7] = [
    "Aligner",
    "Dataset Size",
    "Current",
    "Peak",
    "Usage",
    "Time",
    "Threads",
];

/// Metrics from one aligner run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Resident memory after the run, KB
    pub current_kb: f64,
    /// Peak resident memory observed during the run, KB
    pub peak_kb: f64,
    /// peak - current, KB
    pub usage_kb: f64,
    /// Wall-clock time, minutes
    pub elapsed_minutes: f64,
    /// Thread count passed to the tool
    pub threads: usize,
}

/// Results keyed by aligner name, then dataset-size label
///
/// Both levels keep first-recorded order, so the report comes out in
/// run order rather than sorted by label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchmarkResults {
    results: IndexMap<String, IndexMap<String, RunMetrics>>,
}

impl BenchmarkResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record metrics for one (aligner, dataset-size) pair, replacing any
    /// earlier entry for the same pair.
    pub fn record(&mut self, aligner: &str, dataset_size: &str, metrics: RunMetrics) {
        self.results
            .entry(aligner.to_string())
            .or_default()
            .insert(dataset_size.to_string(), metrics);
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of recorded (aligner, dataset-size) pairs
    pub fn len(&self) -> usize {
        self.results.values().map(|m| m.len()).sum()
    }

    pub fn get(&self, aligner: &str, dataset_size: &str) -> Option<&RunMetrics> {
        self.results.get(aligner).and_then(|m| m.get(dataset_size))
    }

    /// Flatten into report rows in `REPORT_COLUMNS` order, aligners and
    /// dataset sizes each in the order they were first recorded
    pub fn rows(&self) -> Vec<[String; 7]> {
        let mut rows = Vec::with_capacity(self.len());
        for (aligner, by_size) in &self.results {
            for (size, m) in by_size {
                rows.push([
                    aligner.clone(),
                    size.clone(),
                    m.current_kb.to_string(),
                    m.peak_kb.to_string(),
                    m.usage_kb.to_string(),
                    m.elapsed_minutes.to_string(),
                    m.threads.to_string(),
                ]);
            }
        }
        rows
    }
}
