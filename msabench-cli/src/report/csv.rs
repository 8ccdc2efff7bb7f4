//! CSV rendering of benchmark results
//!
//! One row per recorded (aligner, dataset-size) pair, columns
//! `Aligner, Dataset Size, Current, Peak, Usage, Time, Threads`.

use anyhow::Result;
use msabench_core::{BenchmarkResults, REPORT_COLUMNS};
use std::path::Path;

/// Write the results table to a CSV file
pub fn write_report(path: &Path, results: &BenchmarkResults) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_into(&mut writer, results)?;
    writer.flush()?;
    Ok(())
}

/// Render the results table to a CSV string
pub fn render_report(results: &BenchmarkResults) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_into(&mut writer, results)?;
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

fn write_into<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    results: &BenchmarkResults,
) -> Result<()> {
    writer.write_record(REPORT_COLUMNS)?;
    for row in results.rows() {
        writer.write_record(&row)?;
    }
    Ok(())
}
