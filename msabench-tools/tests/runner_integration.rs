use indexmap::IndexMap;
use msabench_core::BenchmarkResults;
use msabench_tools::{run_benchmark, MockAligner, MsaAligner};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_benchmark_loop_records_every_pair() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let mut datasets: IndexMap<String, PathBuf> = IndexMap::new();
    for label in ["xsmall", "small"] {
        let path = data.path().join(format!("mini-extHomFam-v2-{}.fasta", label));
        fs::write(&path, ">seq1\nACGT\n>seq2\nTGCA\n").unwrap();
        datasets.insert(label.to_string(), path);
    }

    let aligners: Vec<Box<dyn MsaAligner>> = vec![Box::new(MockAligner::new())];
    let mut results = BenchmarkResults::new();

    run_benchmark(&aligners, &datasets, 2, out.path(), &mut results).unwrap();

    assert_eq!(results.len(), 2);
    // report rows follow dataset insertion order, not label sort order
    let labels: Vec<String> = results.rows().iter().map(|r| r[1].clone()).collect();
    assert_eq!(labels, ["xsmall", "small"]);
    for label in ["xsmall", "small"] {
        let metrics = results.get("mock", label).unwrap();
        assert_eq!(metrics.threads, 2);
        assert!(metrics.elapsed_minutes >= 0.0);

        let produced = out
            .path()
            .join(format!("mini-extHomFam-v2-{}-mock.fasta", label));
        assert_eq!(
            fs::read(&produced).unwrap(),
            b">seq1\nACGT\n>seq2\nTGCA\n".to_vec()
        );
    }
}

#[test]
fn test_failing_run_aborts_with_context() {
    struct BrokenAligner;
    impl MsaAligner for BrokenAligner {
        fn name(&self) -> &'static str {
            "broken"
        }
        fn is_available(&self) -> bool {
            true
        }
        fn align(
            &self,
            _input: &std::path::Path,
            _output: &std::path::Path,
            _threads: usize,
        ) -> anyhow::Result<()> {
            anyhow::bail!("simulated tool failure")
        }
    }

    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let path = data.path().join("tiny.fasta");
    fs::write(&path, ">a\nAA\n").unwrap();

    let datasets = IndexMap::from([("tiny".to_string(), path)]);
    let aligners: Vec<Box<dyn MsaAligner>> = vec![Box::new(BrokenAligner)];
    let mut results = BenchmarkResults::new();

    let err = run_benchmark(&aligners, &datasets, 1, out.path(), &mut results).unwrap_err();
    assert!(err.to_string().contains("broken failed on tiny dataset"));
    assert!(results.is_empty());
}
