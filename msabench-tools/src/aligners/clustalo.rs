use super::check_exit;
use crate::traits::MsaAligner;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Clustal Omega runner
#[derive(Debug, Clone, Default)]
pub struct ClustalOmega;

impl ClustalOmega {
    pub fn new() -> Self {
        Self
    }

    fn args(&self, input: &Path, output: &Path, threads: usize) -> Vec<String> {
        vec![
            "--threads".to_string(),
            threads.to_string(),
            "-i".to_string(),
            input.display().to_string(),
            "-o".to_string(),
            output.display().to_string(),
            "--force".to_string(),
        ]
    }
}

impl MsaAligner for ClustalOmega {
    fn name(&self) -> &'static str {
        "clustalo"
    }

    fn is_available(&self) -> bool {
        which::which("clustalo").is_ok()
    }

    fn align(&self, input: &Path, output: &Path, threads: usize) -> Result<()> {
        let out = Command::new("clustalo")
            .args(self.args(input, output, threads))
            .output()
            .with_context(|| format!("failed to spawn clustalo for {}", input.display()))?;
        check_exit(self.name(), out)
    }
}
