use super::check_exit;
use crate::traits::MsaAligner;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Kalign 3 runner
#[derive(Debug, Clone, Default)]
pub struct Kalign;

impl Kalign {
    pub fn new() -> Self {
        Self
    }

    fn args(&self, input: &Path, output: &Path, threads: usize) -> Vec<String> {
        vec![
            "--nthreads".to_string(),
            threads.to_string(),
            "-i".to_string(),
            input.display().to_string(),
            "-o".to_string(),
            output.display().to_string(),
        ]
    }
}

impl MsaAligner for Kalign {
    fn name(&self) -> &'static str {
        "kalign3"
    }

    fn is_available(&self) -> bool {
        which::which("kalign").is_ok()
    }

    fn align(&self, input: &Path, output: &Path, threads: usize) -> Result<()> {
        let out = Command::new("kalign")
            .args(self.args(input, output, threads))
            .output()
            .with_context(|| format!("failed to spawn kalign for {}", input.display()))?;
        check_exit(self.name(), out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kalign_args() {
        let args = Kalign::new().args(Path::new("in.fasta"), Path::new("out.fasta"), 16);
        assert_eq!(args, ["--nthreads", "16", "-i", "in.fasta", "-o", "out.fasta"]);
    }
}
