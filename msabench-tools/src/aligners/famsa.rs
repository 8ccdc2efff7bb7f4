use super::check_exit;
use crate::traits::MsaAligner;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// FAMSA runner, optionally with the medoid guide tree
#[derive(Debug, Clone, Default)]
pub struct Famsa {
    medoid: bool,
}

impl Famsa {
    pub fn new() -> Self {
        Self { medoid: false }
    }

    /// FAMSA with `-medoidtree`
    pub fn medoid() -> Self {
        Self { medoid: true }
    }

    fn args(&self, input: &Path, output: &Path, threads: usize) -> Vec<String> {
        let mut args = Vec::new();
        if self.medoid {
            args.push("-medoidtree".to_string());
        }
        args.push("-gz".to_string());
        args.push("-t".to_string());
        args.push(threads.to_string());
        args.push(input.display().to_string());
        args.push(output.display().to_string());
        args
    }
}

impl MsaAligner for Famsa {
    fn name(&self) -> &'static str {
        if self.medoid {
            "famsa-medoid"
        } else {
            "famsa"
        }
    }

    fn is_available(&self) -> bool {
        which::which("famsa").is_ok()
    }

    fn align(&self, input: &Path, output: &Path, threads: usize) -> Result<()> {
        let out = Command::new("famsa")
            .args(self.args(input, output, threads))
            .output()
            .with_context(|| format!("failed to spawn famsa for {}", input.display()))?;
        check_exit(self.name(), out)
    }
}
