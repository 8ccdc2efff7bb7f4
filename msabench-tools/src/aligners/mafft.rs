use crate::traits::MsaAligner;
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

/// MAFFT runner in PartTree mode
///
/// MAFFT writes the alignment to stdout, so the output file is wired in
/// as the child's stdout instead of being passed as an argument.
#[derive(Debug, Clone, Default)]
pub struct MafftPartTree;

impl MafftPartTree {
    pub fn new() -> Self {
        Self
    }

    fn args(&self, input: &Path, threads: usize) -> Vec<String> {
        vec![
            "--anysymbol".to_string(),
            "--quiet".to_string(),
            "--parttree".to_string(),
            "--thread".to_string(),
            threads.to_string(),
            input.display().to_string(),
        ]
    }
}

impl MsaAligner for MafftPartTree {
    fn name(&self) -> &'static str {
        "mafft-parttree"
    }

    fn is_available(&self) -> bool {
        which::which("mafft").is_ok()
    }

    fn align(&self, input: &Path, output: &Path, threads: usize) -> Result<()> {
        let out_file = File::create(output)
            .with_context(|| format!("failed to create {}", output.display()))?;

        let child = Command::new("mafft")
            .args(self.args(input, threads))
            .stdout(Stdio::from(out_file))
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to spawn mafft for {}", input.display()))?;

        let result = child.wait_with_output()?;
        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            tracing::error!(tool = self.name(), %stderr, "aligner failed");
            bail!("mafft exited with {}: {}", result.status, stderr.trim());
        }
        Ok(())
    }
}
