//! Mock aligner for testing

use crate::traits::MsaAligner;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Mock aligner that copies its input to its output unchanged
///
/// Always available; stands in for the embedded alignment library in
/// tests of the benchmark loop.
#[derive(Debug, Clone, Default)]
pub struct MockAligner;

impl MockAligner {
    pub fn new() -> Self {
        MockAligner
    }
}

impl MsaAligner for MockAligner {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn align(&self, input: &Path, output: &Path, _threads: usize) -> Result<()> {
        fs::copy(input, output)
            .with_context(|| format!("failed to copy {} to {}", input.display(), output.display()))?;
        Ok(())
    }
}
