/// Traits for alignment tools
use anyhow::Result;
use std::path::Path;

/// A multiple-sequence aligner driven through the filesystem: FASTA in,
/// FASTA out, thread count through.
///
/// External command-line tools and embedded alignment libraries both sit
/// behind this trait; the benchmark runner does not care which is which.
pub trait MsaAligner: Send + Sync {
    /// Name used as the key in benchmark results
    fn name(&self) -> &'static str;

    /// Check if the tool can be run on this machine
    fn is_available(&self) -> bool;

    /// Align `input` into `output` using up to `threads` threads
    fn align(&self, input: &Path, output: &Path, threads: usize) -> Result<()>;
}

impl std::fmt::Debug for dyn MsaAligner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MsaAligner")
            .field("name", &self.name())
            .finish()
    }
}
