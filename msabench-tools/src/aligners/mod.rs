//! Command-line aligner wrappers
//!
//! Invocations mirror how each tool is driven in practice:
//! `famsa [-medoidtree] -gz -t N in out`, `clustalo --threads N -i in
//! -o out --force`, `mafft --anysymbol --quiet --parttree --thread N in
//! > out`, `kalign --nthreads N -i in -o out`.

mod clustalo;
mod famsa;
mod kalign;
mod mafft;

pub use clustalo::ClustalOmega;
pub use famsa::Famsa;
pub use kalign::Kalign;
pub use mafft::MafftPartTree;

use crate::traits::MsaAligner;
use anyhow::{bail, Result};
use std::process::Output;

/// The aligners the benchmark runs by default (the heavier clustalo and
/// mafft runners exist but must be requested explicitly).
pub fn default_aligners() -> Vec<Box<dyn MsaAligner>> {
    vec![
        Box::new(Famsa::new()),
        Box::new(Famsa::medoid()),
        Box::new(Kalign::new()),
    ]
}

/// Look up an aligner by its results-key name
pub fn aligner_by_name(name: &str) -> Option<Box<dyn MsaAligner>> {
    match name {
        "famsa" => Some(Box::new(Famsa::new())),
        "famsa-medoid" => Some(Box::new(Famsa::medoid())),
        "clustalo" => Some(Box::new(ClustalOmega::new())),
        "mafft-parttree" => Some(Box::new(MafftPartTree::new())),
        "kalign3" => Some(Box::new(Kalign::new())),
        _ => None,
    }
}

/// Check a finished process, logging and surfacing captured output on
/// failure. No retries.
pub(crate) fn check_exit(tool: &str, output: Output) -> Result<()> {
    if output.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    tracing::error!(tool, %stderr, %stdout, "aligner failed");
    bail!(
        "{} exited with {}: {}",
        tool,
        output.status,
        stderr.trim()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligner_registry() {
        for name in ["famsa", "famsa-medoid", "clustalo", "mafft-parttree", "kalign3"] {
            let aligner = aligner_by_name(name).unwrap();
            assert_eq!(aligner.name(), name);
        }
        assert!(aligner_by_name("muscle").is_none());
    }

    #[test]
    fn test_default_set() {
        let names: Vec<&str> = default_aligners().iter().map(|a| a.name()).collect();
        assert_eq!(names, ["famsa", "famsa-medoid", "kalign3"]);
    }
}
