//! External aligner invocation and benchmark execution
//!
//! Each supported multiple-sequence aligner is a thin wrapper over its
//! command-line binary: build the argument list, run the process, check
//! the exit status. Timing and memory numbers for each run come from the
//! metrics bracket in [`metrics`].

pub mod aligners;
pub mod metrics;
pub mod runner;
pub mod testing;
pub mod traits;

pub use aligners::{aligner_by_name, default_aligners, ClustalOmega, Famsa, Kalign, MafftPartTree};
pub use metrics::RunTracker;
pub use runner::run_benchmark;
pub use testing::MockAligner;
pub use traits::MsaAligner;
