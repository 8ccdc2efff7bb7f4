//! Dataset preparation for msabench
//!
//! Locates or builds the combined extHomFam-v2 corpus files and derives
//! the size-tiered synthetic datasets the benchmark runs over. All
//! caching is by file existence: regeneration requires deleting the
//! cached file. Two processes racing to create the same cache path are
//! not guarded against (last writer wins); the benchmark is expected to
//! run as a single process.

pub mod partition;
pub mod resolver;

pub use partition::{partition_corpus, partition_corpus_in};
pub use resolver::{concat_fasta, resolve_corpus, resolve_corpus_in};
