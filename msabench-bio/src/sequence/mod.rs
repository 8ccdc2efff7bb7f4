//! Sequence-level transforms

pub mod clean;

pub use clean::{CleanMode, SequenceCleaner};
