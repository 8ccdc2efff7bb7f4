//! Shared type definitions

pub mod results;
pub mod tier;

pub use results::{BenchmarkResults, RunMetrics};
pub use tier::{CorpusTier, MiniTier};
