//! Core types shared across the msabench workspace

pub mod error;
pub mod system;
pub mod types;

pub use error::{MsabenchError, MsabenchResult};
pub use system::paths::{msabench_data_dir, msabench_home, msabench_results_dir};
pub use types::results::{BenchmarkResults, RunMetrics, REPORT_COLUMNS};
pub use types::tier::{CorpusTier, MiniTier};
