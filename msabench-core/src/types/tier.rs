//! Dataset tier definitions
//!
//! Two tier families exist: `CorpusTier` names the raw extHomFam-v2
//! corpora as shipped (small..xlarge), `MiniTier` names the synthetic
//! partitions drawn from the medium corpus (xsmall..large).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Size tiers of the raw extHomFam-v2 corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CorpusTier {
    Small,
    Medium,
    Large,
    Xlarge,
}

impl CorpusTier {
    pub const ALL: [CorpusTier; 4] = [
        CorpusTier::Small,
        CorpusTier::Medium,
        CorpusTier::Large,
        CorpusTier::Xlarge,
    ];

    /// Label used as dataset-size key in benchmark results
    pub fn label(&self) -> &'static str {
        match self {
            CorpusTier::Small => "small",
            CorpusTier::Medium => "medium",
            CorpusTier::Large => "large",
            CorpusTier::Xlarge => "xlarge",
        }
    }

    /// File name of the combined per-tier FASTA file
    pub fn combined_file_name(&self) -> String {
        format!("extHomFam-v2-{}.fasta", self.label())
    }

    /// Raw per-family files live under extHomFam-v2/{tier}/
    pub fn raw_subdir(&self) -> String {
        format!("extHomFam-v2/{}", self.label())
    }
}

impl fmt::Display for CorpusTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Size tiers of the synthetic (partitioned) datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MiniTier {
    Xsmall,
    Small,
    Medium,
    Large,
}

impl MiniTier {
    /// Draw order: contiguous slices of the shuffled pool are assigned
    /// in this order.
    pub const ALL: [MiniTier; 4] = [
        MiniTier::Xsmall,
        MiniTier::Small,
        MiniTier::Medium,
        MiniTier::Large,
    ];

    /// Label used as dataset-size key in benchmark results
    pub fn label(&self) -> &'static str {
        match self {
            MiniTier::Xsmall => "xsmall",
            MiniTier::Small => "small",
            MiniTier::Medium => "medium",
            MiniTier::Large => "large",
        }
    }

    /// Number of records drawn from the shuffled pool for this tier
    pub fn target_size(&self) -> usize {
        match self {
            MiniTier::Xsmall => 50_000,
            MiniTier::Small => 100_000,
            MiniTier::Medium => 250_000,
            MiniTier::Large => 500_000,
        }
    }

    /// File name of the partitioned FASTA file
    pub fn file_name(&self) -> String {
        format!("mini-extHomFam-v2-{}.fasta", self.label())
    }
}

impl fmt::Display for MiniTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_tier_file_names() {
        assert_eq!(
            CorpusTier::Medium.combined_file_name(),
            "extHomFam-v2-medium.fasta"
        );
        assert_eq!(CorpusTier::Xlarge.raw_subdir(), "extHomFam-v2/xlarge");
    }

    #[test]
    fn test_mini_tier_sizes_and_names() {
        assert_eq!(MiniTier::Xsmall.target_size(), 50_000);
        assert_eq!(MiniTier::Large.target_size(), 500_000);
        assert_eq!(
            MiniTier::Xsmall.file_name(),
            "mini-extHomFam-v2-xsmall.fasta"
        );

        let total: usize = MiniTier::ALL.iter().map(|t| t.target_size()).sum();
        assert_eq!(total, 900_000);
    }

    #[test]
    fn test_draw_order() {
        assert_eq!(
            MiniTier::ALL,
            [
                MiniTier::Xsmall,
                MiniTier::Small,
                MiniTier::Medium,
                MiniTier::Large
            ]
        );
    }
}
