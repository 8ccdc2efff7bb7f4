//! Dataset preparation command

use anyhow::Result;
use clap::Args;
use indexmap::IndexMap;
use msabench_core::{msabench_data_dir, CorpusTier, MsabenchError};
use msabench_data::{partition_corpus_in, resolve_corpus};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Args)]
pub struct PrepareArgs {
    /// Use the whole extHomFam-v2 dataset (all four corpus tiers)
    #[arg(long)]
    pub whole: bool,

    /// Seed for the partition shuffle (omit for a random partition)
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: PrepareArgs) -> Result<()> {
    let datasets = prepare_datasets(args.whole, args.seed)?;
    for (label, path) in &datasets {
        println!("{:>8}  {}", label, path.display());
    }
    Ok(())
}

/// Resolve the combined corpus, derive the synthetic tiers, and return
/// the dataset map the benchmark should run over (label -> path), in
/// smallest-to-largest tier order.
///
/// Mirrors the benchmark setup: the synthetic partition is always built
/// from the medium corpus; `whole` only selects which map is used.
pub fn prepare_datasets(whole: bool, seed: Option<u64>) -> Result<IndexMap<String, PathBuf>> {
    let corpus = resolve_corpus(whole)?;
    let medium = corpus.get(&CorpusTier::Medium).ok_or_else(|| {
        MsabenchError::NotFound("medium combined corpus file".to_string())
    })?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mini = partition_corpus_in(medium, &msabench_data_dir(), &mut rng)?;

    let datasets = if whole {
        corpus
            .iter()
            .map(|(tier, path)| (tier.label().to_string(), path.clone()))
            .collect()
    } else {
        mini.iter()
            .map(|(tier, path)| (tier.label().to_string(), path.clone()))
            .collect()
    };
    Ok(datasets)
}
