//! Synthetic dataset partitioning
//!
//! Shuffles the parsed medium corpus once and slices it into four fixed
//! size tiers (xsmall 50k, small 100k, medium 250k, large 500k), each
//! written as an unwrapped FASTA file. A record lands in exactly one
//! tier. Outputs are cached by file existence.

use msabench_bio::{parse_fasta_path, write_fasta_records, ParseOptions, Record};
use msabench_core::{msabench_data_dir, MiniTier, MsabenchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Partition the source corpus into the fixed synthetic tiers, writing
/// outputs next to the configured data directory. See
/// [`partition_corpus_in`].
pub fn partition_corpus(source: &Path) -> MsabenchResult<BTreeMap<MiniTier, PathBuf>> {
    let mut rng = StdRng::from_entropy();
    partition_corpus_in(source, &msabench_data_dir(), &mut rng)
}

/// Partition `source` into `output_dir`, shuffling with `rng`.
///
/// If all four output files already exist their paths are returned
/// without reading the source. Tiers past the end of the pool come out
/// short or empty, never as an error.
pub fn partition_corpus_in<G: Rng>(
    source: &Path,
    output_dir: &Path,
    rng: &mut G,
) -> MsabenchResult<BTreeMap<MiniTier, PathBuf>> {
    let outputs: BTreeMap<MiniTier, PathBuf> = MiniTier::ALL
        .iter()
        .map(|tier| (*tier, output_dir.join(tier.file_name())))
        .collect();

    if outputs.values().all(|path| path.exists()) {
        tracing::debug!("all partitioned datasets cached");
        return Ok(outputs);
    }

    let mut pool = parse_fasta_path(source, &ParseOptions::default())?;
    tracing::info!(records = pool.len(), source = %source.display(), "shuffling record pool");
    pool.shuffle(rng);

    let sizes: Vec<(MiniTier, usize)> = MiniTier::ALL
        .iter()
        .map(|tier| (*tier, tier.target_size()))
        .collect();

    for (tier, slice) in slice_tiers(&pool, &sizes) {
        tracing::info!(tier = %tier, records = slice.len(), "writing partitioned dataset");
        write_fasta_records(&outputs[&tier], slice)?;
    }

    Ok(outputs)
}

/// Contiguous, non-overlapping slices of `pool` in draw order.
///
/// Slice bounds are clamped to the pool length, so a tier whose range
/// starts or ends past the end simply gets fewer (or zero) records.
fn slice_tiers<'a>(
    pool: &'a [Record],
    sizes: &[(MiniTier, usize)],
) -> Vec<(MiniTier, &'a [Record])> {
    let mut slices = Vec::with_capacity(sizes.len());
    let mut offset = 0usize;
    for (tier, size) in sizes {
        let begin = offset.min(pool.len());
        let end = offset.saturating_add(*size).min(pool.len());
        slices.push((*tier, &pool[begin..end]));
        offset = offset.saturating_add(*size);
    }
    slices
}
