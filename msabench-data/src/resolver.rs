//! Combined-corpus resolution
//!
//! Raw extHomFam-v2 data ships as one file per protein family under
//! `extHomFam-v2/{tier}/`. The benchmark consumes one combined FASTA
//! file per tier, cached at `extHomFam-v2-{tier}.fasta` next to the raw
//! directory.

use msabench_core::{msabench_data_dir, CorpusTier, MsabenchResult};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Concatenate every file in `input_dir` into `output_file`, byte for
/// byte with no re-parsing. Files are taken in sorted name order so the
/// combined file is reproducible across filesystems.
pub fn concat_fasta(input_dir: &Path, output_file: &Path) -> MsabenchResult<()> {
    let mut files: Vec<PathBuf> = fs::read_dir(input_dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    tracing::info!(
        dir = %input_dir.display(),
        files = files.len(),
        out = %output_file.display(),
        "concatenating raw family files"
    );

    let mut writer = BufWriter::new(File::create(output_file)?);
    for path in &files {
        let mut reader = File::open(path)?;
        io::copy(&mut reader, &mut writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Locate or build the combined corpus files under the configured data
/// directory. See [`resolve_corpus_in`].
pub fn resolve_corpus(include_all: bool) -> MsabenchResult<BTreeMap<CorpusTier, PathBuf>> {
    resolve_corpus_in(&msabench_data_dir(), include_all)
}

/// Locate or build the combined corpus files under `data_dir`.
///
/// Checks, in order:
/// 1. with `include_all`, all four combined files present → return all four;
/// 2. the medium combined file present → return just medium;
/// 3. otherwise concatenate the raw subdirectories (all four tiers with
///    `include_all`, medium only without) and return the result.
///
/// When `include_all` is false only the medium tier is ever built or
/// returned. A missing raw subdirectory on a rebuild surfaces the IO
/// error unchanged.
pub fn resolve_corpus_in(
    data_dir: &Path,
    include_all: bool,
) -> MsabenchResult<BTreeMap<CorpusTier, PathBuf>> {
    let combined: BTreeMap<CorpusTier, PathBuf> = CorpusTier::ALL
        .iter()
        .map(|tier| (*tier, data_dir.join(tier.combined_file_name())))
        .collect();

    if include_all && combined.values().all(|path| path.exists()) {
        tracing::debug!("all combined corpus files cached");
        return Ok(combined);
    }

    let medium_path = combined[&CorpusTier::Medium].clone();
    if medium_path.exists() {
        tracing::debug!(path = %medium_path.display(), "medium combined corpus cached");
        return Ok(BTreeMap::from([(CorpusTier::Medium, medium_path)]));
    }

    if include_all {
        for tier in CorpusTier::ALL {
            concat_fasta(&data_dir.join(tier.raw_subdir()), &combined[&tier])?;
        }
        Ok(combined)
    } else {
        concat_fasta(
            &data_dir.join(CorpusTier::Medium.raw_subdir()),
            &medium_path,
        )?;
        Ok(BTreeMap::from([(CorpusTier::Medium, medium_path)]))
    }
}
