//! Streaming FASTA parser and writer
//!
//! The parser reads line by line, so it works over any `BufRead` without
//! owning it; the path entry points open the file themselves (gzip-aware
//! by extension) and guarantee it is closed on every exit path.

use crate::sequence::clean::{CleanMode, SequenceCleaner};
use flate2::read::GzDecoder;
use msabench_core::MsabenchResult;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// One named sequence parsed from FASTA
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub sequence: String,
}

impl Record {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }
}

/// Parser behavior switches
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Cleaning transform applied to every sequence after the full read
    pub clean: Option<CleanMode>,
    /// Keep the entire header (minus the leading `>`) as the name.
    /// Otherwise the name is truncated at the first `/`-delimited token
    /// after normalizing `|` to `/`.
    pub full_name: bool,
}

impl ParseOptions {
    pub fn with_clean(mut self, clean: CleanMode) -> Self {
        self.clean = Some(clean);
        self
    }

    pub fn with_full_name(mut self) -> Self {
        self.full_name = true;
        self
    }
}

fn short_name(header: &str) -> String {
    let normalized = header.replace('|', "/");
    match normalized.split_once('/') {
        Some((head, _)) => head.to_string(),
        None => normalized,
    }
}

/// Parse FASTA from an already-open reader; ownership and closing of the
/// reader stay with the caller. The `Unalign` ambiguity draw comes from
/// `rng`, once for the whole call.
///
/// Lines before the first header have no record to attach to and are
/// skipped silently (logged once at warn level).
pub fn parse_fasta_reader_with_rng<R: BufRead, G: Rng>(
    reader: R,
    opts: &ParseOptions,
    rng: &mut G,
) -> MsabenchResult<Vec<Record>> {
    let mut records: Vec<Record> = Vec::new();
    let mut current: Option<Record> = None;
    let mut warned_leading = false;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                records.push(record);
            }
            let name = if opts.full_name {
                header.to_string()
            } else {
                short_name(header)
            };
            current = Some(Record::new(name, String::new()));
        } else if let Some(record) = current.as_mut() {
            record.sequence.push_str(line);
        } else if !warned_leading {
            tracing::warn!("skipping sequence data before the first FASTA header");
            warned_leading = true;
        }
    }
    if let Some(record) = current.take() {
        records.push(record);
    }

    if let Some(mode) = opts.clean {
        let cleaner = SequenceCleaner::new(mode, rng);
        for record in &mut records {
            record.sequence = cleaner.apply(&record.sequence);
        }
    }

    Ok(records)
}

/// Parse FASTA from an already-open reader with an entropy-seeded RNG
pub fn parse_fasta_reader<R: BufRead>(reader: R, opts: &ParseOptions) -> MsabenchResult<Vec<Record>> {
    let mut rng = StdRng::from_entropy();
    parse_fasta_reader_with_rng(reader, opts, &mut rng)
}

/// Parse a FASTA file (gzip-aware by `.gz` extension)
///
/// A missing or unreadable path surfaces the IO error unchanged; there
/// are no retries.
pub fn parse_fasta_path<P: AsRef<Path>>(path: P, opts: &ParseOptions) -> MsabenchResult<Vec<Record>> {
    let mut rng = StdRng::from_entropy();
    parse_fasta_path_with_rng(path, opts, &mut rng)
}

/// Parse a FASTA file with an explicit RNG for the `Unalign` draw
pub fn parse_fasta_path_with_rng<P: AsRef<Path>, G: Rng>(
    path: P,
    opts: &ParseOptions,
    rng: &mut G,
) -> MsabenchResult<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        parse_fasta_reader_with_rng(BufReader::new(GzDecoder::new(file)), opts, rng)
    } else {
        parse_fasta_reader_with_rng(BufReader::new(file), opts, rng)
    }
}

/// Write records as FASTA, one header line and one unwrapped sequence
/// line per record
pub fn write_fasta_records<P: AsRef<Path>>(path: P, records: &[Record]) -> MsabenchResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for record in records {
        writeln!(writer, ">{}", record.name)?;
        writeln!(writer, "{}", record.sequence)?;
    }
    writer.flush()?;
    Ok(())
}
