//! Integration tests for FASTA parsing and writing

use msabench_bio::{parse_fasta_path, write_fasta_records, CleanMode, ParseOptions, Record};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_fasta_round_trip() {
    let records = vec![
        Record::new("seq1|PF00005/1-100", "MKLTFFGAAL"),
        Record::new("seq2 with spaces", "ACDEFGHIKLMNPQRSTVWY"),
        Record::new("seq3", ""),
    ];

    let temp_file = NamedTempFile::new().unwrap();
    write_fasta_records(temp_file.path(), &records).unwrap();

    // full_name + no cleaning must recover exactly what was written
    let opts = ParseOptions::default().with_full_name();
    let parsed = parse_fasta_path(temp_file.path(), &opts).unwrap();

    assert_eq!(parsed, records);
}

#[test]
fn test_wrapped_input_parses_like_unwrapped() {
    let mut wrapped = NamedTempFile::new().unwrap();
    writeln!(wrapped, ">seq_0").unwrap();
    writeln!(wrapped, "ATGCATGCAT").unwrap();
    writeln!(wrapped, "GCATGCATGC").unwrap();
    writeln!(wrapped).unwrap();
    writeln!(wrapped, "ATGC").unwrap();
    wrapped.flush().unwrap();

    let mut flat = NamedTempFile::new().unwrap();
    writeln!(flat, ">seq_0").unwrap();
    writeln!(flat, "ATGCATGCATGCATGCATGCATGC").unwrap();
    flat.flush().unwrap();

    let opts = ParseOptions::default();
    assert_eq!(
        parse_fasta_path(wrapped.path(), &opts).unwrap(),
        parse_fasta_path(flat.path(), &opts).unwrap()
    );
}

#[test]
fn test_gzipped_input() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let temp = tempfile::Builder::new().suffix(".fasta.gz").tempfile().unwrap();
    let mut encoder = GzEncoder::new(temp.reopen().unwrap(), Compression::default());
    encoder.write_all(b">seq1\nACGT\n>seq2\nTGCA\n").unwrap();
    encoder.finish().unwrap();

    let parsed = parse_fasta_path(temp.path(), &ParseOptions::default()).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0], Record::new("seq1", "ACGT"));
}

#[test]
fn test_clean_modes_on_disk() {
    let mut temp = NamedTempFile::new().unwrap();
    writeln!(temp, ">seq1/1-5").unwrap();
    writeln!(temp, "a.G*T").unwrap();
    temp.flush().unwrap();

    let delete = parse_fasta_path(
        temp.path(),
        &ParseOptions::default().with_clean(CleanMode::Delete),
    )
    .unwrap();
    assert_eq!(delete[0].sequence, "GT");
    assert_eq!(delete[0].name, "seq1");

    let upper = parse_fasta_path(
        temp.path(),
        &ParseOptions::default().with_clean(CleanMode::Upper),
    )
    .unwrap();
    assert_eq!(upper[0].sequence, "A-GT");

    let unalign = parse_fasta_path(
        temp.path(),
        &ParseOptions::default().with_clean(CleanMode::Unalign),
    )
    .unwrap();
    assert_eq!(unalign[0].sequence, "AGT");
}
