//! FASTA parsing and sequence cleaning for msabench

pub mod formats;
pub mod sequence;

// Re-export commonly used types
pub use formats::fasta::{
    parse_fasta_path, parse_fasta_path_with_rng, parse_fasta_reader, parse_fasta_reader_with_rng,
    write_fasta_records, ParseOptions, Record,
};
pub use sequence::clean::{CleanMode, SequenceCleaner, ALLOWED_AMINO_ACIDS};
