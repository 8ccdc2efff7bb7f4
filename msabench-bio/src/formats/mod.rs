//! File format support

pub mod fasta;
