//! Test doubles for the aligner layer

mod mock;

pub use mock::MockAligner;
