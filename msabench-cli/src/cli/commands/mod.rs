pub mod bench;
pub mod download;
pub mod prepare;
