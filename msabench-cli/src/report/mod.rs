//! Report rendering

pub mod csv;
