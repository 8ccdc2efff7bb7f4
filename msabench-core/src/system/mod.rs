//! System-level helpers (directory layout)

pub mod paths;
