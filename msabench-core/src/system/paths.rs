//! Directory layout
//!
//! Every location is an environment override with a fallback chain
//! ending under the user's home directory. Lookups happen once per
//! process; later changes to the environment are not observed.

use std::path::PathBuf;
use std::sync::OnceLock;

static MSABENCH_HOME: OnceLock<PathBuf> = OnceLock::new();
static MSABENCH_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();
static MSABENCH_RESULTS_DIR: OnceLock<PathBuf> = OnceLock::new();

fn resolve_home() -> PathBuf {
    if let Ok(path) = std::env::var("MSABENCH_HOME") {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".msabench")
}

fn resolve_data_dir() -> PathBuf {
    match std::env::var("MSABENCH_DATA_DIR") {
        Ok(path) => PathBuf::from(path),
        Err(_) => msabench_home(),
    }
}

fn resolve_results_dir() -> PathBuf {
    match std::env::var("MSABENCH_RESULTS_DIR") {
        Ok(path) => PathBuf::from(path),
        Err(_) => msabench_data_dir().join("MSAresults"),
    }
}

/// Root of all msabench state: `$MSABENCH_HOME`, else `~/.msabench`
pub fn msabench_home() -> PathBuf {
    MSABENCH_HOME.get_or_init(resolve_home).clone()
}

/// Raw corpora, combined files and partitioned datasets:
/// `$MSABENCH_DATA_DIR`, else the home directory
pub fn msabench_data_dir() -> PathBuf {
    MSABENCH_DATA_DIR.get_or_init(resolve_data_dir).clone()
}

/// CSV reports: `$MSABENCH_RESULTS_DIR`, else `MSAresults` under the
/// data directory
pub fn msabench_results_dir() -> PathBuf {
    MSABENCH_RESULTS_DIR.get_or_init(resolve_results_dir).clone()
}
