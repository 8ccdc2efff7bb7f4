//! Timing and memory bracketing for one aligner run
//!
//! Wall-clock time plus resident memory of the benchmark process,
//! sampled by a background thread while the run is in flight. Reported
//! as current/peak/usage in KB and elapsed minutes.

use anyhow::{anyhow, Result};
use msabench_core::RunMetrics;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use sysinfo::{Pid, ProcessesToUpdate, System};

const SAMPLE_INTERVAL: Duration = Duration::from_millis(100);

fn resident_bytes(sys: &mut System, pid: Pid) -> u64 {
    sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
    sys.process(pid).map(|p| p.memory()).unwrap_or(0)
}

/// Metrics bracket around a single aligner run
pub struct RunTracker {
    started: Instant,
    pid: Pid,
    peak: Arc<AtomicU64>,
    stop: Arc<AtomicBool>,
    sampler: Option<thread::JoinHandle<()>>,
}

impl RunTracker {
    /// Start the wall clock and the resident-memory sampler
    pub fn start() -> Result<Self> {
        let pid = sysinfo::get_current_pid()
            .map_err(|e| anyhow!("cannot resolve own pid: {}", e))?;
        let peak = Arc::new(AtomicU64::new(0));
        let stop = Arc::new(AtomicBool::new(false));

        let sampler = {
            let peak = Arc::clone(&peak);
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                let mut sys = System::new();
                while !stop.load(Ordering::Relaxed) {
                    let mem = resident_bytes(&mut sys, pid);
                    peak.fetch_max(mem, Ordering::Relaxed);
                    thread::sleep(SAMPLE_INTERVAL);
                }
            })
        };

        Ok(Self {
            started: Instant::now(),
            pid,
            peak,
            stop,
            sampler: Some(sampler),
        })
    }

    /// Stop sampling and collapse into the metrics of this run
    pub fn finish(mut self, threads: usize) -> RunMetrics {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.sampler.take() {
            let _ = handle.join();
        }
        let elapsed_minutes = self.started.elapsed().as_secs_f64() / 60.0;

        let mut sys = System::new();
        let current = resident_bytes(&mut sys, self.pid);
        let peak = self.peak.load(Ordering::Relaxed).max(current);

        let current_kb = current as f64 / 1_000.0;
        let peak_kb = peak as f64 / 1_000.0;
        RunMetrics {
            current_kb,
            peak_kb,
            usage_kb: peak_kb - current_kb,
            elapsed_minutes,
            threads,
        }
    }
}
