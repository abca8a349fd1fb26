//! Hooks between top-level point visits of a DBSCAN scan.
//!
//! Observers never change the outcome of a run. They can only watch it, or stop it
//! early (in which case no partial labeling is returned).

use std::sync::atomic::{AtomicBool, Ordering};

/// Observer of the outer scan.
pub trait ScanObserver {
    /// Called after each top-level point visit, including its cluster expansion.
    fn on_progress(&mut self, _scanned: usize, _total: usize) {}

    /// Checked before each top-level point visit. Returning `true` aborts the run.
    fn should_stop(&self) -> bool {
        false
    }
}

/// No-op observer.
impl ScanObserver for () {}

impl<O: ScanObserver + ?Sized> ScanObserver for &mut O {
    fn on_progress(&mut self, scanned: usize, total: usize) {
        (**self).on_progress(scanned, total);
    }

    fn should_stop(&self) -> bool {
        (**self).should_stop()
    }
}

/// Stops the scan once the wrapped flag is set, e.g. from another thread.
#[derive(Debug, Clone, Copy)]
pub struct CancelFlag<'a>(pub &'a AtomicBool);

impl ScanObserver for CancelFlag<'_> {
    fn should_stop(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Logs scan progress through `tracing` at a fixed percentage step.
#[derive(Debug, Clone)]
pub struct LogProgress {
    step_percent: usize,
    next_percent: usize,
}

impl LogProgress {
    /// Log every `step_percent` percent (clamped to 1..=100).
    pub fn new(step_percent: usize) -> Self {
        let step_percent = step_percent.clamp(1, 100);
        Self {
            step_percent,
            next_percent: step_percent,
        }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new(10)
    }
}

impl ScanObserver for LogProgress {
    fn on_progress(&mut self, scanned: usize, total: usize) {
        if total == 0 {
            return;
        }
        let percent = scanned * 100 / total;
        if percent >= self.next_percent {
            tracing::info!(scanned, total, percent, "dbscan progress");
            // Skip thresholds already passed in one step.
            self.next_percent = (percent / self.step_percent + 1) * self.step_percent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_flag_follows_atomic() {
        let flag = AtomicBool::new(false);
        let obs = CancelFlag(&flag);
        assert!(!obs.should_stop());
        flag.store(true, Ordering::Relaxed);
        assert!(obs.should_stop());
    }

    #[test]
    fn log_progress_advances_thresholds() {
        let mut obs = LogProgress::new(25);
        obs.on_progress(1, 100);
        assert_eq!(obs.next_percent, 25);
        obs.on_progress(60, 100);
        assert_eq!(obs.next_percent, 75);
        obs.on_progress(100, 100);
        assert_eq!(obs.next_percent, 125);
    }

    #[test]
    fn log_progress_clamps_step() {
        assert_eq!(LogProgress::new(0).step_percent, 1);
        assert_eq!(LogProgress::new(500).step_percent, 100);
    }
}
