//! Simulation observer trait for progress reporting.

use log::info;

use cc_agent::StateCounts;
use cc_core::Month;

use crate::StepStats;

/// Callbacks invoked by [`Sim::run_observed`][crate::Sim::run_observed]
/// around every step.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SimObserver {
    /// Called before the activation sweep of the step that will end at
    /// `month + 1`.
    fn on_step_start(&mut self, _month: Month) {}

    /// Called after the step's snapshot has been recorded.  `month` is the
    /// new month counter.
    fn on_step_end(&mut self, _month: Month, _stats: &StepStats, _counts: &StateCounts) {}

    /// Called once after the last step of a `run_observed` call.
    fn on_run_end(&mut self, _final_month: Month, _counts: &StateCounts) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Logs the month counter and population counts through the `log` facade
/// every `interval` months, plus a final line at run end.
pub struct LogObserver {
    interval: u64,
}

impl LogObserver {
    /// `interval = 0` logs only at run end.
    pub fn new(interval: u64) -> Self {
        Self { interval }
    }
}

impl SimObserver for LogObserver {
    fn on_step_end(&mut self, month: Month, stats: &StepStats, counts: &StateCounts) {
        if self.interval > 0 && month.0.is_multiple_of(self.interval) {
            info!(
                "Months Passed: {} | {} | +{} convicted, +{} released",
                month.0, counts, stats.convictions, stats.releases
            );
        }
    }

    fn on_run_end(&mut self, final_month: Month, counts: &StateCounts) {
        info!("run finished at month {}: {}", final_month.0, counts);
    }
}
