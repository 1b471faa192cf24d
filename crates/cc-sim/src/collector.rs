//! Append-only time series of aggregate counts.

use std::collections::BTreeMap;

use cc_agent::{IncarcerationState, StateCounts};
use cc_core::Month;

/// One `StateCounts` per month: index 0 is the construction-time snapshot,
/// index `m` the snapshot taken at the end of month `m`.
///
/// Only the owning [`Sim`][crate::Sim] can append.
#[derive(Clone, Debug, Default)]
pub struct DataCollector {
    snapshots: Vec<StateCounts>,
}

impl DataCollector {
    pub(crate) fn new(initial: StateCounts) -> Self {
        Self { snapshots: vec![initial] }
    }

    pub(crate) fn record(&mut self, counts: StateCounts) {
        self.snapshots.push(counts);
    }

    /// Full recorded series, oldest first.
    pub fn snapshots(&self) -> &[StateCounts] {
        &self.snapshots
    }

    /// Most recent snapshot.
    pub fn latest(&self) -> StateCounts {
        self.snapshots.last().copied().unwrap_or_default()
    }

    pub fn at(&self, month: Month) -> Option<StateCounts> {
        self.snapshots.get(month.0 as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// One state's counts over time.
    pub fn series_for(&self, state: IncarcerationState) -> Vec<usize> {
        self.snapshots.iter().map(|c| c.get(state)).collect()
    }

    /// Series by label: `"Incarcerated"`, `"Susceptible"` or `"Released"`.
    pub fn series(&self, label: &str) -> Option<Vec<usize>> {
        IncarcerationState::ALL
            .into_iter()
            .find(|s| s.label() == label)
            .map(|s| self.series_for(s))
    }

    /// Every series keyed by label.
    pub fn model_vars(&self) -> BTreeMap<&'static str, Vec<usize>> {
        IncarcerationState::ALL
            .into_iter()
            .map(|s| (s.label(), self.series_for(s)))
            .collect()
    }
}
