//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States whose legal actions were enumerated.
    pub nodes_expanded: u64,

    /// Evaluator calls.
    pub states_evaluated: u64,

    /// Children dropped because an identical state was already queued.
    pub transpositions_pruned: u64,

    /// Largest frontier size observed.
    pub frontier_peak: usize,

    /// Deepest sequence dequeued.
    pub max_depth: u16,

    /// Length of the returned sequence.
    pub best_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,

    /// The deadline cut the search short.
    pub timed_out: bool,

    /// The returned sequence wins the game this turn.
    pub forced_win: bool,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Expanded nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    pub(crate) fn observe_depth(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth as u16);
    }

    pub(crate) fn observe_frontier(&mut self, len: usize) {
        self.frontier_peak = self.frontier_peak.max(len);
    }
}
