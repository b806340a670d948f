//! Search configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::eval::{CardWeights, Evaluator, EvaluatorKind, ThreatParams};

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Wall-clock budget per search (milliseconds).
    pub time_budget_ms: u64,

    /// Children are no longer queued once the frontier holds this many
    /// entries. Bounds memory on long budgets.
    pub max_frontier: usize,

    /// Skip children whose state is already queued.
    pub prune_transpositions: bool,

    /// Which evaluator [`SearchConfig::build_evaluator`] builds.
    pub evaluator: EvaluatorKind,

    /// Used by the material evaluator.
    pub weights: CardWeights,

    /// Used by the threat evaluator.
    pub threat: ThreatParams,

    /// Emit a summary line per search (needs the `search-log` feature).
    pub verbose: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget_ms: 95,
            max_frontier: 100_000,
            prune_transpositions: true,
            evaluator: EvaluatorKind::default(),
            weights: CardWeights::default(),
            threat: ThreatParams::default(),
            verbose: true,
        }
    }
}

impl SearchConfig {
    pub fn with_time_budget(mut self, ms: u64) -> Self {
        self.time_budget_ms = ms;
        self
    }

    pub fn with_max_frontier(mut self, max: usize) -> Self {
        self.max_frontier = max;
        self
    }

    pub fn with_transpositions(mut self, prune: bool) -> Self {
        self.prune_transpositions = prune;
        self
    }

    pub fn with_evaluator_kind(mut self, kind: EvaluatorKind) -> Self {
        self.evaluator = kind;
        self
    }

    pub fn with_weights(mut self, weights: CardWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_threat(mut self, threat: ThreatParams) -> Self {
        self.threat = threat;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.time_budget_ms)
    }

    /// Build the configured evaluator.
    #[must_use]
    pub fn build_evaluator(&self) -> Box<dyn Evaluator> {
        self.evaluator.build(self.weights, self.threat)
    }
}
