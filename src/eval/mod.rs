//! Position evaluation.
//!
//! An [`Evaluator`] maps a state to one score, higher being better for the
//! searching player. Evaluators are trait objects so the search can be
//! configured with either heuristic, the way search policies are plugged in.
//!
//! Terminal states short-circuit every evaluator: a dead opponent scores
//! [`WIN_SCORE`], a dead searching player scores [`LOSS_SCORE`].

pub mod weights;
pub mod material;
pub mod threat;

use serde::{Deserialize, Serialize};

use crate::core::{GameResult, GameState};

pub use material::MaterialEvaluator;
pub use threat::{ThreatEvaluator, ThreatParams};
pub use weights::{AbilityWeights, CardWeights, StatWeights};

/// Score of a won position. Dominates every heuristic score.
pub const WIN_SCORE: f64 = 1e9;

/// Score of a lost position.
pub const LOSS_SCORE: f64 = -1e9;

/// State scoring function.
///
/// Implementations must be pure: the same state always gets the same score.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, state: &GameState) -> f64;

    /// Short name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Sentinel score for terminal states.
#[must_use]
pub fn terminal_score(state: &GameState) -> Option<f64> {
    state.outcome().map(|result| match result {
        GameResult::Won => WIN_SCORE,
        GameResult::Lost => LOSS_SCORE,
    })
}

/// Evaluator selection for configuration files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvaluatorKind {
    /// Health difference plus weighted board material.
    Material,
    /// Ratio of turns-to-lethal.
    #[default]
    Threat,
}

impl EvaluatorKind {
    /// Build the evaluator this kind names.
    #[must_use]
    pub fn build(self, weights: CardWeights, threat: ThreatParams) -> Box<dyn Evaluator> {
        match self {
            EvaluatorKind::Material => Box::new(MaterialEvaluator::new(weights)),
            EvaluatorKind::Threat => Box::new(ThreatEvaluator::new(threat)),
        }
    }
}
