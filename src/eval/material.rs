//! Material counting.

use crate::core::{GameState, Side};

use super::weights::CardWeights;
use super::{terminal_score, Evaluator};

/// Health difference plus weighted board material.
///
/// Own creatures add their card value, opposing creatures subtract it. Cards
/// in hand are ignored: only what reached the board counts.
#[derive(Clone, Debug, Default)]
pub struct MaterialEvaluator {
    weights: CardWeights,
}

impl MaterialEvaluator {
    #[must_use]
    pub fn new(weights: CardWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &CardWeights {
        &self.weights
    }

    fn board_value(&self, state: &GameState, side: Side) -> f64 {
        state
            .board(side)
            .map(|card| self.weights.card_value(card))
            .sum()
    }
}

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, state: &GameState) -> f64 {
        if let Some(score) = terminal_score(state) {
            return score;
        }

        f64::from(state.me.health - state.opponent.health)
            + self.board_value(state, Side::Me)
            - self.board_value(state, Side::Opponent)
    }

    fn name(&self) -> &'static str {
        "material"
    }
}
