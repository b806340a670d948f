//! Turns-to-lethal evaluation.
//!
//! ## Model
//!
//! Each side's *pressure* is the summed attack of its board, with Ward
//! creatures counted `ward_multiplier` times (they survive one more
//! exchange). Each side's *wall* is its health plus the defense of its Guard
//! creatures, Ward again multiplying. Then:
//!
//! ```text
//! my_turns  = opponent wall / max(my pressure, min_pressure)
//! opp_turns = my wall / max(opponent pressure, min_pressure)
//! score     = opp_turns / my_turns
//! ```
//!
//! Both turn counts are capped at `max_turns`. A score above 1 means we are
//! the faster clock.

use serde::{Deserialize, Serialize};

use crate::cards::Ability;
use crate::core::{GameState, Side};

use super::{terminal_score, Evaluator};

/// Tuning for [`ThreatEvaluator`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThreatParams {
    pub ward_multiplier: f64,

    /// Cap on a turns-to-lethal estimate.
    pub max_turns: f64,

    /// Floor on pressure, keeping an empty board finite.
    pub min_pressure: f64,
}

impl Default for ThreatParams {
    fn default() -> Self {
        Self {
            ward_multiplier: 1.5,
            max_turns: 50.0,
            min_pressure: 0.01,
        }
    }
}

impl ThreatParams {
    #[must_use]
    pub fn with_ward_multiplier(mut self, multiplier: f64) -> Self {
        self.ward_multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, turns: f64) -> Self {
        self.max_turns = turns;
        self
    }
}

/// Threat-aware evaluator.
#[derive(Clone, Debug, Default)]
pub struct ThreatEvaluator {
    params: ThreatParams,
}

impl ThreatEvaluator {
    #[must_use]
    pub fn new(params: ThreatParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &ThreatParams {
        &self.params
    }

    fn ward_factor(&self, warded: bool) -> f64 {
        if warded {
            self.params.ward_multiplier
        } else {
            1.0
        }
    }

    /// Damage a side's board threatens per turn.
    #[must_use]
    pub fn pressure(&self, state: &GameState, side: Side) -> f64 {
        state
            .board(side)
            .map(|c| f64::from(c.attack.max(0)) * self.ward_factor(c.has(Ability::Ward)))
            .sum()
    }

    /// Health plus Guard defense standing in front of it.
    #[must_use]
    pub fn wall(&self, state: &GameState, side: Side) -> f64 {
        let guards: f64 = state
            .board(side)
            .filter(|c| c.has(Ability::Guard))
            .map(|c| f64::from(c.defense.max(0)) * self.ward_factor(c.has(Ability::Ward)))
            .sum();
        f64::from(state.player(side).health) + guards
    }

    /// Estimated turns for `side` to kill the other side.
    #[must_use]
    pub fn turns_to_win(&self, state: &GameState, side: Side) -> f64 {
        let pressure = self.pressure(state, side).max(self.params.min_pressure);
        (self.wall(state, side.other()) / pressure).min(self.params.max_turns)
    }
}

impl Evaluator for ThreatEvaluator {
    fn evaluate(&self, state: &GameState) -> f64 {
        if let Some(score) = terminal_score(state) {
            return score;
        }

        let mine = self.turns_to_win(state, Side::Me);
        let theirs = self.turns_to_win(state, Side::Opponent);
        theirs / mine
    }

    fn name(&self) -> &'static str {
        "threat"
    }
}
