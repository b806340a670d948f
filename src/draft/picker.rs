//! Single-shot draft choice.
//!
//! Each candidate gets a score from the shared card weights, minus a cost
//! penalty, adjusted by whether its mana cost still fits the curve. Free or
//! attackless cards and removal items (red, blue) pay a flat penalty on top.
//! The first maximal candidate is picked.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind};
use crate::eval::CardWeights;

use super::curve::ManaCurve;

/// Draft scoring parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DraftConfig {
    pub weights: CardWeights,

    /// Subtracted per mana of cost.
    pub cost_penalty: f64,

    /// Added when the card's cost bucket is still wanted.
    pub curve_bonus: f64,

    /// Subtracted when the card's cost bucket is already full.
    pub curve_penalty: f64,

    /// Subtracted for cards with no cost or no attack.
    #[serde(default)]
    pub marginal_penalty: f64,

    /// Subtracted for red and blue items, which leave nothing on the board.
    #[serde(default)]
    pub nonboard_penalty: f64,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            weights: CardWeights::default(),
            cost_penalty: 1.0,
            curve_bonus: 0.5,
            curve_penalty: 1.0,
            marginal_penalty: 2.0,
            nonboard_penalty: 1.0,
        }
    }
}

impl DraftConfig {
    pub fn with_weights(mut self, weights: CardWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_cost_penalty(mut self, penalty: f64) -> Self {
        self.cost_penalty = penalty;
        self
    }

    pub fn with_curve(mut self, bonus: f64, penalty: f64) -> Self {
        self.curve_bonus = bonus;
        self.curve_penalty = penalty;
        self
    }

    pub fn with_card_penalties(mut self, marginal: f64, nonboard: f64) -> Self {
        self.marginal_penalty = marginal;
        self.nonboard_penalty = nonboard;
        self
    }
}

/// Draft picker.
#[derive(Clone, Debug, Default)]
pub struct DraftPicker {
    config: DraftConfig,
}

impl DraftPicker {
    #[must_use]
    pub fn new(config: DraftConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &DraftConfig {
        &self.config
    }

    /// Score one candidate.
    #[must_use]
    pub fn score(&self, card: &Card, curve: Option<&ManaCurve>) -> f64 {
        let c = &self.config;
        let mut base = c.weights.card_value(card) - c.cost_penalty * f64::from(card.cost);
        if card.cost == 0 || card.attack == 0 {
            base -= c.marginal_penalty;
        }
        if matches!(card.kind, CardKind::RedItem | CardKind::BlueItem) {
            base -= c.nonboard_penalty;
        }
        match curve {
            Some(curve) if curve.wants(card.cost) => base + c.curve_bonus,
            Some(_) => base - c.curve_penalty,
            None => base,
        }
    }

    /// Index of the best candidate, or `None` for an empty slice.
    ///
    /// With a curve, a picked creature is recorded in it.
    pub fn pick(&self, candidates: &[Card], curve: Option<&mut ManaCurve>) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, card) in candidates.iter().enumerate() {
            let score = self.score(card, curve.as_deref());
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((i, score));
            }
        }

        let (index, _) = best?;
        if let Some(curve) = curve {
            let chosen = &candidates[index];
            if chosen.is_creature() {
                curve.take(chosen.cost);
            }
        }
        Some(index)
    }
}
