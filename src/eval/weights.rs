//! Card value weights shared by the material evaluator and the draft picker.
//!
//! ## Stat weights
//!
//! Linear factors for the printed numbers of a card. The opponent health
//! change is subtracted: a negative change (damage) adds value.
//!
//! ## Ability weights
//!
//! The same ability bit is worth different amounts on different card kinds.
//! On a creature it is a permanent property, and several abilities scale with
//! the body carrying them:
//!
//! | Ability | Creature value |
//! |---|---|
//! | Breakthrough, Charge, Drain | weight × attack |
//! | Guard | weight × defense |
//! | Lethal, Ward | weight |
//!
//! On items every ability weight is flat: a green item grants the ability
//! once, and a red or blue item removes it once.

use serde::{Deserialize, Serialize};

use crate::cards::{Ability, Card, CardKind};

/// Factors for a card's printed stats.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatWeights {
    pub attack: f64,
    pub defense: f64,
    pub my_health: f64,
    pub opponent_health: f64,
    pub card_draw: f64,
}

impl Default for StatWeights {
    fn default() -> Self {
        Self {
            attack: 1.0,
            defense: 0.8,
            my_health: 0.8,
            opponent_health: 1.0,
            card_draw: 0.5,
        }
    }
}

/// Per-ability weights for one card kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AbilityWeights {
    pub breakthrough: f64,
    pub charge: f64,
    pub drain: f64,
    pub guard: f64,
    pub lethal: f64,
    pub ward: f64,
}

impl AbilityWeights {
    /// Creature defaults.
    #[must_use]
    pub const fn creature() -> Self {
        Self {
            breakthrough: 0.15,
            charge: 0.5,
            drain: 0.075,
            guard: 0.2,
            lethal: 2.0,
            ward: 1.0,
        }
    }

    /// Green item defaults (granted once).
    #[must_use]
    pub const fn green_item() -> Self {
        Self {
            breakthrough: 0.3,
            charge: 0.5,
            drain: 0.3,
            guard: 0.5,
            lethal: 1.0,
            ward: 0.8,
        }
    }

    /// Red/blue item defaults (removed once).
    #[must_use]
    pub const fn removal_item() -> Self {
        Self {
            breakthrough: 0.2,
            charge: 0.1,
            drain: 0.2,
            guard: 0.6,
            lethal: 1.0,
            ward: 0.8,
        }
    }

    #[must_use]
    pub const fn weight(&self, ability: Ability) -> f64 {
        match ability {
            Ability::Breakthrough => self.breakthrough,
            Ability::Charge => self.charge,
            Ability::Drain => self.drain,
            Ability::Guard => self.guard,
            Ability::Lethal => self.lethal,
            Ability::Ward => self.ward,
        }
    }
}

/// Complete card weighting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardWeights {
    pub stats: StatWeights,
    pub creature: AbilityWeights,
    pub green: AbilityWeights,
    pub red_blue: AbilityWeights,
}

impl Default for CardWeights {
    fn default() -> Self {
        Self {
            stats: StatWeights::default(),
            creature: AbilityWeights::creature(),
            green: AbilityWeights::green_item(),
            red_blue: AbilityWeights::removal_item(),
        }
    }
}

impl CardWeights {
    #[must_use]
    pub fn with_stats(mut self, stats: StatWeights) -> Self {
        self.stats = stats;
        self
    }

    #[must_use]
    pub fn with_creature_abilities(mut self, weights: AbilityWeights) -> Self {
        self.creature = weights;
        self
    }

    #[must_use]
    pub fn abilities_for(&self, kind: CardKind) -> &AbilityWeights {
        match kind {
            CardKind::Creature => &self.creature,
            CardKind::GreenItem => &self.green,
            CardKind::RedItem | CardKind::BlueItem => &self.red_blue,
        }
    }

    /// Value of one ability on one card.
    #[must_use]
    pub fn ability_value(&self, ability: Ability, card: &Card) -> f64 {
        let weight = self.abilities_for(card.kind).weight(ability);
        if !card.is_creature() {
            return weight;
        }
        match ability {
            Ability::Breakthrough | Ability::Charge | Ability::Drain => {
                weight * f64::from(card.attack)
            }
            Ability::Guard => weight * f64::from(card.defense),
            Ability::Lethal | Ability::Ward => weight,
        }
    }

    /// Weighted stats only.
    #[must_use]
    pub fn stat_value(&self, card: &Card) -> f64 {
        let s = &self.stats;
        f64::from(card.attack.abs()) * s.attack
            + f64::from(card.defense.abs()) * s.defense
            + f64::from(card.my_health_change) * s.my_health
            - f64::from(card.opponent_health_change) * s.opponent_health
            + f64::from(card.card_draw) * s.card_draw
    }

    /// Stats plus every ability the card carries.
    #[must_use]
    pub fn card_value(&self, card: &Card) -> f64 {
        let abilities: f64 = card
            .abilities
            .iter()
            .map(|a| self.ability_value(a, card))
            .sum();
        self.stat_value(card) + abilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Abilities, Location};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_plain_creature_value() {
        let weights = CardWeights::default();
        let card = Card::creature(1, Location::OwnBoard, 3, 5);
        assert!(approx(weights.card_value(&card), 3.0 + 4.0));
    }

    #[test]
    fn test_creature_abilities_scale_with_stats() {
        let weights = CardWeights::default();
        let card = Card::creature(1, Location::OwnBoard, 4, 5)
            .with_abilities(Abilities::from_letters("BC-G--").unwrap());

        assert!(approx(weights.ability_value(Ability::Breakthrough, &card), 0.6));
        assert!(approx(weights.ability_value(Ability::Charge, &card), 2.0));
        assert!(approx(weights.ability_value(Ability::Guard, &card), 1.0));
        assert!(approx(weights.card_value(&card), 4.0 + 4.0 + 0.6 + 2.0 + 1.0));
    }

    #[test]
    fn test_item_abilities_are_flat() {
        let weights = CardWeights::default();
        let green = Card::item(1, CardKind::GreenItem, 2, 1, 1)
            .with_abilities(Abilities::single(Ability::Guard));
        let red = Card::item(2, CardKind::RedItem, 2, 0, 0)
            .with_abilities(Abilities::single(Ability::Guard));

        assert!(approx(weights.ability_value(Ability::Guard, &green), 0.5));
        assert!(approx(weights.ability_value(Ability::Guard, &red), 0.6));
    }

    #[test]
    fn test_health_changes() {
        let weights = CardWeights::default();
        let card = Card::item(1, CardKind::BlueItem, 2, 0, 0).with_health_changes(2, -3);
        assert!(approx(weights.stat_value(&card), 1.6 + 3.0));
    }

    #[test]
    fn test_serialization() {
        let weights = CardWeights::default();
        let json = serde_json::to_string(&weights).unwrap();
        let deserialized: CardWeights = serde_json::from_str(&json).unwrap();
        assert!(approx(weights.creature.lethal, deserialized.creature.lethal));
        assert!(approx(weights.stats.defense, deserialized.stats.defense));
    }
}
