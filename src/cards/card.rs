//! Cards as they appear in a turn snapshot.
//!
//! A `Card` is a plain `Copy` value: the simulator copies the whole card
//! list for every child state, so cards carry no heap data.

use serde::{Deserialize, Serialize};

use super::ability::{Abilities, Ability};
use crate::core::entity::InstanceId;
use crate::core::player::Side;

/// Where a card currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// In the searching player's hand.
    Hand,
    /// On the searching player's board.
    OwnBoard,
    /// On the opponent's board.
    OpponentBoard,
}

impl Location {
    /// Protocol code: `0` hand, `1` own board, `-1` opponent board.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Location::Hand => 0,
            Location::OwnBoard => 1,
            Location::OpponentBoard => -1,
        }
    }

    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Location::Hand),
            1 => Some(Location::OwnBoard),
            -1 => Some(Location::OpponentBoard),
            _ => None,
        }
    }

    /// Board side, if on a board.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Location::Hand => None,
            Location::OwnBoard => Some(Side::Me),
            Location::OpponentBoard => Some(Side::Opponent),
        }
    }
}

/// Card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Creature,
    /// Buffs one of our creatures.
    GreenItem,
    /// Debuffs an opposing creature.
    RedItem,
    /// Hits an opposing creature or the players directly.
    BlueItem,
}

impl CardKind {
    /// Protocol code `0..=3`.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            CardKind::Creature => 0,
            CardKind::GreenItem => 1,
            CardKind::RedItem => 2,
            CardKind::BlueItem => 3,
        }
    }

    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(CardKind::Creature),
            1 => Some(CardKind::GreenItem),
            2 => Some(CardKind::RedItem),
            3 => Some(CardKind::BlueItem),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_item(self) -> bool {
        !matches!(self, CardKind::Creature)
    }
}

/// A card copy.
///
/// For creatures `attack`/`defense` are current stats. For items they are the
/// deltas the item applies to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Template number (shared by copies of the same card).
    pub number: i32,
    /// Unique id of this copy within the state.
    pub instance_id: InstanceId,
    /// Zone the card is in.
    pub location: Location,
    /// Creature or item colour.
    pub kind: CardKind,
    /// Mana paid to play it.
    pub cost: i32,
    /// Current attack, or the attack delta of an item.
    pub attack: i32,
    /// Current defense, or the defense delta of an item.
    pub defense: i32,
    /// Keywords held, or granted/stripped by an item.
    pub abilities: Abilities,
    /// Health change for the owner when played.
    pub my_health_change: i32,
    /// Health change for the opponent when played.
    pub opponent_health_change: i32,
    /// Cards drawn next turn when played.
    pub card_draw: i32,
    /// Summoned this turn without Charge.
    #[serde(default)]
    pub played_this_turn: bool,
    /// Attacked this turn.
    #[serde(default)]
    pub already_attacked: bool,
}

impl Card {
    /// Create a card with no abilities, costs or side effects.
    ///
    /// Mostly useful for building states by hand; decoded cards go through
    /// the protocol parser instead.
    #[must_use]
    pub fn new(instance_id: InstanceId, kind: CardKind, location: Location) -> Self {
        Self {
            number: 0,
            instance_id,
            location,
            kind,
            cost: 0,
            attack: 0,
            defense: 0,
            abilities: Abilities::EMPTY,
            my_health_change: 0,
            opponent_health_change: 0,
            card_draw: 0,
            played_this_turn: false,
            already_attacked: false,
        }
    }

    /// Create a creature with the given stats.
    #[must_use]
    pub fn creature(id: i32, location: Location, attack: i32, defense: i32) -> Self {
        let mut card = Self::new(InstanceId(id), CardKind::Creature, location);
        card.attack = attack;
        card.defense = defense;
        card
    }

    /// Create an item in hand with the given deltas.
    #[must_use]
    pub fn item(id: i32, kind: CardKind, cost: i32, attack: i32, defense: i32) -> Self {
        let mut card = Self::new(InstanceId(id), kind, Location::Hand);
        card.cost = cost;
        card.attack = attack;
        card.defense = defense;
        card
    }

    #[must_use]
    pub fn with_abilities(mut self, abilities: Abilities) -> Self {
        self.abilities = abilities;
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: i32) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    #[must_use]
    pub fn with_health_changes(mut self, mine: i32, opponent: i32) -> Self {
        self.my_health_change = mine;
        self.opponent_health_change = opponent;
        self
    }

    #[must_use]
    pub fn with_card_draw(mut self, draw: i32) -> Self {
        self.card_draw = draw;
        self
    }

    #[inline]
    #[must_use]
    pub fn has(&self, ability: Ability) -> bool {
        self.abilities.has(ability)
    }

    #[inline]
    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.kind == CardKind::Creature
    }

    /// Not yet attacked, and either on board since before this turn or Charge.
    #[inline]
    #[must_use]
    pub fn can_attack(&self) -> bool {
        !self.already_attacked && (!self.played_this_turn || self.has(Ability::Charge))
    }
}
