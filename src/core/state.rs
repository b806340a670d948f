//! Game state snapshot.
//!
//! ## GameState
//!
//! One turn's worth of observable information:
//! - Both players' counters
//! - Opponent hand size
//! - Every visible card (own hand, own board, opponent board)
//!
//! A `GameState` is a value. The simulator never mutates its input; it
//! clones, applies one action to the clone, and returns it. Sibling branches
//! of the search therefore never alias.
//!
//! Card order is significant: it is the iteration order of the action
//! generator, and removals preserve the relative order of the rest.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entity::InstanceId;
use super::player::{Player, Side};
use crate::cards::{Ability, Card, Location};

/// Maximum creatures per board.
pub const MAX_BOARD: usize = 6;

/// Maximum cards in hand.
pub const MAX_HAND: usize = 8;

/// Terminal result from the searching player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Opponent health reached 0.
    Won,
    /// Own health reached 0.
    Lost,
}

/// Broken snapshot invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("duplicate instance id {0}")]
    DuplicateInstance(InstanceId),

    #[error("{side} board holds {count} creatures (max {MAX_BOARD})")]
    BoardOverflow { side: Side, count: usize },

    #[error("hand holds {0} cards (max {MAX_HAND})")]
    HandOverflow(usize),

    #[error("non-creature {0} on a board")]
    ItemOnBoard(InstanceId),
}

/// Full turn snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The searching player.
    pub me: Player,

    pub opponent: Player,

    /// Cards in the opponent's hand (count only).
    pub opponent_hand: i32,

    cards: Vec<Card>,
}

impl GameState {
    /// Create a state from its parts.
    ///
    /// Does not check invariants; call [`GameState::validate`] for input
    /// that did not come from the simulator.
    #[must_use]
    pub fn new(me: Player, opponent: Player, opponent_hand: i32, cards: Vec<Card>) -> Self {
        Self {
            me,
            opponent,
            opponent_hand,
            cards,
        }
    }

    /// Check instance-id uniqueness and zone capacities.
    ///
    /// Draft offers carry no instance id (`-1`); those are not checked for
    /// uniqueness.
    pub fn validate(&self) -> Result<(), StateError> {
        for (i, card) in self.cards.iter().enumerate() {
            let id = card.instance_id;
            if !id.is_none() && self.cards[..i].iter().any(|c| c.instance_id == id) {
                return Err(StateError::DuplicateInstance(card.instance_id));
            }
            if card.location != Location::Hand && !card.is_creature() {
                return Err(StateError::ItemOnBoard(card.instance_id));
            }
        }

        for side in [Side::Me, Side::Opponent] {
            let count = self.board_count(side);
            if count > MAX_BOARD {
                return Err(StateError::BoardOverflow { side, count });
            }
        }

        let hand = self.hand_count();
        if hand > MAX_HAND {
            return Err(StateError::HandOverflow(hand));
        }

        Ok(())
    }

    // === Players ===

    #[must_use]
    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Me => &self.me,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::Me => &mut self.me,
            Side::Opponent => &mut self.opponent,
        }
    }

    // === Cards ===

    /// All cards in input order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, id: InstanceId) -> Option<&Card> {
        self.cards.iter().find(|c| c.instance_id == id)
    }

    #[must_use]
    pub fn card_index(&self, id: InstanceId) -> Option<usize> {
        self.cards.iter().position(|c| c.instance_id == id)
    }

    pub fn card_mut(&mut self, id: InstanceId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.instance_id == id)
    }

    /// Card by index (from [`GameState::card_index`]).
    #[must_use]
    pub fn card_at(&self, index: usize) -> &Card {
        &self.cards[index]
    }

    pub fn card_at_mut(&mut self, index: usize) -> &mut Card {
        &mut self.cards[index]
    }

    /// Remove a card, keeping the order of the others.
    pub fn remove_card(&mut self, id: InstanceId) -> Option<Card> {
        let index = self.card_index(id)?;
        Some(self.cards.remove(index))
    }

    /// Append a card.
    pub fn push_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Drop every board creature whose defense reached 0.
    pub fn remove_dead_creatures(&mut self) {
        self.cards
            .retain(|c| c.location == Location::Hand || c.defense > 0);
    }

    pub fn cards_at(&self, location: Location) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.location == location)
    }

    pub fn hand(&self) -> impl Iterator<Item = &Card> {
        self.cards_at(Location::Hand)
    }

    pub fn own_board(&self) -> impl Iterator<Item = &Card> {
        self.cards_at(Location::OwnBoard)
    }

    pub fn opponent_board(&self) -> impl Iterator<Item = &Card> {
        self.cards_at(Location::OpponentBoard)
    }

    pub fn board(&self, side: Side) -> impl Iterator<Item = &Card> {
        let location = match side {
            Side::Me => Location::OwnBoard,
            Side::Opponent => Location::OpponentBoard,
        };
        self.cards_at(location)
    }

    // === Derived counts ===

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn hand_count(&self) -> usize {
        self.hand().count()
    }

    #[must_use]
    pub fn board_count(&self, side: Side) -> usize {
        self.board(side).count()
    }

    /// Check if the own board has room for another creature.
    #[must_use]
    pub fn has_board_space(&self) -> bool {
        self.board_count(Side::Me) < MAX_BOARD
    }

    /// Check if any opposing creature has Guard.
    #[must_use]
    pub fn opponent_has_guard(&self) -> bool {
        self.opponent_board().any(|c| c.has(Ability::Guard))
    }

    // === Phase / outcome ===

    /// Draft turns are the ones where the player has no mana yet.
    #[must_use]
    pub fn is_draft_phase(&self) -> bool {
        self.me.mana == 0
    }

    /// Terminal result, if any. A dead opponent wins even if we are dead too.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        if self.opponent.is_dead() {
            Some(GameResult::Won)
        } else if self.me.is_dead() {
            Some(GameResult::Lost)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        self.outcome() == Some(GameResult::Won)
    }

    /// 64-bit hash of the whole snapshot (transposition key).
    #[must_use]
    pub fn hash_key(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }
}
