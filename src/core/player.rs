//! Players and sides.
//!
//! ## Side
//!
//! The search always runs for the player to move, so there are exactly two
//! sides: `Me` (the searching player) and `Opponent`.
//!
//! ## Player
//!
//! Per-player counters from the turn input. Only `health` and `mana` change
//! during simulation; `deck_size` and `rune_threshold` are carried through.

use serde::{Deserialize, Serialize};

/// One of the two sides of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Me,
    Opponent,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Me => Side::Opponent,
            Side::Opponent => Side::Me,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Me => write!(f, "me"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// Player counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Remaining health; 0 or less is dead.
    pub health: i32,
    /// Mana left this turn.
    pub mana: i32,
    /// Cards left in the deck.
    pub deck_size: i32,
    /// Health level at which the next rune breaks and a card is drawn.
    pub rune_threshold: i32,
}

impl Player {
    #[must_use]
    pub const fn new(health: i32, mana: i32, deck_size: i32, rune_threshold: i32) -> Self {
        Self {
            health,
            mana,
            deck_size,
            rune_threshold,
        }
    }

    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.health, self.mana, self.deck_size, self.rune_threshold
        )
    }
}
