//! Output encoding.
//!
//! Everything renders through `Display`:
//!
//! | Value | Text |
//! |---|---|
//! | `Attack` | `ATTACK <attacker> <target or -1>` |
//! | `Summon` | `SUMMON <card>` |
//! | `UseItem` | `USE <item> <target or -1>` |
//! | `Pass`, empty sequence | `PASS` |
//! | sequence | actions joined by `;` |
//! | `Decision::Pick` | `PICK <index>` |
//!
//! `GameState` and `Card` render back to the input line format.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{ActionSequence, GameAction, GameState, InstanceId};

/// One turn's output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Draft pick by candidate index.
    Pick(usize),
    /// Battle turn.
    Play(ActionSequence),
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Pick(index) => write!(f, "PICK {index}"),
            Decision::Play(sequence) => write!(f, "{sequence}"),
        }
    }
}

impl fmt::Display for GameAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GameAction::Attack { attacker, target } => {
                write!(f, "ATTACK {attacker} {}", target.id())
            }
            GameAction::Summon { card } => write!(f, "SUMMON {card}"),
            GameAction::UseItem { item, target } => {
                write!(f, "USE {item} {}", target.unwrap_or(InstanceId::NONE))
            }
            GameAction::Pass => write!(f, "PASS"),
        }
    }
}

impl fmt::Display for ActionSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "PASS");
        }
        for (i, action) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, "{action}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} {} {} {}",
            self.number,
            self.instance_id,
            self.location.code(),
            self.kind.code(),
            self.cost,
            self.attack,
            self.defense,
            self.abilities,
            self.my_health_change,
            self.opponent_health_change,
            self.card_draw
        )
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.me)?;
        writeln!(f, "{}", self.opponent)?;
        writeln!(f, "{}", self.opponent_hand)?;
        writeln!(f, "{}", self.card_count())?;
        for card in self.cards() {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}
