//! Contract violations between an action and the state it is applied to.

use thiserror::Error;

use crate::cards::CardKind;
use crate::core::InstanceId;

/// An action that does not fit its state.
///
/// The generator only produces consistent actions, so any of these means a
/// bug in the caller (or a hand-built action).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("no card with instance id {0}")]
    UnknownInstance(InstanceId),

    #[error("card {0} is not in hand")]
    NotInHand(InstanceId),

    #[error("card {0} is not on the expected board")]
    NotOnBoard(InstanceId),

    #[error("card {id} is a {actual:?}, expected {expected}")]
    WrongCardKind {
        id: InstanceId,
        actual: CardKind,
        expected: &'static str,
    },

    #[error("creature {0} cannot attack this turn")]
    CannotAttack(InstanceId),

    #[error("card {id} costs {cost}, only {mana} mana left")]
    NotEnoughMana { id: InstanceId, cost: i32, mana: i32 },

    #[error("own board is full")]
    BoardFull,

    #[error("item {0} needs a target")]
    MissingTarget(InstanceId),
}
