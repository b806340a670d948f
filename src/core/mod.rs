//! Core value types: instance ids, players, actions, state.
//!
//! Everything here is a plain value. States are cloned, never shared, which
//! is what lets the search explore sibling branches from one parent.

pub mod entity;
pub mod player;
pub mod action;
pub mod state;

pub use entity::InstanceId;
pub use player::{Player, Side};
pub use action::{ActionList, ActionSequence, GameAction, Target};
pub use state::{GameResult, GameState, StateError, MAX_BOARD, MAX_HAND};
