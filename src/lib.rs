//! # locm-solver
//!
//! Turn search for Legends of Code and Magic.
//!
//! ## Design Principles
//!
//! 1. **Value States**: A `GameState` is a plain value. Every transition
//!    clones its input, so search branches never alias.
//!
//! 2. **Anytime Search**: Breadth-first order under a wall-clock deadline.
//!    Stopping at any point still yields the best shallower answer.
//!
//! 3. **Configuration Over Globals**: Weights, curves and budgets are serde
//!    structs passed in by the caller.
//!
//! ## Modules
//!
//! - `core`: Instance ids, players, actions, state
//! - `cards`: Cards and the ability bitset
//! - `rules`: Action generation and state transitions
//! - `eval`: Position evaluators and card weights
//! - `search`: Breadth-first and exhaustive turn search
//! - `draft`: Draft-phase card picker
//! - `protocol`: Text decoder and encoder
//! - `bot`: Per-game glue routing turns to draft or search

pub mod core;
pub mod cards;
pub mod rules;
pub mod eval;
pub mod search;
pub mod draft;
pub mod protocol;
pub mod bot;

// Re-export commonly used types
pub use crate::core::{
    ActionList, ActionSequence, GameAction, GameResult, GameState, InstanceId, Player, Side,
    StateError, Target,
};

pub use crate::cards::{Abilities, Ability, Card, CardKind, Location};

pub use crate::rules::{legal_actions, simulate, try_simulate, RulesError};

pub use crate::eval::{
    CardWeights, Evaluator, EvaluatorKind, MaterialEvaluator, ThreatEvaluator, ThreatParams,
};

pub use crate::search::{
    decide_on_best_action_sequence, BreadthFirstSearch, ExhaustiveSearch, SearchConfig,
    SearchOutcome, SearchStats,
};

pub use crate::draft::{DraftConfig, DraftPicker, ManaCurve};

pub use crate::protocol::{parse_state, Decision, ProtocolError};

pub use crate::bot::Bot;
