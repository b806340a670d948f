//! Game rules: what may be done, and what it does.
//!
//! - [`legal_actions`] enumerates the searching player's moves
//! - [`simulate`] applies one move to a copy of the state
//!
//! Both are pure functions of their inputs. The search calls them millions
//! of times per turn, so neither allocates beyond the cloned state and the
//! returned action list.

pub mod error;
pub mod generator;
pub mod simulator;

pub use error::RulesError;
pub use generator::legal_actions;
pub use simulator::{simulate, strike, try_simulate, Strike};
