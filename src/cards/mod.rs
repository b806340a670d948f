//! Card values: ability bitset, card types, locations.
//!
//! There is no card registry: every turn snapshot carries the full stats of
//! each card, so a `Card` is self-describing.

pub mod ability;
pub mod card;

pub use ability::{Abilities, Ability};
pub use card::{Card, CardKind, Location};
