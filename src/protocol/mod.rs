//! Line-oriented text protocol.
//!
//! The decoder turns one turn's input lines into a validated [`GameState`];
//! the encoder renders a [`Decision`] as the output line. Neither does I/O:
//! callers feed lines in and write strings out.
//!
//! [`GameState`]: crate::core::GameState

pub mod decode;
pub mod encode;
pub mod error;

pub use decode::{parse_abilities, parse_actions, parse_card, parse_decision, parse_player, parse_state};
pub use encode::Decision;
pub use error::ProtocolError;
