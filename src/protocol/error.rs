//! Decoder errors.

use thiserror::Error;

use crate::core::StateError;

/// Malformed turn input. Fatal to the turn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("input ended before the {0}")]
    MissingLine(&'static str),

    #[error("expected {expected} fields in {what}, found {found}: {line:?}")]
    FieldCount {
        what: &'static str,
        expected: usize,
        found: usize,
        line: String,
    },

    #[error("invalid integer for {field}: {value:?}")]
    BadInteger { field: &'static str, value: String },

    #[error("negative count for {field}: {value}")]
    NegativeCount { field: &'static str, value: i32 },

    #[error("unknown location code {0}")]
    UnknownLocation(i32),

    #[error("unknown card type code {0}")]
    UnknownCardKind(i32),

    #[error("unknown ability letter {0:?}")]
    UnknownAbility(char),

    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error(transparent)]
    InvalidState(#[from] StateError),
}
