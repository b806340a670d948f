//! Card instance identification.
//!
//! Every card copy in a state carries an `InstanceId` that is unique within
//! that state. Several copies may share a template `number`; the instance id
//! is what actions point at.
//!
//! ## Face Target
//!
//! The protocol uses `-1` where a target would be the opposing player (or no
//! target at all). That value is never a valid card instance:
//!
//! ```
//! use locm_solver::core::InstanceId;
//!
//! assert!(InstanceId::NONE.is_none());
//! assert!(!InstanceId(12).is_none());
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card copy within one game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub i32);

impl InstanceId {
    /// Protocol placeholder for "the opposing player" / "no target".
    pub const NONE: InstanceId = InstanceId(-1);

    /// Create a new instance id.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Check if this is the `-1` placeholder.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 < 0
    }
}

impl From<i32> for InstanceId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
