//! Target mana curve for drafting.

use serde::{Deserialize, Serialize};

/// Number of cost buckets: `<=1`, `2`, `3`, `4`, `5`, `6`, `>=7`.
pub const CURVE_BUCKETS: usize = 7;

/// Creatures still wanted per cost bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaCurve {
    remaining: [i32; CURVE_BUCKETS],
}

impl Default for ManaCurve {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TARGET)
    }
}

impl ManaCurve {
    /// 30 creatures, weighted towards 2-3 cost.
    pub const DEFAULT_TARGET: [i32; CURVE_BUCKETS] = [2, 8, 7, 5, 4, 2, 2];

    #[must_use]
    pub const fn new(target: [i32; CURVE_BUCKETS]) -> Self {
        Self { remaining: target }
    }

    /// Bucket index of a mana cost.
    #[must_use]
    pub fn bucket(cost: i32) -> usize {
        (cost - 1).clamp(0, CURVE_BUCKETS as i32 - 1) as usize
    }

    #[must_use]
    pub fn remaining(&self, bucket: usize) -> i32 {
        self.remaining[bucket]
    }

    /// Check if the curve still wants a card of this cost.
    #[must_use]
    pub fn wants(&self, cost: i32) -> bool {
        self.remaining[Self::bucket(cost)] > 0
    }

    /// Record a drafted card of this cost. Buckets may go negative.
    pub fn take(&mut self, cost: i32) {
        self.remaining[Self::bucket(cost)] -= 1;
    }

    #[must_use]
    pub fn total_remaining(&self) -> i32 {
        self.remaining.iter().map(|&r| r.max(0)).sum()
    }

    #[must_use]
    pub fn as_array(&self) -> [i32; CURVE_BUCKETS] {
        self.remaining
    }
}
