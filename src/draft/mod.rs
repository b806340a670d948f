//! Draft phase: pick one of up to three offered cards.
//!
//! No search is involved. Candidates are scored with the same card weights
//! the material evaluator uses, shifted towards a target mana curve.

pub mod curve;
pub mod picker;

pub use curve::{ManaCurve, CURVE_BUCKETS};
pub use picker::{DraftConfig, DraftPicker};
