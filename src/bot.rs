//! Per-game decision glue.
//!
//! A [`Bot`] lives for one game. Draft turns (no mana yet) go to the draft
//! picker with the hand as candidates; battle turns go to the search. The
//! running mana curve is the only state carried between turns.

use crate::core::GameState;
use crate::draft::{DraftPicker, ManaCurve};
use crate::protocol::Decision;
use crate::search::BreadthFirstSearch;

/// Turn-by-turn decision maker.
pub struct Bot {
    search: BreadthFirstSearch,
    draft: DraftPicker,
    curve: ManaCurve,
}

impl Bot {
    pub fn new(search: BreadthFirstSearch, draft: DraftPicker) -> Self {
        Self {
            search,
            draft,
            curve: ManaCurve::default(),
        }
    }

    /// Replace the starting mana curve.
    pub fn with_curve(mut self, curve: ManaCurve) -> Self {
        self.curve = curve;
        self
    }

    #[must_use]
    pub fn curve(&self) -> &ManaCurve {
        &self.curve
    }

    #[must_use]
    pub fn search(&self) -> &BreadthFirstSearch {
        &self.search
    }

    /// Decide this turn's output.
    pub fn decide(&mut self, state: &GameState) -> Decision {
        if state.is_draft_phase() {
            let candidates: Vec<_> = state.hand().copied().collect();
            let index = self
                .draft
                .pick(&candidates, Some(&mut self.curve))
                .unwrap_or(0);
            return Decision::Pick(index);
        }

        Decision::Play(self.search.search(state).sequence)
    }
}

impl Default for Bot {
    fn default() -> Self {
        Self::new(
            BreadthFirstSearch::new(Default::default()),
            DraftPicker::default(),
        )
    }
}
