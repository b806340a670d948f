//! Depth-first enumeration of a whole turn.
//!
//! Visits every reachable `(state, sequence)` pair with an explicit stack and
//! keeps the best-scoring one. The tree is unbounded in general, so the run
//! aborts once `max_nodes` nodes were visited. Meant for offline analysis and
//! for cross-checking the breadth-first driver on small positions; live play
//! uses [`BreadthFirstSearch`](super::BreadthFirstSearch).

use std::time::Instant;

use crate::core::{ActionSequence, GameState};
use crate::eval::Evaluator;
use crate::rules::{legal_actions, simulate};

use super::config::SearchConfig;
use super::search::SearchOutcome;

/// Exhaustive depth-first search.
pub struct ExhaustiveSearch {
    evaluator: Box<dyn Evaluator>,
}

impl ExhaustiveSearch {
    /// Create a search using the evaluator named by the configuration.
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            evaluator: config.build_evaluator(),
        }
    }

    /// Set a custom evaluator.
    pub fn with_evaluator<E: Evaluator + 'static>(mut self, evaluator: E) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// Visit every node of the turn.
    ///
    /// Every node is a candidate, since the turn may end after any prefix.
    /// Returns `None` if the tree holds more than `max_nodes` nodes.
    pub fn run(&self, root: &GameState, max_nodes: usize) -> Option<SearchOutcome> {
        let start = Instant::now();
        let mut best = SearchOutcome::pass(root);
        let mut stack = vec![(root.clone(), ActionSequence::new())];

        while let Some((state, sequence)) = stack.pop() {
            if best.stats.states_evaluated as usize >= max_nodes {
                return None;
            }

            let score = self.evaluator.evaluate(&state);
            best.stats.states_evaluated += 1;
            best.stats.observe_depth(sequence.len());

            if best.consider(&state, &sequence, score) && state.is_win() {
                best.stats.forced_win = true;
                break;
            }
            if state.is_win() {
                continue;
            }

            let actions = legal_actions(&state);
            best.stats.nodes_expanded += 1;

            // Reverse so the stack pops children in generation order.
            for action in actions.into_iter().rev() {
                stack.push((simulate(&state, &action), sequence.extended(action)));
            }
            best.stats.observe_frontier(stack.len());
        }

        best.stats.best_depth = best.sequence.len() as u16;
        best.stats.time_us = start.elapsed().as_micros() as u64;
        Some(best)
    }
}
