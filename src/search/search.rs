//! Anytime breadth-first search over one turn.
//!
//! The frontier is a FIFO of `(state, sequence)` nodes seeded with the root
//! and the empty sequence. Each dequeued node is evaluated and then expanded
//! into one child per legal action. The best-scoring node seen so far is the
//! answer, so the search can be cut at any moment.
//!
//! ## Stopping
//!
//! - Frontier empty: the turn's state space is exhausted
//! - Deadline passed: checked at dequeue and after every child
//! - Forced win: a node with the opponent dead, checked at dequeue and at
//!   child generation
//!
//! ## Tie-breaking
//!
//! Only a strictly greater score replaces the incumbent. Breadth-first order
//! then prefers the shortest sequence among equals.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rustc_hash::FxHashSet;

use crate::core::{ActionSequence, GameState};
use crate::eval::Evaluator;
use crate::rules::{legal_actions, simulate};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Result of a search.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Best sequence found. Empty means pass.
    pub sequence: ActionSequence,

    /// State reached by `sequence`.
    pub state: GameState,

    /// Score of `state`; `-inf` if no node was evaluated.
    pub score: f64,

    pub stats: SearchStats,
}

impl SearchOutcome {
    pub(crate) fn pass(root: &GameState) -> Self {
        Self {
            sequence: ActionSequence::new(),
            state: root.clone(),
            score: f64::NEG_INFINITY,
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn consider(&mut self, state: &GameState, sequence: &ActionSequence, score: f64) -> bool {
        if score > self.score {
            self.state = state.clone();
            self.sequence = sequence.clone();
            self.score = score;
            true
        } else {
            false
        }
    }
}

struct Node {
    state: GameState,
    sequence: ActionSequence,
}

/// Time-boxed breadth-first search.
///
/// Owns its configuration and evaluator; one instance can run any number of
/// searches.
pub struct BreadthFirstSearch {
    config: SearchConfig,

    evaluator: Box<dyn Evaluator>,

    /// Statistics of the last search.
    stats: SearchStats,
}

impl BreadthFirstSearch {
    /// Create a search using the evaluator named by the configuration.
    pub fn new(config: SearchConfig) -> Self {
        let evaluator = config.build_evaluator();
        Self {
            config,
            evaluator,
            stats: SearchStats::default(),
        }
    }

    /// Set a custom evaluator.
    pub fn with_evaluator<E: Evaluator + 'static>(mut self, evaluator: E) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn evaluator(&self) -> &dyn Evaluator {
        self.evaluator.as_ref()
    }

    /// Search with the configured time budget.
    pub fn search(&mut self, root: &GameState) -> SearchOutcome {
        let budget = self.config.time_budget();
        self.search_with_budget(root, budget)
    }

    /// Search with an explicit time budget.
    pub fn search_with_budget(&mut self, root: &GameState, budget: Duration) -> SearchOutcome {
        let start = Instant::now();
        self.stats.reset();

        let mut best = SearchOutcome::pass(root);
        let mut frontier: VecDeque<Node> = VecDeque::new();
        let mut seen: FxHashSet<u64> = FxHashSet::default();
        let prune = self.config.prune_transpositions;

        if prune {
            seen.insert(root.hash_key());
        }
        frontier.push_back(Node {
            state: root.clone(),
            sequence: ActionSequence::new(),
        });

        'search: while let Some(node) = frontier.pop_front() {
            if start.elapsed() >= budget {
                self.stats.timed_out = true;
                break;
            }

            if node.state.is_win() {
                best = self.finish_win(node, best);
                break;
            }

            self.stats.observe_depth(node.sequence.len());
            let score = self.evaluator.evaluate(&node.state);
            self.stats.states_evaluated += 1;
            best.consider(&node.state, &node.sequence, score);

            let actions = legal_actions(&node.state);
            self.stats.nodes_expanded += 1;

            for action in actions {
                let child = simulate(&node.state, &action);
                let sequence = node.sequence.extended(action);

                if child.is_win() {
                    best = self.finish_win(
                        Node {
                            state: child,
                            sequence,
                        },
                        best,
                    );
                    break 'search;
                }

                if frontier.len() < self.config.max_frontier {
                    if prune && !seen.insert(child.hash_key()) {
                        self.stats.transpositions_pruned += 1;
                    } else {
                        frontier.push_back(Node {
                            state: child,
                            sequence,
                        });
                    }
                }

                if start.elapsed() >= budget {
                    self.stats.timed_out = true;
                    break 'search;
                }
            }

            self.stats.observe_frontier(frontier.len());
        }

        self.stats.best_depth = best.sequence.len() as u16;
        self.stats.time_us = start.elapsed().as_micros() as u64;
        best.stats = self.stats.clone();

        if self.config.verbose {
            self.log_summary(&best);
        }
        best
    }

    fn finish_win(&mut self, node: Node, mut best: SearchOutcome) -> SearchOutcome {
        self.stats.forced_win = true;
        let score = self.evaluator.evaluate(&node.state);
        self.stats.states_evaluated += 1;
        best.state = node.state;
        best.sequence = node.sequence;
        best.score = score;
        best
    }

    fn log_summary(&self, best: &SearchOutcome) {
        let stats = &self.stats;
        if stats.forced_win {
            search_log!("search: forced win in {} actions", stats.best_depth);
        } else if stats.timed_out {
            search_log!("search: deadline reached at depth {}", stats.max_depth);
        }
        search_log!(
            "search: {} {:.1}ms expanded={} evaluated={} pruned={} peak={} score={:.4} depth={} -> {}",
            self.evaluator.name(),
            stats.time_us as f64 / 1000.0,
            stats.nodes_expanded,
            stats.states_evaluated,
            stats.transpositions_pruned,
            stats.frontier_peak,
            best.score,
            stats.best_depth,
            best.sequence
        );
    }
}

/// Run a default-configured search with the given budget.
///
/// Returns the empty sequence (pass) when nothing better is found in time.
pub fn decide_on_best_action_sequence(state: &GameState, timeout_ms: u64) -> ActionSequence {
    let config = SearchConfig::default().with_time_budget(timeout_ms);
    BreadthFirstSearch::new(config).search(state).sequence
}
