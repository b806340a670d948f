//! Turn search.
//!
//! ## Overview
//!
//! Finds the best sequence of in-turn actions under a wall-clock deadline:
//!
//! - **Anytime**: breadth-first order means every interruption still leaves
//!   the best of all shallower sequences
//! - **Alias-free**: every child is an independent state copy
//! - **Configurable**: evaluator, budget, frontier cap and transposition
//!   filter come from [`SearchConfig`]
//!
//! ## Usage
//!
//! ```rust
//! use locm_solver::core::{GameState, Player};
//! use locm_solver::search::{BreadthFirstSearch, SearchConfig};
//!
//! let state = GameState::new(Player::new(30, 3, 20, 25), Player::new(30, 3, 20, 25), 5, vec![]);
//! let mut search = BreadthFirstSearch::new(SearchConfig::default().with_time_budget(20));
//! let outcome = search.search(&state);
//! assert!(outcome.sequence.is_empty());
//! ```

/// Diagnostic line on stderr.
///
/// Compiles to nothing without the `search-log` feature, so the format
/// arguments cost nothing in quiet builds.
macro_rules! search_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "search-log")]
        {
            eprintln!($($arg)*);
        }
        #[cfg(not(feature = "search-log"))]
        {
            if false {
                eprintln!($($arg)*);
            }
        }
    };
}

pub mod config;
pub mod exhaustive;
pub mod search;
pub mod stats;

pub use config::SearchConfig;
pub use exhaustive::ExhaustiveSearch;
pub use search::{decide_on_best_action_sequence, BreadthFirstSearch, SearchOutcome};
pub use stats::SearchStats;
