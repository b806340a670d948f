//! Search integration tests: end-to-end turns, forced wins and deadlines.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use locm_solver::cards::{Ability, Card, CardKind, Location};
use locm_solver::core::{ActionSequence, GameAction, GameState, InstanceId, Player, Target};
use locm_solver::eval::MaterialEvaluator;
use locm_solver::rules::simulate;
use locm_solver::search::{
    decide_on_best_action_sequence, BreadthFirstSearch, ExhaustiveSearch, SearchConfig,
};

const MID_GAME: &str = "\
23 9 15 20
23 8 16 20
5
15
23 1 0 0 7 8 8 ------ 0 0 0
77 11 0 0 7 7 7 B----- 0 0 0
114 13 0 0 7 7 7 ---G-- 0 0 0
74 21 0 0 5 5 4 B--G-- 0 0 0
69 23 0 0 3 4 4 B----- 0 0 0
63 27 0 0 2 0 4 ---G-W 0 0 0
99 29 0 0 3 2 5 ---G-- 0 0 0
86 7 1 0 3 1 5 -C---- 0 0 0
1 15 1 0 1 2 1 ------ 0 0 0
37 3 1 0 6 5 5 ------ 0 0 0
75 19 1 0 5 7 6 B----- 0 0 0
58 22 -1 0 6 5 6 B--G-- 0 0 0
69 4 -1 0 3 4 4 B----- 0 0 0
75 28 -1 0 5 6 5 B----- 0 0 0
69 20 -1 0 3 4 4 B----- 0 0 0
";

fn mid_game() -> GameState {
    MID_GAME.parse().unwrap()
}

fn quiet(budget_ms: u64) -> SearchConfig {
    SearchConfig::default()
        .with_time_budget(budget_ms)
        .with_verbose(false)
}

/// Replay a sequence, checking Guard forcing and single use of attackers.
fn replay(state: &GameState, sequence: &ActionSequence) -> GameState {
    let mut current = state.clone();
    let mut attackers = HashSet::new();

    for action in sequence {
        if let GameAction::Attack { attacker, target } = *action {
            assert!(attackers.insert(attacker), "{attacker} attacked twice");
            if current.opponent_has_guard() {
                let id = target.creature().expect("face attack through Guard");
                let defender = current.card(id).expect("target exists");
                assert!(defender.has(Ability::Guard), "attack on non-Guard {id}");
            }
        }
        current = simulate(&current, action);
    }
    current
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn test_mid_game_long_budget_respects_guard() {
    let state = mid_game();
    assert!(state.opponent_has_guard());

    let sequence = decide_on_best_action_sequence(&state, 9_500);
    let end = replay(&state, &sequence);

    assert!(!sequence.is_empty());
    assert!(end.me.mana >= 0);
}

#[test]
fn test_mid_game_short_budget_respects_guard() {
    let state = mid_game();
    let outcome = BreadthFirstSearch::new(quiet(95)).search(&state);
    replay(&state, &outcome.sequence);
    assert!(outcome.stats.states_evaluated > 0);
}

#[test]
fn test_immediate_win() {
    let state = GameState::new(
        Player::new(10, 3, 10, 5),
        Player::new(6, 3, 10, 5),
        4,
        vec![
            Card::creature(1, Location::OwnBoard, 1, 1),
            Card::creature(2, Location::OwnBoard, 6, 2),
            Card::creature(3, Location::OpponentBoard, 4, 4),
            Card::creature(4, Location::Hand, 3, 3).with_cost(3),
        ],
    );

    let sequence = decide_on_best_action_sequence(&state, 200);
    let end = replay(&state, &sequence);
    assert!(end.opponent.health <= 0);
}

#[test]
fn test_win_through_guard_needs_two_steps() {
    let state = GameState::new(
        Player::new(10, 0, 10, 5),
        Player::new(3, 3, 10, 5),
        4,
        vec![
            Card::creature(1, Location::OwnBoard, 4, 4),
            Card::creature(2, Location::OwnBoard, 3, 3),
            Card::creature(3, Location::OpponentBoard, 0, 2).with_abilities(Ability::Guard.into()),
        ],
    );

    let outcome = BreadthFirstSearch::new(quiet(500)).search(&state);
    assert!(outcome.stats.forced_win);
    assert_eq!(outcome.sequence.len(), 2);
    assert!(replay(&state, &outcome.sequence).opponent.health <= 0);
}

// =============================================================================
// Deadlines
// =============================================================================

fn wide_state() -> GameState {
    let mut cards = Vec::new();
    for id in 1..=6 {
        cards.push(Card::creature(id, Location::OwnBoard, 2 + id % 3, 4));
    }
    for id in 11..=16 {
        cards.push(Card::creature(id, Location::OpponentBoard, 1 + id % 4, 5));
    }
    cards.push(Card::item(21, CardKind::GreenItem, 1, 1, 1));
    cards.push(Card::item(22, CardKind::RedItem, 1, -1, -1));
    cards.push(Card::item(23, CardKind::BlueItem, 1, 0, -2));
    cards.push(Card::item(24, CardKind::GreenItem, 2, 2, 0));
    GameState::new(Player::new(30, 12, 10, 25), Player::new(30, 12, 10, 25), 6, cards)
}

#[test]
fn test_deadline_is_respected_with_wide_branching() {
    let state = wide_state();
    for budget in [0u64, 5, 50] {
        let start = Instant::now();
        let outcome = BreadthFirstSearch::new(quiet(budget)).search(&state);
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(budget + 250),
            "budget {budget}ms took {elapsed:?}"
        );
        assert!(outcome.stats.timed_out || budget > 0);
        replay(&state, &outcome.sequence);
    }
}

#[test]
fn test_zero_budget_passes() {
    let sequence = decide_on_best_action_sequence(&wide_state(), 0);
    assert!(sequence.is_empty());
}

#[test]
fn test_empty_board_passes() {
    let state = GameState::new(Player::new(30, 1, 10, 25), Player::new(30, 1, 10, 25), 6, vec![]);
    let outcome = BreadthFirstSearch::new(quiet(50)).search(&state);
    assert!(outcome.sequence.is_empty());
    assert!(!outcome.stats.timed_out);
}

// =============================================================================
// Cross-checks
// =============================================================================

#[test]
fn test_breadth_first_matches_exhaustive_on_small_turn() {
    let state = GameState::new(
        Player::new(20, 3, 10, 25),
        Player::new(20, 3, 10, 25),
        4,
        vec![
            Card::creature(1, Location::OwnBoard, 2, 3),
            Card::creature(2, Location::Hand, 2, 2).with_cost(2),
            Card::item(3, CardKind::RedItem, 1, 0, -2),
            Card::creature(4, Location::OpponentBoard, 3, 2),
        ],
    );

    let config = quiet(2_000).with_transpositions(false);
    let bfs = BreadthFirstSearch::new(config.clone())
        .with_evaluator(MaterialEvaluator::default())
        .search(&state);
    let dfs = ExhaustiveSearch::new(&config)
        .with_evaluator(MaterialEvaluator::default())
        .run(&state, 10_000)
        .unwrap();

    assert!(!bfs.stats.timed_out);
    assert!((bfs.score - dfs.score).abs() < 1e-9);
    assert_eq!(bfs.stats.states_evaluated, dfs.stats.states_evaluated);
}

#[test]
fn test_search_is_deterministic_when_exhaustive() {
    let state = GameState::new(
        Player::new(20, 3, 10, 25),
        Player::new(20, 3, 10, 25),
        4,
        vec![
            Card::creature(1, Location::OwnBoard, 2, 3),
            Card::creature(2, Location::OwnBoard, 1, 3),
            Card::creature(4, Location::OpponentBoard, 3, 2),
        ],
    );
    let a = BreadthFirstSearch::new(quiet(1_000)).search(&state);
    let b = BreadthFirstSearch::new(quiet(1_000)).search(&state);
    assert_eq!(a.sequence, b.sequence);
    assert_eq!(a.stats.states_evaluated, b.stats.states_evaluated);
    assert!(a
        .sequence
        .iter()
        .any(|action| *action == GameAction::attack(InstanceId(1), Target::Creature(InstanceId(4)))));
}
