use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use locm_solver::cards::{Abilities, Card, CardKind, Location};
use locm_solver::core::{GameState, Player};
use locm_solver::rules::{legal_actions, simulate};
use locm_solver::search::{BreadthFirstSearch, SearchConfig};

fn random_state(rng: &mut ChaCha8Rng, board: usize, hand: usize) -> GameState {
    let mut cards = Vec::with_capacity(2 * board + hand);
    let mut id = 0;
    let mut next_id = || {
        id += 1;
        id
    };

    for location in [Location::OwnBoard, Location::OpponentBoard] {
        for _ in 0..board {
            cards.push(
                Card::creature(next_id(), location, rng.gen_range(0..8), rng.gen_range(1..9))
                    .with_abilities(Abilities::from_bits(rng.gen())),
            );
        }
    }
    for _ in 0..hand {
        let cost = rng.gen_range(0..7);
        let card = match rng.gen_range(0..4) {
            0 => Card::item(next_id(), CardKind::GreenItem, cost, rng.gen_range(0..3), rng.gen_range(0..3)),
            1 => Card::item(next_id(), CardKind::RedItem, cost, -rng.gen_range(0..3), -rng.gen_range(0..3)),
            2 => Card::item(next_id(), CardKind::BlueItem, cost, 0, -rng.gen_range(0..4)),
            _ => Card::creature(next_id(), Location::Hand, rng.gen_range(1..7), rng.gen_range(1..7))
                .with_cost(cost)
                .with_abilities(Abilities::from_bits(rng.gen())),
        };
        cards.push(card);
    }

    GameState::new(Player::new(30, 10, 15, 25), Player::new(30, 10, 15, 25), 5, cards)
}

fn gen_states(n: usize, board: usize, hand: usize) -> Vec<GameState> {
    let mut rng = ChaCha8Rng::seed_from_u64(0x10C_0DE);
    (0..n).map(|_| random_state(&mut rng, board, hand)).collect()
}

fn bench_legal_actions(c: &mut Criterion) {
    let mut g = c.benchmark_group("legal_actions");
    for &board in &[2usize, 4, 6] {
        let states = gen_states(256, board, 6);
        g.bench_with_input(BenchmarkId::new("batch_256", board), &states, |b, s| {
            b.iter(|| {
                for state in s {
                    black_box(legal_actions(black_box(state)));
                }
            })
        });
    }
    g.finish();
}

fn bench_simulate(c: &mut Criterion) {
    let states = gen_states(256, 6, 6);
    let pairs: Vec<_> = states
        .iter()
        .flat_map(|s| legal_actions(s).into_iter().map(move |a| (s, a)))
        .collect();

    c.bench_function("simulate_all_children", |b| {
        b.iter(|| {
            for (state, action) in &pairs {
                black_box(simulate(black_box(state), black_box(action)));
            }
        })
    });
}

fn bench_turn_search(c: &mut Criterion) {
    let mut g = c.benchmark_group("turn_search");
    g.sample_size(10);
    for &board in &[3usize, 6] {
        let state = gen_states(1, board, 6).remove(0);
        let mut search = BreadthFirstSearch::new(
            SearchConfig::default().with_time_budget(95).with_verbose(false),
        );
        g.bench_with_input(BenchmarkId::new("budget_95ms", board), &state, |b, s| {
            b.iter(|| black_box(search.search(black_box(s))))
        });
    }
    g.finish();
}

criterion_group!(benches, bench_legal_actions, bench_simulate, bench_turn_search);
criterion_main!(benches);
