use ai_search::adversarial::{from_config, AgentKind, GameSearchConfig};
use ai_search::csp::{CspConfig, CspSearch, CspSolver, CspStrategy, VariableOrdering};
use ai_search::games::latin::LatinSquare;
use ai_search::games::pursuit::{pursuit_evaluation, Pursuit};
use ai_search::games::sliding::{SlidingPuzzle, Tiles};
use ai_search::search::{GraphSearch, SearchConfig, Strategy};
use ai_search::SearchRng;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn puzzles() -> Vec<SlidingPuzzle> {
    let mut rng = SearchRng::new(4242);
    (0..8).map(|_| SlidingPuzzle::scrambled(3, 40, &mut rng)).collect()
}

fn bench_informed(c: &mut Criterion) {
    let puzzles = puzzles();

    for strategy in [Strategy::AStar, Strategy::IdaStar, Strategy::Greedy] {
        c.bench_function(&format!("sliding/{strategy}/manhattan"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for puzzle in &puzzles {
                    let h = puzzle.clone();
                    let mut search = GraphSearch::new(SearchConfig::for_strategy(strategy))
                        .with_heuristic(move |t: &Tiles| h.manhattan(t));
                    if let Ok(Some(solution)) = search.solve(puzzle) {
                        acc += solution.cost;
                    }
                }
                black_box(acc)
            })
        });
    }
}

fn bench_uninformed(c: &mut Criterion) {
    let puzzles = puzzles();

    for strategy in [Strategy::BreadthFirst, Strategy::UniformCost] {
        c.bench_function(&format!("sliding/{strategy}"), |b| {
            b.iter(|| {
                let mut acc = 0usize;
                for puzzle in &puzzles {
                    let mut search = GraphSearch::new(SearchConfig::for_strategy(strategy));
                    if let Ok(Some(solution)) = search.solve(puzzle) {
                        acc += solution.depth();
                    }
                }
                black_box(acc)
            })
        });
    }
}

fn bench_game_agents(c: &mut Criterion) {
    let game = Pursuit::new(12, 5, &[0, 11], &[1, 3, 8, 10]);

    for kind in AgentKind::ALL {
        let config = GameSearchConfig::for_kind(kind).with_depth(3);
        let mut agent = from_config(&config, pursuit_evaluation);
        c.bench_function(&format!("pursuit/{kind}/depth3"), |b| {
            b.iter(|| black_box(agent.get_action(&game).ok()))
        });
    }
}

fn bench_csp(c: &mut Criterion) {
    let square = LatinSquare::new(6, &[(0, 0, 1), (1, 2, 3), (2, 4, 5), (3, 1, 2), (4, 3, 4)]);

    for strategy in CspStrategy::ALL {
        let config = CspConfig::for_strategy(strategy).with_ordering(VariableOrdering::MinimumRemainingValues);
        c.bench_function(&format!("latin6/{strategy}"), |b| {
            b.iter(|| {
                let mut solver = CspSearch::new(config.clone());
                black_box(solver.solve(&square).ok().flatten().map(|s| s.len()))
            })
        });
    }
}

criterion_group!(benches, bench_informed, bench_uninformed, bench_game_agents, bench_csp);
criterion_main!(benches);
