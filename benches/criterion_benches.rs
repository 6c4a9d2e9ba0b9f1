#[macro_use]
extern crate criterion;

use criterion::{Benchmark, Criterion};

use sliding_puzzle_solver::config::{Heuristic, SearchConfig};
use sliding_puzzle_solver::{LoadPuzzle, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_fourteen_moves(c: &mut Criterion) {
    bench_puzzle(c, Heuristic::Mismatched, "puzzles/04-fourteen-moves.txt", 100);
}

#[allow(unused)]
fn bench_fourteen_moves_misplaced(c: &mut Criterion) {
    bench_puzzle(c, Heuristic::Misplaced, "puzzles/04-fourteen-moves.txt", 100);
}

#[allow(unused)]
fn bench_no_solution_3x3(c: &mut Criterion) {
    // exhausts all 181,440 reachable states
    bench_puzzle(c, Heuristic::Mismatched, "puzzles/no-solution-3x3.txt", 10);
}

fn bench_puzzle(c: &mut Criterion, heuristic: Heuristic, puzzle_path: &str, samples: usize) {
    let puzzle = puzzle_path.load_puzzle().unwrap();
    let config = SearchConfig::new(heuristic);

    c.bench(
        &format!("{}", heuristic),
        Benchmark::new(puzzle_path, move |b| {
            b.iter(|| {
                criterion::black_box(
                    puzzle.solve(criterion::black_box(config), criterion::black_box(false)),
                )
            })
        })
        .sample_size(samples),
    );
}

criterion_group!(
    benches,
    bench_fourteen_moves,
    bench_fourteen_moves_misplaced,
    //bench_no_solution_3x3,
);
criterion_main!(benches);
