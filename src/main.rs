// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]

use std::process;
use std::time::Duration;

use clap::{value_t, App, Arg};
use log::debug;

use sliding_puzzle_solver::config::{Heuristic, SearchConfig};
use sliding_puzzle_solver::solver::SolutionOutcome;
use sliding_puzzle_solver::{LoadPuzzle, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sliding-puzzle-solver")
        .author("martin-t")
        .version("0.1")
        .about("Finds the shortest sequence of blank moves from start to goal")
        .arg(
            Arg::with_name("heuristic")
                .long("heuristic")
                .takes_value(true)
                .possible_values(&["mismatched", "misplaced"])
                .default_value("mismatched")
                .help("estimate of the remaining moves"),
        )
        .arg(
            Arg::with_name("max-expanded")
                .long("max-expanded")
                .takes_value(true)
                .value_name("STATES")
                .help("give up after expanding this many states"),
        )
        .arg(
            Arg::with_name("timeout")
                .long("timeout")
                .takes_value(true)
                .value_name("MS")
                .help("give up after this many milliseconds"),
        )
        .arg(
            Arg::with_name("status")
                .long("status")
                .help("print stats whenever a new depth is reached"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("print stats per depth"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let heuristic = value_t!(matches, "heuristic", Heuristic).unwrap_or_else(|e| e.exit());
    let mut config = SearchConfig::new(heuristic);
    if matches.is_present("max-expanded") {
        let limit = value_t!(matches, "max-expanded", usize).unwrap_or_else(|e| e.exit());
        config = config.max_expanded(limit);
    }
    if matches.is_present("timeout") {
        let ms = value_t!(matches, "timeout", u64).unwrap_or_else(|e| e.exit());
        config = config.timeout(Duration::from_millis(ms));
    }
    debug!("Using {:?}", config);

    // file is required so clap would have exited
    let path = matches.value_of("file").unwrap();
    let puzzle = path.load_puzzle().unwrap_or_else(|err| {
        eprintln!("Can't load puzzle {}: {}", path, err);
        process::exit(1);
    });

    println!("Solving {}...", path);
    let solver_ok = puzzle.solve(config, matches.is_present("status"));
    if matches.is_present("verbose") {
        println!("{:?}", solver_ok.stats);
    } else {
        println!("{}", solver_ok.stats);
    }

    match solver_ok.outcome {
        SolutionOutcome::Solved(_) => {
            println!("Solution found!");
            if let Some(formatter) = solver_ok.outcome.formatter() {
                print!("{}", formatter);
            }
            if let Some(moves) = solver_ok.outcome.moves() {
                println!("{}", moves);
                println!("Moves: {}", moves.move_cnt());
            }
        }
        SolutionOutcome::NoSolution => println!("No solution found."),
        SolutionOutcome::LimitReached => println!("Search limit reached."),
    }
}
