pub(crate) mod a_star;

use std::fmt::{self, Debug, Formatter};

use typed_arena::Arena;

use crate::config::{Heuristic, SearchConfig};
use crate::moves::Moves;
use crate::puzzle::Puzzle;
use crate::state::State;
use crate::Solve;

use self::a_star::{Search, SearchEnd};

pub use self::a_star::Stats;

#[derive(Clone, PartialEq, Eq)]
pub enum SolutionOutcome {
    /// States from start to goal, both inclusive.
    Solved(Vec<State>),
    /// The whole reachable state space was searched.
    NoSolution,
    /// Gave up because of `SearchConfig::max_expanded` or `SearchConfig::timeout`.
    LimitReached,
}

impl SolutionOutcome {
    pub fn path(&self) -> Option<&[State]> {
        match *self {
            SolutionOutcome::Solved(ref path) => Some(&path[..]),
            _ => None,
        }
    }

    pub fn moves(&self) -> Option<Moves> {
        self.path().map(Moves::from_path)
    }
}

impl Debug for SolutionOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolutionOutcome::Solved(ref path) => write!(f, "Solved: {}", path.len() - 1),
            SolutionOutcome::NoSolution => write!(f, "No solution"),
            SolutionOutcome::LimitReached => write!(f, "Limit reached"),
        }
    }
}

pub struct SolverOk {
    pub outcome: SolutionOutcome,
    pub stats: Stats,
    pub heuristic: Heuristic,
}

impl SolverOk {
    fn new(outcome: SolutionOutcome, stats: Stats, heuristic: Heuristic) -> Self {
        Self {
            outcome,
            stats,
            heuristic,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?} ({})", self.outcome, self.heuristic)?;
        write!(f, "{}", self.stats)
    }
}

impl Solve for Puzzle {
    fn solve(&self, config: SearchConfig, print_status: bool) -> SolverOk {
        solve(self, config, print_status)
    }
}

pub fn solve(puzzle: &Puzzle, config: SearchConfig, print_status: bool) -> SolverOk {
    debug!(
        "Solving {}x{} puzzle using {}",
        puzzle.side(),
        puzzle.side(),
        config.heuristic
    );

    let arena = Arena::new();
    let mut search = Search::new(&arena, &puzzle.start, &puzzle.goal, config);
    let outcome = match search.run(print_status) {
        SearchEnd::Found(index) => SolutionOutcome::Solved(search.backtrack_path(index)),
        SearchEnd::Exhausted => SolutionOutcome::NoSolution,
        SearchEnd::LimitReached => SolutionOutcome::LimitReached,
    };
    SolverOk::new(outcome, search.stats, config.heuristic)
}
