use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

use crate::state::State;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Cells that differ from the goal, blank included.
    Mismatched,
    /// Tiles that are not where the goal wants them, blank excluded.
    Misplaced,
}

impl Heuristic {
    pub fn estimate(self, state: &State, goal: &State) -> u32 {
        match self {
            Heuristic::Mismatched => state.mismatched_tiles(goal),
            Heuristic::Misplaced => state.misplaced_tiles(goal),
        }
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Mismatched
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::Mismatched => write!(f, "mismatched"),
            Heuristic::Misplaced => write!(f, "misplaced"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mismatched" => Ok(Heuristic::Mismatched),
            "misplaced" => Ok(Heuristic::Misplaced),
            _ => Err(format!("Unknown heuristic: {}", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub heuristic: Heuristic,
    /// Give up after expanding this many states.
    pub max_expanded: Option<usize>,
    /// Give up once the search has been running this long.
    pub timeout: Option<Duration>,
}

impl SearchConfig {
    pub fn new(heuristic: Heuristic) -> Self {
        SearchConfig {
            heuristic,
            ..Default::default()
        }
    }

    pub fn max_expanded(mut self, limit: usize) -> Self {
        self.max_expanded = Some(limit);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
