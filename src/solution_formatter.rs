use std::fmt::{self, Debug, Display, Formatter};

use crate::solver::SolutionOutcome;
use crate::state::State;

/// Step by step printout of a solution.
pub struct SolutionFormatter<'a> {
    path: &'a [State],
}

impl<'a> SolutionFormatter<'a> {
    pub fn new(path: &'a [State]) -> Self {
        Self { path }
    }
}

impl SolutionOutcome {
    pub fn formatter(&self) -> Option<SolutionFormatter<'_>> {
        self.path().map(SolutionFormatter::new)
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, state) in self.path.iter().enumerate() {
            writeln!(f, "--- Step {} ---", i)?;
            writeln!(f, "{}", state)?;
        }
        writeln!(f, "Goal reached!")
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SearchConfig;
    use crate::puzzle::Puzzle;
    use crate::Solve;

    #[test]
    fn formatting_solution() {
        let puzzle: Puzzle = "1 0\n3 2".parse().unwrap();
        let solution = puzzle.solve(SearchConfig::default(), false);
        let expected = r"--- Step 0 ---
 1 0
 3 2

--- Step 1 ---
 1 2
 3 0

Goal reached!
";
        assert_eq!(solution.outcome.formatter().unwrap().to_string(), expected);
    }

    #[test]
    fn nothing_to_format() {
        let puzzle: Puzzle = "2 1\n3 0".parse().unwrap();
        let solution = puzzle.solve(SearchConfig::default(), false);
        assert!(solution.outcome.formatter().is_none());
    }
}
