use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;
use crate::state::State;

/// Directions the blank moved in, in order.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Dir>);

impl Moves {
    pub fn new(moves: Vec<Dir>) -> Self {
        Moves(moves)
    }

    /// Consecutive states must differ by exactly one move.
    pub fn from_path(path: &[State]) -> Self {
        let moves = path
            .windows(2)
            .map(|pair| {
                Dir::between(pair[0].blank(), pair[1].blank())
                    .unwrap_or_else(|| panic!("not a single move:\n{}\n{}", pair[0], pair[1]))
            })
            .collect();
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Dir> {
        self.0.iter()
    }

    /// Replays the moves, returning all states including `start`.
    pub fn apply(&self, start: &State) -> Option<Vec<State>> {
        let mut states = vec![start.clone()];
        for &dir in self {
            let next = states.last()?.successor(dir)?;
            states.push(next);
        }
        Some(states)
    }
}

impl IntoIterator for Moves {
    type Item = Dir;
    type IntoIter = ::std::vec::IntoIter<Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Dir;
    type IntoIter = ::std::slice::Iter<'a, Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
