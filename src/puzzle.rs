use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Tile;
use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleErr {
    InvalidShape,
    SizeMismatch,
    InvalidBlankCount(usize),
}

impl Display for PuzzleErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            PuzzleErr::InvalidShape => write!(f, "Enter a square board"),
            PuzzleErr::SizeMismatch => write!(f, "Boards not of equal size"),
            PuzzleErr::InvalidBlankCount(0) => {
                write!(f, "You should have at least one empty tile marked as 0")
            }
            PuzzleErr::InvalidBlankCount(cnt) => write!(
                f,
                "You can have only one empty tile marked as 0 (found {})",
                cnt
            ),
        }
    }
}

impl Error for PuzzleErr {}

/// Start and goal configuration of the same size.
#[derive(Clone)]
pub struct Puzzle {
    pub start: State,
    pub goal: State,
}

impl Puzzle {
    pub fn new(start: Vec<Vec<Tile>>, goal: Vec<Vec<Tile>>) -> Result<Self, PuzzleErr> {
        let start = State::new(start)?;
        let goal = State::new(goal)?;
        Self::from_states(start, goal)
    }

    pub fn from_states(start: State, goal: State) -> Result<Self, PuzzleErr> {
        if start.side() != goal.side() {
            return Err(PuzzleErr::SizeMismatch);
        }
        Ok(Puzzle { start, goal })
    }

    pub fn side(&self) -> usize {
        self.start.side()
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.start, self.goal)
    }
}

impl Debug for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
