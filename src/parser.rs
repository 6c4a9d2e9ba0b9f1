use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::Tile;
use crate::puzzle::{Puzzle, PuzzleErr};
use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    /// Line and column (both counted from 0) of a token which is not a tile.
    Pos(usize, usize),
    Empty,
    TooManyGrids,
    Puzzle(PuzzleErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid tile at pos: [{}, {}]", r, c),
            ParserErr::Empty => write!(f, "No grid found"),
            ParserErr::TooManyGrids => write!(f, "More than two grids - expected start and goal"),
            ParserErr::Puzzle(ref err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<PuzzleErr> for ParserErr {
    fn from(err: PuzzleErr) -> Self {
        ParserErr::Puzzle(err)
    }
}

impl FromStr for Puzzle {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses the start grid optionally followed by the goal grid.
///
/// Grids are separated by empty lines, each line is one row
/// of whitespace separated numbers with 0 as the blank.
/// Lines starting with `;` are ignored.
/// Without a goal grid the tiles are expected to end up ordered (see `State::ordered`).
pub fn parse(puzzle: &str) -> Result<Puzzle, ParserErr> {
    let mut grids: Vec<Vec<Vec<Tile>>> = Vec::new();
    let mut cur_grid = Vec::new();

    for (r, line) in puzzle.lines().enumerate() {
        let line = line.trim();
        if line.starts_with(';') {
            continue;
        }
        if line.is_empty() {
            if !cur_grid.is_empty() {
                grids.push(cur_grid);
                cur_grid = Vec::new();
            }
            continue;
        }

        let row = line
            .split_whitespace()
            .enumerate()
            .map(|(c, token)| token.parse().map_err(|_| ParserErr::Pos(r, c)))
            .collect::<Result<Vec<Tile>, _>>()?;
        cur_grid.push(row);
    }
    if !cur_grid.is_empty() {
        grids.push(cur_grid);
    }

    let mut grids = grids.into_iter();
    let start = State::new(grids.next().ok_or(ParserErr::Empty)?)?;
    let goal = match grids.next() {
        Some(goal) => State::new(goal)?,
        None => State::ordered(start.side()),
    };
    if grids.next().is_some() {
        return Err(ParserErr::TooManyGrids);
    }

    Ok(Puzzle::from_states(start, goal)?)
}
