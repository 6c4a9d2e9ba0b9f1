use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::data::{Dir, Pos, Tile, DIRECTIONS};
use crate::puzzle::PuzzleErr;
use crate::vec2d::Vec2d;

/// One configuration of the puzzle.
///
/// Equality and hashing only look at the tiles, the blank position is a cache
/// which always points at the cell holding 0.
#[derive(Clone)]
pub struct State {
    grid: Vec2d<Tile>,
    blank: Pos,
}

impl State {
    pub fn new(rows: Vec<Vec<Tile>>) -> Result<State, PuzzleErr> {
        let side = rows.len();
        if side == 0 || rows.iter().any(|row| row.len() != side) {
            return Err(PuzzleErr::InvalidShape);
        }

        let grid = Vec2d::new(rows);
        let blanks: Vec<_> = grid.positions().filter(|&pos| grid[pos] == 0).collect();
        if blanks.len() != 1 {
            return Err(PuzzleErr::InvalidBlankCount(blanks.len()));
        }

        Ok(State {
            blank: blanks[0],
            grid,
        })
    }

    /// Tiles `1..side²` in row-major order with the blank in the bottom right corner.
    pub fn ordered(side: usize) -> State {
        assert!(side > 0);

        let rows: Vec<Vec<Tile>> = (0..side)
            .map(|r| {
                (0..side)
                    .map(|c| ((r * side + c + 1) % (side * side)) as Tile)
                    .collect()
            })
            .collect();
        State {
            grid: Vec2d::new(rows),
            blank: Pos::new(side - 1, side - 1),
        }
    }

    pub fn side(&self) -> usize {
        self.grid.side()
    }

    pub fn blank(&self) -> Pos {
        self.blank
    }

    pub fn get(&self, pos: Pos) -> Tile {
        self.grid[pos]
    }

    pub fn rows(&self) -> Vec<Vec<Tile>> {
        self.grid.rows().map(|row| row.to_vec()).collect()
    }

    pub fn can_move(&self, dir: Dir) -> bool {
        self.blank.step(dir, self.side()).is_some()
    }

    /// Swaps the blank with its neighbor in `dir`.
    ///
    /// The move has to be legal (see `can_move`), states that are already part
    /// of a search must not be modified - use `successor` for those.
    pub fn move_in_place(&mut self, dir: Dir) {
        let new_blank = self
            .blank
            .step(dir, self.side())
            .unwrap_or_else(|| panic!("can't move {:?} from {:?}", dir, self.blank));
        self.grid.swap(self.blank, new_blank);
        self.blank = new_blank;
    }

    /// The state after moving the blank in `dir`, `None` if it would leave the grid.
    pub fn successor(&self, dir: Dir) -> Option<State> {
        if !self.can_move(dir) {
            return None;
        }
        let mut new_state = self.clone();
        new_state.move_in_place(dir);
        Some(new_state)
    }

    /// All legal successors in the order of `DIRECTIONS`.
    pub fn successors(&self) -> impl Iterator<Item = (Dir, State)> + '_ {
        let dirs: &'static [Dir; 4] = &DIRECTIONS;
        dirs.iter()
            .filter_map(move |&dir| self.successor(dir).map(|state| (dir, state)))
    }

    /// Number of cells (blank included) that differ between the two states.
    pub fn mismatched_tiles(&self, other: &State) -> u32 {
        debug_assert_eq!(self.side(), other.side());
        self.grid
            .cells()
            .zip(other.grid.cells())
            .filter(|(a, b)| a != b)
            .count() as u32
    }

    /// Like `mismatched_tiles` but the blank is not counted.
    pub fn misplaced_tiles(&self, other: &State) -> u32 {
        debug_assert_eq!(self.side(), other.side());
        self.grid
            .cells()
            .zip(other.grid.cells())
            .filter(|&(&a, &b)| a != 0 && a != b)
            .count() as u32
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for tile in row {
                write!(f, " {}", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
