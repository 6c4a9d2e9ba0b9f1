use std::fmt::{self, Display, Formatter};

/// The tile label, 0 is the blank.
pub type Tile = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: usize,
    pub c: usize,
}

impl Pos {
    pub fn new(r: usize, c: usize) -> Pos {
        Pos { r, c }
    }

    /// Neighbor in the given direction or `None` if it would leave a grid with side `side`.
    pub fn step(self, dir: Dir, side: usize) -> Option<Pos> {
        match dir {
            Dir::Up if self.r > 0 => Some(Pos::new(self.r - 1, self.c)),
            Dir::Down if self.r + 1 < side => Some(Pos::new(self.r + 1, self.c)),
            Dir::Left if self.c > 0 => Some(Pos::new(self.r, self.c - 1)),
            Dir::Right if self.c + 1 < side => Some(Pos::new(self.r, self.c + 1)),
            _ => None,
        }
    }
}

/// Direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

// order matters - it decides which of several equally short solutions is found
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    /// Direction that leads from `from` to the adjacent `to`.
    pub(crate) fn between(from: Pos, to: Pos) -> Option<Dir> {
        if to.c == from.c && to.r + 1 == from.r {
            Some(Dir::Up)
        } else if to.c == from.c && from.r + 1 == to.r {
            Some(Dir::Down)
        } else if to.r == from.r && to.c + 1 == from.c {
            Some(Dir::Left)
        } else if to.r == from.r && from.c + 1 == to.c {
            Some(Dir::Right)
        } else {
            None
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
            Dir::Right => write!(f, "r"),
        }
    }
}
