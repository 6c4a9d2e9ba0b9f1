use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Square grid stored in a single vector, row by row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    side: usize,
}

impl<T> Vec2d<T> {
    /// Caller guarantees `rows` is square.
    pub(crate) fn new(rows: Vec<Vec<T>>) -> Self {
        let side = rows.len();
        let mut data = Vec::with_capacity(side * side);
        for row in rows {
            debug_assert_eq!(row.len(), side);
            data.extend(row);
        }
        Vec2d { data, side }
    }

    pub(crate) fn side(&self) -> usize {
        self.side
    }

    pub(crate) fn swap(&mut self, a: Pos, b: Pos) {
        let (a, b) = (self.index_of(a), self.index_of(b));
        self.data.swap(a, b);
    }

    pub(crate) fn rows(&self) -> ::std::slice::Chunks<'_, T> {
        // side is at least 1 for every grid we construct
        self.data.chunks(self.side.max(1))
    }

    pub(crate) fn cells(&self) -> ::std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
        let side = self.side;
        (0..side).flat_map(move |r| (0..side).map(move |c| Pos::new(r, c)))
    }

    fn index_of(&self, pos: Pos) -> usize {
        debug_assert!(pos.r < self.side && pos.c < self.side);
        pos.r * self.side + pos.c
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.data[self.index_of(index)]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = self.index_of(index);
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_and_swapping() {
        let mut grid = Vec2d::new(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(grid.side(), 2);
        assert_eq!(grid[Pos::new(1, 0)], 3);

        grid.swap(Pos::new(0, 0), Pos::new(1, 1));
        assert_eq!(grid.cells().cloned().collect::<Vec<_>>(), vec![4, 2, 3, 1]);

        grid[Pos::new(0, 1)] = 7;
        let rows: Vec<_> = grid.rows().map(|row| row.to_vec()).collect();
        assert_eq!(rows, vec![vec![4, 7], vec![3, 1]]);
    }

    #[test]
    fn positions_row_major() {
        let grid = Vec2d::new(vec![vec![0; 2]; 2]);
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]
        );
    }
}
