use core::fmt;

/// A grid position given as (row, column). Rows grow downwards, columns to the right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    /// L1 distance, which is the exact step count on an open 4-connected grid.
    pub fn manhattan_distance(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The 4-neighbourhood in the order up, down, left, right. Cells that would
    /// fall below row or column zero are skipped; the upper bounds are left to
    /// the grid.
    pub fn neumann_neighborhood(&self) -> impl Iterator<Item = Cell> {
        let Cell { row, col } = *self;
        [
            row.checked_sub(1).map(|r| Cell::new(r, col)),
            Some(Cell::new(row + 1, col)),
            col.checked_sub(1).map(|c| Cell::new(row, c)),
            Some(Cell::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Cell {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighborhood_order_and_origin() {
        let inner: Vec<Cell> = Cell::new(2, 3).neumann_neighborhood().collect();
        assert_eq!(
            inner,
            vec![
                Cell::new(1, 3),
                Cell::new(3, 3),
                Cell::new(2, 2),
                Cell::new(2, 4)
            ]
        );
        let origin: Vec<Cell> = Cell::new(0, 0).neumann_neighborhood().collect();
        assert_eq!(origin, vec![Cell::new(1, 0), Cell::new(0, 1)]);
    }

    #[test]
    fn manhattan_is_symmetric() {
        let a = Cell::new(0, 4);
        let b = Cell::new(3, 1);
        assert_eq!(a.manhattan_distance(&b), 6);
        assert_eq!(b.manhattan_distance(&a), 6);
        assert!(!a.is_adjacent(&b));
        assert!(a.is_adjacent(&Cell::new(1, 4)));
    }
}
