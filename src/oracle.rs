use crate::maze::GridAdapter;
use crate::solver::astar::AstarSolver;
use crate::{path_cost, Cell, GoalSet};
use fxhash::FxHashMap;
use itertools::Itertools;
use log::info;

/// Exact shortest-path distances between every pair of goals of one search. Filled
/// completely on construction and read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct PairwiseCostTable {
    costs: FxHashMap<(Cell, Cell), usize>,
}

impl PairwiseCostTable {
    /// Runs one single-goal A* per unordered pair of goals. Returns [None] as soon as
    /// a pair turns out to be disconnected, since no tour can then cover both.
    pub fn build<G: GridAdapter>(grid: &G, goals: &GoalSet) -> Option<PairwiseCostTable> {
        let solver = AstarSolver::new();
        let mut costs = FxHashMap::default();
        for (a, b) in goals.iter().tuple_combinations() {
            let path = solver.find_path(grid, *a, *b)?;
            costs.insert(Self::key(*a, *b), path_cost(&path));
        }
        info!(
            "Computed {} pairwise goal distances for {} goals",
            costs.len(),
            goals.len()
        );
        Some(PairwiseCostTable { costs })
    }

    fn key(a: Cell, b: Cell) -> (Cell, Cell) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Distance between two goals the table was built for.
    ///
    /// Panics if the pair was never computed.
    pub fn cost(&self, a: Cell, b: Cell) -> usize {
        if a == b {
            return 0;
        }
        *self
            .costs
            .get(&Self::key(a, b))
            .unwrap_or_else(|| panic!("no pairwise cost recorded between {a} and {b}"))
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Maze;

    #[test]
    fn distances_follow_walls() {
        // |A# B|
        // |  # |
        // |    |
        let mut maze = Maze::new(4, 3, false);
        maze.set(Cell::new(0, 1), true);
        maze.set(Cell::new(1, 2), true);
        let a = Cell::new(0, 0);
        let b = Cell::new(0, 3);
        let c = Cell::new(2, 0);
        let table = PairwiseCostTable::build(&maze, &GoalSet::new([a, b, c])).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.cost(a, b), 7);
        assert_eq!(table.cost(b, a), 7);
        assert_eq!(table.cost(a, c), 2);
        assert_eq!(table.cost(b, c), 5);
        assert_eq!(table.cost(c, c), 0);
    }

    #[test]
    fn disconnected_goals() {
        let mut maze = Maze::new(3, 1, false);
        maze.set(Cell::new(0, 1), true);
        maze.update();
        let goals = GoalSet::new([Cell::new(0, 0), Cell::new(0, 2)]);
        assert!(PairwiseCostTable::build(&maze, &goals).is_none());
    }

    #[test]
    #[should_panic(expected = "no pairwise cost")]
    fn unknown_pair_panics() {
        let maze = Maze::new(2, 2, false);
        let table = PairwiseCostTable::build(&maze, &GoalSet::new([Cell::new(0, 0)])).unwrap();
        assert!(table.is_empty());
        table.cost(Cell::new(0, 0), Cell::new(1, 1));
    }
}
