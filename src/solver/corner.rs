use crate::config::{CornerHeuristic, SearchMethod};
use crate::heuristic::corner_chain;
use crate::maze::GridAdapter;
use crate::solver::multi::spanning_tree_search;
use crate::solver::{state_space_astar, GoalSolver};
use crate::{Cell, GoalSet};

/// A* for exactly four goals, typically the corners of the maze, visited in any order.
#[derive(Clone, Copy, Debug, Default)]
pub struct CornerSolver {
    pub heuristic: CornerHeuristic,
}

impl CornerSolver {
    pub fn new(heuristic: CornerHeuristic) -> CornerSolver {
        CornerSolver { heuristic }
    }
}

impl GoalSolver for CornerSolver {
    fn method(&self) -> SearchMethod {
        SearchMethod::AstarCorner
    }

    fn search<G: GridAdapter>(
        &self,
        grid: &G,
        start: Cell,
        goals: &GoalSet,
    ) -> Option<Vec<Cell>> {
        match self.heuristic {
            CornerHeuristic::NearestChain => state_space_astar(grid, start, goals, |state| {
                corner_chain(state.position, &state.remaining)
            }),
            CornerHeuristic::SpanningTree => spanning_tree_search(grid, start, goals),
        }
    }
}
