use crate::config::SearchMethod;
use crate::heuristic::SpanningTreeHeuristic;
use crate::maze::GridAdapter;
use crate::oracle::PairwiseCostTable;
use crate::solver::{state_space_astar, GoalSolver};
use crate::{Cell, GoalSet};
use log::debug;

/// A* over (position, remaining goals) for any number of goals, guided by
/// [SpanningTreeHeuristic]. Returns a shortest route through all goals.
#[derive(Clone, Copy, Debug, Default)]
pub struct MultiGoalSolver;

impl GoalSolver for MultiGoalSolver {
    fn method(&self) -> SearchMethod {
        SearchMethod::AstarMulti
    }

    fn search<G: GridAdapter>(
        &self,
        grid: &G,
        start: Cell,
        goals: &GoalSet,
    ) -> Option<Vec<Cell>> {
        spanning_tree_search(grid, start, goals)
    }
}

/// Builds the pairwise table for `goals`, then runs the state-space A*. The table and
/// the spanning tree cache are dropped when the search returns.
pub(crate) fn spanning_tree_search<G: GridAdapter>(
    grid: &G,
    start: Cell,
    goals: &GoalSet,
) -> Option<Vec<Cell>> {
    let table = PairwiseCostTable::build(grid, goals)?;
    let mut heuristic = SpanningTreeHeuristic::new(&table);
    let path = state_space_astar(grid, start, goals, |state| {
        heuristic.estimate(state.position, &state.remaining)
    });
    debug!(
        "Spanning tree heuristic memoised {} goal sets",
        heuristic.cached_sets()
    );
    path
}
