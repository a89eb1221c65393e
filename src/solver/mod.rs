use crate::config::{SearchConfig, SearchMethod};
use crate::error::{Result, SearchError};
use crate::maze::{GridAdapter, Query};
use crate::search_core;
use crate::{Cell, GoalSet, MultiState};
use log::{debug, info, warn};

pub mod astar;
pub mod bfs;
pub mod corner;
pub mod fast;
pub mod multi;

use self::astar::AstarSolver;
use self::bfs::BfsSolver;
use self::corner::CornerSolver;
use self::fast::FastSolver;
use self::multi::MultiGoalSolver;

/// Number of moves in a path.
pub fn path_cost(path: &[Cell]) -> usize {
    path.len().saturating_sub(1)
}

/// A search strategy that turns a [Query] into a path visiting every goal.
pub trait GoalSolver {
    fn method(&self) -> SearchMethod;

    /// Runs the strategy on a query that has already been validated. `goals` never
    /// contains `start`.
    fn search<G: GridAdapter>(&self, grid: &G, start: Cell, goals: &GoalSet)
        -> Option<Vec<Cell>>;

    /// Validates the query, rules out goals on other components and runs
    /// [search](Self::search). `Ok(None)` means no path exists.
    fn solve<G: GridAdapter>(&self, grid: &G, query: &Query) -> Result<Option<Vec<Cell>>> {
        let method = self.method();
        if !method.accepts_goal_count(query.goals.len()) {
            return Err(SearchError::GoalCount {
                method,
                expected: method.expected_goals(),
                found: query.goals.len(),
            });
        }
        if let Some(cell) = std::iter::once(&query.start)
            .chain(query.goals.iter())
            .find(|cell| !grid.contains(**cell))
        {
            return Err(SearchError::BlockedCell(*cell));
        }
        if let Some(goal) = query
            .goals
            .iter()
            .find(|goal| !grid.reachable(query.start, **goal))
        {
            info!("{} is not reachable from {}", goal, query.start);
            return Ok(None);
        }
        let goals = query.goals.without(&query.start);
        let path = self.search(grid, query.start, &goals);
        match &path {
            Some(path) => debug!("{} found a path of {} moves", method, path_cost(path)),
            None => warn!(
                "{} found no path from {} although every goal shares its component",
                method, query.start
            ),
        }
        Ok(path)
    }
}

/// A* over (position, remaining goals) states with unit step costs.
pub(crate) fn state_space_astar<G, FH>(
    grid: &G,
    start: Cell,
    goals: &GoalSet,
    heuristic: FH,
) -> Option<Vec<Cell>>
where
    G: GridAdapter,
    FH: FnMut(&MultiState) -> usize,
{
    let initial = MultiState::new(start, goals.clone());
    search_core::astar(
        &initial,
        |state: &MultiState| {
            grid.neighbors(state.position)
                .into_iter()
                .map(|n| (state.step(n), 1))
                .collect::<Vec<_>>()
        },
        heuristic,
        MultiState::is_complete,
    )
    .map(|(states, _)| states.into_iter().map(|s| s.position).collect())
}

/// Runs the configured strategy on `query`. With `verify_path` set the result is
/// checked against the grid; a failed check is logged and the path still returned.
pub fn solve<G: GridAdapter>(
    grid: &G,
    query: &Query,
    config: &SearchConfig,
) -> Result<Option<Vec<Cell>>> {
    let astar_solver = AstarSolver::with_factor(config.heuristic_factor);
    let path = match config.method {
        SearchMethod::Bfs => BfsSolver.solve(grid, query),
        SearchMethod::Astar => astar_solver.solve(grid, query),
        SearchMethod::AstarCorner => CornerSolver::new(config.corner_heuristic).solve(grid, query),
        SearchMethod::AstarMulti => MultiGoalSolver.solve(grid, query),
        SearchMethod::Fast => FastSolver::new(astar_solver).solve(grid, query),
    }?;
    if config.verify_path {
        if let Some(path) = &path {
            if query.is_valid_path(grid, path) {
                debug!("{} path passed validation", config.method);
            } else {
                warn!("{} returned an invalid path: {:?}", config.method, path);
            }
        }
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Maze;

    #[test]
    fn rejects_wrong_goal_counts() {
        let mut maze = Maze::new(4, 4, false);
        maze.set_start(Cell::new(0, 0));
        let two = Query::new(Cell::new(0, 0), [Cell::new(3, 3), Cell::new(0, 3)]);
        assert_eq!(
            AstarSolver::new().solve(&maze, &two),
            Err(SearchError::GoalCount {
                method: SearchMethod::Astar,
                expected: "exactly 1",
                found: 2
            })
        );
        assert!(CornerSolver::default().solve(&maze, &two).is_err());
        let none = Query::new(Cell::new(0, 0), []);
        assert!(MultiGoalSolver.solve(&maze, &none).is_err());
        assert!(FastSolver::default().solve(&maze, &none).is_err());
        assert_eq!(BfsSolver.solve(&maze, &none), Ok(Some(vec![Cell::new(0, 0)])));
    }

    #[test]
    fn rejects_blocked_cells() {
        let mut maze = Maze::new(3, 3, false);
        maze.set(Cell::new(1, 1), true);
        let on_wall = Query::single(Cell::new(0, 0), Cell::new(1, 1));
        assert_eq!(
            AstarSolver::new().solve(&maze, &on_wall),
            Err(SearchError::BlockedCell(Cell::new(1, 1)))
        );
        let outside = Query::single(Cell::new(5, 0), Cell::new(0, 0));
        assert_eq!(
            BfsSolver.solve(&maze, &outside),
            Err(SearchError::BlockedCell(Cell::new(5, 0)))
        );
    }

    #[test]
    fn unreachable_goal_is_not_an_error() {
        // |S#G|
        let mut maze = Maze::new(3, 1, false);
        maze.set(Cell::new(0, 1), true);
        maze.update();
        let query = Query::single(Cell::new(0, 0), Cell::new(0, 2));
        for method in SearchMethod::ALL {
            if method == SearchMethod::AstarCorner {
                continue;
            }
            let config = SearchConfig::new(method);
            assert_eq!(solve(&maze, &query, &config), Ok(None), "{method}");
        }
    }

    #[test]
    fn unreachable_without_components() {
        // Dirty components defer to the search itself, which must still give up cleanly.
        let mut maze = Maze::new(3, 1, false);
        maze.set(Cell::new(0, 1), true);
        assert!(maze.components_dirty);
        let query = Query::new(Cell::new(0, 0), [Cell::new(0, 2)]);
        assert_eq!(BfsSolver.solve(&maze, &query), Ok(None));
        assert_eq!(AstarSolver::new().solve(&maze, &query), Ok(None));
        assert_eq!(MultiGoalSolver.solve(&maze, &query), Ok(None));
        assert_eq!(FastSolver::default().solve(&maze, &query), Ok(None));
    }

    #[test]
    fn path_cost_counts_moves() {
        assert_eq!(path_cost(&[]), 0);
        assert_eq!(path_cost(&[Cell::new(0, 0)]), 0);
        assert_eq!(path_cost(&[Cell::new(0, 0), Cell::new(0, 1)]), 1);
    }
}
