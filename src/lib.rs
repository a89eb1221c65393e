//! # maze_search
//!
//! Shortest routes through a 4-connected maze that visit one or more goal cells.
//! Offers [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! single-goal [A*](https://en.wikipedia.org/wiki/A*_search_algorithm), A* for four
//! corner goals, multi-goal A* guided by a
//! [minimum spanning tree](https://en.wikipedia.org/wiki/Minimum_spanning_tree) over exact
//! pairwise goal distances, and a fast greedy planner. Connected components are
//! pre-computed so that unreachable goals are detected without flood-filling.
//!
//! Every entry point returns `Ok(Some(path))` with the start as the first cell,
//! `Ok(None)` when no route visits all goals, and an error when the request itself is
//! malformed.
mod cell;
pub mod config;
pub mod error;
mod goals;
pub mod heuristic;
pub mod maze;
pub mod oracle;
mod search_core;
pub mod solver;

pub use crate::cell::Cell;
pub use crate::config::{CornerHeuristic, SearchConfig, SearchMethod};
pub use crate::error::SearchError;
pub use crate::goals::{GoalSet, MultiState};
pub use crate::maze::{GridAdapter, Maze, Query};
pub use crate::solver::astar::AstarSolver;
pub use crate::solver::bfs::BfsSolver;
pub use crate::solver::corner::CornerSolver;
pub use crate::solver::fast::FastSolver;
pub use crate::solver::multi::MultiGoalSolver;
pub use crate::solver::{path_cost, solve, GoalSolver};

use crate::error::Result;

fn run<G: GridAdapter>(grid: &G, method: SearchMethod) -> Result<Option<Vec<Cell>>> {
    solve(grid, &Query::from_grid(grid), &SearchConfig::new(method))
}

/// Breadth-first search from the grid's start through all of its objectives.
pub fn bfs<G: GridAdapter>(grid: &G) -> Result<Option<Vec<Cell>>> {
    run(grid, SearchMethod::Bfs)
}

/// A* from the grid's start to its single objective.
pub fn astar<G: GridAdapter>(grid: &G) -> Result<Option<Vec<Cell>>> {
    run(grid, SearchMethod::Astar)
}

/// A* through exactly four objectives, using the spanning tree heuristic.
pub fn astar_corner<G: GridAdapter>(grid: &G) -> Result<Option<Vec<Cell>>> {
    run(grid, SearchMethod::AstarCorner)
}

/// A* through one or more objectives.
pub fn astar_multi<G: GridAdapter>(grid: &G) -> Result<Option<Vec<Cell>>> {
    run(grid, SearchMethod::AstarMulti)
}

/// Greedy planner through one or more objectives. Valid but not necessarily shortest.
pub fn fast<G: GridAdapter>(grid: &G) -> Result<Option<Vec<Cell>>> {
    run(grid, SearchMethod::Fast)
}

/// Dispatches on a method name: `bfs`, `astar`, `astar_corner`, `astar_multi` or
/// `fast`. Any other name is a [SearchError::UnknownMethod].
pub fn search<G: GridAdapter>(grid: &G, method: &str) -> Result<Option<Vec<Cell>>> {
    run(grid, method.parse()?)
}
