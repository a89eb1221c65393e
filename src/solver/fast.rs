use crate::config::SearchMethod;
use crate::maze::GridAdapter;
use crate::solver::astar::AstarSolver;
use crate::solver::GoalSolver;
use crate::{Cell, GoalSet};
use log::{debug, info};

/// Greedy planner for many goals. Steps onto an adjacent goal when there is one and
/// otherwise runs single-goal A* to the goal nearest by Manhattan distance. Goals
/// passed over on the way count as visited. Not optimal, but each sub-search is cheap.
#[derive(Clone, Debug, Default)]
pub struct FastSolver {
    pub astar: AstarSolver,
}

impl FastSolver {
    pub fn new(astar: AstarSolver) -> FastSolver {
        FastSolver { astar }
    }
}

impl GoalSolver for FastSolver {
    fn method(&self) -> SearchMethod {
        SearchMethod::Fast
    }

    fn search<G: GridAdapter>(
        &self,
        grid: &G,
        start: Cell,
        goals: &GoalSet,
    ) -> Option<Vec<Cell>> {
        let mut remaining = goals.clone();
        let mut path = vec![start];
        let mut current = start;
        let mut segments = 0;
        while !remaining.is_empty() {
            let adjacent = grid
                .neighbors(current)
                .into_iter()
                .find(|n| remaining.contains(n));
            if let Some(next) = adjacent {
                remaining.remove(&next);
                path.push(next);
                current = next;
                continue;
            }
            // `remaining` is not empty here
            let target = remaining.nearest(&current)?;
            let sub_path = self.astar.find_path(grid, current, target)?;
            debug!("Segment {} -> {}: {} cells", current, target, sub_path.len());
            for cell in &sub_path[1..] {
                remaining.remove(cell);
            }
            path.extend_from_slice(&sub_path[1..]);
            current = target;
            segments += 1;
        }
        info!(
            "Fast planner used {} A* segments for {} goals",
            segments,
            goals.len()
        );
        Some(path)
    }
}
