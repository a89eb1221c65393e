use crate::config::SearchMethod;
use crate::maze::GridAdapter;
use crate::search_core;
use crate::solver::GoalSolver;
use crate::{Cell, GoalSet, MultiState};

/// Breadth-first search over (position, remaining goals). Every move costs the same,
/// so the first complete state dequeued ends a shortest route through all goals.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GoalSolver for BfsSolver {
    fn method(&self) -> SearchMethod {
        SearchMethod::Bfs
    }

    fn search<G: GridAdapter>(
        &self,
        grid: &G,
        start: Cell,
        goals: &GoalSet,
    ) -> Option<Vec<Cell>> {
        search_core::bfs(
            &MultiState::new(start, goals.clone()),
            |state| {
                grid.neighbors(state.position)
                    .into_iter()
                    .map(|n| state.step(n))
                    .collect::<Vec<_>>()
            },
            MultiState::is_complete,
        )
        .map(|states| states.into_iter().map(|s| s.position).collect())
    }
}
