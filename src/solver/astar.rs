use crate::config::SearchMethod;
use crate::heuristic::manhattan;
use crate::maze::GridAdapter;
use crate::search_core;
use crate::solver::GoalSolver;
use crate::{Cell, GoalSet};

/// Single-goal A* with the Manhattan heuristic.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }

    pub fn with_factor(heuristic_factor: f32) -> AstarSolver {
        AstarSolver { heuristic_factor }
    }

    /// Just the Manhattan distance times the heuristic factor. A factor of 1.0 returns
    /// the exact distance.
    pub fn heuristic(&self, from: Cell, goal: Cell) -> usize {
        let distance = manhattan(from, goal);
        if self.heuristic_factor == 1.0 {
            distance
        } else {
            (distance as f64 * f64::from(self.heuristic_factor)) as usize
        }
    }

    /// Shortest path from `start` to `goal`, both ends included. Skips all query
    /// validation, so it is what sub-searches call.
    pub fn find_path<G: GridAdapter>(
        &self,
        grid: &G,
        start: Cell,
        goal: Cell,
    ) -> Option<Vec<Cell>> {
        search_core::astar(
            &start,
            |cell| grid.neighbors(*cell).into_iter().map(|n| (n, 1)),
            |cell| self.heuristic(*cell, goal),
            |cell| *cell == goal,
        )
        .map(|(path, _cost)| path)
    }
}

impl GoalSolver for AstarSolver {
    fn method(&self) -> SearchMethod {
        SearchMethod::Astar
    }

    fn search<G: GridAdapter>(
        &self,
        grid: &G,
        start: Cell,
        goals: &GoalSet,
    ) -> Option<Vec<Cell>> {
        match goals.iter().next() {
            Some(goal) => self.find_path(grid, start, *goal),
            None => Some(vec![start]),
        }
    }
}
