//! Error types for maze searches.
//!
//! Failing to find a path is not an error: solvers report it as `Ok(None)`.

use crate::config::SearchMethod;
use crate::Cell;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("unknown search method: {0:?}")]
    UnknownMethod(String),

    #[error("{method} needs {expected} goal(s), got {found}")]
    GoalCount {
        method: SearchMethod,
        expected: &'static str,
        found: usize,
    },

    #[error("cell {0} is outside the maze or a wall")]
    BlockedCell(Cell),
}

pub type Result<T> = std::result::Result<T, SearchError>;
