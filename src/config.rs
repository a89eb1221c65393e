use crate::error::SearchError;
use core::fmt;
use std::str::FromStr;

/// One search strategy per variant. [FromStr] and [Display](fmt::Display) use the
/// lowercase names `bfs`, `astar`, `astar_corner`, `astar_multi` and `fast`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchMethod {
    #[default]
    Bfs,
    Astar,
    AstarCorner,
    AstarMulti,
    Fast,
}

impl SearchMethod {
    pub const ALL: [SearchMethod; 5] = [
        SearchMethod::Bfs,
        SearchMethod::Astar,
        SearchMethod::AstarCorner,
        SearchMethod::AstarMulti,
        SearchMethod::Fast,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SearchMethod::Bfs => "bfs",
            SearchMethod::Astar => "astar",
            SearchMethod::AstarCorner => "astar_corner",
            SearchMethod::AstarMulti => "astar_multi",
            SearchMethod::Fast => "fast",
        }
    }

    /// Human readable form of the goal counts the method accepts.
    pub fn expected_goals(&self) -> &'static str {
        match self {
            SearchMethod::Bfs => "any number of",
            SearchMethod::Astar => "exactly 1",
            SearchMethod::AstarCorner => "exactly 4",
            SearchMethod::AstarMulti | SearchMethod::Fast => "at least 1",
        }
    }

    pub fn accepts_goal_count(&self, count: usize) -> bool {
        match self {
            SearchMethod::Bfs => true,
            SearchMethod::Astar => count == 1,
            SearchMethod::AstarCorner => count == 4,
            SearchMethod::AstarMulti | SearchMethod::Fast => count >= 1,
        }
    }
}

impl FromStr for SearchMethod {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchMethod::ALL
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| SearchError::UnknownMethod(s.to_owned()))
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Heuristic used by the four-corner search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CornerHeuristic {
    /// Greedy nearest-goal chain over Manhattan distances. Fast but not admissible,
    /// so the returned tour is not guaranteed to be the shortest.
    NearestChain,
    /// Nearest goal plus a spanning tree over exact pairwise distances.
    #[default]
    SpanningTree,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    pub method: SearchMethod,
    /// Multiplies the single-goal Manhattan heuristic. Values above 1.0 make `astar`
    /// and the greedy planner's sub-searches faster but no longer optimal.
    pub heuristic_factor: f32,
    pub corner_heuristic: CornerHeuristic,
    /// Check every returned path against the grid and log the outcome.
    pub verify_path: bool,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            method: SearchMethod::default(),
            heuristic_factor: 1.0,
            corner_heuristic: CornerHeuristic::default(),
            verify_path: true,
        }
    }
}

impl SearchConfig {
    pub fn new(method: SearchMethod) -> SearchConfig {
        SearchConfig {
            method,
            ..SearchConfig::default()
        }
    }

    pub fn from_method_name(name: &str) -> Result<SearchConfig, SearchError> {
        Ok(SearchConfig::new(name.parse()?))
    }
}
