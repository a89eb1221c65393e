//! Lower-bound estimates of the remaining cost of a search state.
//!
//! All distances are in moves on a 4-connected unit-cost grid.
use crate::oracle::PairwiseCostTable;
use crate::{Cell, GoalSet};
use fxhash::FxHashMap;
use itertools::Itertools;
use petgraph::unionfind::UnionFind;

/// Manhattan distance. Admissible and consistent for a single goal on a
/// 4-connected grid.
pub fn manhattan(a: Cell, b: Cell) -> usize {
    a.manhattan_distance(&b)
}

/// Manhattan distance to the closest goal, 0 when no goals remain.
pub fn nearest_goal_distance(position: Cell, goals: &GoalSet) -> usize {
    goals
        .iter()
        .map(|goal| manhattan(position, *goal))
        .min()
        .unwrap_or(0)
}

/// Nearest-neighbour chain: walk from `position` to the closest goal, from there to
/// the closest goal not yet taken, and so on, summing Manhattan distances.
///
/// This is an approximation. It matches the length of a greedy tour and can exceed
/// the optimal tour when a cheaper order starts with a goal that is not the nearest,
/// so it is not admissible in general. [SpanningTreeHeuristic] is the admissible
/// alternative.
pub fn corner_chain(position: Cell, goals: &GoalSet) -> usize {
    let mut remaining = goals.clone();
    let mut current = position;
    let mut total = 0;
    while let Some(next) = remaining.nearest(&current) {
        total += manhattan(current, next);
        remaining.remove(&next);
        current = next;
    }
    total
}

/// Nearest-goal distance plus the weight of a minimum spanning tree over the remaining
/// goals, with edge weights taken from exact pairwise shortest paths.
///
/// Any walk that visits every remaining goal first reaches some goal, which costs at
/// least the nearest-goal distance, and then connects all goals, which costs at least
/// the spanning tree weight. The estimate is therefore admissible, though not always
/// consistent, since the nearest-goal term uses Manhattan distance.
///
/// Spanning tree weights are memoised per remaining set. The cache lives as long as
/// this value, which is one search.
#[derive(Debug)]
pub struct SpanningTreeHeuristic<'a> {
    table: &'a PairwiseCostTable,
    cache: FxHashMap<GoalSet, usize>,
}

impl<'a> SpanningTreeHeuristic<'a> {
    pub fn new(table: &'a PairwiseCostTable) -> SpanningTreeHeuristic<'a> {
        SpanningTreeHeuristic {
            table,
            cache: FxHashMap::default(),
        }
    }

    pub fn estimate(&mut self, position: Cell, remaining: &GoalSet) -> usize {
        if remaining.is_empty() {
            return 0;
        }
        nearest_goal_distance(position, remaining) + self.spanning_weight(remaining)
    }

    /// Kruskal's algorithm: take edges lightest first and keep those joining two
    /// different components until every goal is connected.
    pub fn spanning_weight(&mut self, goals: &GoalSet) -> usize {
        if goals.len() < 2 {
            return 0;
        }
        if let Some(&weight) = self.cache.get(goals) {
            return weight;
        }
        let nodes = goals.as_slice();
        let edges = (0..nodes.len())
            .tuple_combinations()
            .map(|(i, j)| (self.table.cost(nodes[i], nodes[j]), i, j))
            .sorted_unstable();
        let mut components: UnionFind<usize> = UnionFind::new(nodes.len());
        let mut accepted = 0;
        let mut weight = 0;
        for (cost, i, j) in edges {
            if components.union(i, j) {
                weight += cost;
                accepted += 1;
                if accepted == nodes.len() - 1 {
                    break;
                }
            }
        }
        self.cache.insert(goals.clone(), weight);
        weight
    }

    /// Number of distinct goal sets whose spanning weight has been computed.
    pub fn cached_sets(&self) -> usize {
        self.cache.len()
    }
}
