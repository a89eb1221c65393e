//! Generic best-first and breadth-first traversal over any hashable state type. Both
//! loops record, for every discovered state, the index of the state that first
//! reached it in an insertion-ordered [IndexMap]; the path is recovered by walking
//! those indices back to the root.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index of the root state.
const ROOT: usize = usize::MAX;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.index == other.index
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lowest estimate first, then the deepest node, then the earliest discovered.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Walks parent indices from `start` back to the root and returns the states in
/// root-first order.
///
/// Panics if an index has no entry: every recorded parent was itself recorded, so a
/// miss means the predecessor map was corrupted.
fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path = Vec::new();
    let mut i = start;
    while i != ROOT {
        let (node, value) = parents
            .get_index(i)
            .unwrap_or_else(|| panic!("predecessor map has no state at index {i}"));
        path.push(node.clone());
        i = parent(value);
    }
    path.reverse();
    path
}

/// A* over an implicit graph. Returns the path from `start` to the first popped state
/// satisfying `success`, together with its cost.
///
/// A state is pushed again whenever a cheaper way to it is found, even after it has
/// been expanded, and stale heap entries are skipped on pop. The first goal popped is
/// therefore optimal for any admissible heuristic.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (ROOT, Zero::zero()));
    let mut expanded = 0usize;
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let (node, &(_, c)) = parents
                .get_index(index)
                .expect("queued state missing from predecessor map");
            if success(node) {
                debug!(
                    "A* reached goal after expanding {} of {} discovered states",
                    expanded,
                    parents.len()
                );
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return Some((path, cost));
            }
            // A reopened state leaves its older, dearer heap entries behind. Only the
            // entry matching the recorded cost is expanded.
            if cost > c {
                continue;
            }
            expanded += 1;
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h;
            let n;
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    debug!(
        "A* exhausted {} discovered states without reaching a goal",
        parents.len()
    );
    None
}

/// Breadth-first search over an implicit unit-cost graph. States are marked as seen
/// when they are enqueued, so each state enters the queue at most once.
pub fn bfs<N, FN, IN, FS>(start: &N, mut successors: FN, mut success: FS) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), ROOT);
    let mut queue = VecDeque::from([0usize]);
    while let Some(index) = queue.pop_front() {
        let successors = {
            let (node, _) = parents
                .get_index(index)
                .expect("queued state missing from predecessor map");
            if success(node) {
                debug!("BFS reached goal after discovering {} states", parents.len());
                return Some(reverse_path(&parents, |&p| p, index));
            }
            successors(node)
        };
        for successor in successors {
            if let Vacant(e) = parents.entry(successor) {
                queue.push_back(e.index());
                e.insert(index);
            }
        }
    }
    debug!(
        "BFS exhausted {} discovered states without reaching a goal",
        parents.len()
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // A line graph 0 - 1 - 2 - ... - 9 with a shortcut 2 -> 7 of cost 3.
    fn line_successors(n: &i32) -> Vec<(i32, u32)> {
        let mut next = vec![];
        if *n > 0 {
            next.push((n - 1, 1));
        }
        if *n < 9 {
            next.push((n + 1, 1));
        }
        if *n == 2 {
            next.push((7, 3));
        }
        next
    }

    #[test]
    fn astar_takes_shortcut() {
        let (path, cost) = astar(
            &0,
            line_successors,
            |n| (9 - *n).unsigned_abs() / 3,
            |n| *n == 9,
        )
        .unwrap();
        assert_eq!(cost, 7);
        assert_eq!(path, vec![0, 1, 2, 7, 8, 9]);
    }

    #[test]
    fn astar_start_is_goal() {
        let (path, cost) = astar(&4, line_successors, |_| 0, |n| *n == 4).unwrap();
        assert_eq!(path, vec![4]);
        assert_eq!(cost, 0);
    }

    #[test]
    fn astar_unreachable() {
        assert!(astar(&0, line_successors, |_| 0, |n| *n == 42).is_none());
    }

    #[test]
    fn bfs_counts_edges_not_costs() {
        let path = bfs(
            &0,
            |n| line_successors(n).into_iter().map(|(m, _)| m),
            |n| *n == 8,
        )
        .unwrap();
        assert_eq!(path, vec![0, 1, 2, 7, 8]);
        assert!(bfs(&0, |n| line_successors(n).into_iter().map(|(m, _)| m), |n| *n == -1).is_none());
    }
}
