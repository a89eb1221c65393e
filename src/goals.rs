use crate::Cell;

/// The goals that still have to be visited. Kept sorted and free of duplicates so
/// that two sets with the same members compare and hash equal no matter the order
/// in which they were discovered.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GoalSet(Vec<Cell>);

impl GoalSet {
    pub fn new<I: IntoIterator<Item = Cell>>(goals: I) -> GoalSet {
        let mut goals: Vec<Cell> = goals.into_iter().collect();
        goals.sort_unstable();
        goals.dedup();
        GoalSet(goals)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.0.binary_search(cell).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Cell] {
        &self.0
    }

    /// Removes `cell` if it is a member, returning whether it was.
    pub fn remove(&mut self, cell: &Cell) -> bool {
        match self.0.binary_search(cell) {
            Ok(ix) => {
                self.0.remove(ix);
                true
            }
            Err(_) => false,
        }
    }

    /// A copy of the set with `cell` taken out.
    pub fn without(&self, cell: &Cell) -> GoalSet {
        let mut reduced = self.clone();
        reduced.remove(cell);
        reduced
    }

    /// The member closest to `from` by Manhattan distance. Ties go to the smallest
    /// cell in (row, column) order.
    pub fn nearest(&self, from: &Cell) -> Option<Cell> {
        self.0
            .iter()
            .min_by_key(|goal| from.manhattan_distance(goal))
            .copied()
    }
}

impl FromIterator<Cell> for GoalSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> GoalSet {
        GoalSet::new(iter)
    }
}

impl<'a> IntoIterator for &'a GoalSet {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Node identity for every search that tracks outstanding goals. Reaching the same
/// cell with a different remaining set is a different state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MultiState {
    pub position: Cell,
    pub remaining: GoalSet,
}

impl MultiState {
    /// A goal under the starting position counts as visited straight away.
    pub fn new(position: Cell, remaining: GoalSet) -> MultiState {
        MultiState {
            position,
            remaining: remaining.without(&position),
        }
    }

    /// The state reached by moving onto `to`.
    pub fn step(&self, to: Cell) -> MultiState {
        MultiState {
            position: to,
            remaining: self.remaining.without(&to),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }
}
