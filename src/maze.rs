use crate::{Cell, GoalSet};
use core::fmt;
use petgraph::unionfind::UnionFind;

/// The narrow view of a maze that the solvers consume. Neighbour order should be
/// deterministic so that repeated searches return identical paths.
pub trait GridAdapter {
    type Neighbors: IntoIterator<Item = Cell>;

    fn start(&self) -> Cell;
    fn objectives(&self) -> &[Cell];
    /// Cells one unit step away from `cell` that are in bounds and not walls.
    fn neighbors(&self, cell: Cell) -> Self::Neighbors;
    /// Whether `cell` is in bounds and not a wall.
    fn contains(&self, cell: Cell) -> bool;

    /// Cheap test that may rule out a path before any search runs. Returning [true]
    /// when unsure is always allowed.
    fn reachable(&self, _from: Cell, _to: Cell) -> bool {
        true
    }

    /// Checks `path` against this grid's own start and objectives.
    fn is_valid_path(&self, path: &[Cell]) -> bool
    where
        Self: Sized,
    {
        Query::from_grid(self).is_valid_path(self, path)
    }
}

/// One search request. Solvers receive the start and goals through this value
/// instead of reading them from the grid, which lets sub-searches run against the
/// same grid without touching it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub start: Cell,
    pub goals: GoalSet,
}

impl Query {
    pub fn new<I: IntoIterator<Item = Cell>>(start: Cell, goals: I) -> Query {
        Query {
            start,
            goals: GoalSet::new(goals),
        }
    }

    pub fn single(start: Cell, goal: Cell) -> Query {
        Query::new(start, [goal])
    }

    pub fn from_grid<G: GridAdapter>(grid: &G) -> Query {
        Query::new(grid.start(), grid.objectives().iter().copied())
    }

    /// A path is valid when it begins at the start, moves one neighbour at a time
    /// and passes over every goal at least once.
    pub fn is_valid_path<G: GridAdapter>(&self, grid: &G, path: &[Cell]) -> bool {
        if path.first() != Some(&self.start) {
            return false;
        }
        let connected = path
            .windows(2)
            .all(|step| step[0].is_adjacent(&step[1]) && grid.contains(step[1]));
        connected && self.goals.iter().all(|goal| path.contains(goal))
    }
}

/// [Maze] keeps the wall layout of a rectangular grid together with a start and a
/// list of objectives. Connected components are maintained in a [UnionFind]
/// structure so that unreachable goals are detected without searching.
#[derive(Clone, Debug)]
pub struct Maze {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    start: Cell,
    objectives: Vec<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Maze {
    /// Creates a `height` by `width` maze where every cell is a wall if `blocked`.
    /// Start defaults to (0, 0) and there are no objectives.
    pub fn new(width: usize, height: usize, blocked: bool) -> Maze {
        let mut maze = Maze {
            width,
            height,
            walls: vec![blocked; width * height],
            start: Cell::default(),
            objectives: Vec::new(),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        maze.generate_components();
        maze
    }

    /// Builds a maze from rows of wall flags. Rows shorter than the longest one are
    /// padded with walls.
    pub fn from_rows(rows: &[Vec<bool>]) -> Maze {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut walls = vec![true; width * height];
        for (r, row) in rows.iter().enumerate() {
            walls[r * width..r * width + row.len()].copy_from_slice(row);
        }
        let mut maze = Maze {
            width,
            height,
            walls,
            start: Cell::default(),
            objectives: Vec::new(),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        maze.generate_components();
        maze
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set_start(&mut self, start: Cell) {
        self.start = start;
    }

    pub fn set_objectives(&mut self, objectives: Vec<Cell>) {
        self.objectives = objectives;
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    fn get_ix(&self, cell: Cell) -> usize {
        cell.row * self.width + cell.col
    }

    /// Out-of-bounds cells count as walls.
    pub fn is_wall(&self, cell: Cell) -> bool {
        !self.in_bounds(cell) || self.walls[self.get_ix(cell)]
    }

    /// Updates a position on the grid. Joins newly connected components and flags the
    /// components as dirty if they are (potentially) broken apart into multiple.
    pub fn set(&mut self, cell: Cell, blocked: bool) {
        if !self.in_bounds(cell) {
            return;
        }
        let ix = self.get_ix(cell);
        if blocked {
            if !self.walls[ix] {
                self.components_dirty = true;
            }
        } else {
            for n in cell.neumann_neighborhood() {
                if !self.is_wall(n) {
                    self.components.union(ix, self.get_ix(n));
                }
            }
        }
        self.walls[ix] = blocked;
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn get_component(&self, cell: Cell) -> usize {
        self.components.find(self.get_ix(cell))
    }

    /// Checks if start and goal are on different components.
    pub fn unreachable(&self, start: Cell, goal: Cell) -> bool {
        if self.is_wall(start) || self.is_wall(goal) {
            return true;
        }
        self.get_component(start) != self.get_component(goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open neighbours to the same
    /// components. Only the down and right neighbours need linking.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = Cell::new(row, col);
                if self.is_wall(cell) {
                    continue;
                }
                let ix = self.get_ix(cell);
                for n in [Cell::new(row + 1, col), Cell::new(row, col + 1)] {
                    if !self.is_wall(n) {
                        self.components.union(ix, self.get_ix(n));
                    }
                }
            }
        }
    }
}

/// Draws the maze in the text fixture format: `%` walls, `P` the start, `.` the
/// objectives.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.height {
            let line = (0..self.width)
                .map(|col| {
                    let cell = Cell::new(row, col);
                    if cell == self.start {
                        'P'
                    } else if self.objectives.contains(&cell) {
                        '.'
                    } else if self.is_wall(cell) {
                        '%'
                    } else {
                        ' '
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl GridAdapter for Maze {
    type Neighbors = Vec<Cell>;

    fn start(&self) -> Cell {
        self.start
    }

    fn objectives(&self) -> &[Cell] {
        &self.objectives
    }

    fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        cell.neumann_neighborhood()
            .filter(|n| !self.is_wall(*n))
            .collect()
    }

    fn contains(&self, cell: Cell) -> bool {
        !self.is_wall(cell)
    }

    /// While components are dirty a wall may have split them, so the answer falls
    /// back to [true] rather than risk reporting a reachable goal as unreachable.
    fn reachable(&self, from: Cell, to: Cell) -> bool {
        if self.components_dirty {
            return self.contains(from) && self.contains(to);
        }
        !self.unreachable(from, to)
    }
}
