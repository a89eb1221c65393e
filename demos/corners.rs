use env_logger::{Builder, Env};
use maze_search::{
    path_cost, Cell, CornerHeuristic, CornerSolver, GoalSolver, Maze, Query,
};

// Visits the four corners of a walled room with both corner heuristics. The nearest
// chain is quick to evaluate but may settle for a longer tour.
fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    const W: usize = 12;
    const H: usize = 8;
    let mut maze = Maze::new(W, H, false);
    for row in 2..6 {
        maze.set(Cell::new(row, 4), true);
    }
    for col in 6..10 {
        maze.set(Cell::new(4, col), true);
    }
    maze.update();
    let start = Cell::new(3, 2);
    let corners = [
        Cell::new(0, 0),
        Cell::new(0, W - 1),
        Cell::new(H - 1, 0),
        Cell::new(H - 1, W - 1),
    ];
    maze.set_start(start);
    maze.set_objectives(corners.to_vec());
    print!("{}", maze);
    let query = Query::new(start, corners);
    for heuristic in [CornerHeuristic::SpanningTree, CornerHeuristic::NearestChain] {
        match CornerSolver::new(heuristic).solve(&maze, &query) {
            Ok(Some(path)) => println!("{:?}: {} moves", heuristic, path_cost(&path)),
            Ok(None) => println!("{:?}: no tour exists", heuristic),
            Err(e) => eprintln!("{:?}: {}", heuristic, e),
        }
    }
}
