use env_logger::{Builder, Env};
use maze_search::{path_cost, search, Cell, Maze, SearchMethod};

// In this example all dots of a small maze are collected with every method that
// accepts more than one goal:
// %%%%%%%%
// %P  .% %
// % %%   %
// %.  .%.%
// %%%%%%%%
// The optimal methods agree on the length; the fast planner may take a detour.
fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    let layout = [
        "%%%%%%%%",
        "%P  .% %",
        "% %%   %",
        "%.  .%.%",
        "%%%%%%%%",
    ];
    let rows: Vec<Vec<bool>> = layout
        .iter()
        .map(|line| line.chars().map(|c| c == '%').collect())
        .collect();
    let mut maze = Maze::from_rows(&rows);
    maze.set_start(Cell::new(1, 1));
    maze.set_objectives(vec![
        Cell::new(1, 4),
        Cell::new(3, 1),
        Cell::new(3, 4),
        Cell::new(3, 6),
    ]);
    for method in [SearchMethod::Bfs, SearchMethod::AstarMulti, SearchMethod::Fast] {
        match search(&maze, method.name()) {
            Ok(Some(path)) => {
                println!("{}: {} moves", method, path_cost(&path));
                let cells: Vec<String> = path.iter().map(Cell::to_string).collect();
                println!("  {}", cells.join(" "));
            }
            Ok(None) => println!("{}: no path", method),
            Err(e) => eprintln!("{}: {}", method, e),
        }
    }
}
