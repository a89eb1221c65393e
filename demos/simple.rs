use env_logger::{Builder, Env};
use maze_search::{astar, Cell, Maze};

// In this example a path is found on a maze with shape
// %%%%%
// %P  %
// % % %
// %  .%
// %%%%%
// where
// - % marks a wall
// - P marks the start
// - . marks the goal
fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    let mut maze = Maze::new(5, 5, true);
    for row in 1..4 {
        for col in 1..4 {
            maze.set(Cell::new(row, col), false);
        }
    }
    maze.set(Cell::new(2, 2), true);
    maze.update();
    maze.set_start(Cell::new(1, 1));
    maze.set_objectives(vec![Cell::new(3, 3)]);
    print!("{}", maze);
    match astar(&maze) {
        Ok(Some(path)) => {
            println!("A path has been found:");
            for cell in path {
                println!("{}", cell);
            }
        }
        Ok(None) => println!("No path exists"),
        Err(e) => eprintln!("Invalid query: {}", e),
    }
}
