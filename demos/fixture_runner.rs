use env_logger::{Builder, Env};
use log::info;
use maze_fixtures::{get_maze, get_maze_names};
use maze_search::{path_cost, solve, Cell, Maze, Query, SearchConfig, SearchMethod};
use std::env;
use std::time::Instant;

// Runs a search method over every maze under `mazes/`, or over the mazes named on the
// command line. The method defaults to `astar_multi` and can be set with MAZE_METHOD.
fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    let method = env::var("MAZE_METHOD").unwrap_or_else(|_| "astar_multi".to_owned());
    let config = match SearchConfig::from_method_name(&method) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    let mut names: Vec<String> = env::args().skip(1).collect();
    if names.is_empty() {
        names = get_maze_names();
    }
    for name in names {
        let layout = get_maze(&name);
        let mut maze = Maze::from_rows(&layout.rows);
        maze.set_start(Cell::from(layout.start));
        maze.set_objectives(layout.dots.iter().copied().map(Cell::from).collect());
        let query = Query::from_grid(&maze);
        let method = if config.method.accepts_goal_count(query.goals.len()) {
            config.method
        } else {
            SearchMethod::Bfs
        };
        let config = SearchConfig {
            method,
            ..config.clone()
        };
        let now = Instant::now();
        let result = solve(&maze, &query, &config);
        let elapsed = now.elapsed();
        match result {
            Ok(Some(path)) => info!(
                "{name}: {} found {} moves in {:.2?}",
                config.method,
                path_cost(&path),
                elapsed
            ),
            Ok(None) => info!("{name}: {} found no path", config.method),
            Err(e) => info!("{name}: {}", e),
        }
    }
}
