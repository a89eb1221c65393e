/// Runs every solver on the text mazes under `mazes/` and compares path lengths against
/// the known optimal tour lengths.
use maze_fixtures::{get_maze, get_maze_names, MazeLayout};
use maze_search::{
    astar, astar_corner, astar_multi, bfs, fast, path_cost, search, Cell, CornerHeuristic,
    CornerSolver, GoalSolver, GridAdapter, Maze, Query, SearchMethod,
};

fn load(name: &str) -> Maze {
    to_maze(&get_maze(name))
}

fn to_maze(layout: &MazeLayout) -> Maze {
    let mut maze = Maze::from_rows(&layout.rows);
    maze.set_start(Cell::from(layout.start));
    maze.set_objectives(layout.dots.iter().copied().map(Cell::from).collect());
    maze
}

fn cost(result: maze_search::error::Result<Option<Vec<Cell>>>) -> usize {
    path_cost(&result.unwrap().unwrap())
}

#[test]
fn fixtures_are_listed() {
    let names = get_maze_names();
    for name in ["single/tiny", "corner/tiny", "multi/tiny", "multi/walled_off"] {
        assert!(names.iter().any(|n| n == name), "{name} missing from {names:?}");
    }
}

#[test]
fn single_goal_mazes() {
    for (name, optimal) in [("single/tiny", 13), ("single/open", 13)] {
        let maze = load(name);
        assert_eq!(cost(bfs(&maze)), optimal, "{name}");
        assert_eq!(cost(astar(&maze)), optimal, "{name}");
        assert_eq!(cost(astar_multi(&maze)), optimal, "{name}");
        // With a single goal the greedy planner is plain A*.
        assert_eq!(cost(fast(&maze)), optimal, "{name}");
    }
}

#[test]
fn corner_mazes() {
    for (name, optimal) in [("corner/tiny", 16), ("corner/medium", 41)] {
        let maze = load(name);
        let path = astar_corner(&maze).unwrap().unwrap();
        assert!(maze.is_valid_path(&path), "{name}");
        assert_eq!(path_cost(&path), optimal, "{name}");
        assert_eq!(cost(bfs(&maze)), optimal, "{name}");
        assert_eq!(cost(astar_multi(&maze)), optimal, "{name}");

        let chain = CornerSolver::new(CornerHeuristic::NearestChain)
            .solve(&maze, &Query::from_grid(&maze))
            .unwrap()
            .unwrap();
        assert!(maze.is_valid_path(&chain), "{name}");
        assert!(path_cost(&chain) >= optimal, "{name}");
    }
}

#[test]
fn multi_goal_mazes() {
    for (name, optimal) in [("multi/tiny", 15), ("multi/small", 32)] {
        let maze = load(name);
        let multi = astar_multi(&maze).unwrap().unwrap();
        assert!(maze.is_valid_path(&multi), "{name}");
        assert_eq!(path_cost(&multi), optimal, "{name}");
        assert_eq!(cost(bfs(&maze)), optimal, "{name}");
        let greedy = fast(&maze).unwrap().unwrap();
        assert!(maze.is_valid_path(&greedy), "{name}");
        assert!(path_cost(&greedy) >= optimal, "{name}");
    }
}

#[test]
fn walled_off_goal_has_no_path() {
    let maze = load("multi/walled_off");
    for method in ["bfs", "astar_multi", "fast"] {
        assert_eq!(search(&maze, method), Ok(None), "{method}");
    }
}

#[test]
fn enclosed_start() {
    // A start boxed in by walls can reach nothing but itself.
    let mut maze = Maze::from_rows(&[
        vec![true, true, true, false, false],
        vec![true, false, true, false, false],
        vec![true, true, true, false, false],
    ]);
    maze.set_start(Cell::new(1, 1));
    maze.set_objectives(vec![Cell::new(0, 4)]);
    for method in [SearchMethod::Bfs, SearchMethod::Astar, SearchMethod::Fast] {
        assert_eq!(search(&maze, method.name()), Ok(None), "{method}");
    }
    // A goal under the start is visited without moving.
    maze.set_objectives(vec![Cell::new(1, 1)]);
    for method in [SearchMethod::Bfs, SearchMethod::Astar, SearchMethod::Fast] {
        assert_eq!(
            search(&maze, method.name()),
            Ok(Some(vec![Cell::new(1, 1)])),
            "{method}"
        );
    }
}

#[test]
fn start_with_a_single_exit() {
    // %%%%%%
    // %P  .%
    // %%%%%%
    // Enclosed start, one exit to the right, goal two cells further.
    let mut maze = Maze::from_rows(&[
        vec![true; 6],
        vec![true, false, false, false, false, true],
        vec![true; 6],
    ]);
    maze.set_start(Cell::new(1, 1));
    maze.set_objectives(vec![Cell::new(1, 4)]);
    assert_eq!(cost(bfs(&maze)), 3);
    assert_eq!(cost(astar(&maze)), 3);
    let greedy = fast(&maze).unwrap().unwrap();
    assert_eq!(greedy.last(), Some(&Cell::new(1, 4)));
    assert!(maze.is_valid_path(&greedy));
}

#[test]
fn every_fixture_yields_valid_paths() {
    for name in get_maze_names() {
        let maze = load(&name);
        let query = Query::from_grid(&maze);
        let reachable = query
            .goals
            .iter()
            .all(|goal| maze.reachable(query.start, *goal));
        for method in [SearchMethod::Bfs, SearchMethod::AstarMulti, SearchMethod::Fast] {
            match search(&maze, method.name()).unwrap() {
                Some(path) => assert!(query.is_valid_path(&maze, &path), "{name} {method}"),
                None => assert!(!reachable, "{name} {method}"),
            }
        }
    }
}
