//! Loads the text mazes under `mazes/`. A maze file uses `%` for walls, `P` for the
//! start, `.` for goals and spaces for open floor. Cells are addressed as
//! `(row, col)` from the top left.
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected character {ch:?} at row {row}, column {col}")]
    UnexpectedChar { ch: char, row: usize, col: usize },
    #[error("maze has {0} start markers, expected exactly 1")]
    StartCount(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeLayout {
    /// Wall flags per row. Rows may differ in length.
    pub rows: Vec<Vec<bool>>,
    pub start: (usize, usize),
    /// Goal cells in reading order.
    pub dots: Vec<(usize, usize)>,
}

impl MazeLayout {
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

pub fn parse_maze(text: &str) -> Result<MazeLayout, ParseError> {
    let mut rows = Vec::new();
    let mut starts = Vec::new();
    let mut dots = Vec::new();
    for line in text.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
        let row = rows.len();
        let mut walls = Vec::with_capacity(line.len());
        for (col, ch) in line.chars().enumerate() {
            match ch {
                '%' => walls.push(true),
                ' ' => walls.push(false),
                'P' => {
                    starts.push((row, col));
                    walls.push(false);
                }
                '.' => {
                    dots.push((row, col));
                    walls.push(false);
                }
                _ => return Err(ParseError::UnexpectedChar { ch, row, col }),
            }
        }
        rows.push(walls);
    }
    match starts.as_slice() {
        [start] => Ok(MazeLayout {
            rows,
            start: *start,
            dots,
        }),
        _ => Err(ParseError::StartCount(starts.len())),
    }
}

fn load_maze(name: &str) -> MazeLayout {
    let text = fs::read_to_string(Path::new(&format!("./mazes/{}.txt", name)))
        .expect("Could not read maze file");
    parse_maze(&text).expect("Could not parse maze file")
}

/// Names of all fixtures relative to `mazes/` without extension, e.g. `corner/tiny`.
pub fn get_maze_names() -> Vec<String> {
    let root = Path::new("mazes/")
        .canonicalize()
        .expect("Failed to canonicalize root path");
    let mut names = Vec::new();
    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.expect("Could not get dir entry");
        let rel_path = entry
            .path()
            .strip_prefix(&root)
            .expect("Entry outside of maze root");
        if entry.file_type().is_file() && rel_path.extension().is_some_and(|e| e == "txt") {
            let name = rel_path.with_extension("");
            names.push(name.to_string_lossy().replace('\\', "/"));
        }
    }
    names
}

pub fn get_maze(name: &str) -> MazeLayout {
    if get_maze_names().iter().any(|n| n == name) {
        load_maze(name)
    } else {
        panic!("Could not load maze {name}!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_markers() {
        let layout = parse_maze("%%%%%\n%P .%\n%%%%%\n").unwrap();
        assert_eq!(layout.start, (1, 1));
        assert_eq!(layout.dots, vec![(1, 3)]);
        assert_eq!((layout.width(), layout.height()), (5, 3));
        assert!(layout.rows[0][2]);
        assert!(!layout.rows[1][2]);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse_maze("%P#%"),
            Err(ParseError::UnexpectedChar {
                ch: '#',
                row: 0,
                col: 2
            })
        );
        assert_eq!(parse_maze("%..%"), Err(ParseError::StartCount(0)));
        assert_eq!(parse_maze("PP"), Err(ParseError::StartCount(2)));
    }
}
