//! Map loading and saving
//!
//! Maps are plain text: one row of cells per line, `#` for wall and
//! `.` for floor. The built-in arena ships embedded so the demo runs
//! without any files on disk.

use std::fs;
use std::path::Path;

use super::grid::{Cell, Grid};

/// The original 10x10 walled arena
pub const ARENA_MAP: &str = "\
##########
#........#
#..####..#
#..#..#..#
#..#..#..#
#..####..#
#........#
#..##....#
#........#
##########
";

/// Error type for map loading
#[derive(Debug)]
pub enum MapError {
    IoError(std::io::Error),
    /// Unexpected character at (x, z)
    BadCell(char, usize, usize),
    /// Line length differs from the first row
    RaggedRow(usize),
    Empty,
}

impl From<std::io::Error> for MapError {
    fn from(e: std::io::Error) -> Self {
        MapError::IoError(e)
    }
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::IoError(e) => write!(f, "IO error: {}", e),
            MapError::BadCell(c, x, z) => {
                write!(f, "unexpected character {:?} at column {}, row {}", c, x, z)
            }
            MapError::RaggedRow(z) => write!(f, "row {} has a different length", z),
            MapError::Empty => write!(f, "map has no rows"),
        }
    }
}

/// Parse a `#`/`.` text map into a grid
pub fn parse_map(text: &str) -> Result<Grid, MapError> {
    let rows: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
    let height = rows.len();
    let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
    if width == 0 || height == 0 {
        return Err(MapError::Empty);
    }

    let mut grid = Grid::walled(width, height);
    for (z, row) in rows.iter().enumerate() {
        if row.chars().count() != width {
            return Err(MapError::RaggedRow(z));
        }
        for (x, c) in row.chars().enumerate() {
            let cell = match c {
                '#' => Cell::Wall,
                '.' => Cell::Floor,
                other => return Err(MapError::BadCell(other, x, z)),
            };
            grid.set(x, z, cell);
        }
    }
    Ok(grid)
}

/// Render a grid back to its text form
pub fn format_map(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for z in 0..grid.height() {
        for x in 0..grid.width() {
            out.push(match grid.get(x, z) {
                Cell::Wall => '#',
                Cell::Floor => '.',
            });
        }
        out.push('\n');
    }
    out
}

/// Load a map from a text file
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<Grid, MapError> {
    let contents = fs::read_to_string(path)?;
    parse_map(&contents)
}

/// Save a map to a text file
pub fn save_map<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<(), MapError> {
    fs::write(path, format_map(grid))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_roundtrip() {
        let grid = parse_map(ARENA_MAP).unwrap();
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 10);
        assert_eq!(format_map(&grid), ARENA_MAP);
    }

    #[test]
    fn test_arena_border_is_walled() {
        let grid = parse_map(ARENA_MAP).unwrap();
        for x in 0..grid.width() {
            assert!(grid.is_wall(x, 0));
            assert!(grid.is_wall(x, grid.height() - 1));
        }
        for z in 0..grid.height() {
            assert!(grid.is_wall(0, z));
            assert!(grid.is_wall(grid.width() - 1, z));
        }
    }

    #[test]
    fn test_parse_rejects_bad_cell() {
        assert!(matches!(
            parse_map("##\n#x"),
            Err(MapError::BadCell('x', 1, 1))
        ));
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        assert!(matches!(parse_map("###\n##"), Err(MapError::RaggedRow(1))));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(parse_map(""), Err(MapError::Empty)));
        assert!(matches!(parse_map("\n\n"), Err(MapError::Empty)));
    }
}
