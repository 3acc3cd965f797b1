//! Cell grid for tile-based maps
//!
//! Pure data structure with minimal behavior: a flat buffer indexed by
//! (x, z) so map sizes can vary at runtime. World-space mapping lives
//! here too since every other module needs it.

use macroquad::prelude::*;

/// Side length of one cell in world units (wall cubes are this big)
pub const CELL_SIZE: f32 = 2.0;

/// One grid unit: solid wall cube or walkable floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Floor,
}

/// 2D map of cells, stored as a flat row-major buffer
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid filled entirely with walls
    pub fn walled(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Wall; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, z: usize) -> bool {
        x < self.width && z < self.height
    }

    /// Cell at (x, z); out-of-range reads as Wall so callers never walk
    /// off the edge of the buffer
    pub fn get(&self, x: usize, z: usize) -> Cell {
        if self.in_bounds(x, z) {
            self.cells[z * self.width + x]
        } else {
            Cell::Wall
        }
    }

    /// Set a cell, ignoring out-of-range writes
    pub fn set(&mut self, x: usize, z: usize, cell: Cell) {
        if self.in_bounds(x, z) {
            self.cells[z * self.width + x] = cell;
        }
    }

    pub fn is_wall(&self, x: usize, z: usize) -> bool {
        self.get(x, z) == Cell::Wall
    }

    /// Iterate all wall cell coordinates
    pub fn wall_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Wall)
            .map(move |(i, _)| (i % width, i / width))
    }

    /// World-space center of a cell's wall cube
    pub fn cell_center(x: usize, z: usize) -> Vec3 {
        vec3(
            x as f32 * CELL_SIZE,
            CELL_SIZE * 0.5,
            z as f32 * CELL_SIZE,
        )
    }

    /// Cell containing a world-space position, if inside the grid
    pub fn cell_at(&self, position: Vec3) -> Option<(usize, usize)> {
        let x = (position.x / CELL_SIZE).round();
        let z = (position.z / CELL_SIZE).round();
        if x < 0.0 || z < 0.0 {
            return None;
        }
        let (x, z) = (x as usize, z as usize);
        if self.in_bounds(x, z) {
            Some((x, z))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walled_grid_is_solid() {
        let grid = Grid::walled(4, 3);
        for z in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.get(x, z), Cell::Wall);
            }
        }
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut grid = Grid::walled(5, 5);
        grid.set(2, 3, Cell::Floor);
        assert_eq!(grid.get(2, 3), Cell::Floor);
        assert_eq!(grid.get(3, 2), Cell::Wall);
    }

    #[test]
    fn test_out_of_range_reads_as_wall() {
        let grid = Grid::walled(2, 2);
        assert!(grid.is_wall(10, 0));
        assert!(grid.is_wall(0, 10));
    }

    #[test]
    fn test_cell_at_matches_cell_center() {
        let grid = Grid::walled(8, 8);
        let center = Grid::cell_center(3, 5);
        assert_eq!(grid.cell_at(center), Some((3, 5)));
        // Anywhere inside the cube maps back to the same cell
        assert_eq!(grid.cell_at(center + vec3(0.9, 0.0, -0.9)), Some((3, 5)));
    }

    #[test]
    fn test_cell_at_outside_grid() {
        let grid = Grid::walled(4, 4);
        assert_eq!(grid.cell_at(vec3(-3.0, 1.0, 0.0)), None);
        assert_eq!(grid.cell_at(vec3(100.0, 1.0, 0.0)), None);
    }
}
