//! World module - grid maps, rooms, and procedural generation
//!
//! The `World` owns everything the frame loop reads: the cell grid,
//! the carved rooms (empty for static maps), and the spawn cell. It is
//! passed by reference into collision, transition, and rendering.

mod generator;
mod grid;
mod level;

pub use generator::*;
pub use grid::*;
pub use level::*;

use macroquad::prelude::Vec3;

/// A carved room on the coarse room-grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub id: usize,
    /// Coarse room-grid coordinates
    pub rx: usize,
    pub rz: usize,
    /// Cell origin of the carved rectangle
    pub x: usize,
    pub z: usize,
    pub size: usize,
}

impl Room {
    /// Center cell of the carved rectangle
    pub fn center(&self) -> (usize, usize) {
        (self.x + self.size / 2, self.z + self.size / 2)
    }

    /// Whether a cell lies inside the carved rectangle
    pub fn contains(&self, x: usize, z: usize) -> bool {
        x >= self.x && x < self.x + self.size && z >= self.z && z < self.z + self.size
    }
}

/// Everything that makes up one playable map
#[derive(Debug, Clone)]
pub struct World {
    pub grid: Grid,
    pub rooms: Vec<Room>,
    /// Cell the player starts in
    pub spawn: (usize, usize),
}

impl World {
    /// Wrap a static grid; the spawn is the first floor cell found
    pub fn from_grid(grid: Grid) -> Self {
        let mut spawn = (1, 1);
        'scan: for z in 0..grid.height() {
            for x in 0..grid.width() {
                if !grid.is_wall(x, z) {
                    spawn = (x, z);
                    break 'scan;
                }
            }
        }
        Self {
            grid,
            rooms: Vec::new(),
            spawn,
        }
    }

    /// Room containing a cell, if any (corridors belong to no room)
    pub fn room_at(&self, x: usize, z: usize) -> Option<usize> {
        self.rooms
            .iter()
            .find(|room| room.contains(x, z))
            .map(|room| room.id)
    }

    /// Room containing a world-space position
    pub fn room_at_world(&self, position: Vec3) -> Option<usize> {
        let (x, z) = self.grid.cell_at(position)?;
        self.room_at(x, z)
    }
}
