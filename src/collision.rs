//! Axis-aligned collision between the player volume and wall cubes
//!
//! Every wall cell is a unit-half-extent cube on its world-space
//! center; the player is a box around the eye position. Movement is
//! all-or-nothing: a displacement that would overlap any wall is
//! rejected whole, with no axis-separated sliding. The check is a
//! brute-force scan over the grid, which is fine at demo map sizes.

use macroquad::prelude::*;

use crate::player::{PLAYER_HEIGHT, PLAYER_RADIUS};
use crate::world::{Grid, CELL_SIZE};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center_half(center: Vec3, half: Vec3) -> Self {
        Self::new(center - half, center + half)
    }

    /// Overlap test: boxes intersect when no axis separates them
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// Bounding box of a wall cell's cube
pub fn wall_box(x: usize, z: usize) -> Aabb {
    Aabb::from_center_half(Grid::cell_center(x, z), Vec3::splat(CELL_SIZE * 0.5))
}

/// Bounding box of the player at an eye position
pub fn player_box(position: Vec3) -> Aabb {
    Aabb::from_center_half(
        position,
        vec3(PLAYER_RADIUS, PLAYER_HEIGHT * 0.5, PLAYER_RADIUS),
    )
}

/// Whether the player volume at `position` overlaps any wall cell
pub fn is_blocked(grid: &Grid, position: Vec3) -> bool {
    let player = player_box(position);
    grid.wall_cells()
        .any(|(x, z)| player.intersects(&wall_box(x, z)))
}

/// Accept a move to `to` only when it collides with nothing;
/// otherwise the player stays at `from` this frame
pub fn try_move(grid: &Grid, from: Vec3, to: Vec3) -> Vec3 {
    if is_blocked(grid, to) {
        from
    } else {
        to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{parse_map, ARENA_MAP};

    #[test]
    fn test_intersects_overlapping_boxes() {
        let a = Aabb::new(vec3(0.0, 0.0, 0.0), vec3(2.0, 2.0, 2.0));
        let b = Aabb::new(vec3(1.0, 1.0, 1.0), vec3(3.0, 3.0, 3.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_separated_boxes() {
        let a = Aabb::new(vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 1.0));
        let b = Aabb::new(vec3(2.0, 0.0, 0.0), vec3(3.0, 1.0, 1.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_blocked_on_wall_center() {
        let grid = parse_map(ARENA_MAP).unwrap();
        // (0, 0) is a border wall; standing on its center must collide
        let on_wall = Grid::cell_center(0, 0) + vec3(0.0, 0.9, 0.0);
        assert!(is_blocked(&grid, on_wall));
    }

    #[test]
    fn test_open_room_interior_is_free() {
        let grid = parse_map(ARENA_MAP).unwrap();
        // (1, 1) is floor with floor at (2, 1) and (1, 2); nudged off
        // its center the 0.4 radius box clears the border walls
        let interior = vec3(2.5, 0.9, 2.5);
        assert!(!is_blocked(&grid, interior));
    }

    #[test]
    fn test_rejected_move_keeps_position() {
        let grid = parse_map(ARENA_MAP).unwrap();
        let start = vec3(2.5, 0.9, 2.5);
        let into_wall = vec3(0.0, 0.9, 2.0);
        assert_eq!(try_move(&grid, start, into_wall), start);
    }

    #[test]
    fn test_accepted_move_updates_position() {
        let grid = parse_map(ARENA_MAP).unwrap();
        let start = vec3(2.5, 0.9, 2.5);
        let target = start + vec3(0.2, 0.0, 0.2);
        assert_eq!(try_move(&grid, start, target), target);
    }
}
