//! Player state and first-person movement
//!
//! Position is the eye point; the collision module wraps it in a box
//! using the collider constants below. Orientation is yaw/pitch in
//! radians, updated from the mouse delta each frame.

use macroquad::prelude::*;

use crate::world::Grid;

/// Half-width of the player's collision box
pub const PLAYER_RADIUS: f32 = 0.4;
/// Full height of the player's collision box
pub const PLAYER_HEIGHT: f32 = 1.8;
/// Eye height above the floor plane
pub const EYE_HEIGHT: f32 = 1.8;

/// Keep the camera from flipping over the vertical
const PITCH_LIMIT: f32 = 1.5;

#[derive(Debug, Clone)]
pub struct Player {
    /// Eye position in world space
    pub position: Vec3,
    /// Heading in radians; 0 faces -z, positive turns right
    pub yaw: f32,
    /// Look elevation in radians, clamped to avoid the poles
    pub pitch: f32,
    /// Walk speed in world units per second
    pub speed: f32,
    pub mouse_sensitivity: f32,
}

impl Player {
    /// Spawn standing on a cell, facing -z like the original demo
    pub fn spawn_at(cell: (usize, usize), speed: f32, mouse_sensitivity: f32) -> Self {
        let center = Grid::cell_center(cell.0, cell.1);
        Self {
            position: vec3(center.x, EYE_HEIGHT, center.z),
            yaw: 0.0,
            pitch: 0.0,
            speed,
            mouse_sensitivity,
        }
    }

    /// Apply one frame of mouse movement
    pub fn look(&mut self, delta: Vec2) {
        self.yaw += delta.x * self.mouse_sensitivity;
        self.pitch = (self.pitch - delta.y * self.mouse_sensitivity)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// View direction including pitch, for the camera target
    pub fn forward(&self) -> Vec3 {
        vec3(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
    }

    /// Movement basis on the ground plane: (forward, right)
    pub fn walk_basis(&self) -> (Vec3, Vec3) {
        let forward = vec3(self.yaw.sin(), 0.0, -self.yaw.cos());
        let right = vec3(self.yaw.cos(), 0.0, self.yaw.sin());
        (forward, right)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_at_cell_center() {
        let player = Player::spawn_at((2, 2), 6.0, 0.003);
        assert_eq!(player.position, vec3(4.0, EYE_HEIGHT, 4.0));
        let grid = Grid::walled(10, 10);
        assert_eq!(grid.cell_at(player.position), Some((2, 2)));
    }

    #[test]
    fn test_initial_heading_faces_negative_z() {
        let player = Player::spawn_at((1, 1), 6.0, 0.003);
        let (forward, right) = player.walk_basis();
        assert!((forward - vec3(0.0, 0.0, -1.0)).length() < 1e-6);
        assert!((right - vec3(1.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_pitch_clamps_at_limit() {
        let mut player = Player::spawn_at((1, 1), 6.0, 0.003);
        player.look(vec2(0.0, -10_000.0));
        assert!(player.pitch <= PITCH_LIMIT);
        player.look(vec2(0.0, 10_000.0));
        assert!(player.pitch >= -PITCH_LIMIT);
    }

    #[test]
    fn test_walk_basis_is_orthonormal() {
        let mut player = Player::spawn_at((1, 1), 6.0, 0.003);
        player.look(vec2(123.0, 45.0));
        let (forward, right) = player.walk_basis();
        assert!(forward.dot(right).abs() < 1e-5);
        assert!((forward.length() - 1.0).abs() < 1e-5);
        assert!((right.length() - 1.0).abs() < 1e-5);
    }
}
