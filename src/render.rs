//! 3D scene drawing and screen overlays
//!
//! Thin immediate-mode layer: one cube per wall cell, a floor slab per
//! walkable cell, then HUD text and the fade rectangle in screen space.

use macroquad::prelude::*;

use crate::player::Player;
use crate::world::{Grid, World, CELL_SIZE};

/// First-person camera for the player's eye and view direction
pub fn camera(player: &Player) -> Camera3D {
    Camera3D {
        position: player.position,
        target: player.position + player.forward(),
        up: vec3(0.0, 1.0, 0.0),
        fovy: 60.0,
        ..Default::default()
    }
}

/// Generate the wall texture in memory: an 8x8-tile checkerboard
pub fn checkerboard_texture() -> Texture2D {
    const SIZE: usize = 64;
    const TILE: usize = 8;
    let mut pixels = Vec::with_capacity(SIZE * SIZE * 4);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let v: u8 = if (x / TILE + y / TILE) % 2 == 0 { 92 } else { 118 };
            pixels.extend_from_slice(&[v, v, v + 6, 255]);
        }
    }
    let texture = Texture2D::from_rgba8(SIZE as u16, SIZE as u16, &pixels);
    texture.set_filter(FilterMode::Nearest);
    texture
}

/// Draw every cell of the world: wall cubes and floor slabs
pub fn draw_world(world: &World, wall_texture: &Texture2D) {
    let grid = &world.grid;
    let wall_size = Vec3::splat(CELL_SIZE);
    for z in 0..grid.height() {
        for x in 0..grid.width() {
            let center = Grid::cell_center(x, z);
            if grid.is_wall(x, z) {
                draw_cube(center, wall_size, Some(wall_texture), WHITE);
            } else {
                draw_cube(
                    vec3(center.x, 0.05, center.z),
                    vec3(CELL_SIZE, 0.1, CELL_SIZE),
                    None,
                    LIGHTGRAY,
                );
            }
        }
    }
}

/// Full-screen black overlay driven by the fade scalar
pub fn draw_fade(fade: f32) {
    if fade > 0.0 {
        draw_rectangle(
            0.0,
            0.0,
            screen_width(),
            screen_height(),
            Color::new(0.0, 0.0, 0.0, fade),
        );
    }
}

/// Controls and status text in the top-left corner
pub fn draw_hud(mode_label: &str, room: Option<usize>, room_count: usize, fading: bool) {
    draw_text("WASD to move, mouse to look", 10.0, 22.0, 20.0, BLACK);
    draw_text(
        "[1] arena  [2] dungeon  [R] regenerate  [M] minimap  [P] dump map  [TAB] cursor  [ESC] exit",
        10.0,
        44.0,
        20.0,
        BLACK,
    );
    let mut status = match room {
        Some(room) => format!("mode: {}   room {} of {}", mode_label, room + 1, room_count),
        None => format!("mode: {}", mode_label),
    };
    if fading {
        status.push_str("   (fading)");
    }
    draw_text(&status, 10.0, 66.0, 20.0, BLACK);
}
