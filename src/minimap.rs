//! Minimap overlay
//!
//! Top-right panel drawn in screen space after the 3D pass: one
//! rectangle per cell, the current room highlighted, and the player
//! as a dot with a facing line.

use macroquad::prelude::*;

use crate::player::Player;
use crate::world::{Cell, World, CELL_SIZE};

/// Pixels per map cell
const SCALE: f32 = 6.0;
const MARGIN: f32 = 12.0;

pub fn draw_minimap(world: &World, player: &Player, current_room: Option<usize>) {
    let grid = &world.grid;
    let map_w = grid.width() as f32 * SCALE;
    let map_h = grid.height() as f32 * SCALE;
    let x0 = screen_width() - map_w - MARGIN;
    let y0 = MARGIN;

    // Backing panel, slightly larger than the cells
    draw_rectangle(
        x0 - 2.0,
        y0 - 2.0,
        map_w + 4.0,
        map_h + 4.0,
        Color::new(0.05, 0.05, 0.07, 0.85),
    );

    for z in 0..grid.height() {
        for x in 0..grid.width() {
            let color = match grid.get(x, z) {
                Cell::Wall => Color::from_rgba(70, 72, 82, 255),
                Cell::Floor => {
                    let room = world.room_at(x, z);
                    if room.is_some() && room == current_room {
                        Color::from_rgba(150, 190, 140, 255)
                    } else if room.is_some() {
                        Color::from_rgba(190, 180, 150, 255)
                    } else {
                        Color::from_rgba(200, 200, 200, 255)
                    }
                }
            };
            draw_rectangle(
                x0 + x as f32 * SCALE,
                y0 + z as f32 * SCALE,
                SCALE,
                SCALE,
                color,
            );
        }
    }

    // Player marker: world x maps to panel x, world z to panel y.
    // Cell (0, 0) is centered on the world origin, hence the half-cell shift.
    let cx = x0 + (player.position.x / CELL_SIZE + 0.5) * SCALE;
    let cy = y0 + (player.position.z / CELL_SIZE + 0.5) * SCALE;
    let (forward, _) = player.walk_basis();
    draw_line(
        cx,
        cy,
        cx + forward.x * SCALE * 2.0,
        cy + forward.z * SCALE * 2.0,
        1.5,
        YELLOW,
    );
    draw_circle(cx, cy, SCALE * 0.45, RED);
}
