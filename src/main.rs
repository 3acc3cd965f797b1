//! Dunwalk: first-person grid-dungeon demo
//!
//! A Quake-style walker over tile maps:
//! - Static walled arena or procedural room dungeon, selected at runtime
//! - AABB collision against wall cubes (whole moves accepted or rejected)
//! - Minimap overlay and fade transitions on room changes

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod collision;
mod config;
mod minimap;
mod player;
mod render;
mod transition;
mod world;

use macroquad::prelude::*;

use app::{App, DemoMode};
use config::{DemoConfig, CONFIG_PATH};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Dunwalk v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = match DemoConfig::load_or_default(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}: {}", CONFIG_PATH, e);
            std::process::exit(1);
        }
    };

    let mut app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to load map: {}", e);
            std::process::exit(1);
        }
    };

    let wall_texture = render::checkerboard_texture();

    let mut grabbed = true;
    set_cursor_grab(true);
    show_mouse(false);
    let mut last_mouse = Vec2::from(mouse_position());

    println!("=== Dunwalk v{} ===", VERSION);
    println!(
        "[1] arena  [2] dungeon  [R] regenerate  [M] minimap  [P] dump map  [TAB] cursor  [ESC] exit"
    );

    loop {
        let dt = get_frame_time();

        // Demo keys
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::Key1) {
            app.set_mode(DemoMode::Arena);
        }
        if is_key_pressed(KeyCode::Key2) {
            app.set_mode(DemoMode::Dungeon);
        }
        if is_key_pressed(KeyCode::R) {
            app.rebuild();
        }
        if is_key_pressed(KeyCode::M) {
            app.show_minimap = !app.show_minimap;
        }
        if is_key_pressed(KeyCode::P) {
            match world::save_map(&app.world.grid, "dunwalk-map.txt") {
                Ok(()) => println!("Map saved to dunwalk-map.txt"),
                Err(e) => eprintln!("Failed to save map: {}", e),
            }
        }
        if is_key_pressed(KeyCode::Tab) {
            grabbed = !grabbed;
            set_cursor_grab(grabbed);
            show_mouse(!grabbed);
        }

        // Mouse look from the frame-to-frame cursor delta
        let mouse = Vec2::from(mouse_position());
        let mouse_delta = mouse - last_mouse;
        last_mouse = mouse;
        if grabbed {
            app.player.look(mouse_delta);
        }

        // Movement: build the wish direction on the ground plane, then
        // accept or reject the whole displacement against the walls
        let (forward, right) = app.player.walk_basis();
        let mut wish = Vec3::ZERO;
        if is_key_down(KeyCode::W) {
            wish += forward;
        }
        if is_key_down(KeyCode::S) {
            wish -= forward;
        }
        if is_key_down(KeyCode::D) {
            wish += right;
        }
        if is_key_down(KeyCode::A) {
            wish -= right;
        }
        if wish.length_squared() > 0.0 {
            let candidate =
                app.player.position + wish.normalize() * app.player.speed * dt;
            app.player.position =
                collision::try_move(&app.world.grid, app.player.position, candidate);
        }

        // Room transitions drive the fade overlay
        let derived = app.world.room_at_world(app.player.position);
        app.fade.update(dt, derived);

        // Draw: 3D scene, then 2D overlays
        clear_background(SKYBLUE);

        set_camera(&render::camera(&app.player));
        render::draw_world(&app.world, &wall_texture);
        set_default_camera();

        if app.show_minimap {
            minimap::draw_minimap(&app.world, &app.player, app.fade.current_room);
        }
        render::draw_hud(
            app.mode.label(),
            app.fade.current_room,
            app.world.rooms.len(),
            app.fade.in_transition(),
        );
        render::draw_fade(app.fade.fade);

        next_frame().await;
    }

    set_cursor_grab(false);
    show_mouse(true);
}
