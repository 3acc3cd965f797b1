//! Application state and demo mode management
//!
//! Fixed set of demo modes sharing one world/player/fade state.
//! Switching modes (or regenerating) rebuilds the world and respawns.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::DemoConfig;
use crate::player::Player;
use crate::transition::RoomFade;
use crate::world::{self, Grid, MapError, World};

/// The available demo modes (one key each)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoMode {
    /// Static walled arena walked with collision
    Arena,
    /// Procedural room dungeon with corridor links and fade transitions
    Dungeon,
}

impl DemoMode {
    pub fn label(&self) -> &'static str {
        match self {
            DemoMode::Arena => "arena",
            DemoMode::Dungeon => "dungeon",
        }
    }
}

/// Main application state owned by the frame loop
pub struct App {
    pub mode: DemoMode,
    pub world: World,
    pub player: Player,
    pub fade: RoomFade,
    pub show_minimap: bool,
    pub config: DemoConfig,
    /// Static map parsed once at startup so rebuilds cannot fail
    arena: Grid,
    rng: StdRng,
}

impl App {
    /// Load the static map and start in arena mode
    pub fn new(config: DemoConfig) -> Result<Self, MapError> {
        let arena = match &config.map_file {
            Some(path) => world::load_map(path)?,
            None => world::parse_map(world::ARENA_MAP)?,
        };
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let world = World::from_grid(arena.clone());
        let player = Player::spawn_at(world.spawn, config.move_speed, config.mouse_sensitivity);
        let fade = RoomFade::new(
            world.room_at(world.spawn.0, world.spawn.1),
            config.fade_speed,
        );

        Ok(Self {
            mode: DemoMode::Arena,
            world,
            player,
            fade,
            show_minimap: true,
            config,
            arena,
            rng,
        })
    }

    /// Switch to a different mode, rebuilding its world
    pub fn set_mode(&mut self, mode: DemoMode) {
        if self.mode != mode {
            self.mode = mode;
            self.rebuild();
        }
    }

    /// Rebuild the active mode's world and respawn the player
    pub fn rebuild(&mut self) {
        self.world = match self.mode {
            DemoMode::Arena => World::from_grid(self.arena.clone()),
            DemoMode::Dungeon => world::generate(&self.config.dungeon, &mut self.rng),
        };
        self.player = Player::spawn_at(
            self.world.spawn,
            self.config.move_speed,
            self.config.mouse_sensitivity,
        );
        self.fade = RoomFade::new(
            self.world.room_at(self.world.spawn.0, self.world.spawn.1),
            self.config.fade_speed,
        );
        if self.mode == DemoMode::Dungeon {
            println!("Generated dungeon with {} rooms", self.world.rooms.len());
        }
    }
}
