//! Junk Blaster - a vertical arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, score, phases)
//! - `session`: Frame loop driving the simulation and its collaborators
//! - `renderer`: Draw-list building and the rendering backend trait
//! - `audio`: Sound effect ids and the audio backend trait
//! - `platform`: Input events and frame timing
//! - `assets`: Asset manifest and startup loading
//! - `headless`: Window-less backends for the native binary and tests

pub mod assets;
pub mod audio;
pub mod headless;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::Settings;

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks (and frames) per second
    pub const TICK_RATE: u32 = 60;

    /// Playfield dimensions in pixels
    pub const SCREEN_WIDTH: i32 = 1280;
    pub const SCREEN_HEIGHT: i32 = 720;

    /// Player ship
    pub const PLAYER_Y: i32 = 630;
    pub const PLAYER_WIDTH: i32 = 80;
    pub const PLAYER_HEIGHT: i32 = 100;
    /// Horizontal speed in px/tick
    pub const PLAYER_SPEED: i32 = 3;
    /// Where the ship is put back after leaving the screen
    pub const PLAYER_CLAMP_X: i32 = 1;

    /// Bullets
    pub const PROJECTILE_WIDTH: i32 = 2;
    pub const PROJECTILE_HEIGHT: i32 = 8;
    /// Upward speed in px/tick
    pub const PROJECTILE_SPEED: i32 = 3;
    /// Bullets above this line have left the play area
    pub const PROJECTILE_CULL_Y: i32 = 100;

    /// Falling obstacles
    pub const OBSTACLE_FALL_SPEED: i32 = 1;
    pub const ASTEROID_SIZE: i32 = 80;
    pub const JUNK_SIZE: i32 = 80;
    /// Recycled obstacles reappear with y in [min, max)
    pub const RESPAWN_Y_MIN: i32 = -30;
    pub const RESPAWN_Y_MAX: i32 = -20;
    /// Initial wave spawns with y in [0, this)
    pub const INITIAL_SPAWN_DEPTH: i32 = 350;

    /// Wave sizes
    pub const INITIAL_ASTEROIDS: usize = 10;
    pub const INITIAL_JUNK: usize = 10;
    pub const RESTART_ASTEROIDS: usize = 10;
    pub const RESTART_JUNK: usize = 5;

    /// Bullet backstop line near the top of the screen
    pub const BOUNDARY_Y: i32 = 5;

    /// Round rules
    pub const WIN_SCORE: u32 = 15;
    pub const START_HEALTH: i32 = 5;
    pub const LOSE_HEALTH: i32 = -1;
}

/// Screen extent as a vector
#[inline]
pub fn screen_size() -> IVec2 {
    IVec2::new(consts::SCREEN_WIDTH, consts::SCREEN_HEIGHT)
}
