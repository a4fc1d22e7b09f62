//! Boom Snake - steer the marine, collect the imps, stay off the walls
//!
//! Core modules:
//! - `sim`: Entities, bounding boxes, score and milestones
//! - `scene`: Start/Main/Death scene state machine and its manager
//! - `game`: Per-frame loop (input → update → render)
//! - `renderer` / `audio` / `platform`: Sinks and sources the host provides
//! - `settings`: JSON-backed preferences

pub mod audio;
pub mod demo;
pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use scene::{SceneId, SceneManager};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Render area
    pub const FIELD_WIDTH: f32 = 1280.0;
    pub const FIELD_HEIGHT: f32 = 720.0;

    /// Player dies when its position leaves this box
    pub const PLAY_MIN_X: f32 = 20.0;
    pub const PLAY_MAX_X: f32 = 1260.0;
    pub const PLAY_MIN_Y: f32 = 20.0;
    pub const PLAY_MAX_Y: f32 = 700.0;

    /// Collectible respawn range (inclusive, whole pixels)
    pub const SPAWN_MIN_X: i32 = 60;
    pub const SPAWN_MAX_X: i32 = 1220;
    pub const SPAWN_MIN_Y: i32 = 60;
    pub const SPAWN_MAX_Y: i32 = 650;

    /// Player defaults
    pub const PLAYER_SPAWN_X: f32 = 600.0;
    pub const PLAYER_SPAWN_Y: f32 = 300.0;
    pub const PLAYER_WIDTH: u32 = 60;
    pub const PLAYER_HEIGHT: u32 = 52;
    pub const PLAYER_START_SPEED: f32 = 200.0;
    pub const PLAYER_START_HEALTH: i32 = 100;
    /// Speed gained per collection (pixels/s)
    pub const SPEED_INCREMENT: f32 = 50.0;

    /// Collectible defaults
    pub const COLLECTIBLE_WIDTH: u32 = 80;
    pub const COLLECTIBLE_HEIGHT: u32 = 80;
    pub const COLLECTIBLE_START_X: f32 = 200.0;
    pub const COLLECTIBLE_START_Y: f32 = 200.0;

    /// Upper bound on a single frame's delta time (seconds)
    pub const DEFAULT_MAX_FRAME_DT: f32 = 0.1;
}
