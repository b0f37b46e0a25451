//! Avoider - a single-screen arcade avoidance game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ship, asteroids, collisions, session state)
//! - `platform`: Collaborator traits and the fixed-rate frame driver
//! - `renderer`: Scene building and the macroquad drawing backend
//! - `audio`: Procedural sound synthesis and playback
//! - `settings`: Settings file loading and audio preferences
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{AudioError, SettingsError};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    /// Target frame rate of the fixed-rate loop
    pub const FPS: u32 = 60;

    /// Ship movement per tick along each pressed axis
    pub const SHIP_SPEED: f32 = 5.0;
    /// Ship sprite bounds (used for screen clamping)
    pub const SHIP_WIDTH: f32 = 50.0;
    pub const SHIP_HEIGHT: f32 = 38.0;
    /// Ship collision radius
    pub const SHIP_RADIUS: f32 = 20.0;

    /// Asteroid sprite bounds (used for spawn placement and exit checks)
    pub const ASTEROID_WIDTH: f32 = 40.0;
    pub const ASTEROID_HEIGHT: f32 = 40.0;
    /// Asteroid collision radius
    pub const ASTEROID_RADIUS: f32 = 20.0;
    /// Live asteroids during play
    pub const ASTEROID_COUNT: usize = 8;
    /// Asteroid speed range, integer units per tick, max exclusive
    pub const ASTEROID_SPEED_MIN: u32 = 1;
    pub const ASTEROID_SPEED_MAX: u32 = 15;

    /// Background music volume (fraction of max)
    pub const MUSIC_VOLUME: f32 = 0.4;
}
