//! Sky Dodge - A side-scrolling obstacle-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (scaling, obstacles, craft, collisions, ticks)
//! - `session`: Composition root exposing reset, resize, input and snapshots
//! - `platform`: Input signal mapping and scoped listener attachment
//! - `audio`: Background music cues driven by game events
//! - `settings`: Data-driven playfield configuration

pub mod audio;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use session::{GameSession, Snapshot};
pub use settings::{ConfigError, PlayfieldConfig};

/// Game configuration constants (reference playfield units)
pub mod consts {
    /// Fixed simulation tick rate
    pub const TICK_HZ: f32 = 60.0;
    /// Fixed simulation timestep (seconds)
    pub const SIM_DT: f32 = 1.0 / TICK_HZ;
    /// Movement timer period (seconds)
    pub const MOVE_DT: f32 = 0.016;
    /// Maximum catch-up fires per timer per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest host frame delta accepted before clamping (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Reference playfield (scaling variant)
    pub const REFERENCE_WIDTH: f32 = 1400.0;
    pub const REFERENCE_HEIGHT: f32 = 700.0;
    /// Reference playfield width of the fixed-layout variant
    pub const FIXED_REFERENCE_WIDTH: f32 = 1100.0;

    /// Sprite sizes
    pub const CRAFT_SIZE: f32 = 100.0;
    pub const OBSTACLE_SIZE: f32 = 40.0;
    /// Horizontal lane the craft flies along
    pub const CRAFT_LANE_X: f32 = 100.0;

    /// Difficulty ramp
    pub const INITIAL_SPEED: f32 = 8.0;
    pub const SPEED_INCREMENT: f32 = 0.005;
    pub const FIXED_SPEED_INCREMENT: f32 = 0.001;
    /// Chance of an obstacle spawning on any given tick
    pub const SPAWN_CHANCE: f32 = 0.04;

    /// Craft movement per movement tick
    pub const MOVE_STEP: f32 = 10.0;

    /// Hit-box insets (transparent sprite margins)
    pub const CRAFT_PAD_X: f32 = 30.0;
    pub const CRAFT_PAD_TOP: f32 = 15.0;
    pub const CRAFT_PAD_BOTTOM: f32 = 30.0;
    pub const OBSTACLE_PAD: f32 = 10.0;
    /// Overlap required on both axes before a hit counts
    pub const MIN_OVERLAP: f32 = 10.0;
}
