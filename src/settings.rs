//! Playfield configuration
//!
//! Every tunable of the game lives here so variants can be described as data.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading or validating a [`PlayfieldConfig`]
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A size, speed or period that must be strictly positive
    NonPositive { field: &'static str, value: f32 },
    /// A padding, offset or ramp that must not be negative
    Negative { field: &'static str, value: f32 },
    /// A field holding NaN or infinity
    NonFinite { field: &'static str },
    /// Spawn chance outside [0, 1]
    ProbabilityOutOfRange(f32),
    /// Obstacles or the craft do not fit the playfield
    DoesNotFit { field: &'static str },
    /// JSON could not be parsed
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive (received {value})")
            }
            Self::Negative { field, value } => {
                write!(f, "{field} must not be negative (received {value})")
            }
            Self::NonFinite { field } => write!(f, "{field} must be finite"),
            Self::ProbabilityOutOfRange(p) => {
                write!(f, "spawn_chance must be within [0, 1] (received {p})")
            }
            Self::DoesNotFit { field } => {
                write!(f, "{field} does not fit inside the reference playfield")
            }
            Self::Parse(msg) => write!(f, "invalid playfield config: {msg}"),
        }
    }
}

impl Error for ConfigError {}

/// Immutable playfield constants shared by every spatial computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldConfig {
    /// Reference (logical) playfield width
    pub reference_width: f32,
    /// Reference (logical) playfield height
    pub reference_height: f32,
    /// Whether the playfield follows the viewport (false pins scale to 1)
    pub scaling: bool,

    pub craft_size: f32,
    pub obstacle_size: f32,
    /// Horizontal lane of the craft, in reference units
    pub craft_lane_x: f32,

    pub initial_speed: f32,
    /// Speed added on every simulation tick
    pub speed_increment: f32,
    /// Independent per-tick spawn probability
    pub spawn_chance: f32,

    /// Craft travel per movement tick, in reference units
    pub move_step: f32,
    /// Simulation timer period (seconds)
    pub tick_period: f32,
    /// Movement timer period (seconds)
    pub move_period: f32,

    // Hit-box insets, in reference units
    pub craft_pad_x: f32,
    pub craft_pad_top: f32,
    pub craft_pad_bottom: f32,
    pub obstacle_pad: f32,
    pub min_overlap: f32,
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            reference_width: REFERENCE_WIDTH,
            reference_height: REFERENCE_HEIGHT,
            scaling: true,

            craft_size: CRAFT_SIZE,
            obstacle_size: OBSTACLE_SIZE,
            craft_lane_x: CRAFT_LANE_X,

            initial_speed: INITIAL_SPEED,
            speed_increment: SPEED_INCREMENT,
            spawn_chance: SPAWN_CHANCE,

            move_step: MOVE_STEP,
            tick_period: SIM_DT,
            move_period: MOVE_DT,

            craft_pad_x: CRAFT_PAD_X,
            craft_pad_top: CRAFT_PAD_TOP,
            craft_pad_bottom: CRAFT_PAD_BOTTOM,
            obstacle_pad: OBSTACLE_PAD,
            min_overlap: MIN_OVERLAP,
        }
    }
}

impl PlayfieldConfig {
    /// Fixed-layout variant: narrower playfield, gentler ramp, no viewport scaling
    pub fn fixed() -> Self {
        Self {
            reference_width: FIXED_REFERENCE_WIDTH,
            scaling: false,
            speed_increment: FIXED_SPEED_INCREMENT,
            ..Self::default()
        }
    }

    /// Parse a config from JSON (missing fields take defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // No maps or custom impls, so serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Check every field against the constraints the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("reference_width", self.reference_width),
            ("reference_height", self.reference_height),
            ("craft_size", self.craft_size),
            ("obstacle_size", self.obstacle_size),
            ("initial_speed", self.initial_speed),
            ("move_step", self.move_step),
            ("tick_period", self.tick_period),
            ("move_period", self.move_period),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("craft_lane_x", self.craft_lane_x),
            ("speed_increment", self.speed_increment),
            ("craft_pad_x", self.craft_pad_x),
            ("craft_pad_top", self.craft_pad_top),
            ("craft_pad_bottom", self.craft_pad_bottom),
            ("obstacle_pad", self.obstacle_pad),
            ("min_overlap", self.min_overlap),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(ConfigError::ProbabilityOutOfRange(self.spawn_chance));
        }
        if self.craft_size > self.reference_height {
            return Err(ConfigError::DoesNotFit { field: "craft_size" });
        }
        if self.obstacle_size > self.reference_height {
            return Err(ConfigError::DoesNotFit { field: "obstacle_size" });
        }
        Ok(())
    }
}
