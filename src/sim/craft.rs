//! The player's craft
//!
//! The craft never moves horizontally; it slides up and down its lane under a
//! held movement intent and is hard-clamped to the playfield.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::scale::ScaleState;

/// Held movement buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
}

impl MoveIntent {
    pub fn is_idle(&self) -> bool {
        !self.up && !self.down
    }
}

/// Player craft (top-left corner in display pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Craft {
    pub pos: Vec2,
}

impl Craft {
    /// Craft on its lane, vertically centred (or as low as it may sit, if
    /// the craft is taller than half the playfield)
    pub fn on_lane(lane_x: f32, scale: &ScaleState) -> Self {
        let y = (scale.height / 2.0).min(Self::max_y(scale));
        Self {
            pos: Vec2::new(scale.to_display(lane_x), y),
        }
    }

    /// Lowest allowed `y`
    #[inline]
    pub fn max_y(scale: &ScaleState) -> f32 {
        (scale.height - scale.craft_size).max(0.0)
    }

    /// Apply one movement step. Up is applied first, then down, each clamped
    /// on its own, so holding both lands wherever the down clamp leaves it.
    pub fn apply_intent(&mut self, intent: MoveIntent, step: f32, scale: &ScaleState) {
        let max_y = Self::max_y(scale);
        if intent.up {
            self.pos.y = (self.pos.y - step).max(0.0);
        }
        if intent.down {
            self.pos.y = (self.pos.y + step).min(max_y);
        }
    }

    /// Pull the craft back inside the playfield. Returns true if it had strayed.
    pub fn clamp_into(&mut self, scale: &ScaleState) -> bool {
        let max_y = Self::max_y(scale);
        let y = if self.pos.y.is_finite() {
            self.pos.y.clamp(0.0, max_y)
        } else {
            scale.height / 2.0
        };
        let repaired = y != self.pos.y;
        self.pos.y = y;
        repaired
    }

    /// Carry the craft from the previous scale to the current one
    pub fn rescale(&mut self, scale: &ScaleState) {
        self.pos = Vec2::new(scale.carry(self.pos.x), scale.carry(self.pos.y));
        self.clamp_into(scale);
    }
}
