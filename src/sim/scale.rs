//! Responsive scaling of the reference playfield
//!
//! The simulation runs in display pixels: every reference length is multiplied
//! by `scale` before use. A resize produces a fresh [`ScaleState`] that also
//! remembers the scale it replaced, so positions can be carried across.

use serde::{Deserialize, Serialize};

use crate::settings::PlayfieldConfig;

/// Derived playfield dimensions for the current viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleState {
    /// Reference units to display pixels
    pub scale: f32,
    /// Scale in effect before the most recent recompute
    pub prev_scale: f32,
    pub width: f32,
    pub height: f32,
    pub craft_size: f32,
    pub obstacle_size: f32,
}

impl ScaleState {
    /// Unscaled playfield (scale = 1)
    pub fn identity(config: &PlayfieldConfig) -> Self {
        Self::at_scale(config, 1.0, 1.0)
    }

    fn at_scale(config: &PlayfieldConfig, scale: f32, prev_scale: f32) -> Self {
        Self {
            scale,
            prev_scale,
            width: config.reference_width * scale,
            height: config.reference_height * scale,
            craft_size: config.craft_size * scale,
            obstacle_size: config.obstacle_size * scale,
        }
    }

    /// Fit the reference playfield into a viewport.
    ///
    /// Returns `None` (leave the current state alone) when either dimension is
    /// non-positive or non-finite. With scaling disabled the scale stays at 1.
    pub fn recompute(
        &self,
        config: &PlayfieldConfig,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Option<Self> {
        if !(viewport_width.is_finite() && viewport_height.is_finite()) {
            return None;
        }
        if viewport_width <= 0.0 || viewport_height <= 0.0 {
            return None;
        }
        if config.reference_width <= 0.0 || config.reference_height <= 0.0 {
            return None;
        }

        let scale = if config.scaling {
            (viewport_width / config.reference_width).min(viewport_height / config.reference_height)
        } else {
            1.0
        };
        if !(scale.is_finite() && scale > 0.0) {
            return None;
        }

        Some(Self::at_scale(config, scale, self.scale))
    }

    /// Convert a reference length to display pixels
    #[inline]
    pub fn to_display(&self, logical: f32) -> f32 {
        logical * self.scale
    }

    /// Convert a display length back to reference units
    #[inline]
    pub fn to_logical(&self, display: f32) -> f32 {
        display / self.scale
    }

    /// Carry a display position from the previous scale to the current one
    #[inline]
    pub fn carry(&self, pos: f32) -> f32 {
        rescale_position(self.prev_scale, self.scale, pos)
    }
}

/// Keep a position's relative placement across a scale change
#[inline]
pub fn rescale_position(old_scale: f32, new_scale: f32, pos: f32) -> f32 {
    if old_scale <= 0.0 || !old_scale.is_finite() {
        return pos;
    }
    pos / old_scale * new_scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_matches_reference() {
        let config = PlayfieldConfig::default();
        let s = ScaleState::identity(&config);
        assert_eq!(s.scale, 1.0);
        assert_eq!(s.width, 1400.0);
        assert_eq!(s.height, 700.0);
        assert_eq!(s.craft_size, 100.0);
        assert_eq!(s.obstacle_size, 40.0);
    }

    #[test]
    fn test_recompute_uses_limiting_axis() {
        let config = PlayfieldConfig::default();
        let s = ScaleState::identity(&config);

        // Width-limited: 700/1400 = 0.5 vs 700/700 = 1.0
        let narrow = s.recompute(&config, 700.0, 700.0).expect("valid viewport");
        assert!((narrow.scale - 0.5).abs() < 1e-6);
        assert!((narrow.height - 350.0).abs() < 1e-4);
        assert_eq!(narrow.prev_scale, 1.0);

        // Height-limited: 2800/1400 = 2.0 vs 1050/700 = 1.5
        let wide = narrow.recompute(&config, 2800.0, 1050.0).expect("valid viewport");
        assert!((wide.scale - 1.5).abs() < 1e-6);
        assert!((wide.prev_scale - 0.5).abs() < 1e-6);
        assert!((wide.obstacle_size - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_recompute_rejects_degenerate_viewport() {
        let config = PlayfieldConfig::default();
        let s = ScaleState::identity(&config);
        assert!(s.recompute(&config, 0.0, 700.0).is_none());
        assert!(s.recompute(&config, 800.0, -1.0).is_none());
        assert!(s.recompute(&config, f32::NAN, 700.0).is_none());
        assert!(s.recompute(&config, f32::INFINITY, 700.0).is_none());
    }

    #[test]
    fn test_fixed_variant_ignores_viewport() {
        let config = PlayfieldConfig::fixed();
        let s = ScaleState::identity(&config)
            .recompute(&config, 300.0, 200.0)
            .expect("valid viewport");
        assert_eq!(s.scale, 1.0);
        assert_eq!(s.width, 1100.0);
    }

    #[test]
    fn test_rescale_position() {
        assert!((rescale_position(1.0, 0.5, 350.0) - 175.0).abs() < 1e-4);
        assert!((rescale_position(0.5, 2.0, 100.0) - 400.0).abs() < 1e-4);
        // Degenerate old scale leaves the position untouched
        assert_eq!(rescale_position(0.0, 2.0, 100.0), 100.0);
    }

    #[test]
    fn test_display_logical_conversion() {
        let config = PlayfieldConfig::default();
        let s = ScaleState::identity(&config)
            .recompute(&config, 700.0, 350.0)
            .expect("valid viewport");
        assert!((s.to_display(100.0) - 50.0).abs() < 1e-5);
        assert!((s.to_logical(50.0) - 100.0).abs() < 1e-4);
        assert!((s.carry(300.0) - 150.0).abs() < 1e-4);
    }
}
