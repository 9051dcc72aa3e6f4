//! Padded axis-aligned collision between the craft and obstacles
//!
//! Sprites carry transparent margins, so hit boxes are shrunk inward before
//! testing, and a touch only counts once the overlap is deep on both axes.

use glam::Vec2;

use super::craft::Craft;
use super::obstacle::Obstacle;
use super::scale::ScaleState;
use crate::settings::PlayfieldConfig;

/// Axis-aligned box in display pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Aabb {
    /// Square sprite bounds from its top-left corner
    pub fn square(pos: Vec2, size: f32) -> Self {
        Self {
            left: pos.x,
            right: pos.x + size,
            top: pos.y,
            bottom: pos.y + size,
        }
    }

    /// Shrink each side inward
    pub fn inset(&self, x: f32, top: f32, bottom: f32) -> Self {
        Self {
            left: self.left + x,
            right: self.right - x,
            top: self.top + top,
            bottom: self.bottom - bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Hit-box insets and overlap threshold, already multiplied by the scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitPadding {
    pub craft_x: f32,
    pub craft_top: f32,
    pub craft_bottom: f32,
    pub obstacle: f32,
    pub min_overlap: f32,
}

impl HitPadding {
    pub fn scaled(config: &PlayfieldConfig, scale: &ScaleState) -> Self {
        Self {
            craft_x: scale.to_display(config.craft_pad_x),
            craft_top: scale.to_display(config.craft_pad_top),
            craft_bottom: scale.to_display(config.craft_pad_bottom),
            obstacle: scale.to_display(config.obstacle_pad),
            min_overlap: scale.to_display(config.min_overlap),
        }
    }

    pub fn craft_box(&self, craft: &Craft, scale: &ScaleState) -> Aabb {
        Aabb::square(craft.pos, scale.craft_size).inset(
            self.craft_x,
            self.craft_top,
            self.craft_bottom,
        )
    }

    pub fn obstacle_box(&self, obstacle: &Obstacle, scale: &ScaleState) -> Aabb {
        Aabb::square(obstacle.pos, scale.obstacle_size).inset(
            self.obstacle,
            self.obstacle,
            self.obstacle,
        )
    }
}

/// Strict rectangle overlap (shared edges do not count)
#[inline]
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    a.left < b.right && a.right > b.left && a.top < b.bottom && a.bottom > b.top
}

/// Overlap depth on each axis, if the boxes intersect
pub fn overlap(a: &Aabb, b: &Aabb) -> Option<Vec2> {
    if !intersects(a, b) {
        return None;
    }
    Some(Vec2::new(
        (a.right - b.left).min(b.right - a.left),
        (a.bottom - b.top).min(b.bottom - a.top),
    ))
}

/// Intersection deep enough on both axes to be a real hit, not a graze
pub fn confirmed_hit(a: &Aabb, b: &Aabb, min_overlap: f32) -> bool {
    overlap(a, b).is_some_and(|depth| depth.x > min_overlap && depth.y > min_overlap)
}

/// First obstacle (in pool order) that confirms a hit with the craft
pub fn find_hit<'a>(
    craft: &Craft,
    obstacles: impl IntoIterator<Item = &'a Obstacle>,
    padding: &HitPadding,
    scale: &ScaleState,
) -> Option<u32> {
    let craft_box = padding.craft_box(craft, scale);
    obstacles
        .into_iter()
        .find(|o| confirmed_hit(&craft_box, &padding.obstacle_box(o, scale), padding.min_overlap))
        .map(|o| o.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> (PlayfieldConfig, ScaleState, HitPadding) {
        let config = PlayfieldConfig::default();
        let scale = ScaleState::identity(&config);
        let padding = HitPadding::scaled(&config, &scale);
        (config, scale, padding)
    }

    fn obstacle(id: u32, x: f32, y: f32) -> Obstacle {
        Obstacle {
            id,
            pos: Vec2::new(x, y),
            rotation: 0.0,
        }
    }

    #[test]
    fn test_craft_box_insets() {
        let (_, scale, padding) = unit();
        let craft = Craft { pos: Vec2::new(100.0, 300.0) };
        let b = padding.craft_box(&craft, &scale);
        assert_eq!(b, Aabb { left: 130.0, right: 170.0, top: 315.0, bottom: 370.0 });
        assert_eq!(b.width(), 40.0);
        assert_eq!(b.height(), 55.0);
    }

    #[test]
    fn test_obstacle_box_insets() {
        let (_, scale, padding) = unit();
        let b = padding.obstacle_box(&obstacle(1, 120.0, 310.0), &scale);
        assert_eq!(b, Aabb { left: 130.0, right: 150.0, top: 320.0, bottom: 340.0 });
    }

    #[test]
    fn test_vertically_disjoint_is_not_a_hit() {
        let (_, scale, padding) = unit();
        let craft = Craft { pos: Vec2::new(100.0, 300.0) };
        let craft_box = padding.craft_box(&craft, &scale);
        let obs_box = padding.obstacle_box(&obstacle(1, 500.0, 600.0), &scale);
        assert!(!intersects(&craft_box, &obs_box));
        assert!(!confirmed_hit(&craft_box, &obs_box, padding.min_overlap));
    }

    #[test]
    fn test_deep_overlap_is_a_hit() {
        let (_, scale, padding) = unit();
        let craft = Craft { pos: Vec2::new(100.0, 300.0) };
        let craft_box = padding.craft_box(&craft, &scale);
        let obs_box = padding.obstacle_box(&obstacle(1, 120.0, 310.0), &scale);
        assert_eq!(overlap(&craft_box, &obs_box), Some(Vec2::new(20.0, 25.0)));
        assert!(confirmed_hit(&craft_box, &obs_box, padding.min_overlap));
    }

    #[test]
    fn test_graze_is_filtered() {
        let (_, scale, padding) = unit();
        let craft = Craft { pos: Vec2::new(100.0, 300.0) };
        let craft_box = padding.craft_box(&craft, &scale);
        // Obstacle box [165,185] overlaps craft box [130,170] by only 5px horizontally
        let obs_box = padding.obstacle_box(&obstacle(1, 155.0, 320.0), &scale);
        assert!(intersects(&craft_box, &obs_box));
        assert!(!confirmed_hit(&craft_box, &obs_box, padding.min_overlap));
    }

    #[test]
    fn test_shared_edge_does_not_intersect() {
        let a = Aabb { left: 0.0, right: 10.0, top: 0.0, bottom: 10.0 };
        let b = Aabb { left: 10.0, right: 20.0, top: 0.0, bottom: 10.0 };
        assert!(!intersects(&a, &b));
        assert!(!intersects(&b, &a));
    }

    #[test]
    fn test_find_hit_short_circuits_in_order() {
        let (_, scale, padding) = unit();
        let craft = Craft { pos: Vec2::new(100.0, 300.0) };
        let obstacles = [
            obstacle(1, 900.0, 300.0),
            obstacle(2, 120.0, 310.0),
            obstacle(3, 115.0, 315.0),
        ];
        assert_eq!(find_hit(&craft, &obstacles, &padding, &scale), Some(2));
        assert_eq!(find_hit(&craft, &obstacles[..1], &padding, &scale), None);
    }

    #[test]
    fn test_padding_follows_scale() {
        let config = PlayfieldConfig::default();
        let scale = ScaleState::identity(&config)
            .recompute(&config, 2800.0, 1400.0)
            .expect("valid viewport");
        let padding = HitPadding::scaled(&config, &scale);
        assert_eq!(padding.craft_x, 60.0);
        assert_eq!(padding.min_overlap, 20.0);

        // The unit-scale hit still lands when everything doubles
        let craft = Craft { pos: Vec2::new(200.0, 600.0) };
        let obstacles = [obstacle(1, 240.0, 620.0)];
        assert_eq!(find_hit(&craft, &obstacles, &padding, &scale), Some(1));
    }
}
