//! Obstacle lifecycle: cull, advance, spawn
//!
//! Obstacles live in display pixels. Each tick the pool drops anything fully
//! past the left edge, slides the survivors left and possibly appends one new
//! obstacle at the right edge. The RNG is passed in so runs replay exactly.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::scale::ScaleState;

/// A hazard drifting toward the craft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Stable key for rendering (insertion order)
    pub id: u32,
    /// Top-left corner in display pixels
    pub pos: Vec2,
    /// Display-only rotation (degrees)
    pub rotation: f32,
}

/// What one pool step did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStep {
    pub culled: usize,
    pub spawned: Option<u32>,
}

/// Active obstacles, in insertion order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstaclePool {
    obstacles: Vec<Obstacle>,
    next_id: u32,
}

impl Default for ObstaclePool {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstaclePool {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            next_id: 1,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Insert an obstacle at an explicit position (scripted setups and tests)
    pub fn place(&mut self, pos: Vec2) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.obstacles.push(Obstacle {
            id,
            pos,
            rotation: 0.0,
        });
        id
    }

    /// Drop obstacles fully off-screen left, plus any with corrupt coordinates
    pub fn cull(&mut self, obstacle_size: f32) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| {
            let finite = o.pos.is_finite();
            if !finite {
                log::warn!("Dropping obstacle {} with non-finite position", o.id);
            }
            finite && o.pos.x > -obstacle_size
        });
        before - self.obstacles.len()
    }

    /// Slide every obstacle left by `dx` pixels
    pub fn advance(&mut self, dx: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.pos.x -= dx;
        }
    }

    /// Roll once against `chance`; on success append one obstacle at the right edge
    pub fn maybe_spawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        chance: f32,
        scale: &ScaleState,
    ) -> Option<u32> {
        if rng.random::<f32>() >= chance {
            return None;
        }
        let span = (scale.height - scale.obstacle_size).max(0.0);
        let y = rng.random::<f32>() * span;
        let id = self.place(Vec2::new(scale.width, y));
        log::debug!("Spawned obstacle {id} at y={y:.1}");
        Some(id)
    }

    /// Full per-tick update: cull, then advance, then spawn.
    ///
    /// A freshly spawned obstacle is neither moved nor culled on its first tick.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        speed: f32,
        chance: f32,
        scale: &ScaleState,
    ) -> PoolStep {
        let culled = self.cull(scale.obstacle_size);
        self.advance(speed * scale.scale);
        let spawned = self.maybe_spawn(rng, chance, scale);
        PoolStep { culled, spawned }
    }
}
