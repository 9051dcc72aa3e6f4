//! Session state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::craft::{Craft, MoveIntent};
use super::obstacle::ObstaclePool;
use super::scale::ScaleState;
use crate::settings::PlayfieldConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticking
    Running,
    /// Crashed; frozen until reset
    GameOver,
}

/// Fire-and-forget notifications for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// First player input of the session
    GameStarted,
    /// Craft hit an obstacle
    GameOver { score: u64 },
    /// Session reinitialised
    Reset,
}

/// Complete simulation state (deterministic for a given seed and input)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG
    pub rng: Pcg32,
    /// Ticks survived this run
    pub score: u64,
    /// Obstacle speed in reference units per tick
    pub speed: f32,
    pub phase: GamePhase,
    pub craft: Craft,
    /// Held movement buttons
    pub intent: MoveIntent,
    pub obstacles: ObstaclePool,
    /// Simulation ticks since construction (not cleared on reset)
    pub time_ticks: u64,
    /// Pending notifications, drained by the session owner
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a running game with the given seed
    pub fn new(seed: u64, config: &PlayfieldConfig, scale: &ScaleState) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            speed: config.initial_speed,
            phase: GamePhase::Running,
            craft: Craft::on_lane(config.craft_lane_x, scale),
            intent: MoveIntent::default(),
            obstacles: ObstaclePool::new(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Back to a fresh run. The RNG stream carries on so successive runs differ.
    pub fn reset(&mut self, config: &PlayfieldConfig, scale: &ScaleState) {
        self.score = 0;
        self.speed = config.initial_speed;
        self.phase = GamePhase::Running;
        self.craft = Craft::on_lane(config.craft_lane_x, scale);
        self.obstacles.clear();
        self.events.push(GameEvent::Reset);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
