//! Game session: the composition root
//!
//! Owns the configuration, the current scale, the simulation state and the
//! timers. Hosts feed it input signals, viewport sizes and elapsed time, and
//! read back owned [`Snapshot`]s and [`GameEvent`]s. Nothing the host does
//! with a snapshot can reach back into the simulation.

use serde::Serialize;

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::platform::{InputQueue, InputSignal};
use crate::settings::PlayfieldConfig;
use crate::sim::{
    Clock, GameEvent, GameState, MoveIntent, ScaleState, TickContext, TickOutcome, TimerKind,
    move_tick, tick,
};

/// Craft as the renderer sees it (display pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CraftView {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Obstacle as the renderer sees it (display pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleView {
    /// Stable render key
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub rotation_deg: f32,
}

/// Read-only projection of the session for presentation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub craft: CraftView,
    pub obstacles: Vec<ObstacleView>,
    pub score: u64,
    pub running: bool,
    /// Playfield size in display pixels
    pub width: f32,
    pub height: f32,
    /// Horizontal backdrop scroll (pixels, scrolls left as score grows)
    pub background_offset: f32,
}

/// A running (or finished) game plus everything needed to drive it
#[derive(Debug, Clone)]
pub struct GameSession {
    config: PlayfieldConfig,
    scale: ScaleState,
    state: GameState,
    clock: Clock,
    started: bool,
}

impl GameSession {
    /// New running session at reference scale. An invalid config is replaced
    /// by the defaults rather than failing.
    pub fn new(config: PlayfieldConfig, seed: u64) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("Ignoring playfield config ({e}); using defaults");
                PlayfieldConfig::default()
            }
        };
        let scale = ScaleState::identity(&config);
        let state = GameState::new(seed, &config, &scale);
        let clock = Clock::new(config.tick_period, config.move_period, MAX_SUBSTEPS);
        log::info!("Session created (seed {seed})");
        Self {
            config,
            scale,
            state,
            clock,
            started: false,
        }
    }

    /// New session already fitted to a viewport
    pub fn with_viewport(
        config: PlayfieldConfig,
        seed: u64,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Self {
        let mut session = Self::new(config, seed);
        session.on_resize(viewport_width, viewport_height);
        session
    }

    pub fn config(&self) -> &PlayfieldConfig {
        &self.config
    }

    pub fn scale(&self) -> &ScaleState {
        &self.scale
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for scripted scenarios (placing obstacles, etc.)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// Whether the timers are live (false once the game is over)
    pub fn is_ticking(&self) -> bool {
        self.clock.is_armed()
    }

    /// Start a fresh run from any state
    pub fn reset(&mut self) {
        self.state.reset(&self.config, &self.scale);
        self.clock.arm();
        log::info!("Session reset");
    }

    /// Apply one abstract input signal
    pub fn handle_input(&mut self, signal: InputSignal) {
        let is_press = matches!(
            signal,
            InputSignal::MoveUpPressed | InputSignal::MoveDownPressed
        );
        if is_press && !self.started {
            self.started = true;
            self.state.events.push(GameEvent::GameStarted);
        }
        let intent = self.state.intent;
        self.state.intent = match signal {
            InputSignal::MoveUpPressed => MoveIntent { up: true, ..intent },
            InputSignal::MoveUpReleased => MoveIntent { up: false, ..intent },
            InputSignal::MoveDownPressed => MoveIntent { down: true, ..intent },
            InputSignal::MoveDownReleased => MoveIntent { down: false, ..intent },
            InputSignal::ButtonsReleased => MoveIntent::default(),
            InputSignal::RequestReset => {
                self.reset();
                intent
            }
        };
    }

    /// Apply everything queued by the host's listeners
    pub fn apply_inputs(&mut self, queue: &InputQueue) {
        for signal in queue.drain() {
            self.handle_input(signal);
        }
    }

    /// Refit to a new viewport. Degenerate sizes are ignored (returns false).
    pub fn on_resize(&mut self, viewport_width: f32, viewport_height: f32) -> bool {
        let Some(scale) = self
            .scale
            .recompute(&self.config, viewport_width, viewport_height)
        else {
            log::debug!("Ignoring resize to {viewport_width}x{viewport_height}");
            return false;
        };
        self.scale = scale;
        self.state.craft.rescale(&self.scale);
        log::debug!(
            "Resized to scale {:.3} ({}x{})",
            scale.scale,
            scale.width,
            scale.height
        );
        true
    }

    /// Run one simulation tick directly (hosts that own their own timer)
    pub fn step(&mut self) -> TickOutcome {
        let ctx = TickContext::new(&self.config, &self.scale);
        let outcome = tick(&mut self.state, &ctx);
        if matches!(outcome, TickOutcome::Crashed { .. }) {
            self.clock.disarm();
        }
        outcome
    }

    /// Run one movement tick directly
    pub fn step_movement(&mut self) -> bool {
        let ctx = TickContext::new(&self.config, &self.scale);
        move_tick(&mut self.state, &ctx)
    }

    /// Feed elapsed wall time (seconds); fires both timers as they fall due.
    /// Returns the number of timer fires.
    pub fn advance(&mut self, dt: f32) -> u32 {
        let dt = dt.min(MAX_FRAME_DT);
        let Self {
            config,
            scale,
            state,
            clock,
            ..
        } = self;
        let ctx = TickContext::new(config, scale);
        clock.advance(dt, |kind| {
            match kind {
                TimerKind::Movement => {
                    move_tick(state, &ctx);
                }
                TimerKind::Simulation => {
                    tick(state, &ctx);
                }
            }
            state.is_running()
        })
    }

    /// Take pending game events (audio cues and the like)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    /// Render-ready view of the current state
    pub fn snapshot(&self) -> Snapshot {
        let obstacle_size = self.scale.obstacle_size;
        Snapshot {
            craft: CraftView {
                x: self.state.craft.pos.x,
                y: self.state.craft.pos.y,
                size: self.scale.craft_size,
            },
            obstacles: self
                .state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    x: o.pos.x,
                    y: o.pos.y,
                    size: obstacle_size,
                    rotation_deg: o.rotation,
                })
                .collect(),
            score: self.state.score,
            running: self.state.is_running(),
            width: self.scale.width,
            height: self.scale.height,
            background_offset: -(self.state.score as f32),
        }
    }
}
