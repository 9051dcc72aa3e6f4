//! Fixed timestep simulation tick
//!
//! Two pure step functions advance the game: `tick` runs the 60 Hz
//! simulation and `move_tick` applies the held movement intent. Both are
//! hard no-ops once the game is over.

use super::collision::{HitPadding, find_hit};
use super::craft::Craft;
use super::scale::ScaleState;
use super::state::{GameEvent, GamePhase, GameState};
use crate::settings::PlayfieldConfig;

/// Everything a tick reads but never writes
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    pub config: &'a PlayfieldConfig,
    pub scale: &'a ScaleState,
    pub padding: HitPadding,
}

impl<'a> TickContext<'a> {
    pub fn new(config: &'a PlayfieldConfig, scale: &'a ScaleState) -> Self {
        Self {
            config,
            scale,
            padding: HitPadding::scaled(config, scale),
        }
    }
}

/// Result of one simulation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game already over; nothing changed
    Frozen,
    /// Score, speed and obstacles advanced
    Advanced,
    /// Craft hit the given obstacle and the game is now over
    Crashed { obstacle: u32 },
}

/// Advance the simulation by one tick: score, speed ramp, obstacles, collision
pub fn tick(state: &mut GameState, ctx: &TickContext) -> TickOutcome {
    if state.phase != GamePhase::Running {
        return TickOutcome::Frozen;
    }

    state.time_ticks += 1;
    state.score += 1;
    state.speed += ctx.config.speed_increment;

    let step = state.obstacles.step(
        &mut state.rng,
        state.speed,
        ctx.config.spawn_chance,
        ctx.scale,
    );
    if step.culled > 0 {
        log::debug!("Culled {} obstacle(s) at tick {}", step.culled, state.time_ticks);
    }

    if state.craft.clamp_into(ctx.scale) {
        log::warn!("Craft was outside the playfield; clamped to y={}", state.craft.pos.y);
    }

    match find_hit(&state.craft, state.obstacles.iter(), &ctx.padding, ctx.scale) {
        Some(obstacle) => {
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::GameOver { score: state.score });
            log::info!(
                "Game over: hit obstacle {obstacle} with score {} (seed {}, tick {})",
                state.score,
                state.seed,
                state.time_ticks
            );
            TickOutcome::Crashed { obstacle }
        }
        None => TickOutcome::Advanced,
    }
}

/// Apply the held movement intent once. Returns true if the craft moved.
pub fn move_tick(state: &mut GameState, ctx: &TickContext) -> bool {
    if state.phase != GamePhase::Running || state.intent.is_idle() {
        return false;
    }
    let before = state.craft.pos.y;
    let step = ctx.scale.to_display(ctx.config.move_step);
    state.craft.apply_intent(state.intent, step, ctx.scale);
    debug_assert!(state.craft.pos.y >= 0.0 && state.craft.pos.y <= Craft::max_y(ctx.scale));
    state.craft.pos.y != before
}
