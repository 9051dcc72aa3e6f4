//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (obstacle insertion order)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod craft;
pub mod obstacle;
pub mod scale;
pub mod state;
pub mod tick;

pub use clock::{Clock, Timer, TimerKind};
pub use collision::{Aabb, HitPadding, confirmed_hit, find_hit, intersects, overlap};
pub use craft::{Craft, MoveIntent};
pub use obstacle::{Obstacle, ObstaclePool, PoolStep};
pub use scale::{ScaleState, rescale_position};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickContext, TickOutcome, move_tick, tick};
