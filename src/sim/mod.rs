//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio, clock, or filesystem dependencies
//!
//! The shell feeds it `TickInput` and a delta, and reads back a draw
//! `Snapshot` plus queued `GameEvent`s. Nothing else crosses the seam.

pub mod collision;
pub mod snapshot;
mod spawn;
pub mod state;
pub mod tick;

pub use collision::{circle_hit, rect_hit};
pub use snapshot::{EnergyTier, Hud, Snapshot, SpriteInstance, SpriteKind};
pub use state::{
    Asteroid, AsteroidSize, Body, Bullet, Entity, Explosion, ExplosionSize, FieldBounds,
    GameEvent, GamePhase, GameState, PowerUp, Ship, Sound,
};
pub use tick::{TickInput, tick};
