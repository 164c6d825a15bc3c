//! Time- and chance-driven entity spawning
//!
//! Asteroids enter on a jittered cadence up to a population cap; the energy
//! ball rolls a small per-frame chance while the ship runs low. Both drift
//! in from the right edge with a leftward bias.

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, AsteroidSize, Body, GameState, PowerUp};
use crate::consts::*;
use crate::normalize_degrees;

/// Run both spawners for one step. Called between motion and collisions.
pub(super) fn run(state: &mut GameState, dt: f32) {
    state.asteroid_timer -= dt;
    spawn_asteroid(state);
    spawn_powerup(state);
}

/// Sampled drift shared by rocks and the energy ball: strongly leftward,
/// gently downward.
fn drift(rng: &mut impl Rng) -> Vec2 {
    let x = rng.random_range(-10..=-4) as f32;
    let y = rng.random_range(1..=4) as f32;
    Vec2::new(x, y) * ASTEROID_BASE_SPEED
}

/// Spin in whole steps, including none
fn spin(rng: &mut impl Rng) -> f32 {
    rng.random_range(-3..3) as f32 * ASTEROID_SPIN_STEP
}

fn spawn_asteroid(state: &mut GameState) {
    if state.asteroids.len() >= ASTEROID_CAP || state.asteroid_timer > 0.0 {
        return;
    }
    let bounds = state.bounds;
    let rng = &mut state.rng;
    let variant = rng.random_range(0..ASTEROID_VARIANTS);
    let body = Body {
        pos: Vec2::new(bounds.width, rng.random_range(0.0..bounds.height)),
        vel: drift(rng),
        orientation: normalize_degrees(rng.random_range(-3..6) as f32),
        spin: spin(rng),
    };
    let jitter = ASTEROID_SPAWN_JITTER[rng.random_range(0..ASTEROID_SPAWN_JITTER.len())];
    state.asteroid_timer = ASTEROID_SPAWN_INTERVAL + jitter;
    state.asteroids.push(Asteroid {
        body,
        variant,
        size: AsteroidSize::from_variant(variant),
    });
    log::debug!(
        "asteroid spawned: variant {variant}, {} alive",
        state.asteroids.len()
    );
}

fn spawn_powerup(state: &mut GameState) {
    if state.powerup.is_some() || state.ship.energy >= POWERUP_ENERGY_THRESHOLD {
        return;
    }
    if state.rng.random_range(0..100) >= POWERUP_CHANCE_PCT {
        return;
    }
    let bounds = state.bounds;
    let rng = &mut state.rng;
    let body = Body {
        pos: Vec2::new(bounds.width, rng.random_range(0.0..bounds.height)),
        vel: drift(rng),
        orientation: 0.0,
        spin: spin(rng),
    };
    state.powerup = Some(PowerUp { body });
    log::debug!("energy ball spawned");
}
