//! Per-frame session update
//!
//! Core loop that advances a session deterministically. Every frame runs
//! the same fixed order: ship control, motion with boundary sweeps, the
//! spawners, three collision passes, then the terminal checks.

use glam::Vec2;

use super::collision::{circle_hit, rect_hit};
use super::spawn;
use super::state::{
    Bullet, Entity, Explosion, ExplosionSize, FieldBounds, GameEvent, GamePhase, GameState, Sound,
};
use crate::consts::*;

/// Input signals for a single tick (deterministic)
///
/// Movement keys are level signals (currently held). `confirm` is the
/// modal-screen acknowledge and must be edge-detected by the shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Rotate counter-clockwise
    pub left: bool,
    /// Rotate clockwise; wins when both keys are held
    pub right: bool,
    /// Accelerate along the current heading
    pub thrust: bool,
    /// Fire the weapon (cooldown-gated)
    pub fire: bool,
    /// Leave the start or game-over screen
    pub confirm: bool,
}

/// Advance the session by one step of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::StartScreen | GamePhase::GameOver => {
            if input.confirm {
                state.start_session();
            }
        }
        GamePhase::Playing => run_frame(state, input, dt),
    }
}

fn run_frame(state: &mut GameState, input: &TickInput, dt: f32) {
    state.frames += 1;

    let fatal_shot = apply_ship_input(state, input);

    // Motion, then the same-frame boundary sweep
    let bounds = state.bounds;
    state.ship.advance(dt, bounds);
    advance_all(&mut state.bullets, dt, bounds);
    advance_all(&mut state.asteroids, dt, bounds);
    advance_all(&mut state.explosions, dt, bounds);
    if let Some(ball) = state.powerup.as_mut() {
        ball.advance(dt, bounds);
    }
    state.bullets.retain(|b| !b.expired(bounds));
    state.explosions.retain(|e| !e.expired(bounds));
    if state.powerup.as_ref().is_some_and(|p| p.expired(bounds)) {
        state.powerup = None;
    }

    spawn::run(state, dt);

    resolve_ship_asteroids(state);
    resolve_asteroid_bullets(state);
    resolve_powerup_bullet(state);

    // Terminal checks settle last so same-frame scoring still counts.
    // Exhaustion latches at fire time: a refill later this frame cannot
    // cancel the loss.
    if state.lives == 0 || fatal_shot || state.ship.energy <= 0.0 {
        state.end_session();
    }
}

fn advance_all<E: Entity>(entities: &mut [E], dt: f32, bounds: FieldBounds) {
    for entity in entities {
        entity.advance(dt, bounds);
    }
}

/// Controls are reapplied from scratch every frame: releasing a key stops
/// its effect immediately, and right rotation wins over left. Returns true
/// when a shot this frame spent the last of the energy.
fn apply_ship_input(state: &mut GameState, input: &TickInput) -> bool {
    let ship = &mut state.ship;
    ship.body.spin = 0.0;
    ship.body.vel = Vec2::ZERO;
    ship.thrusting = false;
    if input.left {
        ship.body.spin = SHIP_TURN_RATE;
    }
    if input.right {
        ship.body.spin = -SHIP_TURN_RATE;
    }
    if input.thrust {
        ship.thrusting = true;
        ship.body.vel = ship.body.heading() * SHIP_SPEED;
    }
    if input.fire { try_shoot(state) } else { false }
}

/// Fire if the cooldown window has passed. Each shot costs energy; a shot
/// that empties the tank is fatal at the moment of firing.
fn try_shoot(state: &mut GameState) -> bool {
    if state.ship.cooldown > 0.0 {
        return false;
    }
    state.bullets.push(Bullet::fired_from(&state.ship));
    state.ship.energy -= ENERGY_PER_SHOT;
    state.ship.cooldown = state.ship.cooldown_after_shot();
    state.events.push(GameEvent::PlaySound(Sound::Fire));
    state.ship.energy <= 0.0
}

/// Pass 1: ship against the rock field, tolerant square overlap. Every
/// overlapping rock is destroyed, but the frame costs exactly one life.
fn resolve_ship_asteroids(state: &mut GameState) {
    let ship_pos = state.ship.body.pos;
    let before = state.asteroids.len();
    state.asteroids.retain(|rock| {
        !rect_hit(
            ship_pos,
            SHIP_SIZE,
            rock.body.pos,
            rock.size.size_px(),
            HIT_RATIO,
        )
    });
    if state.asteroids.len() == before {
        return;
    }

    state
        .explosions
        .push(Explosion::new(ship_pos, ExplosionSize::Medium));
    state.events.push(GameEvent::PlaySound(Sound::Impact));
    state.lives = state.lives.saturating_sub(1);
    log::debug!("ship hit, {} lives left", state.lives);
    if state.lives == 0 {
        // The final hit gets the full-size sendoff
        state
            .explosions
            .push(Explosion::new(ship_pos, ExplosionSize::Large));
        state.events.push(GameEvent::PlaySound(Sound::Impact));
    }
}

/// Pass 2: missiles against rocks, ratio-scaled circles. Rocks scan in
/// order and consume the first live missile in range, so one missile never
/// destroys two rocks in the same frame.
fn resolve_asteroid_bullets(state: &mut GameState) {
    let mut consumed = vec![false; state.bullets.len()];
    let mut destroyed: Vec<Vec2> = Vec::new();
    let bullets = &state.bullets;
    state.asteroids.retain(|rock| {
        let hit = bullets.iter().enumerate().position(|(i, b)| {
            !consumed[i]
                && circle_hit(
                    rock.body.pos,
                    rock.size.radius(),
                    b.body.pos,
                    b.radius(),
                    HIT_RATIO,
                )
        });
        match hit {
            Some(i) => {
                consumed[i] = true;
                destroyed.push(rock.body.pos);
                false
            }
            None => true,
        }
    });
    if destroyed.is_empty() {
        return;
    }

    for pos in &destroyed {
        state
            .explosions
            .push(Explosion::new(*pos, ExplosionSize::Small));
        state.events.push(GameEvent::PlaySound(Sound::Impact));
    }
    state.score += destroyed.len() as u32 * SCORE_PER_ASTEROID;
    let mut index = 0;
    state.bullets.retain(|_| {
        let keep = !consumed[index];
        index += 1;
        keep
    });
    log::debug!("{} rocks destroyed, score {}", destroyed.len(), state.score);
}

/// Pass 3: missiles against the energy ball; a hit refills the ship
fn resolve_powerup_bullet(state: &mut GameState) {
    let Some(ball) = state.powerup.as_ref() else {
        return;
    };
    let pos = ball.body.pos;
    let radius = ball.radius();
    let Some(hit) = state
        .bullets
        .iter()
        .position(|b| circle_hit(pos, radius, b.body.pos, b.radius(), HIT_RATIO))
    else {
        return;
    };
    state.bullets.remove(hit);
    state.powerup = None;
    state
        .explosions
        .push(Explosion::new(pos, ExplosionSize::Small));
    state.events.push(GameEvent::PlaySound(Sound::Impact));
    state.ship.energy = ENERGY_MAX;
    log::debug!("energy restored");
}
