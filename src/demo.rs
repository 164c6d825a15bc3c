//! Demo autopilot
//!
//! Plays a session without a human so the shell can exercise the whole
//! loop headlessly: confirm through the modal screens, turn toward the
//! most pressing target, fire once roughly lined up, and burn away from
//! rocks that get too close.

use glam::Vec2;

use crate::normalize_degrees;
use crate::sim::{GamePhase, GameState, TickInput};

/// No steering inside this many degrees of the target bearing
const AIM_DEADBAND: f32 = 4.0;
/// Fire while the bearing error is inside this cone
const FIRE_CONE: f32 = 10.0;
/// Close the gap with thrust beyond this distance
const APPROACH_RADIUS: f32 = 400.0;
/// Rocks inside this range trigger an escape burn
const DANGER_RADIUS: f32 = 140.0;
/// Hold fire below this energy unless a refill is on the field
const ENERGY_RESERVE: f32 = 5.0;

/// Orientation in degrees that faces from `from` toward `to`
fn bearing(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    // y negated to undo the y-down screen convention
    normalize_degrees((-delta.y).atan2(delta.x).to_degrees())
}

/// Signed smallest rotation from `current` to `target`, in [-180, 180)
fn turn_error(current: f32, target: f32) -> f32 {
    let mut diff = normalize_degrees(target - current);
    if diff >= 180.0 {
        diff -= 360.0;
    }
    diff
}

/// The demo shell's input source
#[derive(Debug, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn new() -> Self {
        Self
    }

    /// Produce this frame's input from the observed state
    pub fn drive(&mut self, state: &GameState) -> TickInput {
        let mut input = TickInput::default();
        if state.phase != GamePhase::Playing {
            input.confirm = true;
            return input;
        }

        let ship = &state.ship;
        let pos = ship.body.pos;

        let nearest_rock = state.asteroids.iter().min_by(|a, b| {
            pos.distance_squared(a.body.pos)
                .partial_cmp(&pos.distance_squared(b.body.pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        // Refilling beats hunting: shooting the energy ball is the only
        // way back up, and it only appears while we are running low
        let target = match (&state.powerup, nearest_rock) {
            (Some(ball), _) => Some(ball.body.pos),
            (None, Some(rock)) => Some(rock.body.pos),
            (None, None) => None,
        };
        let Some(target) = target else {
            return input;
        };

        let error = turn_error(ship.body.orientation, bearing(pos, target));
        if error > AIM_DEADBAND {
            input.left = true;
        } else if error < -AIM_DEADBAND {
            input.right = true;
        }

        if error.abs() < FIRE_CONE {
            if state.powerup.is_some() || ship.energy > ENERGY_RESERVE {
                input.fire = true;
            }
            if pos.distance(target) > APPROACH_RADIUS {
                input.thrust = true;
            }
        }

        // A rock at our back inside the danger radius: burn away from it
        if let Some(rock) = nearest_rock {
            let rock_error = turn_error(ship.body.orientation, bearing(pos, rock.body.pos));
            if pos.distance(rock.body.pos) < DANGER_RADIUS && rock_error.abs() > 90.0 {
                input.thrust = true;
            }
        }

        input
    }
}
