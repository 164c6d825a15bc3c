//! Spacer - a side-scrolling asteroid shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, session state)
//! - `renderer`: Draw-snapshot consumer seam
//! - `audio`: Fire-and-forget sound/music seam
//! - `platform`: Frame pacing for the native shell
//! - `highscores`: Plain-text best-score persistence
//! - `demo`: Autopilot that plays the game headlessly

pub mod audio;
pub mod demo;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, TimestepMode};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matches the frame pacer)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Target frame rate for the paced shell loop
    pub const TARGET_FPS: u32 = 60;

    /// Ship defaults - square sprite footprint, px
    pub const SHIP_SIZE: f32 = 50.0;
    /// Turn rate while a rotation key is held (degrees/s)
    pub const SHIP_TURN_RATE: f32 = 200.0;
    /// Forward speed while thrust is held (px/s)
    pub const SHIP_SPEED: f32 = 350.0;
    /// Muzzle offset from ship center along its heading
    pub const WEAPON_OFFSET: f32 = 40.0;

    /// Weapon cooldown (seconds); halves while energy is high
    pub const FIRE_COOLDOWN: f32 = 0.5;
    pub const FIRE_COOLDOWN_FAST: f32 = 0.25;
    /// Energy above this uses the fast cooldown
    pub const FAST_COOLDOWN_ENERGY: f32 = 50.0;

    /// Energy is ammunition: each shot spends a little, zero is fatal
    pub const ENERGY_MAX: f32 = 100.0;
    pub const ENERGY_PER_SHOT: f32 = 0.5;
    /// HUD missile count per energy point
    pub const MISSILES_PER_ENERGY: f32 = 2.0;

    /// Bullet speed added on top of the ship's own (px/s)
    pub const BULLET_SPEED: f32 = 500.0;
    /// Bullet sprite footprint, px
    pub const BULLET_SIZE: f32 = 12.0;

    /// Asteroid sprite footprints by size class, px
    pub const ASTEROID_SIZE_LARGE: f32 = 60.0;
    pub const ASTEROID_SIZE_SMALL: f32 = 30.0;
    /// Distinct rock sprites
    pub const ASTEROID_VARIANTS: u8 = 7;
    /// Most asteroids alive at once
    pub const ASTEROID_CAP: usize = 7;
    /// Drift speed per sampled direction unit (px/s)
    pub const ASTEROID_BASE_SPEED: f32 = 50.0;
    /// Spin per sampled unit (degrees/s)
    pub const ASTEROID_SPIN_STEP: f32 = 60.0;
    /// Base spawn cadence (seconds) plus one sampled jitter term
    pub const ASTEROID_SPAWN_INTERVAL: f32 = 0.5;
    pub const ASTEROID_SPAWN_JITTER: [f32; 5] = [-0.05, 0.0, 0.05, 0.10, 0.15];

    /// Energy ball sprite footprint, px
    pub const POWERUP_SIZE: f32 = 40.0;
    /// Per-frame spawn chance (percent) while the ship runs low
    pub const POWERUP_CHANCE_PCT: u32 = 3;
    /// Energy below this arms the energy-ball spawner
    pub const POWERUP_ENERGY_THRESHOLD: f32 = 50.0;

    /// Collision tolerance: nominal geometry is scaled by this before testing
    pub const HIT_RATIO: f32 = 0.5;

    /// Explosion animation: frame indices 0..=EXPLOSION_LAST_FRAME
    pub const EXPLOSION_LAST_FRAME: u32 = 9;
    /// Seconds each explosion frame stays on screen
    pub const EXPLOSION_FRAME_HOLD: f32 = 0.02;

    /// Session defaults
    pub const STARTING_LIVES: u32 = 3;
    pub const SCORE_PER_ASTEROID: u32 = 10;

    /// Background scroll: one px per this many frames
    pub const SCROLL_DIVISOR: u64 = 20;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Unit heading for an orientation in degrees.
///
/// 0 degrees points right; positive angles turn counter-clockwise on
/// screen, so y is negated for the y-down field.
#[inline]
pub fn heading(orientation_deg: f32) -> Vec2 {
    let radians = orientation_deg.to_radians();
    Vec2::new(radians.cos(), -radians.sin())
}
