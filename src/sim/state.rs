//! Session state and entity types
//!
//! Everything the simulation owns lives here: the five entity kinds, the
//! shared motion body, and the session-owning `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::snapshot::{SpriteInstance, SpriteKind};
use crate::consts::*;
use crate::{heading, normalize_degrees};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Splash screen, waiting for confirm
    StartScreen,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for confirm to restart
    GameOver,
}

/// Sound effects the simulation requests from the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// Missile launch
    Fire,
    /// Anything blowing up
    Impact,
}

/// One-way notifications from the simulation to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Fire-and-forget effect playback
    PlaySound(Sound),
    /// Final score beat the stored best; worth persisting
    NewHighScore(u32),
    /// Session reached game over with this final score
    SessionEnded { score: u32 },
}

/// Playfield dimensions in px, provided by the display at startup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub width: f32,
    pub height: f32,
}

impl FieldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the field (ship spawn point)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Wrap a position onto the torus [0, w) x [0, h)
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        // rem_euclid can round up to the modulus for tiny negative inputs
        fn wrap_axis(v: f32, span: f32) -> f32 {
            let w = v.rem_euclid(span);
            if w >= span { w - span } else { w }
        }
        Vec2::new(wrap_axis(pos.x, self.width), wrap_axis(pos.y, self.height))
    }

    /// True while a position is inside the closed field rectangle
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }
}

/// Shared motion state: position, velocity, orientation, spin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    /// px/s
    pub vel: Vec2,
    /// Degrees, kept normalized to [0, 360)
    pub orientation: f32,
    /// Degrees/s
    pub spin: f32,
}

impl Body {
    /// Motionless body at a position
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            orientation: 0.0,
            spin: 0.0,
        }
    }

    /// Integrate one step: position by velocity, orientation by spin
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.orientation = normalize_degrees(self.orientation + self.spin * dt);
    }

    /// Unit vector the body is facing
    pub fn heading(&self) -> Vec2 {
        heading(self.orientation)
    }
}

/// Common interface over the entity kinds: one motion step, the expiry
/// rule, and the draw-snapshot accessor.
pub trait Entity {
    /// Advance one step and apply this kind's boundary policy
    fn advance(&mut self, dt: f32, bounds: FieldBounds);
    /// True once the entity should be swept from its collection
    fn expired(&self, bounds: FieldBounds) -> bool;
    /// Draw call for the renderer collaborator
    fn sprite(&self) -> SpriteInstance;
}

/// The player's ship. Exactly one per session, wraps at the field edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub body: Body,
    /// Combined fuel/ammunition resource, 0..=100; empty is fatal
    pub energy: f32,
    /// Thrust held this frame (selects the exhaust sprite)
    pub thrusting: bool,
    /// Seconds until the weapon may fire again
    pub cooldown: f32,
}

impl Ship {
    /// Fresh ship at field center, facing right, full energy
    pub fn spawn(bounds: FieldBounds) -> Self {
        Self {
            body: Body::at(bounds.center()),
            energy: ENERGY_MAX,
            thrusting: false,
            cooldown: 0.0,
        }
    }

    /// Cooldown armed after a shot: shorter while energy is high
    pub fn cooldown_after_shot(&self) -> f32 {
        if self.energy > FAST_COOLDOWN_ENERGY {
            FIRE_COOLDOWN_FAST
        } else {
            FIRE_COOLDOWN
        }
    }

    /// Missiles remaining as shown on the HUD (two per energy point)
    pub fn missiles(&self) -> u32 {
        (self.energy.max(0.0) * MISSILES_PER_ENERGY) as u32
    }
}

impl Entity for Ship {
    fn advance(&mut self, dt: f32, bounds: FieldBounds) {
        self.body.advance(dt);
        self.body.pos = bounds.wrap(self.body.pos);
        if self.cooldown > 0.0 {
            self.cooldown = (self.cooldown - dt).max(0.0);
        }
    }

    /// The ship never self-expires; the session controller retires it
    fn expired(&self, _bounds: FieldBounds) -> bool {
        false
    }

    fn sprite(&self) -> SpriteInstance {
        let kind = if self.thrusting {
            SpriteKind::ShipThrust
        } else {
            SpriteKind::Ship
        };
        SpriteInstance::new(kind, self.body.pos, self.body.orientation, SHIP_SIZE)
    }
}

/// A missile. Flies straight and dies at the field edge instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub body: Body,
}

impl Bullet {
    /// Spawn at the ship's muzzle offset, inheriting its facing
    pub fn fired_from(ship: &Ship) -> Self {
        let dir = ship.body.heading();
        Self {
            body: Body {
                pos: ship.body.pos + dir * WEAPON_OFFSET,
                vel: dir * (SHIP_SPEED + BULLET_SPEED),
                orientation: ship.body.orientation,
                spin: 0.0,
            },
        }
    }

    pub fn radius(&self) -> f32 {
        BULLET_SIZE * 0.5
    }
}

impl Entity for Bullet {
    fn advance(&mut self, dt: f32, _bounds: FieldBounds) {
        self.body.advance(dt);
    }

    fn expired(&self, bounds: FieldBounds) -> bool {
        !bounds.contains(self.body.pos)
    }

    fn sprite(&self) -> SpriteInstance {
        SpriteInstance::new(
            SpriteKind::Bullet,
            self.body.pos,
            self.body.orientation,
            BULLET_SIZE,
        )
    }
}

/// Binary asteroid size class, derived from the sprite variant's parity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidSize {
    Large,
    Small,
}

impl AsteroidSize {
    pub fn from_variant(variant: u8) -> Self {
        if variant % 2 == 0 {
            AsteroidSize::Large
        } else {
            AsteroidSize::Small
        }
    }

    /// Side of the square sprite footprint, px
    pub fn size_px(self) -> f32 {
        match self {
            AsteroidSize::Large => ASTEROID_SIZE_LARGE,
            AsteroidSize::Small => ASTEROID_SIZE_SMALL,
        }
    }

    /// Bounding-circle radius, px
    pub fn radius(self) -> f32 {
        self.size_px() * 0.5
    }
}

/// A drifting rock. Wraps around the field like the ship does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asteroid {
    pub body: Body,
    /// Which rock sprite this one uses (0..ASTEROID_VARIANTS)
    pub variant: u8,
    pub size: AsteroidSize,
}

impl Entity for Asteroid {
    fn advance(&mut self, dt: f32, bounds: FieldBounds) {
        self.body.advance(dt);
        self.body.pos = bounds.wrap(self.body.pos);
    }

    /// Asteroids only leave play through collisions
    fn expired(&self, _bounds: FieldBounds) -> bool {
        false
    }

    fn sprite(&self) -> SpriteInstance {
        SpriteInstance::new(
            SpriteKind::Asteroid {
                variant: self.variant,
            },
            self.body.pos,
            self.body.orientation,
            self.size.size_px(),
        )
    }
}

/// The energy ball. At most one alive; drifts off the field if unclaimed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUp {
    pub body: Body,
}

impl PowerUp {
    pub fn radius(&self) -> f32 {
        POWERUP_SIZE * 0.5
    }
}

impl Entity for PowerUp {
    fn advance(&mut self, dt: f32, _bounds: FieldBounds) {
        self.body.advance(dt);
    }

    fn expired(&self, bounds: FieldBounds) -> bool {
        !bounds.contains(self.body.pos)
    }

    fn sprite(&self) -> SpriteInstance {
        SpriteInstance::new(
            SpriteKind::PowerUp,
            self.body.pos,
            self.body.orientation,
            POWERUP_SIZE,
        )
    }
}

/// Explosion size variants; the animation frames are shared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplosionSize {
    /// Destroyed rock or claimed energy ball
    Small,
    /// Ship taking a hit
    Medium,
    /// Ship destroyed for good
    Large,
}

impl ExplosionSize {
    /// Sprite footprint, px
    pub fn size_px(self) -> f32 {
        match self {
            ExplosionSize::Small => 40.0,
            ExplosionSize::Medium => 75.0,
            ExplosionSize::Large => 100.0,
        }
    }
}

/// A purely cosmetic animation: holds each frame briefly, then expires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Explosion {
    pub pos: Vec2,
    pub size: ExplosionSize,
    pub frame: u32,
    /// Seconds left on the current frame
    hold: f32,
}

impl Explosion {
    pub fn new(pos: Vec2, size: ExplosionSize) -> Self {
        Self {
            pos,
            size,
            frame: 0,
            hold: EXPLOSION_FRAME_HOLD,
        }
    }
}

impl Entity for Explosion {
    fn advance(&mut self, dt: f32, _bounds: FieldBounds) {
        self.hold -= dt;
        // Large deltas may step several frames at once; stop at expiry so
        // a delta too big for f32 to climb back from still terminates
        while self.hold <= 0.0 && self.frame <= EXPLOSION_LAST_FRAME {
            self.frame += 1;
            self.hold += EXPLOSION_FRAME_HOLD;
        }
    }

    fn expired(&self, _bounds: FieldBounds) -> bool {
        self.frame > EXPLOSION_LAST_FRAME
    }

    fn sprite(&self) -> SpriteInstance {
        SpriteInstance::new(
            SpriteKind::Explosion {
                size: self.size,
                frame: self.frame.min(EXPLOSION_LAST_FRAME),
            },
            self.pos,
            0.0,
            self.size.size_px(),
        )
    }
}

/// Complete session state, owned by the shell and advanced by `tick`
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the session RNG was created from (kept for log/bug reports)
    pub seed: u64,
    pub bounds: FieldBounds,
    pub phase: GamePhase,
    pub lives: u32,
    pub score: u32,
    /// Best score known to the persistence collaborator, mirrored for the HUD
    pub high_score: u32,
    /// Playing-phase frame counter; drives the background scroll
    pub frames: u64,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub asteroids: Vec<Asteroid>,
    pub powerup: Option<PowerUp>,
    pub explosions: Vec<Explosion>,
    /// Seconds until the asteroid spawner re-arms
    pub asteroid_timer: f32,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh state at the splash screen
    pub fn new(seed: u64, bounds: FieldBounds) -> Self {
        Self {
            seed,
            bounds,
            phase: GamePhase::StartScreen,
            lives: STARTING_LIVES,
            score: 0,
            high_score: 0,
            frames: 0,
            ship: Ship::spawn(bounds),
            bullets: Vec::new(),
            asteroids: Vec::new(),
            powerup: None,
            explosions: Vec::new(),
            asteroid_timer: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Reset per-session values and enter gameplay
    pub fn start_session(&mut self) {
        self.lives = STARTING_LIVES;
        self.score = 0;
        self.frames = 0;
        self.ship = Ship::spawn(self.bounds);
        self.bullets.clear();
        self.asteroids.clear();
        self.powerup = None;
        self.explosions.clear();
        self.asteroid_timer = 0.0;
        self.phase = GamePhase::Playing;
        log::info!("session started (seed {})", self.seed);
    }

    /// Terminal transition. Runs once per session: later calls are no-ops.
    pub(crate) fn end_session(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::GameOver;
        if self.score > self.high_score {
            self.high_score = self.score;
            self.events.push(GameEvent::NewHighScore(self.score));
        }
        self.events.push(GameEvent::SessionEnded { score: self.score });
        log::info!("session over: score {}", self.score);
    }

    /// Hand queued collaborator notifications to the shell
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Background scroll offset in px, derived from the frame counter
    pub fn scroll_offset(&self) -> f32 {
        let width = self.bounds.width.max(1.0) as u64;
        ((self.frames / SCROLL_DIVISOR) % width) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> FieldBounds {
        FieldBounds::new(1920.0, 1080.0)
    }

    #[test]
    fn test_body_advance_integrates_position_and_orientation() {
        let mut body = Body::at(Vec2::new(100.0, 100.0));
        body.vel = Vec2::new(60.0, -30.0);
        body.spin = 90.0;
        body.advance(1.0);
        assert_eq!(body.pos, Vec2::new(160.0, 70.0));
        assert!((body.orientation - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_body_orientation_stays_normalized() {
        let mut body = Body::at(Vec2::ZERO);
        body.spin = 400.0;
        body.advance(1.0);
        assert!(body.orientation >= 0.0 && body.orientation < 360.0);
    }

    #[test]
    fn test_wrap_keeps_positions_in_field() {
        let b = bounds();
        assert_eq!(b.wrap(Vec2::new(1930.0, 500.0)), Vec2::new(10.0, 500.0));
        assert_eq!(b.wrap(Vec2::new(-10.0, 500.0)), Vec2::new(1910.0, 500.0));
        assert_eq!(b.wrap(Vec2::new(500.0, -5.0)), Vec2::new(500.0, 1075.0));
    }

    #[test]
    fn test_ship_wraps_bullet_does_not() {
        let b = bounds();
        let mut ship = Ship::spawn(b);
        ship.body.pos = Vec2::new(1915.0, 540.0);
        ship.body.vel = Vec2::new(600.0, 0.0);
        ship.advance(1.0 / 60.0, b);
        assert!(ship.body.pos.x < 10.0);
        assert!(!ship.expired(b));

        let mut bullet = Bullet {
            body: Body {
                pos: Vec2::new(1915.0, 540.0),
                vel: Vec2::new(600.0, 0.0),
                orientation: 0.0,
                spin: 0.0,
            },
        };
        bullet.advance(1.0 / 60.0, b);
        assert!(bullet.body.pos.x > 1920.0);
        assert!(bullet.expired(b));
    }

    #[test]
    fn test_bullet_inherits_ship_speed_and_muzzle_offset() {
        let b = bounds();
        let ship = Ship::spawn(b);
        let bullet = Bullet::fired_from(&ship);
        assert_eq!(bullet.body.pos, b.center() + Vec2::new(WEAPON_OFFSET, 0.0));
        assert!((bullet.body.vel.length() - (SHIP_SPEED + BULLET_SPEED)).abs() < 1e-3);
    }

    #[test]
    fn test_asteroid_size_follows_variant_parity() {
        assert_eq!(AsteroidSize::from_variant(0), AsteroidSize::Large);
        assert_eq!(AsteroidSize::from_variant(1), AsteroidSize::Small);
        assert_eq!(AsteroidSize::from_variant(6), AsteroidSize::Large);
        assert!(AsteroidSize::Large.radius() > AsteroidSize::Small.radius());
    }

    #[test]
    fn test_ship_missile_count_tracks_energy() {
        let b = bounds();
        let mut ship = Ship::spawn(b);
        assert_eq!(ship.missiles(), 200);
        ship.energy = 49.5;
        assert_eq!(ship.missiles(), 99);
        ship.energy = -2.0;
        assert_eq!(ship.missiles(), 0);
    }

    #[test]
    fn test_cooldown_halves_while_energy_high() {
        let b = bounds();
        let mut ship = Ship::spawn(b);
        assert_eq!(ship.cooldown_after_shot(), FIRE_COOLDOWN_FAST);
        ship.energy = 50.0;
        assert_eq!(ship.cooldown_after_shot(), FIRE_COOLDOWN);
        ship.energy = 10.0;
        assert_eq!(ship.cooldown_after_shot(), FIRE_COOLDOWN);
    }

    #[test]
    fn test_explosion_steps_through_frames_then_expires() {
        let b = bounds();
        let mut boom = Explosion::new(Vec2::ZERO, ExplosionSize::Small);
        assert!(!boom.expired(b));
        // One hold interval per frame, ten frames total
        for _ in 0..=EXPLOSION_LAST_FRAME {
            boom.advance(EXPLOSION_FRAME_HOLD + 1e-4, b);
        }
        assert!(boom.expired(b));
    }

    #[test]
    fn test_explosion_catches_up_after_long_delta() {
        let b = bounds();
        let mut boom = Explosion::new(Vec2::ZERO, ExplosionSize::Large);
        boom.advance(EXPLOSION_FRAME_HOLD * 3.5, b);
        assert_eq!(boom.frame, 3);
    }

    #[test]
    fn test_explosion_expires_after_an_absurd_delta() {
        let b = bounds();
        let mut boom = Explosion::new(Vec2::ZERO, ExplosionSize::Medium);
        boom.advance(f32::INFINITY, b);
        assert!(boom.expired(b));

        let mut boom = Explosion::new(Vec2::ZERO, ExplosionSize::Small);
        boom.advance(1e12, b);
        assert!(boom.expired(b));
    }

    #[test]
    fn test_end_session_runs_once() {
        let mut state = GameState::new(7, bounds());
        state.start_session();
        state.score = 50;
        state.end_session();
        state.end_session();
        let events = state.drain_events();
        let ended = events
            .iter()
            .filter(|e| matches!(e, GameEvent::SessionEnded { .. }))
            .count();
        assert_eq!(ended, 1);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_end_session_reports_new_high_score_only_when_beaten() {
        let mut state = GameState::new(7, bounds());
        state.high_score = 100;
        state.start_session();
        state.score = 100;
        state.end_session();
        assert!(
            !state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::NewHighScore(_)))
        );

        state.start_session();
        state.score = 110;
        state.end_session();
        assert!(
            state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::NewHighScore(110)))
        );
        assert_eq!(state.high_score, 110);
    }

    #[test]
    fn test_start_session_resets_run_values() {
        let mut state = GameState::new(3, bounds());
        state.start_session();
        state.score = 70;
        state.lives = 1;
        state.ship.energy = 5.0;
        state.end_session();
        state.start_session();
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.ship.energy, ENERGY_MAX);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.bullets.is_empty() && state.asteroids.is_empty());
    }

    #[test]
    fn test_scroll_offset_advances_with_frames() {
        let mut state = GameState::new(1, bounds());
        state.start_session();
        assert_eq!(state.scroll_offset(), 0.0);
        state.frames = 40;
        assert_eq!(state.scroll_offset(), 2.0);
        // wraps at the field width
        state.frames = 20 * 1920 + 20;
        assert_eq!(state.scroll_offset(), 1.0);
    }
}
