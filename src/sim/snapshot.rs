//! Per-frame draw snapshot
//!
//! The simulation never draws. Once per frame the shell asks for a
//! `Snapshot` and hands it to whatever implements `Renderer`; nothing in
//! here can feed back into the sim.

use glam::Vec2;

use super::state::{Entity, ExplosionSize, GamePhase, GameState};

/// Which image the renderer should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    /// Idle hull
    Ship,
    /// Hull with exhaust, while thrust is held
    ShipThrust,
    Bullet,
    /// One of the rock sprites
    Asteroid { variant: u8 },
    PowerUp,
    /// One animation frame at the given size
    Explosion { size: ExplosionSize, frame: u32 },
}

impl SpriteKind {
    /// Draw layer, back to front: field objects, then the ship, then fire
    pub fn layer(self) -> u8 {
        match self {
            SpriteKind::Bullet | SpriteKind::Asteroid { .. } | SpriteKind::PowerUp => 1,
            SpriteKind::Ship | SpriteKind::ShipThrust => 2,
            SpriteKind::Explosion { .. } => 3,
        }
    }
}

/// One draw call: which image, where, how rotated, how big
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteInstance {
    pub kind: SpriteKind,
    pub pos: Vec2,
    /// Degrees
    pub rotation: f32,
    /// Side of the square the sprite scales to, px
    pub size: f32,
}

impl SpriteInstance {
    pub fn new(kind: SpriteKind, pos: Vec2, rotation: f32, size: f32) -> Self {
        Self {
            kind,
            pos,
            rotation,
            size,
        }
    }
}

/// Energy bar color tiers shared by every renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyTier {
    Green,
    Amber,
    Red,
}

/// HUD values for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    pub lives: u32,
    pub score: u32,
    pub high_score: u32,
    /// Clamped to 0..=100 for display
    pub energy_pct: f32,
    /// Missiles remaining (two per energy point)
    pub ammo: u32,
    pub phase: GamePhase,
}

impl Hud {
    /// Bar tier: green above two thirds, amber above one third, else red
    pub fn energy_tier(&self) -> EnergyTier {
        if self.energy_pct >= 66.0 {
            EnergyTier::Green
        } else if self.energy_pct >= 33.0 {
            EnergyTier::Amber
        } else {
            EnergyTier::Red
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Live entities, sorted back to front
    pub sprites: Vec<SpriteInstance>,
    pub hud: Hud,
    /// Horizontal offset of the scrolling debris layer, px
    pub scroll_offset: f32,
}

impl GameState {
    /// Build the draw snapshot for the current frame
    pub fn snapshot(&self) -> Snapshot {
        let mut sprites = Vec::with_capacity(
            1 + self.bullets.len() + self.asteroids.len() + self.explosions.len() + 1,
        );
        sprites.push(self.ship.sprite());
        sprites.extend(self.bullets.iter().map(Entity::sprite));
        sprites.extend(self.asteroids.iter().map(Entity::sprite));
        if let Some(ball) = &self.powerup {
            sprites.push(ball.sprite());
        }
        sprites.extend(self.explosions.iter().map(Entity::sprite));
        sprites.sort_by_key(|s| s.kind.layer());

        Snapshot {
            sprites,
            hud: Hud {
                lives: self.lives,
                score: self.score,
                high_score: self.high_score,
                energy_pct: self.ship.energy.clamp(0.0, 100.0),
                ammo: self.ship.missiles(),
                phase: self.phase,
            },
            scroll_offset: self.scroll_offset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Explosion, FieldBounds};

    fn playing_state() -> GameState {
        let mut state = GameState::new(11, FieldBounds::new(1920.0, 1080.0));
        state.start_session();
        state
    }

    #[test]
    fn test_snapshot_orders_layers_back_to_front() {
        let mut state = playing_state();
        state
            .explosions
            .push(Explosion::new(Vec2::new(10.0, 10.0), ExplosionSize::Small));
        let snapshot = state.snapshot();
        let layers: Vec<u8> = snapshot.sprites.iter().map(|s| s.kind.layer()).collect();
        let mut sorted = layers.clone();
        sorted.sort_unstable();
        assert_eq!(layers, sorted);
        // Explosions draw over the ship
        assert_eq!(snapshot.sprites.last().map(|s| s.kind.layer()), Some(3));
    }

    #[test]
    fn test_snapshot_swaps_ship_sprite_while_thrusting() {
        let mut state = playing_state();
        state.ship.thrusting = true;
        let snapshot = state.snapshot();
        assert!(
            snapshot
                .sprites
                .iter()
                .any(|s| s.kind == SpriteKind::ShipThrust)
        );
        assert!(!snapshot.sprites.iter().any(|s| s.kind == SpriteKind::Ship));
    }

    #[test]
    fn test_hud_mirrors_session_counters() {
        let mut state = playing_state();
        state.score = 120;
        state.high_score = 500;
        state.lives = 2;
        state.ship.energy = 40.0;
        let hud = state.snapshot().hud;
        assert_eq!(hud.score, 120);
        assert_eq!(hud.high_score, 500);
        assert_eq!(hud.lives, 2);
        assert_eq!(hud.ammo, 80);
        assert_eq!(hud.phase, GamePhase::Playing);
    }

    #[test]
    fn test_energy_tier_thresholds() {
        let mut state = playing_state();
        let tier = |energy: f32, state: &mut GameState| {
            state.ship.energy = energy;
            state.snapshot().hud.energy_tier()
        };
        assert_eq!(tier(100.0, &mut state), EnergyTier::Green);
        assert_eq!(tier(66.0, &mut state), EnergyTier::Green);
        assert_eq!(tier(65.9, &mut state), EnergyTier::Amber);
        assert_eq!(tier(33.0, &mut state), EnergyTier::Amber);
        assert_eq!(tier(32.9, &mut state), EnergyTier::Red);
    }

    #[test]
    fn test_energy_pct_clamps_for_display() {
        let mut state = playing_state();
        state.ship.energy = -3.0;
        assert_eq!(state.snapshot().hud.energy_pct, 0.0);
    }
}
