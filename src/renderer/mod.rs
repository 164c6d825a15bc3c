//! Renderer collaborator seam
//!
//! The simulation never draws. Each frame the shell hands the current
//! `Snapshot` to whatever implements `Renderer`; the return path carries
//! nothing, so a renderer can never influence gameplay.

use crate::sim::{GamePhase, Snapshot};

/// Consumes one frame's draw snapshot
pub trait Renderer {
    fn draw(&mut self, frame: &Snapshot);
}

/// Discards every frame (tests, benchmarks)
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _frame: &Snapshot) {}
}

/// Logs a HUD line about once a second; the headless demo's display
#[derive(Debug, Default)]
pub struct HudLogRenderer {
    frames: u64,
}

impl Renderer for HudLogRenderer {
    fn draw(&mut self, frame: &Snapshot) {
        self.frames += 1;
        if self.frames % 60 != 1 {
            return;
        }
        let hud = &frame.hud;
        match hud.phase {
            GamePhase::StartScreen => log::info!("start screen, best {}", hud.high_score),
            GamePhase::GameOver => {
                log::info!("game over, score {} best {}", hud.score, hud.high_score)
            }
            GamePhase::Playing => log::info!(
                "lives {} score {} energy {:>5.1} ({:?}) ammo {} sprites {}",
                hud.lives,
                hud.score,
                hud.energy_pct,
                hud.energy_tier(),
                hud.ammo,
                frame.sprites.len()
            ),
        }
    }
}
