//! Spacer entry point
//!
//! Native demo shell: parses flags, loads settings and the stored best
//! score, then runs the session loop with the autopilot on the stick.
//! Each frame: clock tick, input, sim step(s), snapshot to the renderer,
//! queued events to the audio sink and the high-score file.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::ensure;
use clap::Parser;

use spacer::audio::{AudioSink, LogAudio, MusicTrack};
use spacer::consts::{MAX_SUBSTEPS, SIM_DT, TARGET_FPS};
use spacer::demo::Autopilot;
use spacer::highscores;
use spacer::platform::FrameClock;
use spacer::renderer::{HudLogRenderer, Renderer};
use spacer::settings::{Settings, TimestepMode};
use spacer::sim::{FieldBounds, GameEvent, GamePhase, GameState, tick};

/// Command-line flags for the demo shell
#[derive(Debug, Parser)]
#[command(name = "spacer", about = "Side-scrolling asteroid shooter (headless demo)")]
struct Args {
    /// RNG seed (defaults to system time)
    #[arg(long)]
    seed: Option<u64>,
    /// Field width override, px
    #[arg(long)]
    width: Option<f32>,
    /// Field height override, px
    #[arg(long)]
    height: Option<f32>,
    /// Step without frame pacing (as fast as the machine allows)
    #[arg(long)]
    unpaced: bool,
    /// Pass measured deltas straight to the sim instead of fixed substeps
    #[arg(long)]
    variable_step: bool,
    /// Stop after this many frames
    #[arg(long, default_value_t = 3600)]
    max_frames: u64,
    /// Settings file
    #[arg(long, default_value = "settings.json")]
    settings: PathBuf,
    /// High score file
    #[arg(long, default_value = highscores::HIGH_SCORE_FILE)]
    high_score: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = Settings::load(&args.settings);
    if let Some(width) = args.width {
        settings.width = width;
    }
    if let Some(height) = args.height {
        settings.height = height;
    }
    if args.variable_step {
        settings.timestep = TimestepMode::Variable;
    }
    ensure!(
        settings.width >= 200.0 && settings.height >= 200.0,
        "field too small to play in: {}x{}",
        settings.width,
        settings.height
    );

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    let bounds = FieldBounds::new(settings.width, settings.height);
    let mut state = GameState::new(seed, bounds);
    state.high_score = highscores::load(&args.high_score);
    log::info!(
        "spacer starting: seed {seed}, field {}x{}, {} step",
        settings.width,
        settings.height,
        settings.timestep.as_str()
    );

    let mut clock = FrameClock::new(TARGET_FPS);
    let mut renderer = HudLogRenderer::default();
    let mut audio = LogAudio;
    let mut pilot = Autopilot::new();
    let mut accumulator = 0.0_f32;
    let mut last_phase = state.phase;
    audio.music(MusicTrack::Menu);

    for _ in 0..args.max_frames {
        let dt = if args.unpaced { SIM_DT } else { clock.tick() };
        let mut input = pilot.drive(&state);

        match settings.timestep {
            TimestepMode::Fixed => {
                accumulator += dt;
                let mut substeps = 0;
                while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                    tick(&mut state, &input, SIM_DT);
                    accumulator -= SIM_DT;
                    substeps += 1;
                    // Clear one-shot inputs after the first substep
                    input.confirm = false;
                }
            }
            TimestepMode::Variable => tick(&mut state, &input, dt),
        }

        for event in state.drain_events() {
            match event {
                GameEvent::PlaySound(sound) => audio.play(sound),
                GameEvent::NewHighScore(score) => {
                    if let Err(err) = highscores::save(&args.high_score, score) {
                        log::warn!("could not persist high score: {err}");
                    }
                }
                GameEvent::SessionEnded { score } => {
                    log::info!("game over: final score {score}");
                }
            }
        }

        if state.phase != last_phase {
            let track = if state.phase == GamePhase::Playing {
                MusicTrack::Game
            } else {
                MusicTrack::Menu
            };
            audio.music(track);
            last_phase = state.phase;
        }

        renderer.draw(&state.snapshot());
    }

    log::info!(
        "demo finished after {} frames: score {}, best {}",
        args.max_frames,
        state.score,
        state.high_score
    );
    Ok(())
}
