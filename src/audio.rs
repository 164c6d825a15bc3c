//! Audio collaborator seam
//!
//! Playback is fire-and-forget: the simulation queues `PlaySound` events,
//! the shell routes them here, and nothing ever blocks on or reads back
//! from the device. A real backend (mixer, decoder) lives behind the
//! trait; the demo shell ships with logging and silent sinks.

use crate::sim::Sound;

/// Looping background tracks, switched on phase changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    /// Start and game-over screens
    Menu,
    /// Active gameplay
    Game,
}

/// Output device seam
pub trait AudioSink {
    /// Play one effect, fire-and-forget
    fn play(&mut self, sound: Sound);
    /// Switch the looping background track
    fn music(&mut self, track: MusicTrack);
}

/// Discards everything (tests, benchmarks)
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _sound: Sound) {}
    fn music(&mut self, _track: MusicTrack) {}
}

/// Logs playback requests; the headless demo's speaker
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, sound: Sound) {
        log::debug!("sfx: {sound:?}");
    }

    fn music(&mut self, track: MusicTrack) {
        log::info!("music: {track:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sinks_accept_every_sound() {
        let mut null = NullAudio;
        let mut logger = LogAudio;
        for sound in [Sound::Fire, Sound::Impact] {
            null.play(sound);
            logger.play(sound);
        }
        null.music(MusicTrack::Menu);
        logger.music(MusicTrack::Game);
    }
}
