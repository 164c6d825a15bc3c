//! High score persistence
//!
//! One integer in a plain-text file. A missing or unreadable file is a
//! warning, never an error: the score just starts at zero.

use std::fs;
use std::io;
use std::path::Path;

/// Default file name, resolved against the working directory
pub const HIGH_SCORE_FILE: &str = "highscore.txt";

/// Read the stored best score; 0 when the file is absent or corrupt
pub fn load(path: &Path) -> u32 {
    match fs::read_to_string(path) {
        Ok(text) => match text.trim().parse() {
            Ok(score) => {
                log::info!("high score loaded: {score}");
                score
            }
            Err(_) => {
                log::warn!(
                    "high score file {} is corrupt, starting from 0",
                    path.display()
                );
                0
            }
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::info!("no high score file yet, starting from 0");
            0
        }
        Err(err) => {
            log::warn!("could not read {}: {err}, starting from 0", path.display());
            0
        }
    }
}

/// Persist a beaten score
pub fn save(path: &Path, score: u32) -> io::Result<()> {
    fs::write(path, score.to_string())?;
    log::info!("high score saved: {score}");
    Ok(())
}
