//! File-backed high-score store
//!
//! The record is a single little-endian `i32` in a file of its own - the
//! classic score-file-in-the-home-directory arrangement. Anything that
//! cannot be read back (missing file, short file, negative value) loads as
//! a zero high score rather than an error; the game must come up either way.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use brick_tetris_core::ScoreStore;

/// File name used under the home directory
pub const SCORE_FILE_NAME: &str = ".brick-tetris-score.bin";

/// High-score store persisting to a single file
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    /// Store at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$HOME/.brick-tetris-score.bin`, falling back to the
    /// working directory when `HOME` is unset
    pub fn at_home() -> Self {
        let dir = env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: dir.join(SCORE_FILE_NAME),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&mut self) -> u32 {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.len() >= 4 => {
                let record = i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
                record.max(0) as u32
            }
            _ => 0,
        }
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        let record = score.min(i32::MAX as u32) as i32;
        fs::write(&self.path, record.to_le_bytes())
    }
}
