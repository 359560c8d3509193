//! High-score persistence across simulated process restarts.

use std::env;
use std::fs;
use std::path::PathBuf;

use brick_tetris::core::{Game, ScoreStore};
use brick_tetris::store::FileScoreStore;
use brick_tetris::types::Phase;

/// Unique throwaway record path; removed on drop.
struct TempRecord(PathBuf);

impl TempRecord {
    fn new(tag: &str) -> Self {
        let path = env::temp_dir().join(format!(
            "brick-tetris-it-{}-{}.bin",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        Self(path)
    }
}

impl Drop for TempRecord {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn roundtrip_survives_a_restart() {
    let record = TempRecord::new("roundtrip");

    let mut store = FileScoreStore::new(&record.0);
    store.save(2100).unwrap();

    // "Restart": a fresh store over the same file.
    let mut reopened = FileScoreStore::new(&record.0);
    assert_eq!(reopened.load(), 2100);
}

#[test]
fn absent_record_means_zero() {
    let record = TempRecord::new("absent");
    let mut store = FileScoreStore::new(&record.0);
    assert_eq!(store.load(), 0);
}

#[test]
fn boot_loads_the_stored_high_score() {
    let record = TempRecord::new("boot");
    FileScoreStore::new(&record.0).save(1500).unwrap();

    let mut game = Game::with_store(1, Box::new(FileScoreStore::new(&record.0)));
    let snapshot = game.advance_tick();
    assert_eq!(snapshot.phase, Phase::Init);
    assert_eq!(snapshot.high_score, 1500);
}

#[test]
fn boot_without_a_record_shows_zero() {
    let record = TempRecord::new("fresh-boot");
    let mut game = Game::with_store(1, Box::new(FileScoreStore::new(&record.0)));
    let snapshot = game.advance_tick();
    assert_eq!(snapshot.high_score, 0);
}
