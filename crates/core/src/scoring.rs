//! Scoring module - line scores and score/level/speed progression
//!
//! Flat per-pass line scores with no level multiplier. Level and speed move
//! together: every 600 points bumps both, and both are clamped to [1, 10]
//! everywhere (menu tuning included).

use crate::types::{LEVEL_STEP, LINE_SCORES, MAX_LEVEL, MAX_SPEED, MIN_LEVEL, MIN_SPEED};

/// Points for clearing `lines` rows in one pass
///
/// 1 -> 100, 2 -> 300, 3 -> 700, 4 and above -> 1500.
pub fn line_score(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}

/// Session progression: score, high score, level and gravity speed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    score: u32,
    high_score: u32,
    level: u32,
    speed: u32,
}

impl Progress {
    /// Fresh progression at level 1, speed 1, zero scores
    pub fn new() -> Self {
        Self {
            score: 0,
            high_score: 0,
            level: MIN_LEVEL,
            speed: MIN_SPEED,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Set the loaded high score (boot time)
    pub fn set_high_score(&mut self, value: u32) {
        self.high_score = value;
    }

    /// Set the level, clamped to [1, 10]
    pub fn set_level(&mut self, value: u32) {
        self.level = value.clamp(MIN_LEVEL, MAX_LEVEL);
    }

    /// Set the speed, clamped to [1, 10]
    pub fn set_speed(&mut self, value: u32) {
        self.speed = value.clamp(MIN_SPEED, MAX_SPEED);
    }

    /// Zero the session score (new game)
    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Level up by one; no-op at the cap
    pub fn inc_level(&mut self) {
        if self.level < MAX_LEVEL {
            self.level += 1;
        }
    }

    /// Level down by one; no-op at the floor
    pub fn dec_level(&mut self) {
        if self.level > MIN_LEVEL {
            self.level -= 1;
        }
    }

    /// Speed up by one; no-op at the cap
    pub fn inc_speed(&mut self) {
        if self.speed < MAX_SPEED {
            self.speed += 1;
        }
    }

    /// Speed down by one; no-op at the floor
    pub fn dec_speed(&mut self) {
        if self.speed > MIN_SPEED {
            self.speed -= 1;
        }
    }

    /// Apply one clear pass: level-up check, then score addition
    ///
    /// The threshold test runs against the pre-addition score: crossing a
    /// multiple of 600 with this delta bumps level and speed once, no matter
    /// how far past the threshold the delta lands.
    pub fn apply_clear(&mut self, lines: usize) {
        if lines == 0 {
            return;
        }
        let delta = line_score(lines);
        if self.score / LEVEL_STEP < (self.score + delta) / LEVEL_STEP {
            self.inc_level();
            self.inc_speed();
        }
        self.score += delta;
    }

    /// End-of-session bookkeeping: reset level/speed to 1 and record a new
    /// high score when beaten, returning it for persistence
    pub fn finish(&mut self) -> Option<u32> {
        self.level = MIN_LEVEL;
        self.speed = MIN_SPEED;
        if self.score > self.high_score {
            self.high_score = self.score;
            Some(self.high_score)
        } else {
            None
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}
