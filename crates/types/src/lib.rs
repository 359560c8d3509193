//! Shared types module - constants and enums used across the workspace
//!
//! All types here are pure data with no dependencies, usable from the logic
//! core, the terminal frontend and the input layer alike.
//!
//! # Field Dimensions
//!
//! Classic brick-game playfield:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (3, 0), top-center of the field
//!
//! # Timing
//!
//! The host drives the core on a fixed 5 ms cadence ([`TICK_MS`]). Gravity is
//! a countdown in ticks, reloaded from the current speed:
//!
//! | Speed | Ticks between drops | Wall time |
//! |-------|---------------------|-----------|
//! | 1 | 250 | 1250 ms |
//! | 5 | 150 | 750 ms |
//! | 10 | 25 | 125 ms |
//!
//! Reload formula: `BASE - (BASE / MAX_SPEED) * (speed - 1)` with
//! `BASE = ` [`GRAVITY_TICKS_BASE`].
//!
//! # Scoring
//!
//! Flat per-pass scores, no level multiplier:
//!
//! | Lines | Points |
//! |-------|--------|
//! | 1 | 100 |
//! | 2 | 300 |
//! | 3 | 700 |
//! | 4+ | 1500 |
//!
//! Every 600 points ([`LEVEL_STEP`]) the level and the gravity speed both go
//! up by one, capped at 10.

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: u8 = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: u8 = 20;

/// Side length of the square box a figure pattern occupies
pub const FIGURE_BOX: usize = 4;

/// Number of figure kinds
pub const FIGURE_KINDS: usize = 7;

/// Number of rotation states per figure
pub const FIGURE_ROTATIONS: usize = 4;

/// Lowest selectable level
pub const MIN_LEVEL: u32 = 1;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 10;

/// Lowest selectable gravity speed
pub const MIN_SPEED: u32 = 1;

/// Highest reachable gravity speed
pub const MAX_SPEED: u32 = 10;

/// Points per cleared-line count in one pass (index 4 also covers 5+ lines)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 700, 1500];

/// Score distance between level-ups (every 600 points)
pub const LEVEL_STEP: u32 = 600;

/// Host tick cadence in milliseconds (one timer unit per call)
pub const TICK_MS: u64 = 5;

/// Gravity countdown at speed 1, in ticks (1250 ms / 5 ms)
pub const GRAVITY_TICKS_BASE: u32 = (1250 / TICK_MS) as u32;

/// The seven tetromino figure kinds
///
/// The declaration order fixes each kind's cell code (`index + 1`), which is
/// what the field stores for settled cells and what renderers color by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl FigureKind {
    /// All kinds in declaration order
    pub const ALL: [FigureKind; FIGURE_KINDS] = [
        FigureKind::I,
        FigureKind::J,
        FigureKind::L,
        FigureKind::O,
        FigureKind::S,
        FigureKind::T,
        FigureKind::Z,
    ];

    /// Index into [`FigureKind::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind for a generator draw; wraps so any `u32` is a valid input
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % FIGURE_KINDS]
    }

    /// Non-zero cell code painted into the field (`1..=7`)
    ///
    /// ```
    /// use brick_tetris_types::FigureKind;
    ///
    /// assert_eq!(FigureKind::I.code(), 1);
    /// assert_eq!(FigureKind::Z.code(), 7);
    /// ```
    pub fn code(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Rotation states, quarter turns clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// All rotations in turn order
    pub const ALL: [Rotation; FIGURE_ROTATIONS] = [
        Rotation::R0,
        Rotation::R90,
        Rotation::R180,
        Rotation::R270,
    ];

    /// Index into [`Rotation::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotation for a generator draw; wraps so any `u32` is a valid input
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % FIGURE_ROTATIONS]
    }

    /// One quarter turn clockwise
    ///
    /// ```
    /// use brick_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::R0.next(), Rotation::R90);
    /// assert_eq!(Rotation::R270.next(), Rotation::R0);
    /// ```
    pub fn next(self) -> Self {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }
}

/// User actions accepted by the game façade
///
/// Directional actions double as menu tuning while the game sits in the
/// setup phase (level/speed selection) and as figure control during play.
/// `Action` is the rotate button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// Start a game from the setup menu (or abandon a paused one)
    Start,
    /// Toggle pause
    Pause,
    /// End the game, persisting the high score if improved
    Terminate,
    /// Move figure left; menu: level down
    Left,
    /// Move figure right; menu: level up
    Right,
    /// Menu: speed up (no effect during play)
    Up,
    /// Hard drop; menu: speed down
    Down,
    /// Rotate the figure one quarter turn
    Action,
}

/// Game phases of the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Freshly constructed, nothing loaded yet
    Uninit,
    /// Setup menu: level/speed tuning, waiting for Start
    Init,
    /// Paused
    Idle,
    /// A new figure was just placed at the top
    Spawn,
    /// Figure in flight, player actions are processed
    Moving,
    /// One-row descent being resolved
    Shift,
}

impl Phase {
    /// Short display tag for status lines
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Uninit => "boot",
            Phase::Init => "menu",
            Phase::Idle => "paused",
            Phase::Spawn => "spawn",
            Phase::Moving => "play",
            Phase::Shift => "shift",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_base_matches_tick_cadence() {
        // 1250 ms between drops at speed 1, one tick every 5 ms.
        assert_eq!(GRAVITY_TICKS_BASE, 250);
        assert_eq!(GRAVITY_TICKS_BASE % MAX_SPEED, 0);
    }

    #[test]
    fn figure_kind_codes_are_nonzero_and_distinct() {
        let mut seen = [false; FIGURE_KINDS + 1];
        for kind in FigureKind::ALL {
            let code = kind.code() as usize;
            assert!((1..=FIGURE_KINDS).contains(&code));
            assert!(!seen[code], "duplicate code {}", code);
            seen[code] = true;
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(FigureKind::from_index(0), FigureKind::I);
        assert_eq!(FigureKind::from_index(7), FigureKind::I);
        assert_eq!(FigureKind::from_index(8), FigureKind::J);
        assert_eq!(Rotation::from_index(5), Rotation::R90);
    }

    #[test]
    fn rotation_cycle_closes() {
        let mut r = Rotation::R0;
        for _ in 0..FIGURE_ROTATIONS {
            r = r.next();
        }
        assert_eq!(r, Rotation::R0);
    }
}
