//! Game logic core - pure, deterministic, and testable
//!
//! Everything that has rules lives here: the field, the active figure, the
//! figure catalog and generator, scoring, and the state machine that ties
//! them together. The crate performs no I/O; high-score persistence goes
//! through the [`ScoreStore`] trait and randomness through a seeded
//! [`SimpleRng`] owned by the game context.
//!
//! # Module Structure
//!
//! - [`catalog`]: the 7x4 precomputed figure occupancy patterns
//! - [`generator`]: seeded RNG and the next-figure source
//! - [`field`]: 10x20 grid with line detection, collapse and debris seeding
//! - [`scoring`]: line-score table and score/level/speed progression
//! - [`figure`]: the active figure - movement, rotation, landing tests
//! - [`machine`]: the (phase, event) transition table
//! - [`game`]: the [`Game`] context and the public façade
//! - [`snapshot`]: plain-data state copies handed to the host
//! - [`store`]: the high-score persistence seam
//!
//! # Example
//!
//! ```
//! use brick_tetris_core::Game;
//! use brick_tetris_types::{Phase, UserAction};
//!
//! let mut game = Game::new(12345);
//!
//! // First tick boots into the setup menu.
//! let snapshot = game.advance_tick();
//! assert_eq!(snapshot.phase, Phase::Init);
//!
//! // Start a game and let it fall.
//! game.apply_action(UserAction::Start);
//! let snapshot = game.advance_tick();
//! assert!(matches!(snapshot.phase, Phase::Moving | Phase::Init));
//! ```

pub mod catalog;
pub mod field;
pub mod figure;
pub mod game;
pub mod generator;
pub mod machine;
pub mod scoring;
pub mod snapshot;
pub mod store;

pub use brick_tetris_types as types;

// Re-export the façade surface for convenience.
pub use catalog::{pattern, Pattern};
pub use field::Field;
pub use figure::Figure;
pub use game::Game;
pub use generator::{FigureSource, SimpleRng};
pub use scoring::{line_score, Progress};
pub use snapshot::{NextPreview, Snapshot};
pub use store::{MemoryStore, ScoreStore};
