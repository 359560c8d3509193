//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`UserAction`](brick_tetris_types::UserAction)
//! values. Directional keys are context-free here: the state machine decides
//! whether an arrow tunes the menu or moves the figure.

pub mod map;

pub use brick_tetris_types as types;

pub use map::{map_key, should_quit};
