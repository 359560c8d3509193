//! brick-tetris (workspace façade crate).
//!
//! Re-exports the member crates under one roof: `brick_tetris::{core, store,
//! input, term, types}`. The binary, integration tests and benches all go
//! through this surface.

pub use brick_tetris_core as core;
pub use brick_tetris_input as input;
pub use brick_tetris_store as store;
pub use brick_tetris_term as term;
pub use brick_tetris_types as types;
