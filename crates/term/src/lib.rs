//! Terminal rendering module.
//!
//! A small, full-redraw renderer: the playfield is 10x20 cells drawn two
//! characters wide, so one frame is a couple of kilobytes of queued
//! commands. No diffing - at this size it is not worth the bookkeeping.

pub mod renderer;
pub mod view;

pub use brick_tetris_core as core;
pub use brick_tetris_types as types;

pub use renderer::Screen;
pub use view::GameView;
