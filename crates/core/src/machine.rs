//! State machine - the (phase, event) transition table
//!
//! A flat table of rows scanned linearly; the first row matching the current
//! phase and the incoming event wins. Events with no matching row are
//! swallowed: the machine is total over its event set by construction, and
//! "wrong phase" is not an error.
//!
//! Actions run before the phase is updated, so a handler still sees the
//! phase the event arrived in.

use crate::game::Game;
use crate::types::Phase;

/// Internal events the machine dispatches on
///
/// User actions map 1:1 onto the first block; `Tick`, `Touchdown` and
/// `PlaceFree` are raised by the tick driver itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// One-time boot (first tick after construction)
    Init,
    Start,
    Pause,
    Terminate,
    Left,
    Right,
    Up,
    Down,
    /// The rotate button
    Rotate,
    /// Gravity countdown expired
    Tick,
    /// The figure cannot descend any further
    Touchdown,
    /// The figure has room below
    PlaceFree,
}

struct Transition {
    phase: Phase,
    event: Event,
    next: Phase,
    action: Option<fn(&mut Game)>,
}

#[rustfmt::skip]
static TABLE: &[Transition] = &[
    Transition { phase: Phase::Uninit, event: Event::Init,      next: Phase::Init,   action: Some(Game::on_boot) },
    Transition { phase: Phase::Init,   event: Event::Right,     next: Phase::Init,   action: Some(Game::menu_level_up) },
    Transition { phase: Phase::Init,   event: Event::Up,        next: Phase::Init,   action: Some(Game::menu_speed_up) },
    Transition { phase: Phase::Init,   event: Event::Left,      next: Phase::Init,   action: Some(Game::menu_level_down) },
    Transition { phase: Phase::Init,   event: Event::Down,      next: Phase::Init,   action: Some(Game::menu_speed_down) },
    Transition { phase: Phase::Init,   event: Event::Start,     next: Phase::Spawn,  action: Some(Game::on_start) },
    Transition { phase: Phase::Moving, event: Event::Left,      next: Phase::Moving, action: Some(Game::on_move_left) },
    Transition { phase: Phase::Moving, event: Event::Right,     next: Phase::Moving, action: Some(Game::on_move_right) },
    Transition { phase: Phase::Moving, event: Event::Rotate,    next: Phase::Moving, action: Some(Game::on_rotate) },
    Transition { phase: Phase::Moving, event: Event::Down,      next: Phase::Shift,  action: Some(Game::on_drop) },
    Transition { phase: Phase::Moving, event: Event::Tick,      next: Phase::Shift,  action: None },
    Transition { phase: Phase::Moving, event: Event::Pause,     next: Phase::Idle,   action: None },
    Transition { phase: Phase::Idle,   event: Event::Pause,     next: Phase::Moving, action: None },
    Transition { phase: Phase::Idle,   event: Event::Start,     next: Phase::Init,   action: None },
    Transition { phase: Phase::Moving, event: Event::Terminate, next: Phase::Init,   action: Some(Game::on_game_over) },
    Transition { phase: Phase::Shift,  event: Event::PlaceFree, next: Phase::Moving, action: Some(Game::on_place_free) },
    Transition { phase: Phase::Shift,  event: Event::Touchdown, next: Phase::Spawn,  action: Some(Game::on_touchdown) },
    Transition { phase: Phase::Spawn,  event: Event::PlaceFree, next: Phase::Moving, action: Some(Game::on_place_free) },
    Transition { phase: Phase::Spawn,  event: Event::Touchdown, next: Phase::Init,   action: Some(Game::on_game_over) },
];

impl Game {
    /// Dispatch one event through the transition table
    pub(crate) fn handle_event(&mut self, event: Event) {
        for row in TABLE {
            if row.phase == self.phase && row.event == event {
                if let Some(action) = row.action {
                    action(self);
                }
                self.phase = row.next;
                return;
            }
        }
    }
}
