//! Terminal brick-game runner (default binary).
//!
//! Drives the logic core on its fixed 5 ms cadence: poll for key events with
//! a timeout until the next tick, feed mapped actions in, then advance the
//! machine and draw the returned snapshot.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use brick_tetris::core::Game;
use brick_tetris::input::{map_key, should_quit};
use brick_tetris::store::FileScoreStore;
use brick_tetris::term::{GameView, Screen};
use brick_tetris::types::{UserAction, TICK_MS};

fn main() -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos())
        .unwrap_or(1);
    let mut game = Game::with_store(seed, Box::new(FileScoreStore::at_home()));

    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut game, &mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();

    // Persistence is best-effort; mention a failed save once we are back on
    // the normal screen.
    if let Some(err) = game.take_store_error() {
        eprintln!("high score was not saved: {err}");
    }
    result
}

fn run(game: &mut Game, screen: &mut Screen) -> Result<()> {
    let view = GameView;
    let tick = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        // Route through the machine first so a mid-game high
                        // score still gets persisted.
                        game.apply_action(UserAction::Terminate);
                        return Ok(());
                    }
                    if let Some(action) = map_key(key) {
                        game.apply_action(action);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            let snapshot = game.advance_tick();
            screen.draw(&view, &snapshot)?;
        }
    }
}
