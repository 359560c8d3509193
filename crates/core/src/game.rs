//! Game context and public façade
//!
//! [`Game`] owns everything a session needs - field, figure, generator,
//! progression, RNG, gravity timer and the score store - so independent
//! instances can coexist (tests run dozens). The host talks to exactly two
//! methods: [`Game::apply_action`] for discrete inputs and
//! [`Game::advance_tick`] on a fixed 5 ms cadence.
//!
//! The tick driver works in two steps, both of which may dispatch an event
//! in the same call: first the phase-dependent descent check (`Touchdown`
//! vs `PlaceFree` while in the spawn or shift phase), then the gravity
//! countdown, which raises `Tick` when it hits zero. The countdown reload
//! shrinks linearly with the speed setting.

use std::io;

use crate::field::Field;
use crate::figure::Figure;
use crate::generator::{FigureSource, SimpleRng};
use crate::machine::Event;
use crate::scoring::Progress;
use crate::snapshot::{NextPreview, Snapshot};
use crate::store::{MemoryStore, ScoreStore};
use crate::types::{Phase, UserAction, GRAVITY_TICKS_BASE, MAX_SPEED};

/// One game session
pub struct Game {
    pub(crate) field: Field,
    pub(crate) figure: Option<Figure>,
    pub(crate) source: FigureSource,
    pub(crate) progress: Progress,
    pub(crate) phase: Phase,
    rng: SimpleRng,
    timer: u32,
    store: Box<dyn ScoreStore>,
    store_error: Option<io::Error>,
}

impl Game {
    /// Session with an in-memory score store
    pub fn new(seed: u32) -> Self {
        Self::with_store(seed, Box::new(MemoryStore::default()))
    }

    /// Session persisting the high score through `store`
    pub fn with_store(seed: u32, store: Box<dyn ScoreStore>) -> Self {
        let mut rng = SimpleRng::new(seed);
        let source = FigureSource::new(&mut rng);
        Self {
            field: Field::new(),
            figure: None,
            source,
            progress: Progress::new(),
            phase: Phase::Uninit,
            rng,
            timer: GRAVITY_TICKS_BASE,
            store,
            store_error: None,
        }
    }

    /// Current phase tag
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Feed one user action into the machine
    pub fn apply_action(&mut self, action: UserAction) {
        let event = match action {
            UserAction::Start => Event::Start,
            UserAction::Pause => Event::Pause,
            UserAction::Terminate => Event::Terminate,
            UserAction::Left => Event::Left,
            UserAction::Right => Event::Right,
            UserAction::Up => Event::Up,
            UserAction::Down => Event::Down,
            UserAction::Action => Event::Rotate,
        };
        self.handle_event(event);
    }

    /// Advance one timer unit and return the updated state
    pub fn advance_tick(&mut self) -> Snapshot {
        match self.phase {
            Phase::Uninit => self.handle_event(Event::Init),
            Phase::Shift | Phase::Spawn => {
                let event = match &self.figure {
                    Some(figure) if figure.can_advance_down(&self.field) => Event::PlaceFree,
                    _ => Event::Touchdown,
                };
                self.handle_event(event);
            }
            _ => {}
        }

        if self.timer > 0 {
            self.timer -= 1;
        } else {
            self.handle_event(Event::Tick);
        }

        self.snapshot()
    }

    /// Build a read-only copy of the visible state
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot {
            score: self.progress.score(),
            high_score: self.progress.high_score(),
            level: self.progress.level(),
            speed: self.progress.speed(),
            phase: self.phase,
            next: NextPreview::new(self.source.kind(), self.source.rotation()),
            ..Snapshot::default()
        };
        self.field.write_grid(&mut snapshot.field);
        snapshot
    }

    /// Drain the last persistence failure, if any
    ///
    /// Saving is best-effort: a failed write never interrupts play, but the
    /// host can report it once the session ends.
    pub fn take_store_error(&mut self) -> Option<io::Error> {
        self.store_error.take()
    }

    /// Reload the gravity countdown from the current speed
    fn reset_timer(&mut self) {
        let step = GRAVITY_TICKS_BASE / MAX_SPEED;
        self.timer = GRAVITY_TICKS_BASE - step * (self.progress.speed() - 1);
    }

    /// Turn the pending figure into the current one and re-roll the pending
    fn spawn_from_next(&mut self) {
        self.figure = Some(Figure::spawn(self.source.kind(), self.source.rotation()));
        self.source.roll(&mut self.rng);
    }

    fn paint_figure(&mut self) {
        if let Some(figure) = &self.figure {
            figure.paint(&mut self.field);
        }
    }

    /// Erase, mutate through `op`, repaint - keeps the field consistent
    /// around every reposition
    fn with_erased_figure(&mut self, op: impl FnOnce(&mut Figure, &Field)) {
        let Some(mut figure) = self.figure else {
            return;
        };
        figure.erase(&mut self.field);
        op(&mut figure, &self.field);
        figure.paint(&mut self.field);
        self.figure = Some(figure);
    }

    // Transition actions. Run by the table in `machine`; each leaves the
    // painted-figure invariant intact before the snapshot goes out.

    pub(crate) fn on_boot(&mut self) {
        let high_score = self.store.load();
        self.progress.set_high_score(high_score);
        self.progress.set_level(1);
        self.progress.set_speed(1);
    }

    pub(crate) fn menu_level_up(&mut self) {
        self.progress.inc_level();
    }

    pub(crate) fn menu_level_down(&mut self) {
        self.progress.dec_level();
    }

    pub(crate) fn menu_speed_up(&mut self) {
        self.progress.inc_speed();
    }

    pub(crate) fn menu_speed_down(&mut self) {
        self.progress.dec_speed();
    }

    pub(crate) fn on_start(&mut self) {
        // Debris depth comes from the menu level; the played game then
        // starts back at level 1.
        let menu_level = self.progress.level();
        self.field.seed_debris(menu_level, &mut self.rng);
        // The first figure is the one the menu preview showed.
        self.spawn_from_next();
        self.paint_figure();
        self.progress.set_level(1);
        self.progress.reset_score();
        self.reset_timer();
    }

    pub(crate) fn on_move_left(&mut self) {
        self.with_erased_figure(|figure, field| {
            figure.try_shift(field, -1);
        });
    }

    pub(crate) fn on_move_right(&mut self) {
        self.with_erased_figure(|figure, field| {
            figure.try_shift(field, 1);
        });
    }

    pub(crate) fn on_rotate(&mut self) {
        self.with_erased_figure(|figure, field| {
            figure.try_rotate(field);
        });
    }

    pub(crate) fn on_drop(&mut self) {
        self.with_erased_figure(|figure, field| {
            while figure.can_advance_down(field) {
                figure.advance_down();
            }
        });
    }

    pub(crate) fn on_place_free(&mut self) {
        self.with_erased_figure(|figure, _| {
            figure.advance_down();
        });
        self.reset_timer();
    }

    pub(crate) fn on_touchdown(&mut self) {
        let lines = self.field.scan_and_clear();
        self.progress.apply_clear(lines);
        self.spawn_from_next();
        self.paint_figure();
        self.reset_timer();
    }

    pub(crate) fn on_game_over(&mut self) {
        if let Some(high_score) = self.progress.finish() {
            if let Err(err) = self.store.save(high_score) {
                self.store_error = Some(err);
            }
        }
    }
}
