use criterion::{black_box, criterion_group, criterion_main, Criterion};

use brick_tetris::core::{Field, Game};
use brick_tetris::types::UserAction;

fn started_game(seed: u32) -> Game {
    let mut game = Game::new(seed);
    game.advance_tick(); // boot
    game.apply_action(UserAction::Start);
    game
}

fn bench_tick(c: &mut Criterion) {
    let mut game = started_game(12345);
    c.bench_function("advance_tick_5ms", |b| {
        b.iter(|| black_box(game.advance_tick()))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("scan_and_clear_4_rows", |b| {
        b.iter(|| {
            let mut field = Field::new();
            for y in 16..20i8 {
                for x in 0..10i8 {
                    field.set(x, y, 1);
                }
            }
            black_box(field.scan_and_clear())
        })
    });
}

fn bench_shift(c: &mut Criterion) {
    let mut game = started_game(777);
    game.advance_tick(); // into the moving phase
    c.bench_function("shift_left_right", |b| {
        b.iter(|| {
            game.apply_action(UserAction::Left);
            game.apply_action(UserAction::Right);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = started_game(4242);
    game.advance_tick();
    c.bench_function("rotate", |b| {
        b.iter(|| {
            game.apply_action(UserAction::Action);
        })
    });
}

criterion_group!(benches, bench_tick, bench_line_clear, bench_shift, bench_rotate);
criterion_main!(benches);
