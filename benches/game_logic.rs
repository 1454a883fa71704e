use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_arcade::core::{Board, GameState, GravityClock, SnakeGame};
use tui_arcade::term::{BlocksView, FrameBuffer, Viewport};
use tui_arcade::types::{Direction, MoveOutcome, PieceKind, TICK_MS};

fn bench_gravity_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut clock = GravityClock::new();
    state.start();

    c.bench_function("gravity_tick_16ms", |b| {
        b.iter(|| {
            if clock.advance(black_box(TICK_MS), state.drop_interval_ms()) {
                state.soft_drop();
            }
            if state.game_over() {
                state.reset();
                state.start();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_drop_to_lock(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("drop_to_lock", |b| {
        b.iter(|| {
            while state.soft_drop() == MoveOutcome::Moved {}
            if state.game_over() {
                state.reset();
                state.start();
            }
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut dx = 1;

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            if state.move_piece(dx, 0) == MoveOutcome::Rejected {
                dx = -dx;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("rotate_cw", |b| {
        b.iter(|| {
            state.rotate_cw();
        })
    });
}

fn bench_snake_step(c: &mut Criterion) {
    let mut game = SnakeGame::new(12345);
    let turns = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
    let mut i = 0usize;

    c.bench_function("snake_step", |b| {
        b.iter(|| {
            game.steer(turns[i % turns.len()]);
            i = i.wrapping_add(1);
            game.step();
            if game.game_over() {
                game.restart();
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let view = BlocksView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_blocks_80x24", |b| {
        b.iter(|| {
            view.render_into(&state.snapshot(), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_gravity_tick,
    bench_line_clear,
    bench_drop_to_lock,
    bench_move,
    bench_rotate,
    bench_snake_step,
    bench_render
);
criterion_main!(benches);
