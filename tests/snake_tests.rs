//! Snake engine tests through the public API

use tui_arcade::core::{Point, RandomSource, SequenceRng, SimpleRng, SnakeGame};
use tui_arcade::types::{Direction, Phase, SnakeStep, SNAKE_FOOD_SCORE};

fn scripted() -> SnakeGame<SequenceRng> {
    // Food always lands on the first free tile in row-major order.
    SnakeGame::with_rng(SequenceRng::new(vec![0]))
}

fn walk<R: RandomSource>(game: &mut SnakeGame<R>, dir: Direction, steps: usize) -> SnakeStep {
    game.steer(dir);
    let mut last = SnakeStep::Idle;
    for _ in 0..steps {
        last = game.step();
    }
    last
}

#[test]
fn test_snake_waits_for_first_heading() {
    let mut game = scripted();
    for _ in 0..5 {
        assert_eq!(game.step(), SnakeStep::Idle);
    }
    assert_eq!(game.head(), Point::new(10, 10));
    assert_eq!(game.phase(), Phase::Running);
}

#[test]
fn test_eating_grows_by_one_and_scores() {
    let mut game = scripted();
    assert_eq!(game.food(), Point::new(0, 0));

    assert_eq!(walk(&mut game, Direction::Up, 10), SnakeStep::Moved);
    assert_eq!(game.head(), Point::new(10, 0));
    assert_eq!(walk(&mut game, Direction::Left, 10), SnakeStep::Ate);

    assert_eq!(game.len(), 2);
    assert_eq!(game.score(), SNAKE_FOOD_SCORE);
    assert_ne!(game.food(), game.head());

    // Length holds steady on a plain move.
    assert_eq!(walk(&mut game, Direction::Down, 1), SnakeStep::Moved);
    assert_eq!(game.len(), 2);
    assert_eq!(game.head(), Point::new(0, 1));
}

#[test]
fn test_reversing_is_ignored() {
    let mut game = scripted();
    game.steer(Direction::Left);
    game.step();
    assert!(!game.steer(Direction::Right));
    assert_eq!(game.step(), SnakeStep::Moved);
    assert_eq!(game.head(), Point::new(8, 10));
}

#[test]
fn test_wall_ends_game_and_restart_recovers() {
    let mut game = scripted();
    assert_eq!(walk(&mut game, Direction::Right, 9), SnakeStep::Moved);
    assert_eq!(game.head(), Point::new(19, 10));
    assert_eq!(game.step(), SnakeStep::Died);
    assert!(game.game_over());
    assert_eq!(game.step(), SnakeStep::Halted);

    let snap = game.snapshot();
    assert!(snap.game_over());
    assert_eq!(snap.segments, vec![Point::new(19, 10)]);

    game.restart();
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.head(), Point::new(10, 10));
    assert_eq!(game.score(), 0);
}

#[test]
fn test_food_never_on_snake() {
    let mut game = SnakeGame::new(31337);
    let dirs = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];
    let mut rng = SimpleRng::new(5);
    for _ in 0..5_000 {
        if game.game_over() {
            game.restart();
        }
        game.steer(dirs[rng.next_range(4) as usize]);
        game.step();
        if !game.game_over() {
            assert!(game.body().all(|p| p != game.food()));
        }
        for p in game.body() {
            assert!(p.x >= 0 && p.x < 20 && p.y >= 0 && p.y < 20);
        }
    }
}
