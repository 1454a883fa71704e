//! Snake engine
//!
//! A square grid, a body of one or more segments, a heading and one food tile.
//! The snake sits still until it is first steered. Like the block engine it
//! owns no timer: the driver calls [`SnakeGame::step`] every
//! [`SNAKE_STEP_MS`](crate::types::SNAKE_STEP_MS).

use std::collections::VecDeque;

use serde::Serialize;

use crate::rng::{RandomSource, SimpleRng};
use crate::types::{Direction, Phase, SnakeStep, SNAKE_FOOD_SCORE, SNAKE_GRID};

/// Grid tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone)]
pub struct SnakeGame<R = SimpleRng> {
    grid: u8,
    /// Head first.
    body: VecDeque<Point>,
    dx: i8,
    dy: i8,
    food: Point,
    score: u32,
    phase: Phase,
    rng: R,
}

impl SnakeGame<SimpleRng> {
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> SnakeGame<R> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_grid(rng, SNAKE_GRID)
    }

    /// Game on a `size × size` grid (clamped to at least 2)
    pub fn with_grid(rng: R, size: u8) -> Self {
        let grid = size.clamp(2, i8::MAX as u8);
        let mut game = Self {
            grid,
            body: VecDeque::new(),
            dx: 0,
            dy: 0,
            food: Point::new(0, 0),
            score: 0,
            phase: Phase::Running,
            rng,
        };
        game.restart();
        game
    }

    /// Start over: one segment in the center, stationary, fresh food.
    pub fn restart(&mut self) {
        let mid = (self.grid / 2) as i8;
        self.body.clear();
        self.body.push_back(Point::new(mid, mid));
        self.dx = 0;
        self.dy = 0;
        self.score = 0;
        self.phase = Phase::Running;
        self.place_food();
    }

    /// Change heading. Turning straight back onto the neck is ignored.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        let (dx, dy) = dir.delta();
        let reverses = match dir {
            Direction::Up => self.dy == 1,
            Direction::Down => self.dy == -1,
            Direction::Left => self.dx == 1,
            Direction::Right => self.dx == -1,
        };
        if reverses {
            return false;
        }
        self.dx = dx;
        self.dy = dy;
        true
    }

    /// Advance one tile along the heading
    pub fn step(&mut self) -> SnakeStep {
        if self.phase != Phase::Running {
            return SnakeStep::Halted;
        }
        if self.dx == 0 && self.dy == 0 {
            return SnakeStep::Idle;
        }

        let head = self.head();
        let next = Point::new(head.x + self.dx, head.y + self.dy);

        if !self.in_bounds(next) {
            self.phase = Phase::GameOver;
            return SnakeStep::Died;
        }
        // Tail still counts: it has not moved yet.
        if self.body.iter().skip(1).any(|&p| p == next) {
            self.phase = Phase::GameOver;
            return SnakeStep::Died;
        }

        self.body.push_front(next);
        if next == self.food {
            self.score = self.score.saturating_add(SNAKE_FOOD_SCORE);
            self.place_food();
            return SnakeStep::Ate;
        }
        self.body.pop_back();
        SnakeStep::Moved
    }

    /// Put food on a random free tile. A full grid ends the game.
    fn place_food(&mut self) {
        let total = self.grid as usize * self.grid as usize;
        let free = total.saturating_sub(self.body.len());
        if free == 0 {
            self.phase = Phase::GameOver;
            return;
        }

        let mut pick = self.rng.next_range(free as u32) as usize;
        for y in 0..self.grid as i8 {
            for x in 0..self.grid as i8 {
                let p = Point::new(x, y);
                if self.body.contains(&p) {
                    continue;
                }
                if pick == 0 {
                    self.food = p;
                    return;
                }
                pick -= 1;
            }
        }
    }

    fn in_bounds(&self, p: Point) -> bool {
        let n = self.grid as i8;
        p.x >= 0 && p.x < n && p.y >= 0 && p.y < n
    }

    pub fn head(&self) -> Point {
        self.body.front().copied().unwrap_or(Point::new(0, 0))
    }

    pub fn body(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn heading(&self) -> (i8, i8) {
        (self.dx, self.dy)
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn grid(&self) -> u8 {
        self.grid
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            segments: self.body.iter().copied().collect(),
            food: self.food,
            score: self.score,
            phase: self.phase,
            grid: self.grid,
        }
    }

    #[cfg(test)]
    fn set_body(&mut self, segments: &[Point]) {
        self.body = segments.iter().copied().collect();
    }
}

impl Default for SnakeGame<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Render/export view of a snake session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnakeSnapshot {
    /// Head first.
    pub segments: Vec<Point>,
    pub food: Point,
    pub score: u32,
    pub phase: Phase,
    pub grid: u8,
}

impl SnakeSnapshot {
    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}
