//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules and state of both arcade games. It has **zero
//! dependencies** on terminal, timing, or I/O, making it:
//!
//! - **Deterministic**: Same seed (or scripted random source) gives identical games
//! - **Testable**: Unit tests for every rule, plus integration tests in the root crate
//! - **Portable**: Any host that can call a function and draw a grid can drive it
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision detection and line clearing
//! - [`pieces`]: The seven shape matrices and clockwise rotation
//! - [`game_state`]: Active/next piece, lock sequence, scoring and phase machine
//! - [`scoring`]: Line clear points, level and drop interval
//! - [`rng`]: Pluggable random sources (LCG for play, scripted for tests)
//! - [`clock`]: Host-side gravity clock
//! - [`snapshot`]: Serializable render view of a block session
//! - [`snake`]: The snake game
//!
//! # Game Rules
//!
//! - **Uniform spawns**: every kind equally likely on every draw, one-piece preview
//! - **Plain rotation**: 90° clockwise about the top-left origin, no wall kicks
//! - **Lock on blocked drop**: a downward move that collides fixes the piece
//! - **Scoring**: `lines * 100 * level`, level up every 10 lines
//!
//! # Example
//!
//! ```
//! use tui_arcade_core::GameState;
//! use tui_arcade_types::{GameAction, Phase};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.phase(), Phase::Idle);
//!
//! game.apply_action(GameAction::Start);
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::SoftDrop);
//!
//! assert_eq!(game.phase(), Phase::Running);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! The engines never read a clock. The host ticks every 16ms and feeds the
//! elapsed time into a [`GravityClock`]; when it fires, the host calls
//! [`GameState::soft_drop`] (or [`SnakeGame::step`]).

pub mod board;
pub mod clock;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snake;
pub mod snapshot;

pub use tui_arcade_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::GravityClock;
pub use game_state::{ActivePiece, GameState};
pub use pieces::{spawn_shape, Shape};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_score};
pub use snake::{Point, SnakeGame, SnakeSnapshot};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
