//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable in any
//! context (engines, terminal rendering, session journal).
//!
//! # Board Dimensions
//!
//! Block stacker playfield:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: horizontally centered on the shape width, row 0
//!
//! Snake field: 20x20 tiles, starting with one segment in the center (10, 10).
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host loop interval (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity at level 1 |
//! | `DROP_STEP_MS` | 100 | Gravity speed-up per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Fastest gravity |
//! | `SNAKE_STEP_MS` | 150 | Snake movement interval |
//!
//! # Drop Intervals by Level
//!
//! `max(100, 1000 - (level - 1) * 100)`:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 5 | 600ms |
//! | 10+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{PieceKind, GameAction, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! // Parse from string (case-insensitive)
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! // Parse game action
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Host loop interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level
pub const DROP_STEP_MS: u32 = 100;

/// Absolute minimum drop interval (100ms)
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared line, multiplied by line count and level
pub const LINE_CLEAR_BASE: u32 = 100;

/// Snake field size in tiles (square)
pub const SNAKE_GRID: u8 = 20;

/// Snake movement interval
pub const SNAKE_STEP_MS: u32 = 150;

/// Points per food eaten
pub const SNAKE_FOOD_SCORE: u32 = 10;


/// The seven piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in canonical order. Uniform spawning indexes into this.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_arcade_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Grid encoding used by snapshots: 1..=7, with 0 reserved for empty.
    pub fn index(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    pub fn from_index(v: u8) -> Option<Self> {
        match v {
            1..=7 => Some(Self::ALL[(v - 1) as usize]),
            _ => None,
        }
    }

    /// Fixed display color as 24-bit RGB.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0x00, 0xf5, 0xff),
            PieceKind::O => (0xff, 0xff, 0x00),
            PieceKind::T => (0xa0, 0x00, 0xf0),
            PieceKind::S => (0x00, 0xf0, 0x00),
            PieceKind::Z => (0xf0, 0x00, 0x00),
            PieceKind::J => (0x00, 0x00, 0xf0),
            PieceKind::L => (0xf0, 0xa0, 0x00),
        }
    }
}

/// Block stacker actions
///
/// These map one-to-one onto the engine's input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Leave the idle screen and start dropping pieces
    Start,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if blocked
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Toggle pause state
    Pause,
    /// Throw the session away and return to the idle screen
    Reset,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_arcade_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameAction::Start),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "pause" => Some(GameAction::Pause),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::Pause => "pause",
            GameAction::Reset => "reset",
        }
    }
}

/// Snake heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step as (dx, dy), y growing downward.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Session lifecycle
///
/// `Idle -> Running <-> Paused -> GameOver`. GameOver is terminal until reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Running,
    Paused,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::GameOver => "game_over",
        }
    }
}

/// Result of a translation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Candidate position was free and is now current
    Moved,
    /// Downward move was blocked; the piece was fixed and the next one spawned
    Locked,
    /// Move blocked (or not accepted in the current phase); nothing changed
    Rejected,
}

/// Result of a rotation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateOutcome {
    Rotated,
    Rejected,
}

/// Result of one snake step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeStep {
    /// Game is over; nothing moves
    Halted,
    /// No heading chosen yet
    Idle,
    Moved,
    /// Head landed on food: the snake grew and score increased
    Ate,
    /// Head hit a wall or the body
    Died,
}

/// Core-side event emitted after a piece locks.
///
/// Consumed by observers such as the session journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockEvent {
    pub piece: PieceKind,
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind (its color)
pub type Cell = Option<PieceKind>;
