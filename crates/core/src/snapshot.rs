//! Render/export view of a block stacker session.

use serde::Serialize;

use crate::game_state::ActivePiece;
use crate::pieces::Shape;
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    /// FNV-1a over `board`, row-major.
    pub board_hash: u64,
    pub active: Option<ActiveSnapshot>,
    pub next: Option<ActiveSnapshot>,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        Self {
            board,
            board_hash: fnv1a64_board(&board),
            active: None,
            next: None,
            phase: Phase::Idle,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: 0,
        }
    }
}

/// FNV-1a 64-bit hash of a snapshot grid.
pub fn fnv1a64_board(board: &[[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for &b in board.iter().flatten() {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}
