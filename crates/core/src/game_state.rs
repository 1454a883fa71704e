//! Game state module - the block stacking engine
//!
//! Ties together board, pieces, random source and scoring. Every call is
//! synchronous and returns immediately; the engine owns no timers (see
//! [`crate::clock::GravityClock`] for the host side of gravity).
//!
//! Lifecycle: `Idle -> Running <-> Paused -> GameOver`. A fresh state already
//! holds a current and a next piece so the idle screen can show them.

use crate::pieces::{spawn_shape, spawn_x, Shape, SPAWN_Y};
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::{drop_interval_ms, level_for_lines, line_clear_score};
use crate::snapshot::{fnv1a64_board, ActiveSnapshot, GameSnapshot};
use crate::types::*;
use crate::Board;

/// A piece in play: shape matrix plus the board position of its top-left cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece in spawn orientation, centered on the top row
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = spawn_shape(kind);
        Self {
            kind,
            shape,
            x: spawn_x(&shape),
            y: SPAWN_Y,
        }
    }

    /// Shifted copy, or `None` when a coordinate leaves the `i8` range
    pub fn translated(&self, dx: i8, dy: i8) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            ..*self
        })
    }

    /// Same origin, shape turned 90° clockwise
    pub fn rotated_cw(&self) -> Self {
        Self {
            shape: self.shape.rotate_cw(),
            ..*self
        }
    }

    /// Absolute board coordinates of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    active: Option<ActivePiece>,
    next: Option<ActivePiece>,
    rng: R,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    /// Pieces fixed into the board this session.
    pieces_locked: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game drawing pieces from `rng`
    pub fn with_rng(rng: R) -> Self {
        let mut state = Self {
            board: Board::new(),
            active: None,
            next: None,
            rng,
            phase: Phase::Idle,
            score: 0,
            level: 1,
            lines: 0,
            pieces_locked: 0,
            last_event: None,
        };
        state.spawn_next();
        state
    }

    /// Leave the idle screen. Ignored in any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    /// Switch between Running and Paused. Ignored in any other phase.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Running => self.phase = Phase::Paused,
            Phase::Paused => self.phase = Phase::Running,
            Phase::Idle | Phase::GameOver => return false,
        }
        true
    }

    /// Discard the session: empty board, zeroed counters, fresh pieces, Idle.
    ///
    /// The random source is kept and continues its sequence.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = None;
        self.next = None;
        self.phase = Phase::Idle;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.pieces_locked = 0;
        self.last_event = None;
        self.spawn_next();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next_piece(&self) -> Option<ActivePiece> {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions.
    ///
    /// Callers are responsible for leaving the active piece collision-free.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Current gravity interval in milliseconds
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Promote the lookahead piece and draw a new lookahead.
    ///
    /// The first spawn of a session draws both pieces (current first). If the
    /// new current piece collides where it spawned, the session is over.
    pub fn spawn_next(&mut self) -> ActivePiece {
        let current = match (self.active, self.next) {
            (Some(_), Some(next)) => next,
            _ => ActivePiece::spawn(self.rng.next_kind()),
        };
        self.next = Some(ActivePiece::spawn(self.rng.next_kind()));
        self.active = Some(current);

        if current.collides(&self.board) {
            self.phase = Phase::GameOver;
        }
        current
    }

    /// Translate the active piece.
    ///
    /// A blocked downward move locks the piece; any other blocked move is a no-op.
    /// Upward moves may not lift the piece above the top edge.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> MoveOutcome {
        if self.phase != Phase::Running {
            return MoveOutcome::Rejected;
        }
        let Some(active) = self.active else {
            return MoveOutcome::Rejected;
        };

        let candidate = active
            .translated(dx, dy)
            .filter(|p| dy >= 0 || p.y >= 0)
            .filter(|p| !p.collides(&self.board));
        if let Some(moved) = candidate {
            self.active = Some(moved);
            return MoveOutcome::Moved;
        }

        if dy > 0 {
            self.lock_piece();
            return MoveOutcome::Locked;
        }

        MoveOutcome::Rejected
    }

    pub fn move_left(&mut self) -> MoveOutcome {
        self.move_piece(-1, 0)
    }

    pub fn move_right(&mut self) -> MoveOutcome {
        self.move_piece(1, 0)
    }

    pub fn soft_drop(&mut self) -> MoveOutcome {
        self.move_piece(0, 1)
    }

    /// Rotate the active piece clockwise in place. No wall kicks.
    pub fn rotate_cw(&mut self) -> RotateOutcome {
        if self.phase != Phase::Running {
            return RotateOutcome::Rejected;
        }
        let Some(active) = self.active else {
            return RotateOutcome::Rejected;
        };

        let candidate = active.rotated_cw();
        if candidate.collides(&self.board) {
            return RotateOutcome::Rejected;
        }
        self.active = Some(candidate);
        RotateOutcome::Rotated
    }

    /// Fix the active piece, clear lines, score, and spawn the next piece
    pub(crate) fn lock_piece(&mut self) {
        let Some(active) = self.active else {
            return;
        };

        self.board.fix_piece(&active.shape, active.x, active.y, active.kind);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let cleared = self.board.clear_full_rows().len() as u32;
        let mut score_delta = 0;
        if cleared > 0 {
            // Scored at the level in effect before this clear.
            score_delta = line_clear_score(cleared, self.level);
            self.score = self.score.saturating_add(score_delta);
            self.lines = self.lines.saturating_add(cleared);
            self.level = level_for_lines(self.lines);
        }

        self.spawn_next();

        self.last_event = Some(LockEvent {
            piece: active.kind,
            lines_cleared: cleared,
            score_delta,
            score: self.score,
            level: self.level,
            lines: self.lines,
            game_over: self.phase == Phase::GameOver,
        });
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply a game action, returning whether it changed anything
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => self.start(),
            GameAction::MoveLeft => self.move_left() != MoveOutcome::Rejected,
            GameAction::MoveRight => self.move_right() != MoveOutcome::Rejected,
            GameAction::SoftDrop => self.soft_drop() != MoveOutcome::Rejected,
            GameAction::RotateCw => self.rotate_cw() == RotateOutcome::Rotated,
            GameAction::Pause => self.toggle_pause(),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.board_hash = fnv1a64_board(&out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next.map(ActiveSnapshot::from);
        out.phase = self.phase;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRng;

    fn scripted(kinds: &[PieceKind]) -> GameState<SequenceRng> {
        GameState::with_rng(SequenceRng::from_kinds(kinds))
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lines, 0);
        assert!(state.active.is_some());
        assert!(state.next.is_some());
        assert_eq!(state.board.occupied_count(), 0);
    }

    #[test]
    fn test_first_spawn_draws_current_then_next() {
        let state = scripted(&[PieceKind::T, PieceKind::I]);
        assert_eq!(state.active.unwrap().kind, PieceKind::T);
        assert_eq!(state.next.unwrap().kind, PieceKind::I);
    }

    #[test]
    fn test_spawn_promotes_next() {
        let mut state = scripted(&[PieceKind::T, PieceKind::I, PieceKind::Z]);
        let promoted = state.spawn_next();
        assert_eq!(promoted.kind, PieceKind::I);
        assert_eq!(state.next.unwrap().kind, PieceKind::Z);
    }

    #[test]
    fn test_spawn_centers_by_shape_width() {
        assert_eq!(ActivePiece::spawn(PieceKind::I).x, 3);
        assert_eq!(ActivePiece::spawn(PieceKind::O).x, 4);
        assert_eq!(ActivePiece::spawn(PieceKind::T).x, 4);
        assert_eq!(ActivePiece::spawn(PieceKind::L).y, 0);
    }

    #[test]
    fn test_moves_rejected_until_started() {
        let mut state = GameState::new(12345);
        let before = state.active;
        assert_eq!(state.move_left(), MoveOutcome::Rejected);
        assert_eq!(state.soft_drop(), MoveOutcome::Rejected);
        assert_eq!(state.rotate_cw(), RotateOutcome::Rejected);
        assert_eq!(state.active, before);
    }

    #[test]
    fn test_start_only_from_idle() {
        let mut state = GameState::new(1);
        assert!(state.start());
        assert!(!state.start());
        assert!(state.toggle_pause());
        assert!(!state.start());
        assert_eq!(state.phase, Phase::Paused);
    }

    #[test]
    fn test_pause_blocks_moves() {
        let mut state = GameState::new(1);
        state.start();
        state.toggle_pause();
        assert_eq!(state.move_right(), MoveOutcome::Rejected);
        state.toggle_pause();
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.move_right(), MoveOutcome::Moved);
    }

    #[test]
    fn test_side_move_into_wall_is_rejected_without_lock() {
        let mut state = scripted(&[PieceKind::O]);
        state.start();
        for _ in 0..4 {
            assert_eq!(state.move_left(), MoveOutcome::Moved);
        }
        assert_eq!(state.move_left(), MoveOutcome::Rejected);
        assert_eq!(state.active.unwrap().x, 0);
        assert_eq!(state.pieces_locked, 0);
    }

    #[test]
    fn test_upward_move_is_rejected_without_lock() {
        let mut state = scripted(&[PieceKind::I]);
        state.start();
        state.board.set(3, 0, Some(PieceKind::Z));
        state.active = Some(ActivePiece::spawn(PieceKind::I).translated(0, 1).unwrap());
        assert_eq!(state.move_piece(0, -1), MoveOutcome::Rejected);
        assert_eq!(state.pieces_locked, 0);
    }

    #[test]
    fn test_out_of_range_offsets_are_rejected() {
        let mut state = scripted(&[PieceKind::T]);
        state.start();
        let before = state.active;

        assert_eq!(state.move_piece(i8::MAX, 0), MoveOutcome::Rejected);
        assert_eq!(state.move_piece(i8::MIN, 0), MoveOutcome::Rejected);
        assert_eq!(state.move_piece(0, i8::MIN), MoveOutcome::Rejected);
        assert_eq!(state.move_piece(0, -1), MoveOutcome::Rejected);
        assert_eq!(state.active, before);
        assert_eq!(state.pieces_locked, 0);
    }

    #[test]
    fn test_lock_records_event() {
        let mut state = scripted(&[PieceKind::O]);
        state.start();
        while state.soft_drop() == MoveOutcome::Moved {}

        let ev = state.take_last_event().unwrap();
        assert_eq!(ev.piece, PieceKind::O);
        assert_eq!(ev.lines_cleared, 0);
        assert!(!ev.game_over);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_score_uses_level_before_clear() {
        let mut state = scripted(&[PieceKind::I]);
        state.start();
        state.lines = 9;
        state.level = 1;
        // Row 19 missing columns 3..=6, which the I bar fills.
        state.board = Board::from_rows(&["III....III"]);

        while state.soft_drop() == MoveOutcome::Moved {}

        assert_eq!(state.lines, 10);
        assert_eq!(state.score, 100);
        assert_eq!(state.level, 2);
        assert_eq!(state.drop_interval_ms(), 900);
    }

    #[test]
    fn test_reset_returns_to_idle_with_fresh_pieces() {
        let mut state = scripted(&[PieceKind::O, PieceKind::T, PieceKind::S, PieceKind::Z]);
        state.start();
        while state.soft_drop() == MoveOutcome::Moved {}
        assert!(state.score == 0 && state.board.occupied_count() == 4);

        state.reset();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.board.occupied_count(), 0);
        assert_eq!(state.pieces_locked, 0);
        // O, T consumed at construction, S consumed at the lock respawn.
        assert_eq!(state.active.unwrap().kind, PieceKind::Z);
        assert_eq!(state.next.unwrap().kind, PieceKind::O);
    }

    #[test]
    fn test_apply_action_reports_change() {
        let mut state = GameState::new(3);
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(state.apply_action(GameAction::Start));
        assert!(state.apply_action(GameAction::SoftDrop));
        assert!(state.apply_action(GameAction::Pause));
        assert!(state.apply_action(GameAction::Pause));
        assert!(state.apply_action(GameAction::Reset));
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = scripted(&[PieceKind::J, PieceKind::L]);
        state.start();
        state.board.set(0, 19, Some(PieceKind::S));

        let snap = state.snapshot();
        assert_eq!(snap.board[19][0], PieceKind::S.index());
        assert_eq!(snap.active.unwrap().kind, PieceKind::J);
        assert_eq!(snap.next.unwrap().kind, PieceKind::L);
        assert_eq!(snap.phase, Phase::Running);
        assert_eq!(snap.drop_interval_ms, 1000);
        assert_eq!(snap.board_hash, fnv1a64_board(&snap.board));
    }
}
