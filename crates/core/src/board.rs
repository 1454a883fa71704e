//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)
//!
//! Pieces may hang above the top edge (y < 0) right after spawning. Those cells
//! are legal for collision purposes and are dropped when a piece is fixed.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one clear pass (bottom to top)
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a single piece cell at (x, y) would collide.
    ///
    /// Columns outside the board and rows past the bottom collide. Rows above
    /// the top edge only collide if the column is out of range.
    #[inline]
    pub fn blocks(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        y >= 0 && self.is_occupied(x, y)
    }

    /// Check whether `shape` placed with its top-left at (x, y) collides.
    ///
    /// Cells whose coordinates overflow `i8` collide.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        for (dx, dy) in shape.filled_cells() {
            let (Some(cx), Some(cy)) = (x.checked_add(dx), y.checked_add(dy)) else {
                return true;
            };
            if self.blocks(cx, cy) {
                return true;
            }
        }
        false
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Full rows are identified in the same pass that compacts the survivors
    /// downward, then the freed rows at the top are emptied. Any number of
    /// simultaneous full rows is handled without re-scanning.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells.copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(None);

        cleared_rows
    }

    /// Write a piece into the grid with the piece kind as its color.
    ///
    /// Cells above the top edge are dropped. Out-of-range columns and rows past
    /// the bottom are ignored; callers only fix pieces that passed [`Self::collides`].
    /// Returns the number of cells written.
    pub fn fix_piece(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) -> usize {
        let mut written = 0;
        for (dx, dy) in shape.filled_cells() {
            let (Some(px), Some(py)) = (x.checked_add(dx), y.checked_add(dy)) else {
                continue;
            };
            if py < 0 {
                continue;
            }
            if self.set(px, py, Some(kind)) {
                written += 1;
            }
        }
        written
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a `u8` matrix (0 = empty, 1..=7 = piece kind)
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[y * width + x].map_or(0, |k| k.index());
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from text rows, top row first.
    ///
    /// Each row is `BOARD_WIDTH` characters: `.` is empty, a piece letter
    /// (`I O T S Z J L`, any case) is filled, anything else is filled with `I`.
    /// Missing rows are padded at the top so short pictures sit at the bottom.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let height = BOARD_HEIGHT as usize;
        let offset = height.saturating_sub(rows.len());
        for (i, row) in rows.iter().take(height).enumerate() {
            let y = (offset + i) as i8;
            for (x, ch) in row.chars().take(BOARD_WIDTH as usize).enumerate() {
                if ch == '.' {
                    continue;
                }
                let kind = PieceKind::from_str(&ch.to_string()).unwrap_or(PieceKind::I);
                board.set(x as i8, y, Some(kind));
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
