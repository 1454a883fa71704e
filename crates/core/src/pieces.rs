//! Pieces module - piece shapes as occupancy matrices
//!
//! A shape is a small boolean matrix (at most 4x4) describing the occupied
//! cells of a piece relative to its bounding box. Rotation produces a new
//! matrix; shapes are `Copy` values and are never mutated in place.

use serde::Serialize;

use crate::types::{PieceKind, BOARD_WIDTH};

/// Largest bounding box dimension of any piece (the I bar).
pub const MAX_SHAPE_DIM: usize = 4;

/// Row of a freshly spawned piece.
pub const SPAWN_Y: i8 = 0;

/// Occupancy matrix of a piece, `rows x cols`, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from 0/1 rows.
    ///
    /// Rows longer than [`MAX_SHAPE_DIM`] or beyond the fourth row are truncated;
    /// the column count is taken from the first row.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let row_count = rows.len().min(MAX_SHAPE_DIM);
        let col_count = rows.first().map_or(0, |r| r.len().min(MAX_SHAPE_DIM));

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().take(row_count).enumerate() {
            for (x, &v) in row.iter().take(col_count).enumerate() {
                cells[y][x] = v != 0;
            }
        }

        Self {
            rows: row_count as u8,
            cols: col_count as u8,
            cells,
        }
    }

    /// Number of matrix rows (bounding box height).
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of matrix columns (bounding box width).
    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        x < self.cols && y < self.rows && self.cells[y as usize][x as usize]
    }

    /// Row `y` of the matrix, `cols` entries long.
    pub fn row(&self, y: u8) -> &[bool] {
        if y >= self.rows {
            return &[];
        }
        &self.cells[y as usize][..self.cols as usize]
    }

    /// Occupied cells as `(dx, dy)` offsets from the top-left of the box.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows).flat_map(move |y| {
            (0..self.cols)
                .filter(move |&x| self.cells[y as usize][x as usize])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Rotate 90° clockwise.
    ///
    /// An `R x C` matrix becomes `C x R` with `out[j][R-1-i] = src[i][j]`.
    pub fn rotate_cw(&self) -> Self {
        let r = self.rows as usize;
        let c = self.cols as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, src_row) in self.cells.iter().enumerate().take(r) {
            for (j, &v) in src_row.iter().enumerate().take(c) {
                cells[j][r - 1 - i] = v;
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Canonical spawn-orientation shape for a piece kind.
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
    }
}

/// Column that centers a shape horizontally: `cols/2 - width/2` (floored).
pub fn spawn_x(shape: &Shape) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape.cols() / 2) as i8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_t_clockwise() {
        let t = spawn_shape(PieceKind::T);
        let r = t.rotate_cw();

        assert_eq!((r.rows(), r.cols()), (3, 2));
        assert_eq!(r.row(0), &[true, false]);
        assert_eq!(r.row(1), &[true, true]);
        assert_eq!(r.row(2), &[true, false]);
    }

    #[test]
    fn test_rotate_i_swaps_dimensions() {
        let i = spawn_shape(PieceKind::I);
        let r = i.rotate_cw();
        assert_eq!((r.rows(), r.cols()), (4, 1));
        assert_eq!(r.filled_cells().count(), 4);
    }

    #[test]
    fn test_from_rows_truncates_oversized_input() {
        let s = Shape::from_rows(&[&[1, 1, 1, 1, 1], &[1], &[1], &[1], &[1]]);
        assert_eq!((s.rows(), s.cols()), (4, 4));
    }

    #[test]
    fn test_row_out_of_range_is_empty() {
        let o = spawn_shape(PieceKind::O);
        assert!(o.row(2).is_empty());
        assert!(!o.is_filled(2, 0));
    }
}
