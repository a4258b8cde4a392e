//! Pieces module - tetromino shape matrices and the fixed catalog
//!
//! A shape is a small square matrix: zero is an empty sub-cell, nonzero is a
//! filled sub-cell carrying the piece's type id. Rotation operates on the whole
//! square (transpose, then reverse each row), so the I piece keeps its 4x4 box
//! and the O piece its 2x2 box.

use crate::types::PieceKind;

/// Largest shape side in the catalog (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Offset of a filled sub-cell inside the shape's bounding box, with its value
pub type ShapeCell = (i8, i8, u8);

/// Square shape matrix of side `size` (2, 3 or 4).
///
/// Cells outside `size` are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from its rows. Rows past `size` are ignored.
    pub const fn new(size: u8, cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        Self { size, cells }
    }

    /// Side length of the square matrix
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Value at (x, y) inside the matrix, 0 outside it
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x >= self.size as usize || y >= self.size as usize {
            return 0;
        }
        self.cells[y][x]
    }

    /// Nonzero sub-cells as (dx, dy, value), row by row.
    pub fn filled(&self) -> impl Iterator<Item = ShapeCell> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| {
                let v = self.cells[y][x];
                (v != 0).then_some((x as i8, y as i8, v))
            })
        })
    }

    /// 90° clockwise rotation: transpose, then reverse each row.
    pub fn rotated_cw(&self) -> Shape {
        let n = self.size as usize;
        let mut out = *self;

        for y in 0..n {
            for x in 0..y {
                let tmp = out.cells[x][y];
                out.cells[x][y] = out.cells[y][x];
                out.cells[y][x] = tmp;
            }
        }
        for row in out.cells.iter_mut().take(n) {
            row[..n].reverse();
        }

        out
    }

    /// Rows spanned by filled sub-cells: (first, last), or None for an empty shape.
    pub fn row_span(&self) -> Option<(i8, i8)> {
        let mut span: Option<(i8, i8)> = None;
        for (_, dy, _) in self.filled() {
            span = Some(match span {
                None => (dy, dy),
                Some((lo, hi)) => (lo.min(dy), hi.max(dy)),
            });
        }
        span
    }

    /// Number of rows that contain a filled sub-cell
    pub fn occupied_height(&self) -> u8 {
        self.row_span().map_or(0, |(lo, hi)| (hi - lo + 1) as u8)
    }
}

const I_SHAPE: Shape = Shape::new(
    4,
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const J_SHAPE: Shape = Shape::new(
    3,
    [[2, 0, 0, 0], [2, 2, 2, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const L_SHAPE: Shape = Shape::new(
    3,
    [[0, 0, 3, 0], [3, 3, 3, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const O_SHAPE: Shape = Shape::new(
    2,
    [[4, 4, 0, 0], [4, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const S_SHAPE: Shape = Shape::new(
    3,
    [[0, 5, 5, 0], [5, 5, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const T_SHAPE: Shape = Shape::new(
    3,
    [[0, 6, 0, 0], [6, 6, 6, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const Z_SHAPE: Shape = Shape::new(
    3,
    [[7, 7, 0, 0], [0, 7, 7, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

/// Canonical (spawn) orientation of a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Starting position (x, y) of a freshly spawned piece.
///
/// The O piece starts one column further right so it sits centered; the I
/// piece starts one row above the board because its filled row is row 1 of
/// its box.
pub fn starting_position(kind: PieceKind) -> (i8, i8) {
    let x = if kind == PieceKind::O { 4 } else { 3 };
    let y = if kind == PieceKind::I { -1 } else { 0 };
    (x, y)
}
