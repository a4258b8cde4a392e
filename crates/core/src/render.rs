//! Rendering target contract.
//!
//! The core never draws pixels. It addresses a surface in board-cell units
//! and issues two kinds of calls: fill a cell, or clear a rectangular region.
//! One surface backs each view (main board, next preview, hold preview).

use crate::types::PieceColor;

/// How a filled cell is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    /// Regular block (active piece, frozen cells, previews)
    Solid,
    /// Outline only (ghost piece)
    Outline,
}

/// A 2D drawing surface addressed in cells.
///
/// Coordinates may fall outside the view (a piece can sit above row 0);
/// implementations clip them.
pub trait Surface {
    fn fill_cell(&mut self, x: i8, y: i8, color: PieceColor, paint: Paint);

    fn clear_region(&mut self, x: i8, y: i8, width: u8, height: u8);
}

/// One recorded surface call, see [`Recorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawOp {
    Fill {
        x: i8,
        y: i8,
        color: PieceColor,
        paint: Paint,
    },
    Clear {
        x: i8,
        y: i8,
        width: u8,
        height: u8,
    },
}

/// Surface that records every call in order.
///
/// Useful for headless checks of the draw order and coordinate math.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    pub ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells filled with the given paint, in call order
    pub fn filled(&self, paint: Paint) -> Vec<(i8, i8, PieceColor)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::Fill {
                    x,
                    y,
                    color,
                    paint: p,
                } if p == paint => Some((x, y, color)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn fill_cell(&mut self, x: i8, y: i8, color: PieceColor, paint: Paint) {
        self.ops.push(DrawOp::Fill { x, y, color, paint });
    }

    fn clear_region(&mut self, x: i8, y: i8, width: u8, height: u8) {
        self.ops.push(DrawOp::Clear {
            x,
            y,
            width,
            height,
        });
    }
}
