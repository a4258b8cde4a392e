//! Piece module - one tetromino with a position and a (possibly rotated) shape
//!
//! The kind never changes after spawn; position and shape change through
//! [`Piece::move_to`], which commits a candidate computed elsewhere (a shift,
//! a rotation) once the board has validated it.

use crate::pieces::{get_shape, starting_position, Shape};
use crate::render::{Paint, Surface};
use crate::rng::PieceRng;
use crate::types::{PieceColor, PieceKind};

/// A tetromino on (or above) the board.
///
/// `x`/`y` is the top-left corner of the shape's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Piece of the given kind in canonical orientation at its starting position
    pub fn new(kind: PieceKind) -> Self {
        let (x, y) = starting_position(kind);
        Self {
            kind,
            shape: get_shape(kind),
            x,
            y,
        }
    }

    /// Random piece, uniformly over the catalog
    pub fn spawn(rng: &mut PieceRng) -> Self {
        Self::new(rng.next_kind())
    }

    /// Reset to the kind's starting position
    pub fn set_starting_position(&mut self) {
        let (x, y) = starting_position(self.kind);
        self.x = x;
        self.y = y;
    }

    /// Restore the catalog orientation, dropping any rotation
    pub fn reset_shape(&mut self) {
        self.shape = get_shape(self.kind);
    }

    /// Take position and shape from `target`
    pub fn move_to(&mut self, target: &Piece) {
        self.x = target.x;
        self.y = target.y;
        self.shape = target.shape;
    }

    pub fn color(&self) -> PieceColor {
        self.kind.color()
    }

    pub fn type_id(&self) -> u8 {
        self.kind.type_id()
    }

    /// Copy translated by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Piece {
        Piece {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy rotated 90° clockwise in place (same bounding-box origin)
    pub fn rotated(&self) -> Piece {
        Piece {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    /// Absolute board positions of the filled sub-cells, with their values
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, u8)> + '_ {
        self.shape
            .filled()
            .map(move |(dx, dy, v)| (self.x + dx, self.y + dy, v))
    }

    /// Fill one cell per filled sub-cell at position + sub-cell + offset.
    pub fn draw(&self, surface: &mut impl Surface, offset_x: i8, offset_y: i8) {
        self.paint(surface, self.x + offset_x, self.y + offset_y, Paint::Solid);
    }

    /// Like [`Piece::draw`] but ignoring the piece's position.
    ///
    /// Previews place the shape at the view origin.
    pub fn draw_shape(&self, surface: &mut impl Surface, offset_x: i8, offset_y: i8) {
        self.paint(surface, offset_x, offset_y, Paint::Solid);
    }

    pub(crate) fn paint(&self, surface: &mut impl Surface, ox: i8, oy: i8, paint: Paint) {
        let color = self.color();
        for (dx, dy, _) in self.shape.filled() {
            surface.fill_cell(ox + dx, oy + dy, color, paint);
        }
    }
}
