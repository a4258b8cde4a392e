//! Move table - candidate positions for each movement input
//!
//! A move never touches the board. It produces a candidate piece which the
//! caller validates with `Board::valid` and commits with `Piece::move_to`.

use crate::piece::Piece;
use crate::types::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Right,
    Down,
    Rotate,
}

impl Move {
    /// Candidate produced by this move
    pub fn apply(self, piece: &Piece) -> Piece {
        match self {
            Move::Left => piece.shifted(-1, 0),
            Move::Right => piece.shifted(1, 0),
            Move::Down => piece.shifted(0, 1),
            Move::Rotate => piece.rotated(),
        }
    }

    /// Movement behind an action, if it has one.
    ///
    /// Hard drop repeats [`Move::Down`]; hold and pause are not moves.
    pub fn for_action(action: GameAction) -> Option<Move> {
        match action {
            GameAction::MoveLeft => Some(Move::Left),
            GameAction::MoveRight => Some(Move::Right),
            GameAction::SoftDrop | GameAction::HardDrop => Some(Move::Down),
            GameAction::Rotate => Some(Move::Rotate),
            GameAction::Hold | GameAction::Pause => None,
        }
    }
}
