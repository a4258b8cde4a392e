//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and state, with no dependency on any
//! terminal, file or clock. Time comes in as milliseconds from the caller and
//! drawing goes out through the [`render::Surface`] trait, so:
//!
//! - **Deterministic**: same seed and same inputs produce the same game
//! - **Testable**: every rule is exercised headless
//! - **Portable**: any frontend that can fill a cell can show it
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven shape matrices, rotation, starting positions
//! - [`piece`]: a tetromino with position and current shape
//! - [`grid`]: 10x20 frozen cells and full-row clearing
//! - [`board`]: validity, drop/freeze/clear, hold, ghost position, drawing
//! - [`scoring`]: line points, tetris combo, level progression
//! - [`moves`]: candidate positions for each movement input
//! - [`clock`] / [`game`]: drop timing and the session driver
//! - [`stats`]: change notifications for score displays
//! - [`rng`]: seeded uniform piece selection
//!
//! # Game Rules
//!
//! - Pieces are picked uniformly at random (no bag)
//! - Rotation is a plain clockwise turn of the shape box, no wall kicks
//! - A piece that cannot move down freezes on the next gravity step
//! - The game ends when a piece freezes with its box at the top row
//! - Hold swaps the active piece once per freeze
//!
//! # Example
//!
//! ```
//! use falling_blocks_core::Game;
//! use falling_blocks_types::GameAction;
//!
//! let mut game = Game::new(12345, 0);
//!
//! game.handle(GameAction::MoveRight, 0);
//! game.handle(GameAction::Rotate, 0);
//! game.handle(GameAction::HardDrop, 0);
//!
//! // Hard drop awards 2 points per row
//! assert!(game.account().score > 0);
//!
//! // The next due tick freezes the piece
//! game.tick(1_000);
//! assert!(game.board().grid().occupied_count() > 0);
//! ```

pub mod board;
pub mod clock;
pub mod game;
pub mod grid;
pub mod moves;
pub mod piece;
pub mod pieces;
pub mod render;
pub mod rng;
pub mod scoring;
pub mod stats;

pub use falling_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::DropClock;
pub use game::{Game, Phase};
pub use grid::{Block, Cell, Grid};
pub use moves::Move;
pub use piece::Piece;
pub use pieces::{get_shape, starting_position, Shape};
pub use render::{Paint, Surface};
pub use rng::PieceRng;
pub use scoring::{calculate_drop_score, line_clear_points, Account, ClearOutcome};
pub use stats::{Stat, StatsSink};
