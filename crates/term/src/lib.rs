//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that can be flushed to a terminal backend.
//!
//! - The core draws the board and previews through its `Surface` trait;
//!   [`game_view::CellSurface`] maps those calls onto framebuffer cells
//! - Board cells are 2 characters wide by default to keep them square
//! - Colors come from a [`Palette`] chosen by the player's theme

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use falling_blocks_core as core;
pub use falling_blocks_input as input;
pub use falling_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, CellSurface, GameView, Scene, Viewport};
pub use palette::Palette;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
