//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] through
//! user-configurable bindings, and owns the options menu and the preferences
//! file those bindings live in.

pub mod bindings;
pub mod keys;
pub mod map;
pub mod menu;
pub mod prefs;

pub use falling_blocks_types as types;

pub use bindings::KeyBindings;
pub use keys::{key_name, parse_key_name};
pub use map::{is_interrupt, should_quit, KeyMap};
pub use menu::{MenuEvent, MenuItem, OptionsMenu};
pub use prefs::{Preferences, PrefsError};
