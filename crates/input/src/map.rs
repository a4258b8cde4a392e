//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use crate::bindings::KeyBindings;
use crate::keys::{normalize, parse_key_name};
use crate::types::GameAction;

const SLOTS: usize = GameAction::ALL.len();

/// Lookup table derived from [`KeyBindings`].
///
/// Derived, not live: call [`KeyMap::rebuild`] after the bindings change.
/// When two actions share a key the one listed first in
/// [`GameAction::ALL`] wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    slots: [Option<KeyCode>; SLOTS],
}

impl KeyMap {
    pub fn from_bindings(bindings: &KeyBindings) -> Self {
        let mut map = Self {
            slots: [None; SLOTS],
        };
        map.rebuild(bindings);
        map
    }

    /// Re-derive every slot. Unknown key names leave their action unbound.
    pub fn rebuild(&mut self, bindings: &KeyBindings) {
        for (slot, (action, name)) in self.slots.iter_mut().zip(bindings.iter()) {
            *slot = parse_key_name(name);
            if slot.is_none() {
                warn!(action = action.as_str(), key = name, "unknown key name, action unbound");
            }
        }
    }

    /// Map keyboard input to a game action.
    ///
    /// Keys held with Ctrl or Alt never map.
    pub fn action_for(&self, key: KeyEvent) -> Option<GameAction> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        let code = normalize(key.code);
        GameAction::ALL
            .into_iter()
            .zip(self.slots)
            .find_map(|(action, slot)| (slot == Some(code)).then_some(action))
    }

    /// Key code bound to `action`, if its name was understood
    pub fn key_for(&self, action: GameAction) -> Option<KeyCode> {
        GameAction::ALL
            .iter()
            .position(|a| *a == action)
            .and_then(|i| self.slots[i])
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_bindings(&KeyBindings::default())
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) || is_interrupt(key)
}

/// Ctrl-C, which quits from anywhere, the options menu included.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
