//! Key bindings configuration: one key name per action.

use serde::{Deserialize, Serialize};

use crate::types::GameAction;

/// Key name per action, as stored in the preferences file.
///
/// Missing fields fall back to their default binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyBindings {
    pub move_left: String,
    pub move_right: String,
    pub soft_drop: String,
    pub hard_drop: String,
    pub rotate: String,
    pub hold: String,
    pub pause: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: "ArrowLeft".into(),
            move_right: "ArrowRight".into(),
            soft_drop: "ArrowDown".into(),
            hard_drop: "Space".into(),
            rotate: "ArrowUp".into(),
            hold: "KeyC".into(),
            pause: "Escape".into(),
        }
    }
}

impl KeyBindings {
    /// Key name bound to `action`
    pub fn get(&self, action: GameAction) -> &str {
        match action {
            GameAction::MoveLeft => &self.move_left,
            GameAction::MoveRight => &self.move_right,
            GameAction::SoftDrop => &self.soft_drop,
            GameAction::HardDrop => &self.hard_drop,
            GameAction::Rotate => &self.rotate,
            GameAction::Hold => &self.hold,
            GameAction::Pause => &self.pause,
        }
    }

    fn slot_mut(&mut self, action: GameAction) -> &mut String {
        match action {
            GameAction::MoveLeft => &mut self.move_left,
            GameAction::MoveRight => &mut self.move_right,
            GameAction::SoftDrop => &mut self.soft_drop,
            GameAction::HardDrop => &mut self.hard_drop,
            GameAction::Rotate => &mut self.rotate,
            GameAction::Hold => &mut self.hold,
            GameAction::Pause => &mut self.pause,
        }
    }

    /// Bind `action` to `key`. Other actions keep their keys, even if equal.
    pub fn rebind(&mut self, action: GameAction, key: impl Into<String>) {
        *self.slot_mut(action) = key.into();
    }

    pub fn revert_to_defaults(&mut self) {
        *self = Self::default();
    }

    /// (action, key name) pairs in action order
    pub fn iter(&self) -> impl Iterator<Item = (GameAction, &str)> + '_ {
        GameAction::ALL.into_iter().map(move |a| (a, self.get(a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let keys = KeyBindings::default();
        assert_eq!(keys.get(GameAction::MoveLeft), "ArrowLeft");
        assert_eq!(keys.get(GameAction::HardDrop), "Space");
        assert_eq!(keys.get(GameAction::Rotate), "ArrowUp");
        assert_eq!(keys.get(GameAction::Pause), "Escape");
        assert_eq!(keys.get(GameAction::Hold), "KeyC");
    }

    #[test]
    fn rebind_and_revert() {
        let mut keys = KeyBindings::default();
        keys.rebind(GameAction::Rotate, "KeyX");
        assert_eq!(keys.get(GameAction::Rotate), "KeyX");
        assert_eq!(keys.get(GameAction::MoveLeft), "ArrowLeft");

        keys.revert_to_defaults();
        assert_eq!(keys, KeyBindings::default());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let keys: KeyBindings = serde_json::from_str(r#"{"hold":"ShiftLeft"}"#).unwrap();
        assert_eq!(keys.hold, "ShiftLeft");
        assert_eq!(keys.move_right, "ArrowRight");
    }

    #[test]
    fn iter_follows_action_order() {
        let keys = KeyBindings::default();
        let actions: Vec<_> = keys.iter().map(|(a, _)| a).collect();
        assert_eq!(actions, GameAction::ALL.to_vec());
    }
}
