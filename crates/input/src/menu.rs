//! Options menu: key rebinding, theme toggle, revert to defaults.
//!
//! The menu edits [`Preferences`] in place and reports what changed so the
//! caller can rebuild its [`crate::KeyMap`] and save the file.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::info;

use crate::keys::key_name;
use crate::prefs::Preferences;
use crate::types::GameAction;

/// One selectable row of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Bind(GameAction),
    ToggleTheme,
    RevertDefaults,
}

impl MenuItem {
    pub const ALL: [MenuItem; 9] = [
        MenuItem::Bind(GameAction::MoveLeft),
        MenuItem::Bind(GameAction::MoveRight),
        MenuItem::Bind(GameAction::SoftDrop),
        MenuItem::Bind(GameAction::HardDrop),
        MenuItem::Bind(GameAction::Rotate),
        MenuItem::Bind(GameAction::Hold),
        MenuItem::Bind(GameAction::Pause),
        MenuItem::ToggleTheme,
        MenuItem::RevertDefaults,
    ];
}

/// What a menu key press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    None,
    /// Waiting for the key to bind to this action
    Capturing(GameAction),
    Rebound { action: GameAction, key: String },
    ThemeChanged,
    Reverted,
    Closed,
}

impl MenuEvent {
    /// True when the key bindings changed and a key map must be rebuilt
    pub fn bindings_changed(&self) -> bool {
        matches!(self, MenuEvent::Rebound { .. } | MenuEvent::Reverted)
    }

    /// True when the preferences changed and should be saved
    pub fn prefs_changed(&self) -> bool {
        self.bindings_changed() || *self == MenuEvent::ThemeChanged
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsMenu {
    open: bool,
    cursor: usize,
    capturing: Option<GameAction>,
}

impl OptionsMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
        self.cursor = 0;
        self.capturing = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.capturing = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.cursor]
    }

    /// Action waiting for a key ("press any key"), if any
    pub fn capturing(&self) -> Option<GameAction> {
        self.capturing
    }

    /// Start waiting for the key to bind to `action`.
    pub fn select(&mut self, action: GameAction) {
        self.capturing = Some(action);
    }

    /// Bind the pending action to `code`.
    ///
    /// Returns the stored key name, or None when nothing was pending or the
    /// key has no name (the menu keeps waiting in that case).
    pub fn capture(&mut self, code: KeyCode, prefs: &mut Preferences) -> Option<String> {
        let action = self.capturing?;
        let name = key_name(code)?;
        prefs.keys.rebind(action, name.clone());
        self.capturing = None;
        info!(action = action.as_str(), key = %name, "key rebound");
        Some(name)
    }

    /// Default bindings and the light theme.
    pub fn revert(&mut self, prefs: &mut Preferences) {
        self.capturing = None;
        prefs.revert_to_defaults();
        info!("preferences reverted to defaults");
    }

    pub fn toggle_theme(&mut self, prefs: &mut Preferences) {
        prefs.toggle_theme();
    }

    /// Navigate and activate with the arrow keys and Enter; Escape closes.
    ///
    /// While capturing, any named key (Escape included) is taken as the new
    /// binding.
    pub fn handle_key(&mut self, key: KeyEvent, prefs: &mut Preferences) -> MenuEvent {
        if !self.open {
            return MenuEvent::None;
        }

        if let Some(action) = self.capturing {
            return match self.capture(key.code, prefs) {
                Some(key) => MenuEvent::Rebound { action, key },
                None => MenuEvent::Capturing(action),
            };
        }

        match key.code {
            KeyCode::Up => {
                self.cursor = self.cursor.checked_sub(1).unwrap_or(MenuItem::ALL.len() - 1);
                MenuEvent::None
            }
            KeyCode::Down => {
                self.cursor = (self.cursor + 1) % MenuItem::ALL.len();
                MenuEvent::None
            }
            KeyCode::Enter => match self.selected() {
                MenuItem::Bind(action) => {
                    self.select(action);
                    MenuEvent::Capturing(action)
                }
                MenuItem::ToggleTheme => {
                    self.toggle_theme(prefs);
                    MenuEvent::ThemeChanged
                }
                MenuItem::RevertDefaults => {
                    self.revert(prefs);
                    MenuEvent::Reverted
                }
            },
            KeyCode::Esc => {
                self.close();
                MenuEvent::Closed
            }
            _ => MenuEvent::None,
        }
    }
}
