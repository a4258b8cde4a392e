//! Input tests - bindings, key map rebuild, options menu, preferences file

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use falling_blocks::input::{
    key_name, KeyBindings, KeyMap, MenuEvent, OptionsMenu, Preferences, PrefsError,
};
use falling_blocks::types::{GameAction, Theme};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_every_default_binding_maps_back() {
    let bindings = KeyBindings::default();
    let map = KeyMap::from_bindings(&bindings);
    for (action, name) in bindings.iter() {
        let code = map.key_for(action).unwrap();
        assert_eq!(key_name(code).as_deref(), Some(name));
        assert_eq!(map.action_for(press(code)), Some(action));
    }
}

#[test]
fn test_rebind_from_menu_updates_map_after_rebuild() {
    let mut prefs = Preferences::default();
    let mut map = KeyMap::from_bindings(&prefs.keys);
    let mut menu = OptionsMenu::new();
    menu.open();

    // Down x5 -> Hold row
    for _ in 0..5 {
        menu.handle_key(press(KeyCode::Down), &mut prefs);
    }
    assert_eq!(
        menu.handle_key(press(KeyCode::Enter), &mut prefs),
        MenuEvent::Capturing(GameAction::Hold)
    );
    let event = menu.handle_key(press(KeyCode::Char('5')), &mut prefs);
    assert!(event.bindings_changed());
    map.rebuild(&prefs.keys);

    assert_eq!(prefs.keys.hold, "Digit5");
    assert_eq!(map.action_for(press(KeyCode::Char('5'))), Some(GameAction::Hold));
    assert_eq!(map.action_for(press(KeyCode::Char('c'))), None);
}

#[test]
fn test_preferences_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let mut prefs = Preferences::load(&path).unwrap();
    assert_eq!(prefs, Preferences::default());
    prefs.toggle_theme();
    prefs.keys.rebind(GameAction::MoveLeft, "KeyA");
    prefs.keys.rebind(GameAction::MoveRight, "KeyD");
    prefs.save(&path).unwrap();

    let reloaded = Preferences::load(&path).unwrap();
    assert_eq!(reloaded, prefs);
    let map = KeyMap::from_bindings(&reloaded.keys);
    assert_eq!(map.action_for(press(KeyCode::Char('a'))), Some(GameAction::MoveLeft));
    assert_eq!(map.action_for(press(KeyCode::Char('D'))), Some(GameAction::MoveRight));
}

#[test]
fn test_hand_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, r#"{ "theme": "dark", "keys": { "pause": "KeyP", "hold": "Bogus" } }"#)
        .unwrap();

    let prefs = Preferences::load(&path).unwrap();
    assert_eq!(prefs.theme, Theme::Dark);
    assert_eq!(prefs.keys.pause, "KeyP");
    assert_eq!(prefs.keys.rotate, "ArrowUp");

    // Unknown names are inert, the rest still work.
    let map = KeyMap::from_bindings(&prefs.keys);
    assert_eq!(map.key_for(GameAction::Hold), None);
    assert_eq!(map.action_for(press(KeyCode::Char('p'))), Some(GameAction::Pause));
    assert_eq!(map.action_for(press(KeyCode::Esc)), None);
}

#[test]
fn test_unknown_theme_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, r#"{ "theme": "sepia" }"#).unwrap();
    assert!(matches!(
        Preferences::load(&path),
        Err(PrefsError::Json { .. })
    ));
}

#[test]
fn test_saved_file_is_json_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    Preferences::default().save(&path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["theme"], "light");
    assert_eq!(value["keys"]["hardDrop"], "Space");
    assert_eq!(value["keys"]["hold"], "KeyC");
}
