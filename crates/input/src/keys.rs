//! Key names.
//!
//! Bindings are stored by name, in the style of DOM `KeyboardEvent.code`
//! strings (`ArrowLeft`, `Space`, `KeyC`, `Digit3`, `F5`). Printable keys
//! without such a name use the character itself. Letters are
//! case-insensitive: `KeyC` matches both `c` and `C`.

use crossterm::event::KeyCode;

/// Name of a terminal key code, None for keys that have no name.
pub fn key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n @ 1..=12) => format!("F{}", n),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => format!("Key{}", c.to_ascii_uppercase()),
        KeyCode::Char(c) if c.is_ascii_digit() => format!("Digit{}", c),
        KeyCode::Char(c) if !c.is_control() => c.to_string(),
        _ => return None,
    };
    Some(name)
}

/// Parse a key name into its (normalized) key code.
///
/// ```
/// use crossterm::event::KeyCode;
/// use falling_blocks_input::keys::parse_key_name;
///
/// assert_eq!(parse_key_name("ArrowUp"), Some(KeyCode::Up));
/// assert_eq!(parse_key_name("KeyC"), Some(KeyCode::Char('c')));
/// assert_eq!(parse_key_name("Digit7"), Some(KeyCode::Char('7')));
/// assert_eq!(parse_key_name("MediaPlayPause"), None);
/// ```
pub fn parse_key_name(name: &str) -> Option<KeyCode> {
    let code = match name {
        "ArrowLeft" => KeyCode::Left,
        "ArrowRight" => KeyCode::Right,
        "ArrowUp" => KeyCode::Up,
        "ArrowDown" => KeyCode::Down,
        "Escape" => KeyCode::Esc,
        "Enter" => KeyCode::Enter,
        "Tab" => KeyCode::Tab,
        "Backspace" => KeyCode::Backspace,
        "Space" => KeyCode::Char(' '),
        _ => return parse_compound(name),
    };
    Some(code)
}

fn parse_compound(name: &str) -> Option<KeyCode> {
    if let Some(letter) = name.strip_prefix("Key") {
        return single_char(letter)
            .filter(char::is_ascii_alphabetic)
            .map(|c| KeyCode::Char(c.to_ascii_lowercase()));
    }
    if let Some(digit) = name.strip_prefix("Digit") {
        return single_char(digit)
            .filter(char::is_ascii_digit)
            .map(KeyCode::Char);
    }
    if let Some(n) = name.strip_prefix('F').and_then(|n| n.parse::<u8>().ok()) {
        return (1..=12).contains(&n).then_some(KeyCode::F(n));
    }

    // A bare printable character names itself
    single_char(name)
        .filter(|c| !c.is_control() && !c.is_whitespace())
        .map(|c| KeyCode::Char(c.to_ascii_lowercase()))
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Fold a pressed key onto the code a parsed name would produce.
pub fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
