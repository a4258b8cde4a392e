//! Persisted preferences: theme and key bindings, as a JSON file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::bindings::KeyBindings;
use crate::types::Theme;

pub type Result<T> = std::result::Result<T, PrefsError>;

/// Errors reading or writing the preferences file
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("preferences I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed preferences file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub keys: KeyBindings,
}

impl Preferences {
    /// Read preferences from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no preferences file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(PrefsError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&text).map_err(|source| PrefsError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write preferences to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let io_err = |source| PrefsError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(self).map_err(|source| PrefsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, text).map_err(io_err)?;

        debug!(path = %path.display(), "saved preferences");
        Ok(())
    }

    /// Default key bindings and the light theme.
    pub fn revert_to_defaults(&mut self) {
        self.keys.revert_to_defaults();
        self.theme = Theme::Light;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameAction;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut prefs = Preferences::default();
        prefs.toggle_theme();
        prefs.keys.rebind(GameAction::HardDrop, "Enter");
        prefs.save(&path).unwrap();

        let loaded = Preferences::load(&path).unwrap();
        assert_eq!(loaded.theme, Theme::Dark);
        assert_eq!(loaded.keys.get(GameAction::HardDrop), "Enter");
    }

    #[test]
    fn file_format_uses_camel_case_actions() {
        let text = serde_json::to_string(&Preferences::default()).unwrap();
        assert!(text.contains(r#""theme":"light""#));
        assert!(text.contains(r#""moveLeft":"ArrowLeft""#));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();
        let err = Preferences::load(&path).unwrap_err();
        assert!(matches!(err, PrefsError::Json { .. }));
        assert!(err.to_string().contains("prefs.json"));
    }

    #[test]
    fn revert_resets_theme_too() {
        let mut prefs = Preferences::default();
        prefs.toggle_theme();
        prefs.keys.rebind(GameAction::Pause, "KeyP");
        prefs.revert_to_defaults();
        assert_eq!(prefs, Preferences::default());
    }
}
