//! Theme preference behind a storage capability
//!
//! The catalog never touches ambient storage directly. Whatever persists
//! preferences (a browser's local storage, a file, memory in tests) is handed
//! in as a [`PreferenceStore`].

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Key under which the theme is stored
pub const THEME_KEY: &str = "theme";

/// Error type for preference storage
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("Preference storage failed: {0}")]
    Storage(String),

    #[error("Invalid theme: {0}. Valid themes: light, dark, system")]
    InvalidTheme(String),
}

/// Key/value storage for user preferences
pub trait PreferenceStore {
    fn get_preference(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn set_preference(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Preference store that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_preference(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set_preference(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Colour theme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the operating system preference
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Flip between light and dark, starting from what is currently shown
    pub fn toggle(self, os_prefers_dark: bool) -> Theme {
        match resolve_theme(self, os_prefers_dark) {
            Theme::Dark => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(PreferenceError::InvalidTheme(other.to_string())),
        }
    }
}

/// Read the stored theme. Missing or unrecognised values yield `Theme::System`.
pub fn load_theme(store: &impl PreferenceStore) -> Result<Theme, PreferenceError> {
    Ok(store
        .get_preference(THEME_KEY)?
        .and_then(|value| value.parse().ok())
        .unwrap_or_default())
}

pub fn save_theme(store: &mut impl PreferenceStore, theme: Theme) -> Result<(), PreferenceError> {
    store.set_preference(THEME_KEY, theme.as_str())
}

/// Resolve `Theme::System` into a concrete light or dark theme
pub fn resolve_theme(theme: Theme, os_prefers_dark: bool) -> Theme {
    match theme {
        Theme::System if os_prefers_dark => Theme::Dark,
        Theme::System => Theme::Light,
        concrete => concrete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_theme_defaults_to_system() {
        let store = MemoryPreferenceStore::default();
        assert_eq!(load_theme(&store).unwrap(), Theme::System);
    }

    #[test]
    fn test_save_and_load_theme() {
        let mut store = MemoryPreferenceStore::default();
        save_theme(&mut store, Theme::Dark).unwrap();

        assert_eq!(load_theme(&store).unwrap(), Theme::Dark);
        assert_eq!(
            store.get_preference(THEME_KEY).unwrap().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_load_theme_ignores_garbage() {
        let mut store = MemoryPreferenceStore::default();
        store.set_preference(THEME_KEY, "purple").unwrap();
        assert_eq!(load_theme(&store).unwrap(), Theme::System);
    }

    #[test]
    fn test_resolve_theme() {
        assert_eq!(resolve_theme(Theme::System, true), Theme::Dark);
        assert_eq!(resolve_theme(Theme::System, false), Theme::Light);
        assert_eq!(resolve_theme(Theme::Light, true), Theme::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggle(true), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(false), Theme::Light);
        assert_eq!(Theme::System.toggle(true), Theme::Light);
        assert_eq!(Theme::System.toggle(false), Theme::Dark);
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!(" Dark ".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("neon".parse::<Theme>().is_err());
    }
}
