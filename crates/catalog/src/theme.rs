use crate::prelude::{eprintln, println, *};
use catalog_core::preferences::{
    load_theme, resolve_theme, save_theme, PreferenceError, PreferenceStore, Theme,
};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[command(name = "theme")]
#[command(about = "Read or change the colour theme preference")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,

    /// Treat the operating system as preferring a dark theme
    #[arg(long, env = "CATALOG_OS_PREFERS_DARK", global = true)]
    os_prefers_dark: bool,

    /// Preferences file (defaults to the user config directory)
    #[arg(long, env = "CATALOG_PREFERENCES", global = true)]
    preferences: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Show the stored theme and what it resolves to
    #[clap(name = "get")]
    Get,

    /// Store a theme
    #[clap(name = "set")]
    Set {
        /// light, dark or system
        theme: String,
    },

    /// Switch between light and dark
    #[clap(name = "toggle")]
    Toggle,
}

/// Preference store backed by a JSON object on disk
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the user's config directory
    pub fn default_location() -> Result<Self> {
        let path = dirs_next::config_dir()
            .ok_or_else(|| eyre!("Unable to determine config directory"))?
            .join("bazaar-catalog")
            .join("preferences.json");

        Ok(Self::new(path))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| PreferenceError::Storage(format!("{}: {}", self.path.display(), e)))?;

        serde_json::from_str(&content)
            .map_err(|e| PreferenceError::Storage(format!("{}: {}", self.path.display(), e)))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get_preference(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_preference(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PreferenceError::Storage(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(&values)
            .map_err(|e| PreferenceError::Storage(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| PreferenceError::Storage(e.to_string()))?;

        debug!("Stored preference {}={} in {}", key, value, self.path.display());
        Ok(())
    }
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let mut store = match &app.preferences {
        Some(path) => FilePreferenceStore::new(path),
        None => FilePreferenceStore::default_location()?,
    };

    if global.verbose {
        eprintln!("Preferences: {}", store.path().display());
    }

    let theme = match app.command {
        Commands::Get => load_theme(&store).map_err(Error::from)?,
        Commands::Set { theme } => {
            let theme: Theme = theme.parse().map_err(Error::from)?;
            save_theme(&mut store, theme).map_err(Error::from)?;
            theme
        }
        Commands::Toggle => {
            let theme = load_theme(&store)
                .map_err(Error::from)?
                .toggle(app.os_prefers_dark);
            save_theme(&mut store, theme).map_err(Error::from)?;
            theme
        }
    };

    println!(
        "Theme: {} (showing {})",
        theme,
        resolve_theme(theme, app.os_prefers_dark)
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::preferences::THEME_KEY;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_has_no_preferences() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(temp_dir.path().join("prefs.json"));

        assert_eq!(store.get_preference(THEME_KEY).unwrap(), None);
        assert_eq!(load_theme(&store).unwrap(), Theme::System);
    }

    #[test]
    fn test_theme_persists_across_stores() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("prefs.json");

        let mut store = FilePreferenceStore::new(&path);
        save_theme(&mut store, Theme::Dark).unwrap();

        let reopened = FilePreferenceStore::new(&path);
        assert_eq!(load_theme(&reopened).unwrap(), Theme::Dark);
    }

    #[test]
    fn test_set_preference_keeps_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FilePreferenceStore::new(temp_dir.path().join("prefs.json"));

        store.set_preference("page_size", "24").unwrap();
        save_theme(&mut store, Theme::Light).unwrap();

        assert_eq!(
            store.get_preference("page_size").unwrap().as_deref(),
            Some("24")
        );
        assert_eq!(load_theme(&store).unwrap(), Theme::Light);
    }

    #[test]
    fn test_corrupt_file_is_a_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let store = FilePreferenceStore::new(&path);

        assert!(matches!(
            store.get_preference(THEME_KEY),
            Err(PreferenceError::Storage(_))
        ));
    }
}
