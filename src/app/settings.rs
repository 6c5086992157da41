//! Persisted application settings.
//!
//! A small TOML file under the user config directory. Loading is lenient:
//! a missing or unparseable file falls back to defaults so the application
//! always starts.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories_next::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Root directory used when neither the CLI nor the settings name one.
pub const DEFAULT_ROOT: &str = "file_manager_root";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory the store is rooted at. Relative values resolve against
    /// the process working directory.
    pub root_dir: Option<PathBuf>,
}

fn config_file() -> Option<PathBuf> {
    ProjectDirs::from("", "", "fileDen").map(|dirs| dirs.config_dir().join("settings.toml"))
}

/// Load settings from disk, falling back to defaults when absent or broken.
pub fn load_settings() -> Settings {
    let Some(path) = config_file() else {
        return Settings::default();
    };
    match fs::read_to_string(&path) {
        Ok(text) => toml::from_str(&text).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unparseable settings");
            Settings::default()
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Settings::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read settings");
            Settings::default()
        }
    }
}

/// Write settings to the config directory, creating it if needed.
pub fn save_settings(settings: &Settings) -> io::Result<()> {
    let Some(path) = config_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let text = toml::to_string_pretty(settings)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_toml() {
        let settings = Settings {
            root_dir: Some(PathBuf::from("/srv/files")),
        };
        let text = toml::to_string_pretty(&settings).unwrap();
        let back: Settings = toml::from_str(&text).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn empty_document_gives_defaults() {
        let back: Settings = toml::from_str("").unwrap();
        assert_eq!(back, Settings::default());
    }
}
