//! Remembered CLI preferences.
//!
//! One small JSON file under the user's config directory. Loads that fail
//! for any reason fall back to defaults, and saves go through a sibling
//! temp file plus rename so an interrupted write never leaves
//! half-written JSON behind.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on the settings file. It holds a handful of short fields;
/// anything bigger is not ours and is refused unread.
pub const MAX_SETTINGS_BYTES: u64 = 16 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SavedSettings {
    /// Remembered contact name order ("first,last" or "last,first").
    #[serde(default)]
    pub order: Option<String>,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file is {size} bytes, refusing to read more than {MAX_SETTINGS_BYTES}")]
    Oversized { size: u64 },
    #[error("settings io: {0}")]
    Io(#[from] io::Error),
    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SavedSettings {
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let size = fs::metadata(path)?.len();
        if size > MAX_SETTINGS_BYTES {
            return Err(SettingsError::Oversized { size });
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Load from the default path; any failure means default settings.
    pub fn load() -> Self {
        Self::load_from(&settings_path()).unwrap_or_default()
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let staged = path.with_extension("json.new");
        fs::write(&staged, serde_json::to_vec_pretty(self)?)?;
        // Windows refuses to rename over an existing file.
        if path.exists() {
            let _ = fs::remove_file(path);
        }
        fs::rename(&staged, path)?;
        Ok(())
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&settings_path())
    }
}

/// `<config dir>/CloudUtil/settings.json`, where the config dir comes from
/// `XDG_CONFIG_HOME`, then `LOCALAPPDATA`, then the working directory.
pub fn settings_path() -> PathBuf {
    let base = ["XDG_CONFIG_HOME", "LOCALAPPDATA"]
        .iter()
        .find_map(|key| std::env::var_os(key))
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    let dir = base.join("CloudUtil");
    let _ = fs::create_dir_all(&dir);
    dir.join("settings.json")
}
