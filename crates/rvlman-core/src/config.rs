//! Folder configuration store.
//!
//! The configuration is a small JSON document (`game_paths.json`) holding
//! the scan roots and, optionally, an override for the multi-disc exclusion
//! list:
//!
//! ```json
//! {
//!   "game_folders": [
//!     { "path": "/library/gamecube", "type": "Gamecube" },
//!     { "path": "/library/wii", "type": "Wii" }
//!   ]
//! }
//! ```
//!
//! The core only ever reads this shape; writing happens on explicit user
//! actions (add/remove folder).

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::console::ConsoleType;
use crate::error::Result;
use crate::library::GameFolder;
use crate::library::default_excluded_ids;

pub const DEFAULT_CONFIG_FILE: &str = "game_paths.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game_folders: Vec<GameFolder>,

    /// Override for the multi-disc exclusion set. Absent means the built-in
    /// default list applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_ids: Option<Vec<String>>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `path`. A missing file is an empty configuration, not an
    /// error; malformed JSON is.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config at {}, starting empty", path.display());
            return Ok(Self::default());
        }
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Parse from JSON content.
    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Config = serde_json::from_str(content)?;
        for folder in &mut config.game_folders {
            folder.path = crate::library::normalize_path(&folder.path);
        }
        Ok(config)
    }

    /// Save as pretty-printed JSON, creating parent directories on demand.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Add a scan root unless the exact (normalized) path is already
    /// configured. Returns whether anything changed.
    pub fn add_folder<P: Into<PathBuf>>(&mut self, path: P, console_type: ConsoleType) -> bool {
        let folder = GameFolder::new(path, console_type);
        if self.game_folders.iter().any(|f| f.path == folder.path) {
            return false;
        }
        self.game_folders.push(folder);
        true
    }

    /// Remove a scan root by (normalized) path. Returns whether anything
    /// changed.
    pub fn remove_folder<P: AsRef<Path>>(&mut self, path: P) -> bool {
        let normalized = crate::library::normalize_path(path.as_ref());
        let before = self.game_folders.len();
        self.game_folders.retain(|f| f.path != normalized);
        self.game_folders.len() != before
    }

    pub fn folders(&self) -> &[GameFolder] {
        &self.game_folders
    }

    /// The effective multi-disc exclusion set: the configured override, or
    /// the built-in default list.
    pub fn exclusion_set(&self) -> HashSet<String> {
        match &self.excluded_ids {
            Some(ids) => ids.iter().cloned().collect(),
            None => default_excluded_ids(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_original_schema() {
        let content = r#"{
            "game_folders": [
                { "path": "/library/gc", "type": "Gamecube" },
                { "path": "/library/wii", "type": "Wii" }
            ]
        }"#;
        let config = Config::parse(content).unwrap();

        assert_eq!(config.folders().len(), 2);
        assert_eq!(config.folders()[0].console_type, ConsoleType::Gamecube);
        assert_eq!(config.exclusion_set(), default_excluded_ids());
    }

    #[test]
    fn test_parse_empty_document() {
        let config = Config::parse("{}").unwrap();
        assert!(config.folders().is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(Config::parse("{\"game_folders\": [").is_err());
    }

    #[test]
    fn test_add_folder_rejects_duplicates() {
        let mut config = Config::new();
        assert!(config.add_folder("./library/gc", ConsoleType::Gamecube));
        // Same path after normalization.
        assert!(!config.add_folder("library/gc", ConsoleType::Gamecube));
        assert!(!config.add_folder("library/./gc", ConsoleType::Wii));
        assert_eq!(config.folders().len(), 1);
    }

    #[test]
    fn test_remove_folder() {
        let mut config = Config::new();
        config.add_folder("library/gc", ConsoleType::Gamecube);
        assert!(config.remove_folder("./library/gc"));
        assert!(!config.remove_folder("library/gc"));
        assert!(config.folders().is_empty());
    }

    #[test]
    fn test_excluded_ids_override() {
        let content = r#"{ "game_folders": [], "excluded_ids": ["GXXE01"] }"#;
        let config = Config::parse(content).unwrap();

        let ids = config.exclusion_set();
        assert!(ids.contains("GXXE01"));
        assert!(!ids.contains("GALE01"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game_paths.json");

        let mut config = Config::new();
        config.add_folder("/library/wii", ConsoleType::Wii);
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.folders(), config.folders());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let config = Config::load("does/not/exist/game_paths.json").unwrap();
        assert!(config.folders().is_empty());
    }
}
