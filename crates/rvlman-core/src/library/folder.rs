use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::console::ConsoleType;

/// A configured scan root. Owned by the configuration store; immutable
/// during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFolder {
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub console_type: ConsoleType,
}

impl GameFolder {
    pub fn new<P: Into<PathBuf>>(path: P, console_type: ConsoleType) -> Self {
        Self {
            path: normalize_path(&path.into()),
            console_type,
        }
    }
}

/// Lexical path cleanup: collapse `.` segments and redundant separators.
/// Does not touch the filesystem, so `..` components are kept as-is.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            other => normalized.push(other.as_os_str()),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_cur_dir() {
        assert_eq!(
            normalize_path(Path::new("./games/./gc")),
            PathBuf::from("games/gc")
        );
        assert_eq!(normalize_path(Path::new(".")), PathBuf::from("."));
    }

    #[test]
    fn test_folder_serde_uses_type_key() {
        let folder = GameFolder::new("/library/gc", ConsoleType::Gamecube);
        let json = serde_json::to_string(&folder).unwrap();
        assert!(json.contains("\"type\":\"Gamecube\""));

        let parsed: GameFolder =
            serde_json::from_str(r#"{"path": "/wii", "type": "Wii"}"#).unwrap();
        assert_eq!(parsed.console_type, ConsoleType::Wii);
    }
}
