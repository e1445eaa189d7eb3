//! Persisted user preferences (`settings.json`).

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub use crate::board::{DEFAULT_COLUMNS, DEFAULT_ROWS};

pub const SETTINGS_PATH: &str = "settings.json";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Last applied board width
    #[serde(default = "default_columns")]
    pub board_columns: usize,
    /// Last applied board height
    #[serde(default = "default_rows")]
    pub board_rows: usize,
    #[serde(default)]
    pub export_to_desktop: bool,
    #[serde(default)]
    pub last_import_path: Option<String>,
}

fn default_columns() -> usize {
    DEFAULT_COLUMNS
}

fn default_rows() -> usize {
    DEFAULT_ROWS
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            board_columns: DEFAULT_COLUMNS,
            board_rows: DEFAULT_ROWS,
            export_to_desktop: false,
            last_import_path: None,
        }
    }
}

impl AppSettings {
    /// Load settings, falling back to defaults when the file is missing or
    /// unreadable.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("serializing settings")?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
    }

    /// Where exports are written: the Desktop when requested and available,
    /// otherwise `exports/` under the working directory.
    pub fn export_dir(&self) -> PathBuf {
        if self.export_to_desktop {
            if let Some(desktop) = desktop_dir() {
                return desktop;
            }
            log::warn!("Desktop directory not found, exporting locally");
        }
        PathBuf::from("exports")
    }
}

fn desktop_dir() -> Option<PathBuf> {
    dirs::desktop_dir().or_else(|| dirs::home_dir().map(|home| home.join("Desktop")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings::load_from(&dir.path().join("settings.json"));
        assert_eq!(settings, AppSettings::default());
        assert_eq!((settings.board_columns, settings.board_rows), (50, 30));
    }

    #[test]
    fn missing_keys_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "board_columns": 12 }"#).unwrap();

        let settings = AppSettings::load_from(&path);
        assert_eq!(settings.board_columns, 12);
        assert_eq!(settings.board_rows, DEFAULT_ROWS);
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = AppSettings {
            board_columns: 8,
            board_rows: 4,
            export_to_desktop: true,
            last_import_path: Some("lamps.json".into()),
        };
        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn local_export_dir_by_default() {
        assert_eq!(AppSettings::default().export_dir(), PathBuf::from("exports"));
    }
}
