//! Toolbar configuration loaded from a RON file.

use crate::anchor::Anchor;
use crate::constants::DEFAULT_AUTO_HIDE_TIMEOUT_MS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const SETTINGS_DIR: &str = "glass-viewer";
const SETTINGS_FILE: &str = "toolbar.ron";

/// Errors that can occur when loading toolbar settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: ron::de::SpannedError,
    },
}

/// Initial state for a [`crate::GlassToolbar`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarSettings {
    pub anchor: Anchor,
    pub auto_hide: bool,
    pub auto_hide_timeout_ms: u32,
    /// Out-of-range values are clamped when applied.
    pub opacity: f32,
}

impl Default for ToolbarSettings {
    fn default() -> Self {
        Self {
            anchor: Anchor::default(),
            auto_hide: false,
            auto_hide_timeout_ms: DEFAULT_AUTO_HIDE_TIMEOUT_MS,
            opacity: 1.0,
        }
    }
}

impl ToolbarSettings {
    /// Platform config location, e.g. `~/.config/glass-viewer/toolbar.ron`.
    pub fn default_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join(SETTINGS_DIR).join(SETTINGS_FILE))
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, ron::de::SpannedError> {
        ron::from_str(text)
    }

    /// Loads from the default location, falling back to defaults when the file is absent.
    pub fn load_default() -> Result<Self, SettingsError> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                log::info!("Loading toolbar settings from {}", path.display());
                Self::load(&path)
            }
            _ => {
                log::debug!("No toolbar settings file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_fields_use_defaults() {
        let settings = ToolbarSettings::parse("(anchor: BottomRight)").unwrap();
        assert_eq!(
            settings,
            ToolbarSettings {
                anchor: Anchor::BottomRight,
                ..ToolbarSettings::default()
            }
        );
    }

    #[test]
    fn full_document() {
        let settings = ToolbarSettings::parse(
            "(anchor: TopLeft, auto_hide: true, auto_hide_timeout_ms: 1500, opacity: 0.8)",
        )
        .unwrap();
        assert_eq!(settings.anchor, Anchor::TopLeft);
        assert!(settings.auto_hide);
        assert_eq!(settings.auto_hide_timeout_ms, 1500);
        assert_eq!(settings.opacity, 0.8);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(auto_hide: true)").unwrap();
        let settings = ToolbarSettings::load(file.path()).unwrap();
        assert!(settings.auto_hide);
        assert_eq!(settings.auto_hide_timeout_ms, 3000);
    }

    #[test]
    fn load_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.ron");
        let err = ToolbarSettings::load(&missing).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
        assert!(err.to_string().contains("nope.ron"));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(anchor: Sideways)").unwrap();
        let err = ToolbarSettings::load(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }
}
