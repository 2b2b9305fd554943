/// Application configuration
///
/// Settings are read from `config.toml` in the user's config directory:
/// - Linux: ~/.config/photo-gate/config.toml
/// - macOS: ~/Library/Application Support/photo-gate/config.toml
/// - Windows: %APPDATA%\photo-gate\config.toml
///
/// The file is optional. Missing keys take their defaults, and a file that
/// fails to parse is ignored with a warning.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

const APP_NAME: &str = "photo-gate";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub camera: CameraConfig,
}

/// Photo listing endpoint settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Listing endpoint; always queried for the first page of fifty
    pub list_url: String,
    /// Upper bound on every HTTP request
    pub timeout_secs: u64,
    /// Size of the rendition downloaded for each gallery card, substituted
    /// into the record's download URL
    pub thumbnail_width: u32,
    pub thumbnail_height: u32,
    /// Blurred image shown behind the full-screen progress display
    pub backdrop_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            list_url: "https://picsum.photos/v2/list".to_string(),
            timeout_secs: 15,
            thumbnail_width: 600,
            thumbnail_height: 400,
            backdrop_url: "https://picsum.photos/800/400?blur".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Profile photo capture settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// JPEG quality of the saved photo, 0.0 to 1.0
    pub quality: f32,
    /// Skip the permission prompt
    pub pre_granted: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            quality: 0.8,
            pre_granted: false,
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Load the config from the default location, falling back to defaults
pub fn load() -> Config {
    match default_config_path() {
        Some(path) => load_or_default(&path),
        None => Config::default(),
    }
}

/// Load the config at `path`; a missing or unreadable file yields defaults
pub fn load_or_default(path: &Path) -> Config {
    if !path.exists() {
        log::debug!("No config file at {}, using defaults", path.display());
        return Config::default();
    }

    match load_from_path(path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}", path.display(), e);
            Config::default()
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_listing_api() {
        let config = Config::default();
        assert_eq!(config.api.list_url, "https://picsum.photos/v2/list");
        assert_eq!(config.camera.quality, 0.8);
        assert!(!config.camera.pre_granted);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api]\ntimeout_secs = 3\n").expect("failed to write config");

        let config = load_from_path(&path).expect("config should parse");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.api.list_url, "https://picsum.photos/v2/list");
        assert_eq!(config.camera, CameraConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "not = valid = toml").expect("failed to write config");

        assert!(matches!(load_from_path(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_toml_falls_back_to_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api\ntimeout_secs = \"soon\"").expect("failed to write config");

        assert_eq!(load_or_default(&path), Config::default());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        assert_eq!(load_or_default(&dir.path().join("absent.toml")), Config::default());
    }

    #[test]
    fn test_valid_file_is_used() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[camera]\npre_granted = true\n").expect("failed to write config");

        assert!(load_or_default(&path).camera.pre_granted);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_timeout_is_never_zero() {
        let mut api = ApiConfig::default();
        api.timeout_secs = 0;
        assert_eq!(api.timeout(), Duration::from_secs(1));
    }
}
