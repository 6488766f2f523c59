//! Runtime configuration for the examples.
//!
//! Every field has a default that matches what the examples were written
//! against, so no file is needed. Set `GL_TUTORIALS_CONFIG` to the path of a
//! JSON file to override any subset of them.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "GL_TUTORIALS_CONFIG";

/// Window and context settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Example application".to_string(),
            width: 600,
            height: 600,
            vsync: true,
        }
    }
}

/// Top level configuration shared by all examples.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExampleConfig {
    pub window: WindowConfig,
    /// Directory the image assets are loaded from.
    pub asset_dir: PathBuf,
    pub log_level: String,
}

impl Default for ExampleConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            asset_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"),
            log_level: "info".to_string(),
        }
    }
}

impl ExampleConfig {
    /// Loads the config named by [`CONFIG_ENV`], or the defaults if it's unset.
    pub fn load() -> Result<Self> {
        Self::load_from(std::env::var_os(CONFIG_ENV))
    }

    /// Loads the file at `path` if there is one, the defaults otherwise.
    pub fn load_from(path: Option<OsString>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Reads and parses a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Resolves an asset file name against [`ExampleConfig::asset_dir`].
    pub fn asset(&self, name: &str) -> PathBuf {
        self.asset_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_600_square() {
        let config = ExampleConfig::default();
        assert_eq!(config.window.title, "Example application");
        assert_eq!((config.window.width, config.window.height), (600, 600));
        assert!(config.window.vsync);
        assert_eq!(config.log_level, "info");
        assert!(config.asset("logo.png").ends_with("assets/logo.png"));
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config =
            ExampleConfig::from_json(r#"{ "window": { "width": 800 }, "log_level": "debug" }"#)
                .unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.title, "Example application");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.asset_dir, ExampleConfig::default().asset_dir);
    }

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(ExampleConfig::from_json("{}").unwrap(), ExampleConfig::default());
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let path = std::env::temp_dir().join("gl-tutorials-bad-config.json");
        std::fs::write(&path, "{ \"window\": 12 }").unwrap();
        let err = ExampleConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("gl-tutorials-bad-config.json"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = ExampleConfig::from_file(Path::new("/nonexistent/gl-tutorials.json")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
        assert!(err.to_string().contains("/nonexistent/gl-tutorials.json"));
    }

    #[test]
    fn unset_variable_loads_defaults() {
        assert_eq!(ExampleConfig::load_from(None).unwrap(), ExampleConfig::default());
    }

    #[test]
    fn set_variable_loads_that_file() {
        let path = std::env::temp_dir().join("gl-tutorials-good-config.json");
        std::fs::write(&path, r#"{ "window": { "title": "Shadows" } }"#).unwrap();
        let config = ExampleConfig::load_from(Some(path.clone().into_os_string())).unwrap();
        assert_eq!(config.window.title, "Shadows");
        assert_eq!(config.window.width, 600);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn set_variable_to_missing_file_fails() {
        let err = ExampleConfig::load_from(Some("/nonexistent/gl-tutorials.json".into())).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
