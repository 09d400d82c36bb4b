use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub walk: WalkConfig,
    pub exclude: ExcludeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// List plain files in addition to directories
    pub print_files: bool,
    /// Child ordering: name, none
    pub sort: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcludeConfig {
    /// Keep the built-in exclude names
    pub use_defaults: bool,
    /// Additional base names to exclude at any level
    pub names: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkConfig::default(),
            exclude: ExcludeConfig::default(),
        }
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            print_files: false,
            sort: "name".to_string(),
        }
    }
}

impl Default for ExcludeConfig {
    fn default() -> Self {
        Self {
            use_defaults: true,
            names: vec![],
        }
    }
}

impl Config {
    /// Load configuration from an explicit path or the default location.
    ///
    /// An explicit path must exist and parse. The default location
    /// (`<config dir>/rusty-tree/config.toml`) is optional: when absent,
    /// built-in defaults are used.
    pub fn load(path: Option<&Path>) -> std::result::Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> std::result::Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rusty-tree").join("config.toml"))
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        match self.walk.sort.as_str() {
            "name" | "none" => {}
            other => {
                return Err(ConfigError::Invalid(format!(
                    "unknown sort order '{}', expected 'name' or 'none'",
                    other
                )))
            }
        }

        if self.exclude.names.iter().any(|name| name.is_empty()) {
            return Err(ConfigError::Invalid(
                "exclude names must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(!config.walk.print_files);
        assert_eq!(config.walk.sort, "name");
    }

    #[test]
    fn config_serializes_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[walk]"));
        assert!(toml_str.contains("[exclude]"));
    }

    #[test]
    fn default_excludes_keep_builtins() {
        let config = ExcludeConfig::default();
        assert!(config.use_defaults);
        assert!(config.names.is_empty());
    }

    #[test]
    fn invalid_sort_is_rejected() {
        let config = Config {
            walk: WalkConfig {
                print_files: false,
                sort: "mtime".to_string(),
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_exclude_name_is_rejected() {
        let config = Config {
            exclude: ExcludeConfig {
                use_defaults: true,
                names: vec!["".to_string()],
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
