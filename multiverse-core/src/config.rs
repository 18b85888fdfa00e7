//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Main configuration struct matching multiverse.yml schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Compilation mode used when the command line names none
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Directory for generated documents (defaults to the input's directory)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    #[serde(default)]
    pub expand: ExpandConfig,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

fn default_mode() -> String {
    String::from("default")
}

fn default_max_depth() -> usize {
    128
}

/// How the resolver treats a path segment that lands on something other
/// than a mapping before the address is exhausted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathPolicy {
    /// Fail the resolution
    #[default]
    Strict,
    /// Keep the stale node, log a warning, and emit nothing for the fragment
    Lenient,
}

impl PathPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathPolicy::Strict => "strict",
            PathPolicy::Lenient => "lenient",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandConfig {
    #[serde(default)]
    pub path_policy: PathPolicy,

    /// Nesting limit for pointers inside pointers
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            path_policy: PathPolicy::default(),
            max_depth: default_max_depth(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            output_dir: None,
            expand: ExpandConfig::default(),
            config_path: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Load configuration if the file exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("No config at {:?}; using defaults", path);
            Ok(Self::default())
        }
    }

    /// Get the output directory, resolved relative to config file
    pub fn output_dir(&self) -> Option<PathBuf> {
        self.output_dir.as_ref().map(|p| self.resolve_path(p))
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(parent) = self.config_path.as_deref().and_then(Path::parent) {
            parent.join(path)
        } else {
            path.to_path_buf()
        }
    }

    /// Get a nested config value using dotted path (e.g., "expand.max_depth")
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["mode"] => Some(self.mode.clone()),
            ["output_dir"] => self.output_dir().map(|p| p.display().to_string()),
            ["expand", "path_policy"] => Some(self.expand.path_policy.as_str().to_string()),
            ["expand", "max_depth"] => Some(self.expand.max_depth.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.mode, "default");
        assert_eq!(config.output_dir(), None);
        assert_eq!(config.expand.path_policy, PathPolicy::Strict);
        assert_eq!(config.expand.max_depth, 128);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("expand:\n  path_policy: lenient\n").unwrap();

        assert_eq!(config.mode, "default");
        assert_eq!(config.expand.path_policy, PathPolicy::Lenient);
        assert_eq!(config.expand.max_depth, 128);
    }

    #[test]
    fn test_output_dir_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("multiverse.yml");
        std::fs::write(&path, "mode: print\noutput_dir: build\n").unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.mode, "print");
        assert_eq!(config.output_dir(), Some(dir.path().join("build")));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("absent.yml")).unwrap();
        assert_eq!(config.mode, "default");
    }

    #[test]
    fn test_get_nested_value() {
        let config: Config =
            serde_yaml::from_str("mode: web\nexpand:\n  max_depth: 16\n").unwrap();

        assert_eq!(config.get("mode"), Some("web".into()));
        assert_eq!(config.get("expand.max_depth"), Some("16".into()));
        assert_eq!(config.get("expand.path_policy"), Some("strict".into()));
        assert_eq!(config.get("output_dir"), None);
        assert_eq!(config.get("nonexistent.key"), None);
    }
}
