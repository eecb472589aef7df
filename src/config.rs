//! Load and validate the optional `arsync-launcher.json` configuration.

use crate::{LauncherError, Result};
use fs_err as fs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up next to the launcher executable
pub const CONFIG_FILE_NAME: &str = "arsync-launcher.json";

pub const DEFAULT_NAMESPACE: &str = "@artesync";
pub const DEFAULT_BINARY_NAME: &str = "arsync";

/// Launcher configuration (`arsync-launcher.json`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LauncherConfig {
    /// Scope the per-platform packages are published under
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Executable stem inside each package (`.exe` is appended on Windows)
    #[serde(default = "default_binary_name")]
    pub binary_name: String,

    /// Directories checked for `<package>/package.json` before `node_modules` discovery
    #[serde(default)]
    pub package_dirs: Vec<PathBuf>,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_binary_name() -> String {
    DEFAULT_BINARY_NAME.to_string()
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            binary_name: default_binary_name(),
            package_dirs: Vec::new(),
        }
    }
}

impl LauncherConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.namespace.starts_with('@') || self.namespace.len() < 2 {
            return Err(LauncherError::ConfigError {
                error: format!("namespace '{}' must be a scope like '@name'", self.namespace),
            });
        }
        if self.namespace.contains(['/', '\\']) {
            return Err(LauncherError::ConfigError {
                error: format!("namespace '{}' must not contain path separators", self.namespace),
            });
        }
        if self.binary_name.is_empty() {
            return Err(LauncherError::ConfigError {
                error: "binaryName cannot be empty".to_string(),
            });
        }
        if self.binary_name.contains(['/', '\\']) || self.binary_name == ".." {
            return Err(LauncherError::ConfigError {
                error: format!("binaryName '{}' must be a plain file name", self.binary_name),
            });
        }
        Ok(())
    }
}

/// Load configuration from `path`, falling back to defaults when the file is absent.
///
/// Relative `packageDirs` entries are resolved against the config file's directory.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<LauncherConfig> {
    let path = path.as_ref();

    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Ok(LauncherConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let mut config: LauncherConfig =
        serde_json::from_str(&contents).map_err(LauncherError::JsonParse)?;

    config.validate()?;

    if let Some(base) = path.parent() {
        for dir in &mut config.package_dirs {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
    }

    debug!("Loaded config from {}: {config:?}", path.display());
    Ok(config)
}
