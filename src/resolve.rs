//! Locate the installed per-platform package and the binary inside it.
//!
//! Discovery contract, first match wins:
//! 1. `<dir>/<package>/package.json` for each configured `packageDirs` entry
//! 2. `<ancestor>/node_modules/<package>/package.json` for the launcher's
//!    directory and each of its ancestors, nearest first
//!
//! The directory holding the manifest is the package directory. The binary
//! must sit directly inside it.

use crate::config::LauncherConfig;
use crate::platform::Target;
use crate::{LauncherError, Result};
use fs_err as fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const MANIFEST_FILE: &str = "package.json";
const NODE_MODULES: &str = "node_modules";

/// Resolves the binary for one target under one configuration
#[derive(Debug, Clone)]
pub struct PackageLocator<'a> {
    config: &'a LauncherConfig,
    target: Target,
}

impl<'a> PackageLocator<'a> {
    pub fn new(config: &'a LauncherConfig, target: Target) -> Self {
        Self { config, target }
    }

    /// Package name for the target, e.g. `@artesync/linux-x64`
    pub fn package_name(&self) -> String {
        self.target.package_name(&self.config.namespace)
    }

    /// Directories that may contain the package, in lookup order
    pub fn search_dirs(&self, start: &Path) -> Vec<PathBuf> {
        let mut dirs = self.config.package_dirs.clone();

        for ancestor in start.ancestors() {
            if ancestor.file_name().is_some_and(|name| name == NODE_MODULES) {
                continue;
            }
            dirs.push(ancestor.join(NODE_MODULES));
        }

        dirs
    }

    /// Find the installed package directory by its manifest
    pub fn find_package(&self, start: &Path) -> Result<PathBuf> {
        let package = self.package_name();
        let searched = self.search_dirs(start);

        for dir in &searched {
            let package_dir = package_path(dir, &package);
            let manifest = package_dir.join(MANIFEST_FILE);
            debug!("Checking {}", manifest.display());

            if manifest.is_file() {
                info!("Resolved {package} at {}", package_dir.display());
                return Ok(package_dir);
            }
        }

        Err(LauncherError::PackageNotFound { package, searched })
    }

    /// Resolve and validate the path of the platform binary
    pub fn resolve_binary(&self, start: &Path) -> Result<PathBuf> {
        let package_dir = self.find_package(start)?;
        let binary = package_dir.join(self.target.binary_file_name(&self.config.binary_name));

        if !binary.is_file() {
            return Err(LauncherError::BinaryNotFound { path: binary });
        }

        debug!("Using binary {}", binary.display());
        Ok(binary)
    }
}

/// `@scope/name` maps onto the nested `@scope/name` directory layout
fn package_path(dir: &Path, package: &str) -> PathBuf {
    package
        .split('/')
        .fold(dir.to_path_buf(), |path, segment| path.join(segment))
}

/// Directory of the running launcher, with symlinks resolved
///
/// Package managers install `bin` entries as links, so the real location
/// (inside the launcher package) is the starting point for discovery.
pub fn launcher_dir() -> Result<PathBuf> {
    let exe = fs::canonicalize(std::env::current_exe()?)?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        LauncherError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("launcher path has no parent: {}", exe.display()),
        ))
    })
}
