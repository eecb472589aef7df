//! Common test helpers and utilities
//!
//! Builds fake install trees with per-platform packages so resolution and
//! launching can be exercised without a real package manager.

// The `unreachable_pub` is to silence false positives in IDEs.
// The `dead_code` is because not all test utilities are used by all tests.
#![allow(dead_code, unreachable_pub)]

use artesync::{LauncherConfig, Target};
use fs_err as fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test context that manages a temporary install tree
///
/// Automatically cleans up on drop.
pub struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root().join(relative)
    }

    /// Directory the launcher would live in: `<root>/node_modules/artesync/bin`
    pub fn launcher_dir(&self) -> PathBuf {
        let dir = self.path("node_modules/artesync/bin");
        fs::create_dir_all(&dir).expect("Failed to create launcher dir");
        dir
    }

    /// Create `<node_modules>/<namespace>/<platform>-<arch>/package.json`
    pub fn install_package_in(&self, node_modules: &Path, target: Target) -> PathBuf {
        let package = target.package_name(artesync::config::DEFAULT_NAMESPACE);
        let dir = package
            .split('/')
            .fold(node_modules.to_path_buf(), |path, segment| path.join(segment));
        fs::create_dir_all(&dir).expect("Failed to create package dir");
        fs::write(
            dir.join("package.json"),
            format!(r#"{{ "name": "{package}", "version": "0.1.0" }}"#),
        )
        .expect("Failed to write package.json");
        dir
    }

    /// Install the package into the top-level `node_modules`
    pub fn install_package(&self, target: Target) -> PathBuf {
        self.install_package_in(&self.path("node_modules"), target)
    }

    /// Place an empty file named like the platform binary in `package_dir`
    pub fn create_binary_stub(&self, package_dir: &Path, target: Target) -> PathBuf {
        let path = package_dir.join(target.binary_file_name("arsync"));
        fs::write(&path, "").expect("Failed to write binary stub");
        path
    }

    /// Place an executable shell script as the platform binary
    #[cfg(unix)]
    pub fn create_binary_script(&self, package_dir: &Path, target: Target, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = package_dir.join(target.binary_file_name("arsync"));
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
        fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod script");
        path
    }

    /// Copy the built launcher into the launcher package and link it from
    /// `node_modules/.bin`, the way a package manager installs `bin` entries.
    ///
    /// Returns the `.bin` link.
    #[cfg(unix)]
    pub fn install_launcher(&self) -> PathBuf {
        let launcher = self.launcher_dir().join("arsync");
        fs::copy(assert_cmd::cargo::cargo_bin("arsync"), &launcher)
            .expect("Failed to copy launcher binary");

        let bin_dir = self.path("node_modules/.bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create .bin");
        let link = bin_dir.join("arsync");
        std::os::unix::fs::symlink("../artesync/bin/arsync", &link)
            .expect("Failed to link launcher");
        link
    }

    /// File a recording script writes its arguments into, one per line
    pub fn args_log(&self) -> PathBuf {
        self.path("args.log")
    }

    pub fn read_args_log(&self) -> Vec<String> {
        fs::read_to_string(self.args_log())
            .expect("Failed to read args log")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// Default config, as used when no `arsync-launcher.json` is present
pub fn default_config() -> LauncherConfig {
    LauncherConfig::default()
}
