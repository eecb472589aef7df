//! Host platform detection and per-platform package naming.
//!
//! Both identifier sets are closed. Raw host values are accepted in either the
//! Rust spelling (`std::env::consts`) or the Node spelling used in package
//! names, so `macos` and `darwin` both map to [`Platform::Darwin`].

use crate::{LauncherError, Result};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Operating system family used to select an installation package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum Platform {
    #[strum(to_string = "win32", serialize = "windows")]
    Win32,
    #[strum(to_string = "darwin", serialize = "macos")]
    Darwin,
    #[strum(to_string = "linux")]
    Linux,
}

/// CPU instruction-set family used to select an installation package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum Arch {
    #[strum(to_string = "x64", serialize = "x86_64")]
    X64,
    #[strum(to_string = "arm64", serialize = "aarch64")]
    Arm64,
}

impl Platform {
    /// Canonical identifier as it appears in package names
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Platform-specific suffix for executable files
    #[must_use]
    pub const fn exe_suffix(self) -> &'static str {
        match self {
            Self::Win32 => ".exe",
            Self::Darwin | Self::Linux => "",
        }
    }
}

impl Arch {
    /// Canonical identifier as it appears in package names
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A supported `(platform, arch)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub platform: Platform,
    pub arch: Arch,
}

impl Target {
    #[must_use]
    pub const fn new(platform: Platform, arch: Arch) -> Self {
        Self { platform, arch }
    }

    /// Detect the target of the running host
    pub fn host() -> Result<Self> {
        Self::from_raw(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Map raw OS and arch names onto a supported target.
    ///
    /// Fails with [`LauncherError::UnsupportedPlatform`] carrying both raw
    /// values if either one is outside the supported set.
    pub fn from_raw(os: &str, arch: &str) -> Result<Self> {
        match (os.parse::<Platform>(), arch.parse::<Arch>()) {
            (Ok(platform), Ok(arch)) => Ok(Self::new(platform, arch)),
            _ => Err(LauncherError::UnsupportedPlatform {
                os: os.to_string(),
                arch: arch.to_string(),
            }),
        }
    }

    /// Name of the optional-dependency package for this target, e.g. `@artesync/linux-x64`
    #[must_use]
    pub fn package_name(&self, namespace: &str) -> String {
        format!("{namespace}/{}-{}", self.platform, self.arch)
    }

    /// File name of the executable shipped inside the package
    #[must_use]
    pub fn binary_file_name(&self, stem: &str) -> String {
        format!("{stem}{}", self.platform.exe_suffix())
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.platform, self.arch)
    }
}
