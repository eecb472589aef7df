//! Error types for launcher operations.

use itertools::Itertools;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the launcher
#[derive(Error, Debug)]
pub enum LauncherError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Unsupported platform or architecture: {os}-{arch}")]
    UnsupportedPlatform { os: String, arch: String },

    /// Custom Display listing the directories that were searched
    #[error("{}", format_package_not_found(package, searched))]
    PackageNotFound {
        package: String,
        searched: Vec<PathBuf>,
    },

    #[error(
        "Binary not found at expected path: {path}\n\n{hint}{colon} The package may be incomplete, try reinstalling it",
        path = path.display().cyan(),
        hint = "hint".cyan().bold(),
        colon = ":".bold()
    )]
    BinaryNotFound { path: PathBuf },

    #[error("Failed to start {path}: {source}", path = path.display().cyan())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Configuration error: {error}\n\n{hint}{colon} Check {config} for valid values",
        error = error.red(),
        hint = "hint".cyan().bold(),
        colon = ":".bold(),
        config = "`arsync-launcher.json`".cyan()
    )]
    ConfigError { error: String },
}

fn format_package_not_found(package: &str, searched: &[PathBuf]) -> String {
    let mut msg = format!("Failed to locate binary package: {}", package.cyan());

    #[allow(clippy::format_push_string)]
    {
        msg.push_str(&format!(
            "\nPlease ensure it was correctly installed via {}.",
            "optionalDependencies".green()
        ));

        if !searched.is_empty() {
            msg.push_str(&format!(
                "\n\n{}{} Searched:\n  {}",
                "hint".cyan().bold(),
                ":".bold(),
                searched.iter().map(|p| p.display()).format("\n  ")
            ));
        }

        msg.push_str(&format!(
            "\n{}{} Package managers skip optional dependencies when run with {}",
            "hint".cyan().bold(),
            ":".bold(),
            "`--no-optional`".green()
        ));
    }

    msg
}

pub type Result<T> = std::result::Result<T, LauncherError>;
