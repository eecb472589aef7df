//! Launcher for the `arsync` CLI.
//!
//! Detects the host platform, finds the matching `@artesync/<platform>-<arch>`
//! package installed as an optional dependency, and runs the binary inside it
//! with the caller's arguments and stdio.

pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod platform;
pub mod resolve;

pub use cli::Cli;
pub use config::LauncherConfig;
pub use error::{LauncherError, Result};
pub use platform::{Arch, Platform, Target};
pub use resolve::PackageLocator;

use std::ffi::OsString;
use std::path::Path;
use tracing::debug;

/// Run the launcher and return the exit code to terminate with
pub fn run(args: Cli) -> Result<i32> {
    init_logging();

    debug!("Starting launcher with args: {args:?}");

    let target = Target::host()?;
    let start = resolve::launcher_dir()?;
    let config = config::load_config(start.join(config::CONFIG_FILE_NAME))?;

    launch(&config, target, &start, &args.args)
}

/// Resolve the binary for `target` starting at `start`, then execute it
pub fn launch(
    config: &LauncherConfig,
    target: Target,
    start: &Path,
    args: &[OsString],
) -> Result<i32> {
    debug!("Target {target}, searching from {}", start.display());

    let binary = PackageLocator::new(config, target).resolve_binary(start)?;
    exec::execute(&binary, args)
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    // Use try_init to avoid panicking if logger is already initialized (e.g., in tests)
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
