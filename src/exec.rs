//! Run the resolved binary with inherited stdio.

use crate::{LauncherError, Result};
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// Spawn `binary` with `args`, block until it exits, and return the exit code
/// the launcher should report.
pub fn execute(binary: &Path, args: &[OsString]) -> Result<i32> {
    debug!("Spawning {} with {} argument(s)", binary.display(), args.len());

    let status = Command::new(binary)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| LauncherError::Spawn {
            path: binary.to_path_buf(),
            source,
        })?;

    Ok(exit_code(status))
}

/// Child's exit code, or 0 when it reported none (e.g. killed by a signal)
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        code
    } else {
        debug!("Child exited without a status code ({status}), reporting 0");
        0
    }
}
