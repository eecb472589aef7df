//! Command-line surface of the launcher.
//!
//! The launcher owns no flags. Every argument after the program name,
//! including `--`, `--help` and `--version`, belongs to the real binary and is
//! forwarded untouched, non-UTF-8 values included.

use std::ffi::OsString;

/// Arguments to forward to the platform binary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cli {
    pub args: Vec<OsString>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse_args_from(std::env::args_os())
    }

    /// Parse from a full argv iterator whose first item is the program name
    pub fn parse_args_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self {
            args: args.into_iter().skip(1).map(Into::into).collect(),
        }
    }
}
