//! Error types for toolchain probing.

use std::path::PathBuf;

use crate::invoke::ToolFailure;

/// Environment errors detected before any compilation is attempted.
///
/// All of these are fatal for the current invocation: they describe a host
/// that cannot build the project at all, not a problem with the sources.
#[derive(Debug, thiserror::Error)]
pub enum ToolchainError {
    /// The source directory has no `main.c` or `main.cpp` entry point.
    #[error("no entry point in {src_dir}: expected main.c or main.cpp")]
    NoMainFile {
        /// The scanned source directory.
        src_dir: PathBuf,
    },

    /// The host operating system is not one raybuild supports.
    #[error("unsupported operating system '{os}' (supported: macos, windows, linux)")]
    UnsupportedPlatform {
        /// The `std::env::consts::OS` value that was rejected.
        os: String,
    },

    /// A required build tool is not installed.
    #[error("'{tool}' is required but was not found on PATH")]
    MissingBuildTool {
        /// Name of the missing tool.
        tool: String,
    },

    /// A required build tool exists but its version probe failed.
    #[error("probing '{tool}' failed: {failure}")]
    ToolProbeFailed {
        /// Name of the probed tool.
        tool: String,
        /// How the probe invocation failed.
        failure: ToolFailure,
    },

    /// No compiler candidate answered a version probe.
    #[error("no usable compiler found; install one of: {}", .candidates.join(", "))]
    NoCompilerFound {
        /// The candidates that were probed, in order.
        candidates: Vec<String>,
    },

    /// An I/O error while scanning the source directory.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
