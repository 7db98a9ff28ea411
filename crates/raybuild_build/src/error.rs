//! Error types for the build drivers.

use std::path::PathBuf;

use raybuild_toolchain::ToolFailure;

/// Errors produced while planning, compiling, or linking.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Every object file is at least as new as its source.
    ///
    /// A user-facing no-op signal, not a failure: callers print an
    /// up-to-date message, skip the link step, and exit successfully.
    #[error("nothing to compile; all object files are up to date")]
    NothingToCompile,

    /// The final link invocation failed. Partial output is left in place
    /// and no retry is attempted.
    #[error("linking failed: {failure}")]
    Link {
        /// How the link invocation failed.
        failure: ToolFailure,
    },

    /// An I/O error while scanning sources or preparing the object cache.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// A single source file whose compilation failed this run.
///
/// The corresponding object stays stale, so the next invocation retries
/// the file automatically.
#[derive(Debug, thiserror::Error)]
#[error("failed to compile {file}: {failure}")]
pub struct CompileFailure {
    /// The source file that failed.
    pub file: PathBuf,
    /// How the compiler invocation failed.
    pub failure: ToolFailure,
}
