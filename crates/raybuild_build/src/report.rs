//! Machine-readable build report for `--format json` output.

use std::path::PathBuf;

use raybuild_toolchain::ToolFailure;
use serde::Serialize;

use crate::error::CompileFailure;

/// Summary of one build invocation.
#[derive(Debug, Serialize)]
pub struct BuildReport {
    /// Sources recompiled this run, in compile order.
    pub compiled: Vec<PathBuf>,
    /// Sources that failed to compile.
    pub failed: Vec<FailedFile>,
    /// Objects that form the link set, stale or not.
    pub link_set: Vec<PathBuf>,
    /// Whether a link was performed.
    pub linked: bool,
    /// Path of the produced executable, when linked.
    pub output: Option<PathBuf>,
}

/// One failed compilation, with the compiler's exit code if it ran.
#[derive(Debug, Serialize)]
pub struct FailedFile {
    /// The source file that failed.
    pub file: PathBuf,
    /// Compiler exit code; `None` if it was killed or never launched.
    pub exit_code: Option<i32>,
}

impl From<&CompileFailure> for FailedFile {
    fn from(failure: &CompileFailure) -> Self {
        let exit_code = match failure.failure {
            ToolFailure::Exited { code } => code,
            ToolFailure::NotFound | ToolFailure::Launch(_) => None,
        };
        Self {
            file: failure.file.clone(),
            exit_code,
        }
    }
}

impl BuildReport {
    /// Report for a run where every object was already up to date.
    pub fn up_to_date(link_set: Vec<PathBuf>) -> Self {
        Self {
            compiled: Vec::new(),
            failed: Vec::new(),
            link_set,
            linked: false,
            output: None,
        }
    }
}
