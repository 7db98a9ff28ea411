//! Compile driver: one compiler invocation per stale source.

use std::path::PathBuf;

use raybuild_toolchain::{assemble, Invoker, ToolchainConfig};

use crate::error::{BuildError, CompileFailure};
use crate::plan::BuildPlan;

/// Outcome of compiling the stale set.
#[derive(Debug, Default)]
pub struct CompileSummary {
    /// Sources that compiled successfully this run.
    pub compiled: Vec<PathBuf>,
    /// Sources whose compilation failed. Their objects stay stale and
    /// are retried on the next run.
    pub failures: Vec<CompileFailure>,
}

impl CompileSummary {
    /// Whether every stale source compiled cleanly.
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Compiles every stale source in `plan` into its object file.
///
/// Invocations are independent and sequential: a failed file is recorded
/// and the driver moves on to the next one. Returns
/// [`BuildError::NothingToCompile`] when the stale set is empty, which
/// callers surface as an up-to-date message rather than a failure.
pub fn compile_stale(
    config: &ToolchainConfig,
    plan: &BuildPlan,
    invoker: &dyn Invoker,
    quiet: bool,
) -> Result<CompileSummary, BuildError> {
    if plan.is_up_to_date() {
        return Err(BuildError::NothingToCompile);
    }

    let mut summary = CompileSummary::default();

    for job in &plan.stale {
        let operation = vec![
            "-c".to_string(),
            job.source.path.display().to_string(),
            "-o".to_string(),
            job.object.display().to_string(),
        ];
        let cmd = assemble(&config.compiler, &config.compiler_flags, &operation, &[]);

        if !quiet {
            eprintln!("   Compiling {}", job.source.path.display());
        }

        match invoker.run(&cmd) {
            Ok(()) => summary.compiled.push(job.source.path.clone()),
            Err(failure) => summary.failures.push(CompileFailure {
                file: job.source.path.clone(),
                failure,
            }),
        }
    }

    Ok(summary)
}
