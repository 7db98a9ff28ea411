//! Link driver: one linker invocation over the complete object set.

use std::path::PathBuf;

use raybuild_toolchain::{assemble, Invoker, ToolchainConfig};

use crate::error::BuildError;

/// Links the complete object set into the final executable.
///
/// Every object discovered this run is passed, not just the freshly
/// compiled ones, followed by the linker flags (library order matters).
/// On failure any partial output is left in place and no retry is made.
pub fn link_objects(
    config: &ToolchainConfig,
    link_set: &[PathBuf],
    invoker: &dyn Invoker,
) -> Result<PathBuf, BuildError> {
    let output = PathBuf::from(config.platform.executable_name());

    let mut operation = Vec::with_capacity(link_set.len() + 2);
    operation.push("-o".to_string());
    operation.push(output.display().to_string());
    operation.extend(link_set.iter().map(|p| p.display().to_string()));

    let cmd = assemble(
        &config.compiler,
        &config.compiler_flags,
        &operation,
        &config.linker_flags,
    );

    match invoker.run(&cmd) {
        Ok(()) => Ok(output),
        Err(failure) => Err(BuildError::Link { failure }),
    }
}
