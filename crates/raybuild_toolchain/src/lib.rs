//! Host toolchain discovery for raybuild.
//!
//! Probes the host for a usable C/C++ compiler, determines the platform's
//! raylib link flags, and assembles compiler command lines. The result of a
//! probe is an immutable [`ToolchainConfig`] consumed by the build drivers
//! in `raybuild_build`.

mod command;
mod error;
mod invoke;
mod language;
mod platform;
mod probe;

pub use command::{assemble, CommandLine};
pub use error::ToolchainError;
pub use invoke::{Invoker, SystemInvoker, ToolFailure};
pub use language::Language;
pub use platform::Platform;
pub use probe::ToolchainConfig;
