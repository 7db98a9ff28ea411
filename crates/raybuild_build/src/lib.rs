//! Incremental build drivers for raybuild.
//!
//! Scans the project source tree, decides which sources are stale by
//! comparing modification times against the object cache, recompiles
//! exactly those, and links the full object set into the final executable.
//! The only persistent build state is the filesystem timestamps themselves;
//! the [`BuildPlan`] is recomputed fresh on every invocation.

mod compile;
mod error;
mod link;
mod plan;
mod report;
mod source;

pub use compile::{compile_stale, CompileSummary};
pub use error::{BuildError, CompileFailure};
pub use link::link_objects;
pub use plan::{plan_build, BuildPlan, CompileJob, ObjectUnit};
pub use report::{BuildReport, FailedFile};
pub use source::{scan_sources, SourceUnit};
