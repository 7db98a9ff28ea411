//! Staleness detection and build planning.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::BuildError;
use crate::source::SourceUnit;

/// Object file extension used in the cache directory.
const OBJECT_EXT: &str = "o";

/// A source file's compiled artifact in the object cache.
///
/// At most one object exists per source stem; objects are only ever
/// created for a discovered source, never cleaned up if the source goes
/// away.
#[derive(Clone, Debug)]
pub struct ObjectUnit {
    /// Expected path of the object (`<obj_dir>/<stem>.o`).
    pub path: PathBuf,
    /// Modification time, if the object exists on disk.
    pub mtime: Option<SystemTime>,
}

impl ObjectUnit {
    /// Looks up the cached object for `stem`, recording its mtime if present.
    ///
    /// Metadata failures are treated as a missing object, which degrades
    /// to a recompile rather than an error.
    pub fn locate(obj_dir: &Path, stem: &str) -> Self {
        let path = obj_dir.join(format!("{stem}.{OBJECT_EXT}"));
        let mtime = fs::metadata(&path).ok().and_then(|m| m.modified().ok());
        Self { path, mtime }
    }

    /// Whether the object is missing or strictly older than `source_mtime`.
    ///
    /// Strictly: equal timestamps do not trigger a rebuild. This matches
    /// the long-standing observable behavior and must not be "fixed" to
    /// `>=`.
    pub fn is_stale_against(&self, source_mtime: SystemTime) -> bool {
        match self.mtime {
            None => true,
            Some(object_mtime) => source_mtime > object_mtime,
        }
    }
}

/// One stale source together with the object path it compiles to.
#[derive(Clone, Debug)]
pub struct CompileJob {
    /// The stale source.
    pub source: SourceUnit,
    /// Output object path.
    pub object: PathBuf,
}

/// The derived, ephemeral plan for one build invocation.
///
/// Never persisted; recomputed from filesystem state every run.
#[derive(Debug)]
pub struct BuildPlan {
    /// Sources requiring recompilation, in scan order.
    pub stale: Vec<CompileJob>,
    /// Every expected object path, stale or not, in scan order. This is
    /// the full set handed to the link step.
    pub link_set: Vec<PathBuf>,
}

impl BuildPlan {
    /// Whether there is nothing to recompile.
    pub fn is_up_to_date(&self) -> bool {
        self.stale.is_empty()
    }
}

/// Decides which sources need recompiling and collects the full link set.
///
/// Creates the object cache directory if it does not exist, so on a first
/// run every object is missing and every source is stale.
pub fn plan_build(sources: &[SourceUnit], obj_dir: &Path) -> Result<BuildPlan, BuildError> {
    fs::create_dir_all(obj_dir).map_err(|e| BuildError::Io {
        path: obj_dir.to_path_buf(),
        source: e,
    })?;

    let mut stale = Vec::new();
    let mut link_set = Vec::new();

    for source in sources {
        let object = ObjectUnit::locate(obj_dir, &source.stem);
        if object.is_stale_against(source.mtime) {
            stale.push(CompileJob {
                source: source.clone(),
                object: object.path.clone(),
            });
        }
        link_set.push(object.path);
    }

    Ok(BuildPlan { stale, link_set })
}
