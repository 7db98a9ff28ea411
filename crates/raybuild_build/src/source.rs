//! Source discovery.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use raybuild_toolchain::Language;

use crate::error::BuildError;

/// One discovered source file, fixed for the duration of a build run.
#[derive(Clone, Debug)]
pub struct SourceUnit {
    /// Path as scanned (e.g. `src/main.c`).
    pub path: PathBuf,
    /// File name minus extension; names the corresponding object file.
    pub stem: String,
    /// Last modification time at scan.
    pub mtime: SystemTime,
}

/// Scans `src_dir` for sources with the primary language's extension.
///
/// Results are sorted lexicographically by path so compile order, logs,
/// and error ordering are reproducible run to run.
pub fn scan_sources(src_dir: &Path, language: Language) -> Result<Vec<SourceUnit>, BuildError> {
    let entries = fs::read_dir(src_dir).map_err(|e| BuildError::Io {
        path: src_dir.to_path_buf(),
        source: e,
    })?;

    let mut units = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BuildError::Io {
            path: src_dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) != Some(language.extension()) {
            continue;
        }
        let stem = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };

        let mtime = entry
            .metadata()
            .and_then(|m| m.modified())
            .map_err(|e| BuildError::Io {
                path: path.clone(),
                source: e,
            })?;

        units.push(SourceUnit { path, stem, mtime });
    }

    units.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn scan_filters_by_extension() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "main.c");
        touch(tmp.path(), "util.c");
        touch(tmp.path(), "notes.txt");
        touch(tmp.path(), "legacy.cpp");

        let units = scan_sources(tmp.path(), Language::C).unwrap();
        let stems: Vec<_> = units.iter().map(|u| u.stem.as_str()).collect();
        assert_eq!(stems, vec!["main", "util"]);
    }

    #[test]
    fn scan_cpp() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "main.cpp");
        touch(tmp.path(), "main.c");

        let units = scan_sources(tmp.path(), Language::Cpp).unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].stem, "main");
        assert_eq!(units[0].path.extension().unwrap(), "cpp");
    }

    #[test]
    fn scan_is_lexicographic() {
        let tmp = TempDir::new().unwrap();
        for name in ["zeta.c", "alpha.c", "main.c"] {
            touch(tmp.path(), name);
        }

        let units = scan_sources(tmp.path(), Language::C).unwrap();
        let stems: Vec<_> = units.iter().map(|u| u.stem.as_str()).collect();
        assert_eq!(stems, vec!["alpha", "main", "zeta"]);
    }

    #[test]
    fn scan_empty_dir() {
        let tmp = TempDir::new().unwrap();
        let units = scan_sources(tmp.path(), Language::C).unwrap();
        assert!(units.is_empty());
    }

    #[test]
    fn scan_missing_dir_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = scan_sources(&tmp.path().join("absent"), Language::C).unwrap_err();
        assert!(matches!(err, BuildError::Io { .. }));
    }

    #[test]
    fn scan_records_mtime() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "main.c");
        let units = scan_sources(tmp.path(), Language::C).unwrap();
        let on_disk = fs::metadata(tmp.path().join("main.c"))
            .unwrap()
            .modified()
            .unwrap();
        assert_eq!(units[0].mtime, on_disk);
    }
}
