//! Primary-language detection from the project source tree.

use std::fs;
use std::path::Path;

use crate::error::ToolchainError;

/// The project's primary language, inferred from the entry-point file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    /// C, compiled as C17.
    C,
    /// C++, compiled as C++17.
    Cpp,
}

impl Language {
    /// Source file extension for this language.
    pub fn extension(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp => "cpp",
        }
    }

    /// The `-std=` flag pinning the 2017 language standard.
    pub fn std_flag(self) -> &'static str {
        match self {
            Language::C => "-std=c17",
            Language::Cpp => "-std=c++17",
        }
    }

    /// Compiler executables to probe, in preference order.
    pub fn compiler_candidates(self) -> &'static [&'static str] {
        match self {
            Language::C => &["gcc", "clang"],
            Language::Cpp => &["g++", "clang++"],
        }
    }

    /// Detects the primary language by locating `main.c` or `main.cpp`
    /// in `src_dir`.
    ///
    /// Entries are visited in lexicographic order so the answer is stable
    /// when both entry points exist (`main.c` wins).
    pub fn detect(src_dir: &Path) -> Result<Self, ToolchainError> {
        let entries = fs::read_dir(src_dir).map_err(|e| ToolchainError::Io {
            path: src_dir.to_path_buf(),
            source: e,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ToolchainError::Io {
                path: src_dir.to_path_buf(),
                source: e,
            })?;
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();

        for name in &names {
            match name.as_str() {
                "main.c" => return Ok(Language::C),
                "main.cpp" => return Ok(Language::Cpp),
                _ => {}
            }
        }

        Err(ToolchainError::NoMainFile {
            src_dir: src_dir.to_path_buf(),
        })
    }
}
