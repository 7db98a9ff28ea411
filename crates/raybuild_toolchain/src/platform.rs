//! Host platform identification and the per-platform link-flag table.

use crate::error::ToolchainError;

/// Operating systems raybuild can produce raylib binaries on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// macOS (links against system frameworks).
    MacOs,
    /// Windows (MinGW-style toolchain).
    Windows,
    /// Linux.
    Linux,
}

impl Platform {
    /// Identifies the platform this process is running on.
    pub fn host() -> Result<Self, ToolchainError> {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` identifier to a platform.
    pub fn from_os(os: &str) -> Result<Self, ToolchainError> {
        match os {
            "macos" => Ok(Platform::MacOs),
            "windows" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            other => Err(ToolchainError::UnsupportedPlatform {
                os: other.to_string(),
            }),
        }
    }

    /// Linker flags required to link a raylib executable on this platform.
    ///
    /// These are a compatibility contract with raylib's desktop backend;
    /// changing them changes what the produced binary links against.
    pub fn linker_flags(self) -> Vec<String> {
        let flags: &[&str] = match self {
            Platform::MacOs => &[
                "-framework",
                "OpenGL",
                "-framework",
                "Cocoa",
                "-framework",
                "CoreAudio",
                "-framework",
                "IOKit",
                "-framework",
                "CoreVideo",
                "-framework",
                "AVFoundation",
            ],
            Platform::Windows => &["-lgdi32", "-lwinmm"],
            Platform::Linux => &["-lGL", "-lm", "-lpthread", "-ldl", "-lrt"],
        };
        flags.iter().map(|f| f.to_string()).collect()
    }

    /// Conventional name of the linked executable.
    pub fn executable_name(self) -> &'static str {
        match self {
            Platform::Windows => "main.exe",
            Platform::MacOs | Platform::Linux => "main",
        }
    }
}
