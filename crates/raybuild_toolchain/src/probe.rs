//! Toolchain probing: language, platform, build tool, and compiler discovery.

use std::path::Path;

use crate::command::CommandLine;
use crate::error::ToolchainError;
use crate::invoke::{Invoker, ToolFailure};
use crate::language::Language;
use crate::platform::Platform;

/// External tool used to build the raylib static library during `init`.
///
/// Its presence is checked up front so a missing `make` is reported before
/// any compilation work starts.
const BUILD_TOOL: &str = "make";

/// Immutable result of probing the host environment.
///
/// Constructed once per build invocation and passed by reference into the
/// compile and link drivers; there is no mutable toolchain state shared
/// across calls.
#[derive(Clone, Debug)]
pub struct ToolchainConfig {
    /// Compiler executable, the first candidate that answered a version probe.
    pub compiler: String,
    /// Flags passed to every compile and link invocation, in order.
    pub compiler_flags: Vec<String>,
    /// Flags appended to the link invocation, in order.
    pub linker_flags: Vec<String>,
    /// Detected primary language.
    pub language: Language,
    /// Host platform.
    pub platform: Platform,
}

impl ToolchainConfig {
    /// Probes the host environment and produces the config for one build run.
    ///
    /// Fails fast on any environment problem: a missing entry point, an
    /// unsupported operating system, no `make`, or no usable compiler.
    /// Performs process probes only; nothing is written to disk.
    pub fn probe(src_dir: &Path, invoker: &dyn Invoker) -> Result<Self, ToolchainError> {
        let language = Language::detect(src_dir)?;
        let platform = Platform::host()?;
        Self::probe_for(language, platform, invoker)
    }

    /// Probe variant with the language and platform already decided.
    pub fn probe_for(
        language: Language,
        platform: Platform,
        invoker: &dyn Invoker,
    ) -> Result<Self, ToolchainError> {
        check_build_tool(invoker)?;
        let compiler = select_compiler(language, invoker)?;
        Ok(Self::with_compiler(compiler, language, platform))
    }

    /// Builds the config for a known compiler without probing.
    ///
    /// Flag construction is pure: the language standard and platform link
    /// flags are mapped in, never patched into a shared template.
    pub fn with_compiler(
        compiler: impl Into<String>,
        language: Language,
        platform: Platform,
    ) -> Self {
        let compiler_flags = vec![
            "-Wall".to_string(),
            "-Og".to_string(),
            language.std_flag().to_string(),
            "-Iinclude".to_string(),
        ];

        let mut linker_flags = vec!["-lraylib".to_string(), "-Llib".to_string()];
        linker_flags.extend(platform.linker_flags());

        Self {
            compiler: compiler.into(),
            compiler_flags,
            linker_flags,
            language,
            platform,
        }
    }
}

/// Verifies that the dependency build tool answers a version probe.
fn check_build_tool(invoker: &dyn Invoker) -> Result<(), ToolchainError> {
    match invoker.run_quiet(&CommandLine::version_probe(BUILD_TOOL)) {
        Ok(()) => Ok(()),
        Err(ToolFailure::NotFound) => Err(ToolchainError::MissingBuildTool {
            tool: BUILD_TOOL.to_string(),
        }),
        Err(failure) => Err(ToolchainError::ToolProbeFailed {
            tool: BUILD_TOOL.to_string(),
            failure,
        }),
    }
}

/// Probes the language's compiler candidates in order and returns the
/// first that responds to `--version`.
///
/// A candidate whose probe crashes is skipped like a missing one; only
/// when every candidate fails is the whole probe an error.
fn select_compiler(language: Language, invoker: &dyn Invoker) -> Result<String, ToolchainError> {
    for candidate in language.compiler_candidates() {
        if invoker
            .run_quiet(&CommandLine::version_probe(candidate))
            .is_ok()
        {
            return Ok(candidate.to_string());
        }
    }

    Err(ToolchainError::NoCompilerFound {
        candidates: language
            .compiler_candidates()
            .iter()
            .map(|c| c.to_string())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Scripted invoker: maps program names to probe outcomes and records
    /// every command it is asked to run.
    struct FakeInvoker {
        outcomes: HashMap<String, Result<(), i32>>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeInvoker {
        fn new(outcomes: &[(&str, Result<(), i32>)]) -> Self {
            Self {
                outcomes: outcomes
                    .iter()
                    .map(|(name, outcome)| (name.to_string(), *outcome))
                    .collect(),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn respond(&self, cmd: &CommandLine) -> Result<(), ToolFailure> {
            self.calls.borrow_mut().push(cmd.render());
            match self.outcomes.get(&cmd.program) {
                Some(Ok(())) => Ok(()),
                Some(Err(code)) => Err(ToolFailure::Exited { code: Some(*code) }),
                None => Err(ToolFailure::NotFound),
            }
        }
    }

    impl Invoker for FakeInvoker {
        fn run(&self, cmd: &CommandLine) -> Result<(), ToolFailure> {
            self.respond(cmd)
        }

        fn run_quiet(&self, cmd: &CommandLine) -> Result<(), ToolFailure> {
            self.respond(cmd)
        }
    }

    #[test]
    fn probe_selects_first_candidate() {
        let invoker = FakeInvoker::new(&[("make", Ok(())), ("gcc", Ok(())), ("clang", Ok(()))]);
        let config = ToolchainConfig::probe_for(Language::C, Platform::Linux, &invoker).unwrap();
        assert_eq!(config.compiler, "gcc");
    }

    #[test]
    fn probe_falls_back_to_second_candidate() {
        let invoker = FakeInvoker::new(&[("make", Ok(())), ("clang", Ok(()))]);
        let config = ToolchainConfig::probe_for(Language::C, Platform::Linux, &invoker).unwrap();
        assert_eq!(config.compiler, "clang");
    }

    #[test]
    fn probe_skips_candidate_whose_probe_crashes() {
        let invoker = FakeInvoker::new(&[("make", Ok(())), ("gcc", Err(127)), ("clang", Ok(()))]);
        let config = ToolchainConfig::probe_for(Language::C, Platform::Linux, &invoker).unwrap();
        assert_eq!(config.compiler, "clang");
    }

    #[test]
    fn probe_cpp_candidates() {
        let invoker = FakeInvoker::new(&[("make", Ok(())), ("clang++", Ok(()))]);
        let config = ToolchainConfig::probe_for(Language::Cpp, Platform::Linux, &invoker).unwrap();
        assert_eq!(config.compiler, "clang++");
    }

    #[test]
    fn probe_no_compiler_found() {
        let invoker = FakeInvoker::new(&[("make", Ok(()))]);
        let err = ToolchainConfig::probe_for(Language::C, Platform::Linux, &invoker).unwrap_err();
        match err {
            ToolchainError::NoCompilerFound { candidates } => {
                assert_eq!(candidates, vec!["gcc", "clang"]);
            }
            other => panic!("expected NoCompilerFound, got {other:?}"),
        }
    }

    #[test]
    fn probe_missing_make() {
        let invoker = FakeInvoker::new(&[("gcc", Ok(()))]);
        let err = ToolchainConfig::probe_for(Language::C, Platform::Linux, &invoker).unwrap_err();
        assert!(matches!(err, ToolchainError::MissingBuildTool { .. }));
    }

    #[test]
    fn probe_make_exits_nonzero() {
        let invoker = FakeInvoker::new(&[("make", Err(2)), ("gcc", Ok(()))]);
        let err = ToolchainConfig::probe_for(Language::C, Platform::Linux, &invoker).unwrap_err();
        match err {
            ToolchainError::ToolProbeFailed { tool, .. } => assert_eq!(tool, "make"),
            other => panic!("expected ToolProbeFailed, got {other:?}"),
        }
    }

    #[test]
    fn probe_checks_make_before_compiler() {
        let invoker = FakeInvoker::new(&[("make", Ok(())), ("gcc", Ok(()))]);
        ToolchainConfig::probe_for(Language::C, Platform::Linux, &invoker).unwrap();
        let calls = invoker.calls.borrow();
        assert_eq!(calls[0], "make --version");
        assert_eq!(calls[1], "gcc --version");
    }

    #[test]
    fn config_flags_c_linux() {
        let config = ToolchainConfig::with_compiler("gcc", Language::C, Platform::Linux);
        assert_eq!(
            config.compiler_flags,
            vec!["-Wall", "-Og", "-std=c17", "-Iinclude"]
        );
        assert_eq!(
            config.linker_flags,
            vec!["-lraylib", "-Llib", "-lGL", "-lm", "-lpthread", "-ldl", "-lrt"]
        );
    }

    #[test]
    fn config_flags_cpp_windows() {
        let config = ToolchainConfig::with_compiler("g++", Language::Cpp, Platform::Windows);
        assert_eq!(
            config.compiler_flags,
            vec!["-Wall", "-Og", "-std=c++17", "-Iinclude"]
        );
        assert_eq!(
            config.linker_flags,
            vec!["-lraylib", "-Llib", "-lgdi32", "-lwinmm"]
        );
    }

    #[test]
    fn config_construction_is_repeatable() {
        // Flags are built pure; probing twice yields identical configs.
        let a = ToolchainConfig::with_compiler("gcc", Language::C, Platform::MacOs);
        let b = ToolchainConfig::with_compiler("gcc", Language::C, Platform::MacOs);
        assert_eq!(a.compiler_flags, b.compiler_flags);
        assert_eq!(a.linker_flags, b.linker_flags);
    }

    #[test]
    fn probe_detects_language_from_src_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("main.c"), "int main(void){return 0;}").unwrap();
        let invoker = FakeInvoker::new(&[("make", Ok(())), ("gcc", Ok(()))]);
        // Platform comes from the host here, which is a supported OS in CI.
        let config = ToolchainConfig::probe(tmp.path(), &invoker).unwrap();
        assert_eq!(config.language, Language::C);
        assert_eq!(config.compiler, "gcc");
    }
}
