//! Compiler command-line construction.

/// A fully assembled external command: a program plus its ordered arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLine {
    /// Program to execute (resolved via `PATH`).
    pub program: String,
    /// Arguments, in the exact order they will be passed.
    pub args: Vec<String>,
}

impl CommandLine {
    /// Creates a command line from a program and its arguments.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The `<tool> --version` probe used to test whether a tool is invocable.
    pub fn version_probe(tool: &str) -> Self {
        Self::new(tool, vec!["--version".to_string()])
    }

    /// Renders the command for log output.
    pub fn render(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Assembles a toolchain invocation in the fixed order
/// `[compiler] ++ compiler_flags ++ operation_flags ++ linker_flags`.
///
/// The order is preserved verbatim: toolchains are position-sensitive for
/// some flags (notably `-l` libraries after object files).
pub fn assemble(
    compiler: &str,
    compiler_flags: &[String],
    operation_flags: &[String],
    linker_flags: &[String],
) -> CommandLine {
    let mut args = Vec::with_capacity(
        compiler_flags.len() + operation_flags.len() + linker_flags.len(),
    );
    args.extend_from_slice(compiler_flags);
    args.extend_from_slice(operation_flags);
    args.extend_from_slice(linker_flags);
    CommandLine::new(compiler, args)
}
