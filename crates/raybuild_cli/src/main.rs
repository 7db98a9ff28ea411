//! raybuild CLI — bootstrap and incrementally build raylib projects.
//!
//! Provides `raybuild init` for one-shot project scaffolding (clone and
//! build raylib, stage the canonical layout), `raybuild compile` — the
//! default when no subcommand is given — for the incremental
//! compile-and-link cycle, and `raybuild clean` for deleting the object
//! cache.

#![warn(missing_docs)]

mod clean;
mod compile;
mod fsutil;
mod init;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use raybuild_toolchain::Language;

/// raybuild — a minimal bootstrapper and incremental build driver for
/// raylib projects.
#[derive(Parser, Debug)]
#[command(name = "raybuild", version, about = "raylib project bootstrapper and build driver")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output (toolchain details).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to run. Defaults to `compile`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scaffold a raylib project in the current directory.
    Init {
        /// Primary language for the project. Prompted for interactively
        /// if omitted.
        #[arg(short, long, value_enum)]
        lang: Option<CliLanguage>,
    },
    /// Recompile stale sources and relink the executable (default).
    Compile(CompileArgs),
    /// Delete the object cache directory.
    Clean {
        /// Skip the confirmation prompt.
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Arguments for the `compile` subcommand.
#[derive(Parser, Debug, Default)]
pub struct CompileArgs {
    /// Output format for the build report.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Build report output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    #[default]
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Primary language selection for `init`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliLanguage {
    /// C (C17).
    C,
    /// C++ (C++17).
    Cpp,
}

impl From<CliLanguage> for Language {
    fn from(lang: CliLanguage) -> Self {
        match lang {
            CliLanguage::C => Language::C,
            CliLanguage::Cpp => Language::Cpp,
        }
    }
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose information.
    pub verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Some(Command::Init { lang }) => init::run(lang.map(Into::into), &global),
        Some(Command::Compile(ref args)) => compile::run(args, &global),
        Some(Command::Clean { yes }) => clean::run(yes),
        None => compile::run(&CompileArgs::default(), &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
