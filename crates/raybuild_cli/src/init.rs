//! `raybuild init` — one-shot project scaffolding.
//!
//! Clones raylib, builds the static library with make, stages the header,
//! archive, and example entry point into the canonical layout
//! (`include/`, `lib/`, `src/main.<ext>`), deletes the clone, then runs a
//! first compile-and-run cycle. Everything here is sequential glue around
//! external tools; problems with the first build are reported but leave
//! the scaffold in place.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::Command;

use raybuild_toolchain::{Language, Platform};

use crate::{compile, fsutil, CompileArgs, GlobalArgs};

/// Upstream raylib repository.
const RAYLIB_REPO: &str = "https://github.com/raysan5/raylib";

/// Directory the clone lands in.
const RAYLIB_DIR: &str = "raylib";

/// Static library produced by raylib's Makefile.
const STATIC_LIB: &str = "libraylib.a";

/// raylib's single public header.
const HEADER: &str = "raylib.h";

/// Example staged as the starter entry point.
const EXAMPLE: &str = "examples/core/core_basic_window.c";

/// Runs the `raybuild init` command.
pub fn run(lang: Option<Language>, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let language = match lang {
        Some(language) => language,
        None => prompt_language(io::stdin().lock())?,
    };

    eprintln!("    Cloning {RAYLIB_REPO}");
    run_tool("git", &["clone", RAYLIB_REPO], None)?;

    eprintln!("   Building static library {STATIC_LIB}");
    let raylib_src = Path::new(RAYLIB_DIR).join("src");
    run_tool("make", &["PLATFORM=PLATFORM_DESKTOP"], Some(&raylib_src))?;

    eprintln!("    Staging header, library, and starter source");
    stage_files(Path::new("."), language)?;

    eprintln!("   Removing {RAYLIB_DIR}/");
    fsutil::remove_tree(Path::new(RAYLIB_DIR))?;

    // First build and smoke run. Failures are reported, not fatal: the
    // scaffold is complete and the user can fix and rerun `compile`.
    match compile::run(&CompileArgs::default(), global) {
        Ok(0) => run_executable(global),
        Ok(_) => eprintln!(
            "warning: first build reported errors; fix src/main.{} and rerun",
            language.extension()
        ),
        Err(e) => eprintln!("warning: first build failed: {e}"),
    }

    Ok(0)
}

/// Copies the header, static library, and example source into the layout
/// other tooling depends on.
fn stage_files(root: &Path, language: Language) -> io::Result<()> {
    for dir in ["include", "lib", "src"] {
        fs::create_dir_all(root.join(dir))?;
    }

    let raylib_src = root.join(RAYLIB_DIR).join("src");
    fs::copy(raylib_src.join(STATIC_LIB), root.join("lib").join(STATIC_LIB))?;
    fs::copy(raylib_src.join(HEADER), root.join("include").join(HEADER))?;

    let main_name = format!("main.{}", language.extension());
    fs::copy(
        root.join(RAYLIB_DIR).join(EXAMPLE),
        root.join("src").join(main_name),
    )?;

    Ok(())
}

/// Asks for the primary language until the answer is `c` or `cpp`.
fn prompt_language(mut input: impl BufRead) -> Result<Language, Box<dyn std::error::Error>> {
    eprintln!("which will be your primary language, C or CPP?");
    let mut line = String::new();
    loop {
        eprint!("> ");
        io::stderr().flush().ok();
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err("no language selected".into());
        }
        match parse_language(&line) {
            Some(language) => return Ok(language),
            None => eprintln!("unexpected input; enter C or CPP"),
        }
    }
}

/// Parses a prompt answer; accepts any casing of `c` and `cpp`.
fn parse_language(answer: &str) -> Option<Language> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "c" => Some(Language::C),
        "cpp" => Some(Language::Cpp),
        _ => None,
    }
}

/// Runs an external scaffolding tool, inheriting stdio.
fn run_tool(
    program: &str,
    args: &[&str],
    cwd: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let status = cmd.status().map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            format!("'{program}' is required but was not found on PATH")
        } else {
            format!("failed to launch '{program}': {e}")
        }
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("'{program}' exited with status {status}").into())
    }
}

/// Runs the freshly linked executable once as a smoke test.
fn run_executable(global: &GlobalArgs) {
    let exe = match Platform::host() {
        Ok(platform) => platform.executable_name(),
        Err(_) => return,
    };
    if !global.quiet {
        eprintln!("    Running {exe}");
    }
    let path = Path::new(".").join(exe);
    match Command::new(&path).status() {
        Ok(status) if status.success() => {}
        Ok(status) => eprintln!("warning: {exe} exited with status {status}"),
        Err(_) => eprintln!("warning: couldn't run {exe}"),
    }
}
