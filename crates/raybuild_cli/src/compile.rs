//! `raybuild compile` — the incremental compile-and-link cycle.
//!
//! Chains the pipeline: probe toolchain → scan sources → plan staleness →
//! compile stale files → link the full object set. Exactly one process at
//! a time touches `obj/`; concurrent invocations are not guarded against
//! and callers are expected to serialize.

use std::path::Path;

use raybuild_build::{
    compile_stale, link_objects, plan_build, scan_sources, BuildError, BuildReport, CompileSummary,
    FailedFile,
};
use raybuild_toolchain::{Invoker, SystemInvoker, ToolchainConfig};

use crate::{CompileArgs, GlobalArgs, ReportFormat};

/// Directory scanned for project sources, relative to the project root.
pub const SRC_DIR: &str = "src";

/// Object cache directory, one object per source file.
pub const OBJ_DIR: &str = "obj";

/// Runs the `raybuild compile` command in the current directory.
///
/// Returns exit code 0 on success or when everything is already up to
/// date, 1 when any file failed to compile.
pub fn run(args: &CompileArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    run_in(Path::new("."), args, global, &SystemInvoker)
}

/// Pipeline body with the project root and invoker injectable, so tests
/// can drive it over a scratch tree with a scripted toolchain.
pub fn run_in(
    root: &Path,
    args: &CompileArgs,
    global: &GlobalArgs,
    invoker: &dyn Invoker,
) -> Result<i32, Box<dyn std::error::Error>> {
    let src_dir = root.join(SRC_DIR);

    let config = ToolchainConfig::probe(&src_dir, invoker)?;
    if global.verbose {
        eprintln!(
            "  Toolchain {} ({:?}, {:?})",
            config.compiler, config.language, config.platform
        );
    }

    let sources = scan_sources(&src_dir, config.language)?;
    if sources.is_empty() {
        return Err(format!(
            "no .{} sources found in {SRC_DIR}/",
            config.language.extension()
        )
        .into());
    }

    let plan = plan_build(&sources, &root.join(OBJ_DIR))?;

    let summary = match compile_stale(&config, &plan, invoker, global.quiet) {
        Ok(summary) => summary,
        Err(BuildError::NothingToCompile) => {
            match args.format {
                ReportFormat::Json => print_report(&BuildReport::up_to_date(plan.link_set)),
                ReportFormat::Text => {
                    if !global.quiet {
                        eprintln!(
                            "   Nothing to compile; {} is up to date",
                            config.platform.executable_name()
                        );
                    }
                }
            }
            return Ok(0);
        }
        Err(e) => return Err(e.into()),
    };

    for failure in &summary.failures {
        eprintln!("error: {failure}");
    }

    // A failed compile leaves a missing or outdated object behind, so a
    // link now would either fail outright or bake stale code into the
    // executable. Stop here; the next run retries the failed files.
    if !summary.all_succeeded() {
        if args.format == ReportFormat::Json {
            print_report(&report_for(&summary, &plan.link_set, None));
        }
        return Ok(1);
    }

    if !global.quiet {
        eprintln!("    Linking {}", config.platform.executable_name());
    }
    let output = link_objects(&config, &plan.link_set, invoker)?;

    match args.format {
        ReportFormat::Json => {
            print_report(&report_for(&summary, &plan.link_set, Some(&output)));
        }
        ReportFormat::Text => {
            if !global.quiet {
                eprintln!(
                    "   Build complete: {} file(s) compiled, {} linked",
                    summary.compiled.len(),
                    output.display()
                );
            }
        }
    }

    Ok(0)
}

/// Builds the JSON report for a run that reached (or skipped) the link step.
fn report_for(
    summary: &CompileSummary,
    link_set: &[std::path::PathBuf],
    output: Option<&Path>,
) -> BuildReport {
    BuildReport {
        compiled: summary.compiled.clone(),
        failed: summary.failures.iter().map(FailedFile::from).collect(),
        link_set: link_set.to_vec(),
        linked: output.is_some(),
        output: output.map(Path::to_path_buf),
    }
}

/// Prints a report as pretty JSON on stdout.
fn print_report(report: &BuildReport) {
    let json = serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
    println!("{json}");
}
