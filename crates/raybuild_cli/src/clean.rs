//! `raybuild clean` — delete the object cache.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::compile::OBJ_DIR;
use crate::fsutil;

/// Runs the `raybuild clean` command.
///
/// Prompts for confirmation unless `yes` is set; anything but an explicit
/// `y` is a no-op. Deletes the object cache directory recursively, which
/// forces a full recompile on the next run.
pub fn run(yes: bool) -> Result<i32, Box<dyn std::error::Error>> {
    let obj_dir = Path::new(OBJ_DIR);

    if !obj_dir.exists() {
        eprintln!("   Nothing to clean; {OBJ_DIR}/ does not exist");
        return Ok(0);
    }

    if !yes {
        eprint!("delete {OBJ_DIR}/ and all cached objects? [y/N] ");
        io::stderr().flush().ok();
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if !confirmed(&answer) {
            eprintln!("   Aborted.");
            return Ok(0);
        }
    }

    fsutil::remove_tree(obj_dir)?;
    eprintln!("   Removed {OBJ_DIR}/");
    Ok(0)
}

/// Only an explicit `y` (any casing) proceeds; anything else is a no-op.
fn confirmed(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmed_accepts_y() {
        assert!(confirmed("y"));
        assert!(confirmed("Y"));
        assert!(confirmed("  y\n"));
    }

    #[test]
    fn confirmed_rejects_everything_else() {
        assert!(!confirmed("n"));
        assert!(!confirmed("yes"));
        assert!(!confirmed(""));
        assert!(!confirmed("q"));
    }
}
