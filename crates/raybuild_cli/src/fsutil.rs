//! Filesystem helpers for scaffolding and cleanup.

use std::fs;
use std::io;
use std::path::Path;

/// Recursively deletes a directory tree, clearing read-only bits first.
///
/// Files checked out by git (pack files in particular) can be read-only,
/// which makes a plain `remove_dir_all` fail on Windows.
pub fn remove_tree(root: &Path) -> io::Result<()> {
    clear_readonly(root)?;
    fs::remove_dir_all(root)
}

fn clear_readonly(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    let mut perms = metadata.permissions();
    if perms.readonly() {
        #[allow(clippy::permissions_set_readonly_false)]
        perms.set_readonly(false);
        fs::set_permissions(path, perms)?;
    }

    if metadata.is_dir() {
        for entry in fs::read_dir(path)? {
            clear_readonly(&entry?.path())?;
        }
    }
    Ok(())
}
