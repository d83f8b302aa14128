//! Enumerates candidate paths under a source root.
//!
//! Candidates are relative, forward-slash paths in directory-listing order:
//! every file (and symlink) once, plus every empty directory once with a
//! trailing `/`. Directories with children are not listed themselves.
use crate::errors::{Error, Result};
use log::debug;
use std::path::Path;

mod entry_processor;
mod walker;

use entry_processor::process_entry;
use walker::build_walker;

/// Walks `root` and returns every candidate path.
///
/// # Errors
///
/// Returns [`Error::Walk`] if the walk cannot read a directory,
/// [`Error::Io`] if an empty-directory check fails, and
/// [`Error::NonUtf8Path`] if a name under the root is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use dockcopy::discovery::discover_candidates;
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// fs::create_dir_all(temp.path().join("src"))?;
/// fs::create_dir_all(temp.path().join("logs"))?;
/// fs::write(temp.path().join("src/main.c"), "int main;")?;
///
/// let mut candidates = discover_candidates(temp.path())?;
/// candidates.sort();
/// assert_eq!(candidates, vec!["logs/", "src/main.c"]);
/// # Ok(())
/// # }
/// ```
pub fn discover_candidates(root: &Path) -> Result<Vec<String>> {
    let mut candidates = Vec::new();
    for entry_result in build_walker(root) {
        let entry = entry_result.map_err(|source| Error::Walk {
            path: root.display().to_string(),
            source,
        })?;
        if let Some(candidate) = process_entry(&entry, root)? {
            candidates.push(candidate);
        }
    }
    debug!(
        "Discovery complete. {} candidate(s) under '{}'",
        candidates.len(),
        root.display()
    );
    Ok(candidates)
}
