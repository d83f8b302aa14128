// src/discovery/entry_processor.rs

use crate::errors::{io_error_with_path, Error, Result};
use log::{trace, warn};
use std::fs;
use std::path::{Component, Path};
use walkdir::DirEntry;

/// Turns one walked entry into a candidate path, if it is one.
///
/// Returns `Ok(Some(path))` for regular files, symlinks and empty directories
/// (the latter with a trailing `/`). Returns `Ok(None)` for directories that
/// have children, since their contents are reported individually.
pub(crate) fn process_entry(entry: &DirEntry, root: &Path) -> Result<Option<String>> {
    let absolute_path = entry.path();
    let relative = match absolute_path.strip_prefix(root) {
        Ok(rel) => rel,
        Err(err) => {
            warn!(
                "Failed to strip prefix '{}' from '{}': {}. Skipping.",
                root.display(),
                absolute_path.display(),
                err
            );
            return Ok(None);
        }
    };
    let relative = normalize_relative(relative)?;

    if entry.file_type().is_dir() {
        let mut children =
            fs::read_dir(absolute_path).map_err(|e| io_error_with_path(e, absolute_path))?;
        if children.next().is_some() {
            trace!("Descending into directory: {}", relative);
            return Ok(None);
        }
        trace!("Empty directory candidate: {}/", relative);
        return Ok(Some(format!("{}/", relative)));
    }

    trace!("File candidate: {}", relative);
    Ok(Some(relative))
}

/// Joins path components with `/`, dropping any `.` components.
///
/// # Errors
///
/// Returns [`Error::NonUtf8Path`] if a component is not valid UTF-8; a lossy
/// rendering would name a file that does not exist.
pub(crate) fn normalize_relative(relative: &Path) -> Result<String> {
    let parts = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_str().ok_or_else(|| Error::NonUtf8Path {
                path: relative.to_path_buf(),
            })),
            _ => None,
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(parts.join("/"))
}
