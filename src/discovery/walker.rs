// src/discovery/walker.rs

use log::debug;
use std::path::Path;
use walkdir::WalkDir;

/// Configures the `WalkDir` used to enumerate a source root.
///
/// The root itself is skipped (`min_depth(1)`), symlinks are reported as
/// entries rather than followed, and entries come back in directory-listing
/// order, not sorted.
pub(super) fn build_walker(root: &Path) -> walkdir::IntoIter {
    debug!("Configuring walker for '{}'", root.display());
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
}
