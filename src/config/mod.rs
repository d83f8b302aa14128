//! Defines the `Config` struct and related types for application configuration.
//!
//! A `Config` describes one copy: the source root, where its ignore rules come
//! from, and how the selected file list is written out.

use crate::ignore_file::DOCKERIGNORE_FILE_NAME;
use std::path::{Path, PathBuf};

pub use builder::ConfigBuilder;
mod builder;
mod builder_logic;
pub mod path_resolve;

/// Where the file-based ignore rules come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IgnoreFileSetting {
    /// `<source_root>/.dockerignore` if it exists, otherwise no file rules.
    #[default]
    Default,
    /// An explicit ignore file, which must exist.
    Path(PathBuf),
    /// Do not read any ignore file; only per-copy entries apply.
    Disabled,
}

/// One copy entry as a collaborator would describe it: a source directory and
/// the extra ignore entries declared for that copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopySpec {
    pub source_root: PathBuf,
    pub ignore: Vec<String>,
}

impl CopySpec {
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            ignore: Vec::new(),
        }
    }

    pub fn ignore<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(entries.into_iter().map(Into::into));
        self
    }
}

/// Configuration options related to writing the selected file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputConfig {
    /// Separate paths with NUL instead of newline (for `tar --null -T -`).
    pub null_separated: bool,
    /// Print every candidate with its verdict and deciding rule instead of the plain list.
    pub explain: bool,
    /// Print candidate/included/excluded counts to stderr.
    pub summary: bool,
}

/// Represents the destination for the generated output.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
#[non_exhaustive]
pub enum OutputDestination {
    /// Write to standard output.
    #[default]
    Stdout,
    /// Write to the specified file path.
    File(PathBuf),
}

/// Validated settings for a run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Canonicalized source directory to copy from.
    pub source_root: PathBuf,
    /// Where file-based ignore rules are read from.
    pub ignore_file: IgnoreFileSetting,
    /// Per-copy ignore entries, applied after the file entries.
    pub extra_ignores: Vec<String>,
    /// Output formatting options.
    pub output: OutputConfig,
    /// Where the file list is written.
    pub output_destination: OutputDestination,
}

impl Config {
    /// The ignore file to read for this run, if any.
    ///
    /// For [`IgnoreFileSetting::Default`] this is `<source_root>/.dockerignore`
    /// only when that file exists.
    pub fn ignore_file_path(&self) -> Option<PathBuf> {
        match &self.ignore_file {
            IgnoreFileSetting::Default => {
                let candidate = self.source_root.join(DOCKERIGNORE_FILE_NAME);
                candidate.is_file().then_some(candidate)
            }
            IgnoreFileSetting::Path(path) => Some(path.clone()),
            IgnoreFileSetting::Disabled => None,
        }
    }

    /// The copy entry this configuration describes.
    pub fn copy_spec(&self) -> CopySpec {
        CopySpec::new(&self.source_root).ignore(self.extra_ignores.iter().cloned())
    }

    /// Creates a `Config` rooted at `root` with every other option defaulted.
    #[doc(hidden)]
    pub fn new_for_test(root: &Path) -> Self {
        Self {
            source_root: root.to_path_buf(),
            ignore_file: IgnoreFileSetting::Default,
            extra_ignores: Vec::new(),
            output: OutputConfig::default(),
            output_destination: OutputDestination::Stdout,
        }
    }
}
