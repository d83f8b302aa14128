//! Defines application-specific error types.
//!
//! The `Error` enum categorizes everything that can go wrong while selecting
//! files to copy: ignore patterns that cannot be translated, configuration
//! problems, filesystem access, and the two distinct "nothing to copy" outcomes.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A specialized `Result` type for dockcopy operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors used throughout `dockcopy`.
#[derive(Error, Debug)]
pub enum Error {
    /// An ignore line could not be translated into a matcher.
    ///
    /// `origin` is `None` when the pattern was compiled directly rather than
    /// loaded through an [`crate::ignore_file::IgnoreSource`].
    #[error("{}", describe_invalid_pattern(.origin, .pattern, .reason))]
    InvalidPattern {
        /// Where the pattern was declared, when known.
        origin: Option<PatternOrigin>,
        /// The original text of the offending line.
        pattern: String,
        /// Why translation failed.
        reason: String,
    },

    /// Error occurring during file or directory access.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The directory walk over a source root failed.
    #[error("Failed to walk '{path}': {source}")]
    Walk {
        /// The source root being enumerated.
        path: String,
        #[source]
        source: walkdir::Error,
    },

    /// Invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The source root contained no files and no empty directories.
    #[error("Source '{}' contains no files.", .root.display())]
    EmptySource {
        /// The source root that was enumerated.
        root: PathBuf,
    },

    /// A path under the source root cannot be represented as UTF-8, so it
    /// can be neither matched nor listed faithfully.
    #[error("Path '{}' under the source root is not valid UTF-8", .path.display())]
    NonUtf8Path {
        /// The offending path, relative to the source root.
        path: PathBuf,
    },

    /// Every candidate under the source root was excluded by the ignore rules.
    #[error(
        "Nothing to copy: all {candidates} path(s) under '{}' are excluded by the ignore rules.",
        .root.display()
    )]
    NothingToCopy {
        /// The source root that was enumerated.
        root: PathBuf,
        /// How many candidates were discovered before filtering.
        candidates: usize,
    },
}

/// Configuration problems detected while building a `Config`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No source root was given.
    #[error("a source directory is required")]
    MissingSource,
    /// The source root does not exist or is not a directory.
    #[error("source '{}' is not a directory", .0.display())]
    SourceNotDirectory(PathBuf),
    /// An explicitly requested ignore file does not exist.
    #[error("ignore file '{}' does not exist", .0.display())]
    IgnoreFileNotFound(PathBuf),
}

/// Where an ignore pattern was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternOrigin {
    /// 1-based line number in the ignore file.
    Line(usize),
    /// 0-based position in a per-copy `ignore` list.
    Entry(usize),
}

impl fmt::Display for PatternOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternOrigin::Line(n) => write!(f, "on line {}", n),
            PatternOrigin::Entry(i) => write!(f, "in ignore[{}]", i),
        }
    }
}

fn describe_invalid_pattern(origin: &Option<PatternOrigin>, pattern: &str, reason: &str) -> String {
    match origin {
        Some(origin) => format!("Invalid ignore pattern {}: '{}': {}", origin, pattern, reason),
        None => format!("Invalid ignore pattern '{}': {}", pattern, reason),
    }
}

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

impl Error {
    /// Attaches the declaring line or entry to an `InvalidPattern` error.
    ///
    /// Other variants are returned unchanged.
    pub(crate) fn declared_at(self, origin: PatternOrigin) -> Self {
        match self {
            Error::InvalidPattern {
                pattern, reason, ..
            } => Error::InvalidPattern {
                origin: Some(origin),
                pattern,
                reason,
            },
            other => other,
        }
    }
}
