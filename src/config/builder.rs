// src/config/builder.rs

use super::{
    builder_logic::{determine_ignore_file, determine_output_destination},
    path_resolve::resolve_source_root,
    Config, OutputConfig,
};
use crate::cli::Cli;
use crate::errors::{ConfigError, Result};

/// A builder for creating a `Config` instance programmatically.
///
/// Every setter is optional except the source root.
///
/// # Examples
///
/// ```
/// use dockcopy::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .source_root(".")
///     .ignore(vec!["target/".to_string(), "*.log".to_string()])
///     .null_separated(true)
///     .build()
///     .unwrap();
///
/// assert!(config.source_root.is_absolute());
/// assert_eq!(config.extra_ignores.len(), 2);
/// assert!(config.output.null_separated);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    pub(crate) source_root: Option<String>,
    pub(crate) ignore_file: Option<String>,
    pub(crate) no_ignore_file: Option<bool>,
    pub(crate) ignore: Option<Vec<String>>,
    pub(crate) null_separated: Option<bool>,
    pub(crate) explain: Option<bool>,
    pub(crate) summary: Option<bool>,
    pub(crate) output_file: Option<String>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `ConfigBuilder` from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            source_root: Some(cli.source),
            ignore_file: cli.ignore_file,
            no_ignore_file: Some(cli.no_ignore_file),
            ignore: cli.ignore,
            null_separated: Some(cli.null),
            explain: Some(cli.explain),
            summary: Some(cli.summary),
            output_file: cli.output_file,
        }
    }

    /// Sets the source directory to copy from.
    pub fn source_root(mut self, path: impl Into<String>) -> Self {
        self.source_root = Some(path.into());
        self
    }

    /// Reads file-based ignore rules from `path` instead of `<source>/.dockerignore`.
    pub fn ignore_file(mut self, path: impl Into<String>) -> Self {
        self.ignore_file = Some(path.into());
        self
    }

    /// Skips file-based ignore rules entirely.
    pub fn no_ignore_file(mut self, no_ignore_file: bool) -> Self {
        self.no_ignore_file = Some(no_ignore_file);
        self
    }

    /// Sets the per-copy ignore entries, applied after the file entries.
    pub fn ignore(mut self, entries: Vec<String>) -> Self {
        self.ignore = Some(entries);
        self
    }

    /// Separates output paths with NUL instead of newline.
    pub fn null_separated(mut self, null_separated: bool) -> Self {
        self.null_separated = Some(null_separated);
        self
    }

    /// Prints each candidate with its verdict instead of the plain list.
    pub fn explain(mut self, explain: bool) -> Self {
        self.explain = Some(explain);
        self
    }

    /// Prints candidate/included/excluded counts to stderr.
    pub fn summary(mut self, summary: bool) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Writes the list to a file instead of stdout.
    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Validates the options and builds the final `Config`.
    ///
    /// # Errors
    /// Returns a `ConfigError` if no source is set, the source is not a
    /// directory, or an explicit ignore file does not exist.
    pub fn build(self) -> Result<Config> {
        let source = self.source_root.ok_or(ConfigError::MissingSource)?;
        let source_root = resolve_source_root(&source)?;
        let ignore_file = determine_ignore_file(self.ignore_file, self.no_ignore_file)?;
        log::debug!("Resolved source root: {}", source_root.display());

        Ok(Config {
            source_root,
            ignore_file,
            extra_ignores: self.ignore.unwrap_or_default(),
            output: OutputConfig {
                null_separated: self.null_separated.unwrap_or(false),
                explain: self.explain.unwrap_or(false),
                summary: self.summary.unwrap_or(false),
            },
            output_destination: determine_output_destination(self.output_file),
        })
    }
}
