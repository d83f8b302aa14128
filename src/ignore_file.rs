// src/ignore_file.rs

//! Loads ignore lines from a `.dockerignore` file and per-copy entries.
//!
//! A leading UTF-8 byte-order mark is dropped. File lines are trimmed, and blank lines or lines whose first non-space
//! character is `#` are dropped before compilation. Per-copy entries are
//! appended after the file entries, so they can both exclude more paths and
//! re-include paths the file excluded.

use crate::errors::{io_error_with_path, PatternOrigin, Result};
use crate::pattern::{self, IgnoreRule};
use log::debug;
use std::fs;
use std::path::Path;

/// Conventional name of the ignore file at the root of a source tree.
pub const DOCKERIGNORE_FILE_NAME: &str = ".dockerignore";

/// One pattern line awaiting compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreLine {
    /// The ignore-file line or per-copy entry the pattern came from.
    pub origin: PatternOrigin,
    /// The pattern text, trimmed of surrounding whitespace.
    pub text: String,
}

/// An ordered list of ignore lines from every source that contributes rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSource {
    lines: Vec<IgnoreLine>,
}

impl IgnoreSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses ignore-file text and appends its pattern lines.
    pub fn with_file_contents(mut self, contents: &str) -> Self {
        self.lines.extend(parse_ignore_lines(contents));
        self
    }

    /// Reads an ignore file from disk and appends its pattern lines.
    pub fn with_file(self, path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))?;
        debug!("Read ignore file '{}'", path.display());
        Ok(self.with_file_contents(&contents))
    }

    /// Appends per-copy entries, which take effect after the file entries.
    ///
    /// Blank and comment entries are skipped like file lines, but keep their
    /// slot in the numbering, so `ignore[i]` always names the i-th entry given.
    pub fn with_extra<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra = entries.into_iter().enumerate().filter_map(|(index, entry)| {
            pattern_text(entry.as_ref()).map(|text| IgnoreLine {
                origin: PatternOrigin::Entry(index),
                text: text.to_string(),
            })
        });
        self.lines.extend(extra);
        self
    }

    pub fn lines(&self) -> &[IgnoreLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Compiles every line in order.
    ///
    /// # Errors
    ///
    /// Fails on the first line that cannot be compiled. The error carries the
    /// file line or per-copy entry index, and the original pattern text.
    pub fn compile(&self) -> Result<Vec<IgnoreRule>> {
        let rules = self
            .lines
            .iter()
            .map(|l| pattern::compile(&l.text).map_err(|e| e.declared_at(l.origin)))
            .collect::<Result<Vec<_>>>()?;
        debug!("Compiled {} ignore rule(s)", rules.len());
        Ok(rules)
    }
}

/// Splits ignore-file text into pattern lines, keeping 1-based line numbers.
pub fn parse_ignore_lines(contents: &str) -> Vec<IgnoreLine> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    contents
        .lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            pattern_text(raw).map(|text| IgnoreLine {
                origin: PatternOrigin::Line(index + 1),
                text: text.to_string(),
            })
        })
        .collect()
}

/// Returns the trimmed pattern, or `None` for blank and comment lines.
fn pattern_text(raw: &str) -> Option<&str> {
    let text = raw.trim();
    if text.is_empty() || text.starts_with('#') {
        None
    } else {
        Some(text)
    }
}
