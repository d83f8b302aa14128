//! `dockcopy` selects the files to copy from a source directory into a running
//! container, using `.dockerignore`-compatible ignore rules.
//!
//! As a library it provides a small pipeline:
//! 1.  **Load**: gather ignore lines from a `.dockerignore` file plus per-copy
//!     entries ([`ignore_file::IgnoreSource`]) and compile them, in order, into
//!     [`pattern::IgnoreRule`]s.
//! 2.  **Discover**: enumerate candidate paths under the source root
//!     ([`discovery::discover_candidates`]).
//! 3.  **Filter**: fold the rules over every candidate ([`filter::PathFilter`]);
//!     the last matching rule decides, so `!pattern` re-includes paths that an
//!     *earlier* rule excluded.
//!
//! The resulting path list is meant for an external archiver that streams the
//! files into the container.
//!
//! # Example: Library Usage
//!
//! ```
//! use dockcopy::{select, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp = tempdir().unwrap();
//! fs::write(temp.path().join(".dockerignore"), "*.log\n!keep.log\n").unwrap();
//! fs::write(temp.path().join("a.log"), "noise").unwrap();
//! fs::write(temp.path().join("keep.log"), "signal").unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .source_root(temp.path().to_str().unwrap())
//!     .ignore(vec![".dockerignore".to_string()])
//!     .build()
//!     .unwrap();
//!
//! let selection = select(&config).unwrap();
//! assert_eq!(selection.included(), &["keep.log"]);
//! ```

pub mod cli;
pub mod config;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filter;
pub mod ignore_file;
pub mod output;
pub mod pattern;

pub use config::{Config, ConfigBuilder, CopySpec, OutputDestination};
pub use core_types::Selection;
pub use errors::{Error, PatternOrigin, Result};
pub use filter::{FilterResult, PathFilter, Verdict};
pub use ignore_file::IgnoreSource;
pub use pattern::IgnoreRule;

use log::{debug, info};
use rayon::prelude::*;

/// Loads the file-based ignore lines for a config: the configured ignore
/// file, or nothing if there is none.
pub fn load_file_rules(config: &Config) -> Result<IgnoreSource> {
    match config.ignore_file_path() {
        Some(path) => IgnoreSource::new().with_file(&path),
        None => Ok(IgnoreSource::new()),
    }
}

/// Runs one selection pass for a config.
///
/// # Errors
/// Fails if any ignore line is invalid, if the ignore file cannot be read, or
/// if the source root cannot be walked. An empty or fully excluded selection
/// is *not* an error here; see [`ensure_nonempty`].
pub fn select(config: &Config) -> Result<Selection> {
    let file_rules = load_file_rules(config)?;
    select_copy(&config.copy_spec(), &file_rules)
}

/// Runs one selection pass for a copy entry.
///
/// `file_rules` holds the project's ignore-file lines; the entry's own
/// `ignore` list is appended after them.
pub fn select_copy(spec: &CopySpec, file_rules: &IgnoreSource) -> Result<Selection> {
    let rules = file_rules.clone().with_extra(&spec.ignore).compile()?;
    let candidates = discovery::discover_candidates(&spec.source_root)?;
    let selection = Selection::new(spec.source_root.clone(), candidates, rules);
    info!(
        "Selected {} of {} path(s) under '{}'",
        selection.included().len(),
        selection.result.candidate_count(),
        spec.source_root.display()
    );
    Ok(selection)
}

/// Runs independent selection passes for several copy entries in parallel.
///
/// Results come back in the same order as `specs`; a failing entry does not
/// affect the others.
pub fn select_many(specs: &[CopySpec], file_rules: &IgnoreSource) -> Vec<Result<Selection>> {
    debug!("Selecting files for {} copy entries", specs.len());
    specs
        .par_iter()
        .map(|spec| select_copy(spec, file_rules))
        .collect()
}

/// Turns the two "nothing to copy" outcomes into distinct errors.
///
/// # Errors
/// [`Error::EmptySource`] if the source had no candidates at all, and
/// [`Error::NothingToCopy`] if the rules excluded every candidate.
pub fn ensure_nonempty(selection: &Selection) -> Result<()> {
    let result = &selection.result;
    if result.candidate_count() == 0 {
        return Err(Error::EmptySource {
            root: selection.source_root.clone(),
        });
    }
    if result.is_fully_excluded() {
        return Err(Error::NothingToCopy {
            root: selection.source_root.clone(),
            candidates: result.candidate_count(),
        });
    }
    Ok(())
}

/// Executes the complete pipeline the way the command line does: select,
/// write the list (plus an optional summary on stderr), then check that
/// something was left to copy.
pub fn run(config: &Config) -> Result<Selection> {
    let selection = select(config)?;

    let mut writer = output::writer::setup_output_writer(config)?;
    output::write_selection(&mut writer, &selection, &config.output).map_err(|e| {
        let target = match &config.output_destination {
            OutputDestination::File(path) => path.display().to_string(),
            _ => "<stdout>".to_string(),
        };
        errors::io_error_with_path(e, target)
    })?;
    if config.output.summary {
        output::write_summary(&mut std::io::stderr(), &selection)
            .map_err(|e| errors::io_error_with_path(e, "<stderr>"))?;
    }

    ensure_nonempty(&selection)?;
    Ok(selection)
}
