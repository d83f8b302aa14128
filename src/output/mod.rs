//! Writes the selected file list.
//!
//! The plain list is what an archiver consumes: one relative path per entry,
//! separated by newline or NUL. The explain format is for people.

use crate::config::OutputConfig;
use crate::core_types::Selection;
use log::debug;
use std::io::{self, Write};

pub mod summary;
pub mod writer;

pub use summary::write_summary;

/// Writes the included paths, in discovery order.
pub fn write_file_list(
    writer: &mut dyn Write,
    paths: &[String],
    opts: &OutputConfig,
) -> io::Result<()> {
    let separator: &[u8] = if opts.null_separated { b"\0" } else { b"\n" };
    debug!("Writing {} path(s)", paths.len());
    for path in paths {
        writer.write_all(path.as_bytes())?;
        writer.write_all(separator)?;
    }
    writer.flush()
}

/// Writes every candidate as `+ path` (copied) or `- path` (excluded), with
/// the pattern of the rule that decided it.
pub fn write_explain(writer: &mut dyn Write, selection: &Selection) -> io::Result<()> {
    for (path, verdict) in selection.verdicts() {
        let mark = if verdict.excluded { '-' } else { '+' };
        match selection.rule(&verdict) {
            Some(rule) => writeln!(writer, "{} {}\t[{}]", mark, path, rule)?,
            None => writeln!(writer, "{} {}", mark, path)?,
        }
    }
    writer.flush()
}

/// Writes the selection in the format `opts` asks for.
pub fn write_selection(
    writer: &mut dyn Write,
    selection: &Selection,
    opts: &OutputConfig,
) -> io::Result<()> {
    if opts.explain {
        write_explain(writer, selection)
    } else {
        write_file_list(writer, selection.included(), opts)
    }
}
