// src/output/summary.rs

use crate::core_types::Selection;
use std::io::{self, Write};

/// Writes a one-line count summary for a selection.
pub fn write_summary(writer: &mut dyn Write, selection: &Selection) -> io::Result<()> {
    let result = &selection.result;
    writeln!(
        writer,
        "{}: {} candidate(s), {} included, {} excluded by {} rule(s)",
        selection.source_root.display(),
        result.candidate_count(),
        result.included().len(),
        result.excluded_count(),
        selection.rules.len()
    )
}
