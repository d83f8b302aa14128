// src/cli.rs

use clap::Parser;

/// Lists the files a container copy would transfer from a source directory.
///
/// dockcopy walks the source directory, applies `.dockerignore` rules (plus
/// any extra `--ignore` patterns, which are applied after the file's rules),
/// and prints the surviving relative paths. The list is meant to be handed to
/// an archiver, e.g. `dockcopy -0 src | tar --null -C src -T - -cf - | docker exec -i ...`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Source directory to copy from.
    #[arg(default_value = ".")]
    pub source: String,

    // --- Ignore Rules ---
    /// Read ignore rules from this file instead of <SOURCE>/.dockerignore.
    #[arg(short = 'f', long, value_name = "FILE", conflicts_with = "no_ignore_file")]
    pub ignore_file: Option<String>,

    /// Do not read any ignore file; only --ignore patterns apply.
    #[arg(short = 'n', long, action = clap::ArgAction::SetTrue)]
    pub no_ignore_file: bool,

    /// Extra ignore pattern for this copy (repeatable). Applied after the ignore file,
    /// so `!pattern` can re-include paths the file excluded.
    #[arg(short = 'i', long = "ignore", value_name = "PATTERN", allow_hyphen_values = true)]
    pub ignore: Option<Vec<String>>,

    // --- Output ---
    /// Separate paths with NUL instead of newline.
    #[arg(short = '0', long, action = clap::ArgAction::SetTrue)]
    pub null: bool,

    /// Print every candidate as `+ path` or `- path`, with the rule that decided it.
    #[arg(short = 'e', long, action = clap::ArgAction::SetTrue)]
    pub explain: bool,

    /// Print candidate, included and excluded counts to stderr.
    #[arg(short = 's', long, action = clap::ArgAction::SetTrue)]
    pub summary: bool,

    /// Write the list to the specified file instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output_file: Option<String>,
}
