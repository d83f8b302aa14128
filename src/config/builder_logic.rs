// src/config/builder_logic.rs

use super::{IgnoreFileSetting, OutputDestination};
use crate::errors::{ConfigError, Result};
use std::path::PathBuf;

/// Determines the ignore-file setting from the builder's options.
///
/// `--no-ignore-file` wins over an explicit path. A relative explicit path is
/// taken relative to the current directory, and must exist.
pub(super) fn determine_ignore_file(
    ignore_file: Option<String>,
    no_ignore_file: Option<bool>,
) -> Result<IgnoreFileSetting> {
    if no_ignore_file.unwrap_or(false) {
        return Ok(IgnoreFileSetting::Disabled);
    }
    match ignore_file {
        Some(path) => {
            let path = PathBuf::from(path);
            if !path.is_file() {
                return Err(ConfigError::IgnoreFileNotFound(path).into());
            }
            Ok(IgnoreFileSetting::Path(path))
        }
        None => Ok(IgnoreFileSetting::Default),
    }
}

/// Determines the final output destination.
pub(super) fn determine_output_destination(output_file: Option<String>) -> OutputDestination {
    match output_file {
        Some(file_path_str) => OutputDestination::File(PathBuf::from(file_path_str)),
        None => OutputDestination::Stdout,
    }
}
