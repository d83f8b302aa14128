// src/config/path_resolve.rs

use crate::errors::{ConfigError, Result};
use std::path::{Path, PathBuf};

/// Resolves the source path string to an absolute, canonicalized directory.
///
/// # Errors
/// Returns `ConfigError::SourceNotDirectory` if the path does not exist or is
/// not a directory.
pub fn resolve_source_root(source: &str) -> Result<PathBuf> {
    let path = Path::new(source);
    match path.canonicalize() {
        Ok(resolved) if resolved.is_dir() => Ok(resolved),
        _ => Err(ConfigError::SourceNotDirectory(path.to_path_buf()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_existing_dir() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let resolved = resolve_source_root(temp.path().to_str().unwrap())?;
        assert!(resolved.is_absolute());
        assert!(resolved.is_dir());
        Ok(())
    }

    #[test]
    fn test_resolve_file_is_rejected() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("test.txt");
        fs::write(&file_path, "content")?;
        let result = resolve_source_root(file_path.to_str().unwrap());
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::SourceNotDirectory(_)))
        ));
        Ok(())
    }

    #[test]
    fn test_resolve_non_existent_path() {
        let result = resolve_source_root("non_existent_path_for_testing_dockcopy");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("non_existent_path_for_testing_dockcopy"));
    }
}
