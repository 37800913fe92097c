use crate::errors::{AppError, AppResult};
use std::path::Path;

/// A file can be created freely; overwriting an existing one requires --force.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    Err(AppError::Export(format!(
        "file '{}' already exists (use --force to overwrite)",
        path.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_writable() {
        assert!(ensure_writable(Path::new("definitely/not/here.csv"), false).is_ok());
    }

    #[test]
    fn existing_file_needs_force() {
        let path = std::env::temp_dir().join("tttt_fs_utils_test.csv");
        std::fs::write(&path, "x").unwrap();
        assert!(ensure_writable(&path, false).is_err());
        assert!(ensure_writable(&path, true).is_ok());
        std::fs::remove_file(&path).ok();
    }
}
