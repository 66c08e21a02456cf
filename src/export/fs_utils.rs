// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Check that `path` can be created.
///
/// - file does NOT exist → Ok
/// - file exists and `force` → Ok (it will be overwritten)
/// - file exists and no `force` → error
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    Err(AppError::Export(format!(
        "'{}' already exists (use --force to overwrite)",
        path.display()
    )))
}

/// Create the output directory if it is missing.
pub(crate) fn ensure_dir(dir: &Path) -> AppResult<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(AppError::Export(format!(
            "'{}' is not a directory",
            dir.display()
        )));
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

pub(crate) fn write_artifact(path: &Path, bytes: &[u8]) -> AppResult<()> {
    fs::write(path, bytes).map_err(|e| {
        AppError::Export(format!("cannot write '{}': {e}", path.display()))
    })
}
