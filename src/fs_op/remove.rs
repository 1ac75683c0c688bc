use std::fs;
use std::path::Path;

use crate::errors::{Result, TreeError};
use crate::fs_op::stat::PathType;

/// Remove a file or directory at `path`.
///
/// Directories are removed recursively. If the path does not exist this
/// function returns `Ok(())`, so it may be called again after a previous
/// removal or after a partial failure.
pub fn remove_path(path: impl AsRef<Path>) -> Result<()> {
    let p = path.as_ref();

    match PathType::of(p) {
        PathType::NotFound => Ok(()),
        PathType::Directory => fs::remove_dir_all(p).map_err(|e| TreeError::io(p, e)),
        PathType::File | PathType::Other => fs::remove_file(p).map_err(|e| TreeError::io(p, e)),
    }
}
