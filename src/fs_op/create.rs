use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::errors::{Result, TreeError};
use crate::fs_op::stat::PathType;

/// Create a single directory at `path`.
///
/// An existing directory is accepted as-is. Missing ancestors are not
/// created: the parent must already exist.
pub fn create_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let p = path.as_ref();
    match fs::create_dir(p) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => match PathType::of(p) {
            PathType::Directory => Ok(()),
            _ => Err(TreeError::AlreadyExists(p.to_path_buf())),
        },
        Err(e) => Err(TreeError::io(p, e)),
    }
}

/// Create a new regular file at `path` holding exactly `contents`.
///
/// Fails with [`TreeError::AlreadyExists`] if anything is already at `path`.
pub fn create_new_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let p = path.as_ref();
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(p)
        .map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                TreeError::AlreadyExists(p.to_path_buf())
            } else {
                TreeError::io(p, e)
            }
        })?;
    file.write_all(contents.as_bytes())
        .map_err(|e| TreeError::io(p, e))?;
    Ok(())
}
