use std::path::Path;

/// Lightweight classification of a filesystem path's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// The path does not exist.
    NotFound,
    /// The path exists and is a directory.
    Directory,
    /// The path exists and is a regular file.
    File,
    /// The path exists but is neither a regular file nor a directory.
    Other,
}

impl PathType {
    /// Classify `path` without following a trailing symlink.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::symlink_metadata(path.as_ref()) {
            Err(_) => PathType::NotFound,
            Ok(meta) if meta.is_dir() => PathType::Directory,
            Ok(meta) if meta.is_file() => PathType::File,
            Ok(_) => PathType::Other,
        }
    }

    pub fn exists(self) -> bool {
        self != PathType::NotFound
    }
}
