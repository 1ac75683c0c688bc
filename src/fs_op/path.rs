use std::path::{Component, Path, PathBuf};

use crate::errors::{Result, TreeError};

/// Resolve an entry path relative to the fixture `root`.
///
/// Behaviour:
/// - A trailing directory marker is dropped before joining.
/// - Empty paths (or paths made only of `.`) are an error.
/// - Absolute paths are an error; they would replace `root` when joined.
/// - Any `..` component is an error, even one that would stay under `root`.
pub fn resolve_entry_path(root: &Path, entry: &str) -> Result<PathBuf> {
    let invalid = |reason| TreeError::InvalidEntry {
        path: entry.to_string(),
        reason,
    };

    let trimmed = entry.trim_end_matches('/');
    if entry.starts_with('/') || Path::new(trimmed).is_absolute() {
        return Err(invalid("absolute paths are not allowed"));
    }

    let mut rel = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => rel.push(part),
            Component::CurDir => {}
            Component::ParentDir => return Err(invalid("`..` is not allowed")),
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid("absolute paths are not allowed"))
            }
        }
    }

    if rel.as_os_str().is_empty() {
        return Err(invalid("empty path"));
    }
    Ok(root.join(rel))
}
