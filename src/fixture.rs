//! The file tree fixture.
//!
//! [`FileTree`] holds a shape until it is set up, then owns a fresh
//! temporary directory populated from that shape until it is cleaned up or
//! dropped.
//!
//! ```
//! use filetree::FileTree;
//!
//! # fn main() -> Result<(), filetree::TreeError> {
//! let tree = FileTree::enter(["data/", "data/input.csv"])?;
//! let csv = tree.join("data/input.csv").unwrap();
//! assert_eq!(std::fs::read_to_string(csv).unwrap(), "The file 'data/input.csv'.");
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::config::TreeConfig;
use crate::errors::{Result, TreeError};
use crate::fs_op::{create_dir, create_new_file, remove_path, resolve_entry_path};
use crate::shape::{creation_ordered, normalize_shape, Entry, RawEntry, DIR_MARKER};

/// Lifecycle of a [`FileTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeState {
    /// Constructed; nothing exists on disk and there is no root path.
    Uninitialized,
    /// Set up; the root directory exists.
    Active,
    /// Cleaned up. Terminal.
    Deactivated,
}

impl fmt::Display for TreeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TreeState::Uninitialized => "uninitialized",
            TreeState::Active => "active",
            TreeState::Deactivated => "deactivated",
        };
        f.write_str(s)
    }
}

/// A temporary directory tree built from a declarative shape.
///
/// Dropping an active tree removes it, so a panicking test still cleans up.
#[derive(Debug)]
pub struct FileTree {
    shape: Vec<RawEntry>,
    config: TreeConfig,
    state: TreeState,
    root: Option<PathBuf>,
    entries: Vec<Entry>,
}

impl Default for FileTree {
    fn default() -> Self {
        Self::with_config(Vec::<RawEntry>::new(), TreeConfig::default())
    }
}

impl FileTree {
    /// Store `shape` for later. Nothing touches the filesystem yet.
    pub fn new<I, E>(shape: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<RawEntry>,
    {
        Self::with_config(shape, TreeConfig::default())
    }

    pub fn with_config<I, E>(shape: I, config: TreeConfig) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<RawEntry>,
    {
        FileTree {
            shape: shape.into_iter().map(Into::into).collect(),
            config,
            state: TreeState::Uninitialized,
            root: None,
            entries: Vec::new(),
        }
    }

    /// Build the tree and return it already set up.
    ///
    /// If building fails partway, whatever was created is removed before the
    /// error is returned.
    pub fn enter<I, E>(shape: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<RawEntry>,
    {
        let mut tree = Self::new(shape);
        tree.set_up()?;
        Ok(tree)
    }

    /// Build the tree, run `f` with its root, then remove it.
    ///
    /// Removal also happens if `f` panics.
    pub fn scoped<I, E, F, R>(shape: I, f: F) -> Result<R>
    where
        I: IntoIterator<Item = E>,
        E: Into<RawEntry>,
        F: FnOnce(&Path) -> R,
    {
        let mut tree = Self::new(shape);
        let out = f(tree.set_up()?);
        tree.clean_up()?;
        Ok(out)
    }

    /// Allocate the root directory and create every entry of the shape in it.
    ///
    /// Entries are created in normalized order. The first failure is returned
    /// as-is; entries created before it are left in place and the tree stays
    /// active, so [`clean_up`](Self::clean_up) (or drop) removes them.
    pub fn set_up(&mut self) -> Result<&Path> {
        if self.state != TreeState::Uninitialized {
            return Err(TreeError::InvalidState {
                op: "set up",
                state: self.state,
            });
        }

        let entries = normalize_shape(&self.shape);
        debug_assert!(
            creation_ordered(&entries),
            "normalized shape lists a child before its parent"
        );

        let parent = self.config.parent_dir();
        let root = tempfile::Builder::new()
            .prefix(&self.config.prefix)
            .tempdir_in(&parent)
            .map_err(|e| TreeError::io(&parent, e))?
            .keep();
        debug!(root = %root.display(), entries = entries.len(), "setting up file tree");

        self.state = TreeState::Active;
        self.entries = entries;
        let root: &Path = self.root.insert(root);

        for entry in &self.entries {
            create_entry(root, entry)?;
        }
        Ok(root)
    }

    /// Remove the root directory and everything under it.
    ///
    /// Does nothing unless the tree is active, so calling it twice, or on a
    /// tree that was never set up, is fine. A root that has already vanished
    /// counts as removed.
    pub fn clean_up(&mut self) -> Result<()> {
        if self.state != TreeState::Active {
            return Ok(());
        }
        if let Some(root) = &self.root {
            remove_path(root)?;
            debug!(root = %root.display(), "cleaned up file tree");
        }
        self.root = None;
        self.state = TreeState::Deactivated;
        Ok(())
    }

    /// Root directory of the tree. `None` unless the tree is active.
    pub fn path(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// `rel` resolved against the root. `None` unless the tree is active.
    pub fn join<P: AsRef<Path>>(&self, rel: P) -> Option<PathBuf> {
        self.path().map(|root| root.join(rel))
    }

    pub fn state(&self) -> TreeState {
        self.state
    }

    /// The shape exactly as it was given.
    pub fn shape(&self) -> &[RawEntry] {
        &self.shape
    }

    /// Normalized entries, in creation order. Empty until set up.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }
}

impl Drop for FileTree {
    fn drop(&mut self) {
        if let Err(e) = self.clean_up() {
            warn!("failed to clean up file tree: {e}");
        }
    }
}

fn create_entry(root: &Path, entry: &Entry) -> Result<()> {
    let target = resolve_entry_path(root, &entry.path)?;
    match &entry.payload {
        None => create_dir(&target)?,
        Some(_) if entry.path.ends_with(DIR_MARKER) => {
            return Err(TreeError::InvalidEntry {
                path: entry.path.clone(),
                reason: "file contents given for a directory path",
            })
        }
        Some(contents) => create_new_file(&target, contents)?,
    }
    trace!(path = %entry.path, dir = entry.is_dir(), "created entry");
    Ok(())
}
