//! Shape normalization.
//!
//! A shape is the loose, caller-facing description of a tree: a list of
//! paths, optionally paired with file contents, in any order. Normalizing it
//! produces canonical [`Entry`] values sorted so that every directory comes
//! before anything inside it, which is the order the fixture creates them in.

use std::fmt;

/// Trailing marker that turns a path string into a directory entry.
pub const DIR_MARKER: char = '/';

/// One element of a caller-supplied shape.
///
/// Usually built through one of the `From` conversions:
///
/// ```
/// use filetree::shape::RawEntry;
///
/// let shape: Vec<RawEntry> = vec![
///     "notes.txt".into(),            // file with generated contents
///     "data/".into(),                // directory
///     ("logs/",).into(),             // directory, 1-tuple form
///     ("data/a.csv", "1,2").into(),  // file with explicit contents
///     ("cache/", None).into(),       // directory, 2-tuple form
/// ];
/// assert_eq!(shape.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEntry {
    /// A bare path. A trailing [`DIR_MARKER`] makes it a directory.
    Path(String),
    /// The `(dirpath,)` shorthand for a directory.
    Dir(String),
    /// An explicit `(path, contents)` pair; `None` means directory.
    Pair(String, Option<String>),
}

/// A canonical `(path, payload)` pair, ready to be created on disk.
///
/// `payload` is `None` for directories. Entries order by path first, so a
/// sorted list of entries creates parents before children.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entry {
    pub path: String,
    pub payload: Option<String>,
}

impl Entry {
    pub fn file(path: impl Into<String>, contents: impl Into<String>) -> Self {
        Entry {
            path: path.into(),
            payload: Some(contents.into()),
        }
    }

    pub fn dir(path: impl Into<String>) -> Self {
        Entry {
            path: path.into(),
            payload: None,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.payload.is_none()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            None => write!(f, "({:?}, None)", self.path),
            Some(text) => write!(f, "({:?}, {:?})", self.path, text),
        }
    }
}

impl From<&str> for RawEntry {
    fn from(path: &str) -> Self {
        RawEntry::Path(path.to_string())
    }
}

impl From<String> for RawEntry {
    fn from(path: String) -> Self {
        RawEntry::Path(path)
    }
}

impl From<(&str,)> for RawEntry {
    fn from((path,): (&str,)) -> Self {
        RawEntry::Dir(path.to_string())
    }
}

impl From<(String,)> for RawEntry {
    fn from((path,): (String,)) -> Self {
        RawEntry::Dir(path)
    }
}

impl From<(&str, &str)> for RawEntry {
    fn from((path, contents): (&str, &str)) -> Self {
        RawEntry::Pair(path.to_string(), Some(contents.to_string()))
    }
}

impl From<(&str, Option<&str>)> for RawEntry {
    fn from((path, contents): (&str, Option<&str>)) -> Self {
        RawEntry::Pair(path.to_string(), contents.map(str::to_string))
    }
}

impl From<(String, String)> for RawEntry {
    fn from((path, contents): (String, String)) -> Self {
        RawEntry::Pair(path, Some(contents))
    }
}

impl From<(String, Option<String>)> for RawEntry {
    fn from((path, contents): (String, Option<String>)) -> Self {
        RawEntry::Pair(path, contents)
    }
}

impl From<Entry> for RawEntry {
    fn from(entry: Entry) -> Self {
        RawEntry::Pair(entry.path, entry.payload)
    }
}

/// Contents written to a file that was listed without any.
pub fn default_contents(path: &str) -> String {
    format!("The file '{path}'.")
}

/// Turn one raw entry into its canonical form.
pub fn normalize_entry(raw: RawEntry) -> Entry {
    match raw {
        RawEntry::Path(path) if path.ends_with(DIR_MARKER) => Entry::dir(path),
        RawEntry::Path(path) => {
            let contents = default_contents(&path);
            Entry::file(path, contents)
        }
        RawEntry::Dir(path) => Entry::dir(path),
        RawEntry::Pair(path, payload) => Entry { path, payload },
    }
}

/// Normalize every entry of `shape` and sort the result.
///
/// The input is left untouched. The output is [`creation_ordered`].
pub fn normalize_shape(shape: &[RawEntry]) -> Vec<Entry> {
    let mut entries: Vec<Entry> = shape.iter().cloned().map(normalize_entry).collect();
    entries.sort();
    entries
}

/// Return `true` if no entry in `entries` comes after one of its own
/// descendants.
///
/// Sorting by path guarantees this because `d/` is a strict prefix of every
/// path inside `d`, and a prefix always sorts first. The check is kept
/// separate so that a change of marker or ordering fails loudly instead of
/// producing "No such file or directory" halfway through a build.
pub fn creation_ordered(entries: &[Entry]) -> bool {
    entries.iter().enumerate().all(|(i, later)| {
        let dir = later.path.trim_end_matches(DIR_MARKER);
        !entries[..i].iter().any(|earlier| {
            earlier
                .path
                .strip_prefix(dir)
                .is_some_and(|rest| rest.starts_with(DIR_MARKER) && rest.len() > 1)
        })
    })
}
