#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use filetree::Entry;

/// Everything under `root`, keyed by `/`-separated relative path.
///
/// Directories get a trailing `/` and no contents, matching how entries
/// describe them.
pub fn snapshot(root: &Path) -> BTreeMap<String, Option<String>> {
    let mut out = BTreeMap::new();
    for item in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let item = item.expect("walk fixture root");
        let rel = item
            .path()
            .strip_prefix(root)
            .expect("entry under root")
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        if item.file_type().is_dir() {
            out.insert(format!("{rel}/"), None);
        } else {
            let text = fs::read_to_string(item.path()).expect("read fixture file");
            out.insert(rel, Some(text));
        }
    }
    out
}

/// What [`snapshot`] should return after building `entries`.
pub fn expected(entries: &[Entry]) -> BTreeMap<String, Option<String>> {
    entries
        .iter()
        .map(|e| (e.path.clone(), e.payload.clone()))
        .collect()
}

/// Names directly inside `dir`, sorted.
pub fn dir_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
