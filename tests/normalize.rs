mod common;

use std::collections::BTreeSet;

use proptest::prelude::*;

use filetree::shape::{creation_ordered, DIR_MARKER};
use filetree::{normalize_entry, normalize_shape, Entry, FileTree, RawEntry};

#[test]
fn normalize_entry_forms() {
    assert_eq!(
        normalize_entry("foo".into()),
        Entry::file("foo", "The file 'foo'.")
    );
    assert_eq!(normalize_entry("foo/".into()), Entry::dir("foo/"));
    assert_eq!(normalize_entry(("foo/",).into()), Entry::dir("foo/"));
    assert_eq!(
        normalize_entry(("foo", "foo contents").into()),
        Entry::file("foo", "foo contents")
    );
    assert_eq!(normalize_entry(("foo/", None).into()), Entry::dir("foo/"));
}

#[test]
fn normalize_shape_sorts_parents_first() {
    assert_eq!(normalize_shape(&[]), Vec::<Entry>::new());
    assert_eq!(
        normalize_shape(&["a/b/".into(), "a/".into()]),
        vec![Entry::dir("a/"), Entry::dir("a/b/")]
    );
}

/// One of the four surface forms for a directory or a file.
fn raw_form(path: String, is_dir: bool, contents: Option<String>, style: u8) -> RawEntry {
    match (is_dir, style % 3, contents) {
        (true, 0, _) => RawEntry::Path(format!("{path}{DIR_MARKER}")),
        (true, 1, _) => RawEntry::Dir(format!("{path}{DIR_MARKER}")),
        (true, _, _) => RawEntry::Pair(format!("{path}{DIR_MARKER}"), None),
        (false, _, None) => RawEntry::Path(path),
        (false, _, Some(text)) => RawEntry::Pair(path, Some(text)),
    }
}

/// A consistent tree: every ancestor directory is listed, and no path is
/// both a file and a directory. Directory segments start with `d`, file
/// names with `f`, so they never collide.
fn tree_shape() -> impl Strategy<Value = Vec<RawEntry>> {
    let dirs = prop::collection::vec(prop::collection::vec("d[a-c]", 1..4), 0..6);
    let files = prop::collection::vec(
        (
            prop::collection::vec("d[a-c]", 0..3),
            "f[a-c]{1,2}",
            prop::option::of("[ -~]{0,12}"),
        ),
        0..6,
    );
    (dirs, files, any::<u64>()).prop_map(|(dirs, files, styles)| {
        let mut dir_set = BTreeSet::new();
        for segs in dirs.iter().chain(files.iter().map(|(segs, _, _)| segs)) {
            for depth in 1..=segs.len() {
                dir_set.insert(segs[..depth].join("/"));
            }
        }
        let mut seen_files = BTreeSet::new();
        let mut shape = Vec::new();
        for (i, dir) in dir_set.into_iter().enumerate() {
            shape.push(raw_form(dir, true, None, (styles >> (i % 60)) as u8));
        }
        for (segs, name, contents) in files {
            let path = segs
                .iter()
                .cloned()
                .chain(std::iter::once(name))
                .collect::<Vec<_>>()
                .join("/");
            if seen_files.insert(path.clone()) {
                shape.push(raw_form(path, false, contents, 0));
            }
        }
        shape
    })
}

/// Arbitrary paths, consistent or not, for the pure properties. Segments
/// include `.` and `-`, which sort before the marker.
fn loose_shape() -> impl Strategy<Value = Vec<RawEntry>> {
    prop::collection::vec(
        (
            prop::collection::vec("[a-c.-]{1,3}", 1..4).prop_map(|segs| segs.join("/")),
            any::<bool>(),
            prop::option::of("[a-z]{0,4}"),
            any::<u8>(),
        )
            .prop_map(|(path, is_dir, contents, style)| raw_form(path, is_dir, contents, style)),
        0..10,
    )
}

proptest! {
    #[test]
    fn normalized_shapes_are_sorted_and_canonical(shape in loose_shape()) {
        let entries = normalize_shape(&shape);
        prop_assert_eq!(entries.len(), shape.len());
        prop_assert!(entries.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(entries.windows(2).all(|w| w[0].path <= w[1].path));
        prop_assert!(creation_ordered(&entries));
        for (raw, entry) in shape.iter().zip(shape.iter().cloned().map(normalize_entry)) {
            if !matches!(raw, RawEntry::Pair(..)) {
                prop_assert_eq!(entry.is_dir(), entry.path.ends_with(DIR_MARKER));
            }
        }
    }

    #[test]
    fn normalize_entry_is_idempotent(shape in loose_shape()) {
        for raw in shape {
            let once = normalize_entry(raw);
            prop_assert_eq!(normalize_entry(once.clone().into()), once);
        }
    }

    #[test]
    fn order_of_the_shape_does_not_matter(
        (shape, shuffled) in tree_shape().prop_flat_map(|s| (Just(s.clone()), Just(s).prop_shuffle()))
    ) {
        prop_assert_eq!(normalize_shape(&shape), normalize_shape(&shuffled));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn set_up_builds_exactly_the_shape(
        shape in tree_shape().prop_flat_map(|s| Just(s).prop_shuffle())
    ) {
        let mut tree = FileTree::new(shape);
        let root = tree.set_up().expect("consistent shape builds").to_path_buf();
        prop_assert_eq!(common::snapshot(&root), common::expected(tree.entries()));
        tree.clean_up().expect("clean up");
        prop_assert!(!root.exists());
    }
}
