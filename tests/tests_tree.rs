//! Tree Builder Tests
//!
//! Prefix sharing, sibling order, tag conflicts and rendering.

use dotpath::expand::{Path, PathSet, Segment, expand};
use dotpath::parse_str;
use std::collections::BTreeSet;

use dotpath::tree::{
    RenderOptions, TreeError, TreeNode, TreeSink, build_tree, build_tree_with, render, render_text,
};
use indexmap::IndexSet;

fn tree_for(input: &str) -> TreeNode {
    let doc = parse_str(input).unwrap();
    build_tree(&expand(&doc).unwrap()).unwrap()
}

fn summary(root: &TreeNode) -> Vec<(usize, String, Option<String>)> {
    render(root)
        .into_iter()
        .map(|l| (l.depth, l.name.to_string(), l.tag.map(|t| t.to_string())))
        .collect()
}

fn names_by_depth(root: &TreeNode) -> Vec<BTreeSet<(String, Option<String>)>> {
    let mut levels: Vec<BTreeSet<(String, Option<String>)>> = Vec::new();
    for line in render(root) {
        if levels.len() <= line.depth {
            levels.resize_with(line.depth + 1, BTreeSet::new);
        }
        levels[line.depth].insert((line.path, line.tag.map(|t| t.to_string())));
    }
    levels
}

#[test]
fn test_single_node_tree() {
    let root = tree_for(".usr");
    assert_eq!(root.children().len(), 1);
    let usr = root.child("usr").unwrap();
    assert!(usr.is_leaf());
    assert_eq!(summary(&root), vec![(0, "usr".to_string(), None)]);
}

#[test]
fn test_typed_single_node() {
    let root = tree_for(".{directory}usr");
    assert_eq!(root.child("usr").and_then(|n| n.tag()).map(|t| t.as_str()), Some("directory"));
}

#[test]
fn test_worked_example_tree() {
    let root = tree_for(".usr.[tmp|temp|scratch].rpringle.{file}settings");
    let s = |d: usize, n: &str, t: Option<&str>| (d, n.to_string(), t.map(str::to_string));
    assert_eq!(
        summary(&root),
        vec![
            s(0, "usr", None),
            s(1, "tmp", None),
            s(2, "rpringle", None),
            s(3, "settings", Some("file")),
            s(1, "temp", None),
            s(2, "rpringle", None),
            s(3, "settings", Some("file")),
            s(1, "scratch", None),
            s(2, "rpringle", None),
            s(3, "settings", Some("file")),
        ]
    );
    assert_eq!(root.leaf_count(), 3);
}

#[test]
fn test_leaf_count_never_exceeds_path_count() {
    for input in [".[a|a].b", ".x.[a|b].[c|c|d]", ".usr.tmp.{file}[test|scratch]"] {
        let doc = parse_str(input).unwrap();
        let paths = expand(&doc).unwrap();
        let root = build_tree(&paths).unwrap();
        assert!(root.leaf_count() <= paths.len(), "{input}");
    }
}

#[test]
fn test_permuted_input_builds_same_tree() {
    let doc = parse_str(".{folder}[local|cloud].{user}rpringle.{stage}[home|work].{file}contacts").unwrap();
    let paths = expand(&doc).unwrap();
    let reversed: PathSet = paths.iter().rev().cloned().collect();

    let forward = build_tree(&paths).unwrap();
    let backward = build_tree(&reversed).unwrap();
    assert_eq!(names_by_depth(&forward), names_by_depth(&backward));
    assert_ne!(forward, backward);

    let first: Vec<&str> = backward.children().map(|c| c.name()).collect();
    assert_eq!(first, vec!["cloud", "local"]);
}

#[test]
fn test_conflicting_tags_across_documents() {
    let mut root = tree_for(".usr.{file}notes");
    let other = expand(&parse_str(".usr.{directory}notes.today").unwrap()).unwrap();
    let err = root.insert(&other[0]).unwrap_err();
    assert!(matches!(
        err,
        TreeError::ConflictingTypeTag { ref path_prefix, ref name, .. }
            if path_prefix == "/usr" && name == "notes"
    ));
    assert!(root.child("usr").unwrap().child("notes").unwrap().is_leaf());
}

#[test]
fn test_conflict_fails_whole_build() {
    let paths = PathSet::new(vec![
        Path::new(vec![Segment::tagged("a", "file")]),
        Path::new(vec![Segment::tagged("a", "directory")]),
    ]);
    assert!(build_tree(&paths).is_err());
}

#[test]
fn test_render_text_matches_dump_layout() {
    let root = tree_for(".{folder}[local|cloud].{user}rpringle.{file}contacts");
    let text = render_text(&root, &RenderOptions::default().with_paths(true));
    let expected = "\
local (folder) /local
    rpringle (user) /local/rpringle
        contacts (file) /local/rpringle/contacts
cloud (folder) /cloud
    rpringle (user) /cloud/rpringle
        contacts (file) /cloud/rpringle/contacts
";
    assert_eq!(text, expected);
    assert_eq!(
        root.to_string(),
        "local (folder)\n    rpringle (user)\n        contacts (file)\ncloud (folder)\n    rpringle (user)\n        contacts (file)\n"
    );
}

/// Records each newly seen prefix, the way a caller-supplied node type would
#[derive(Default)]
struct PrefixListing {
    prefixes: IndexSet<String>,
}

impl TreeSink for PrefixListing {
    type Output = Vec<String>;

    fn insert(&mut self, path: &Path) -> Result<(), TreeError> {
        let mut prefix = String::new();
        for segment in path {
            prefix.push('/');
            prefix.push_str(&segment.name);
            self.prefixes.insert(prefix.clone());
        }
        Ok(())
    }

    fn finish(self) -> Vec<String> {
        self.prefixes.into_iter().collect()
    }
}

#[test]
fn test_custom_sink_sees_paths_in_order() {
    let doc = parse_str(".usr.[tmp|temp].{file}settings").unwrap();
    let paths = expand(&doc).unwrap();

    let listing = build_tree_with(&paths, PrefixListing::default()).unwrap();
    let rendered: Vec<String> = render(&build_tree(&paths).unwrap())
        .into_iter()
        .map(|l| l.path)
        .collect();
    assert_eq!(listing, rendered);
    assert_eq!(
        listing,
        vec!["/usr", "/usr/tmp", "/usr/tmp/settings", "/usr/temp", "/usr/temp/settings"]
    );
}

#[test]
fn test_default_sink_matches_build_tree() {
    let doc = parse_str(".[a|b].{file}[c|d]").unwrap();
    let paths = expand(&doc).unwrap();
    assert_eq!(
        build_tree_with(&paths, TreeNode::root()).unwrap(),
        build_tree(&paths).unwrap()
    );
}
