//! Tree builder: folds a [`PathSet`] into a prefix tree
//!
//! Paths sharing leading segments share tree nodes. Siblings are unique by
//! name and kept in first-seen order. A name may not appear at the same
//! position with two different type tags.

pub mod render;

pub use render::{DisplayLine, RenderOptions, render, render_text};

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;
use thiserror::Error;

use crate::expand::{Path, PathSet, Segment};
use crate::parser::{ErrorCode, Name};

/// Errors raised while building a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The same name at the same position carries two different tags.
    #[error("conflicting type tags for '{path_prefix}/{name}': existing '{existing}', found '{found}'")]
    ConflictingTypeTag {
        /// Joined names of the ancestors, empty at top level
        path_prefix: String,
        name: Name,
        existing: Name,
        found: Name,
    },
}

impl TreeError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::E0401
    }
}

/// A node of the prefix tree
///
/// The root is synthetic: it has an empty name and no tag.
/// Equality is order-sensitive: siblings must match in first-seen order.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TreeNode {
    name: Name,
    tag: Option<Name>,
    children: IndexMap<Name, TreeNode>,
}

impl TreeNode {
    /// An empty synthetic root
    pub fn root() -> Self {
        Self::default()
    }

    fn from_segment(segment: &Segment) -> Self {
        Self {
            name: segment.name.clone(),
            tag: segment.tag.clone(),
            children: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> Option<&Name> {
        self.tag.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Children in first-seen order
    pub fn children(&self) -> impl ExactSizeIterator<Item = &TreeNode> + '_ {
        self.children.values()
    }

    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.get(name)
    }

    /// Number of nodes below this one
    pub fn descendant_count(&self) -> usize {
        self.children
            .values()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }

    /// Number of leaves below this one, or 1 if this is a leaf
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.children.values().map(TreeNode::leaf_count).sum()
    }

    /// Merge one path into the tree
    ///
    /// Either the whole path is merged or, on a tag conflict, the tree is
    /// left untouched.
    ///
    /// Tags merge as follows: two different tags on the same name conflict,
    /// an untagged segment joins a tagged node unchanged, and a tagged segment
    /// reaching an untagged node sets that node's tag. Setting a missing tag is
    /// the only change made to an existing node.
    pub fn insert(&mut self, path: &Path) -> Result<(), TreeError> {
        self.check(path)?;

        let mut node = self;
        for segment in path {
            node = match node.children.entry(segment.name.clone()) {
                Entry::Occupied(entry) => {
                    let child = entry.into_mut();
                    if child.tag.is_none() {
                        child.tag = segment.tag.clone();
                    }
                    child
                }
                Entry::Vacant(entry) => entry.insert(TreeNode::from_segment(segment)),
            };
        }
        Ok(())
    }

    /// Read-only walk reporting the first tag conflict `path` would cause
    fn check(&self, path: &Path) -> Result<(), TreeError> {
        let mut node = self;
        let mut prefix = String::new();
        for segment in path {
            let Some(child) = node.children.get(&segment.name) else {
                return Ok(());
            };
            if let (Some(existing), Some(found)) = (&child.tag, &segment.tag) {
                if existing != found {
                    return Err(TreeError::ConflictingTypeTag {
                        path_prefix: prefix,
                        name: segment.name.clone(),
                        existing: existing.clone(),
                        found: found.clone(),
                    });
                }
            }
            prefix.push('/');
            prefix.push_str(&segment.name);
            node = child;
        }
        Ok(())
    }
}

impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.tag == other.tag
            && self.children.len() == other.children.len()
            && self.children.iter().eq(other.children.iter())
    }
}

impl Eq for TreeNode {}

/// Renders with [`RenderOptions::default`]
impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_text(self, &RenderOptions::default()))
    }
}

/// Receives paths one at a time while a tree is built
///
/// [`TreeNode`] is the default sink. Other implementations can build their
/// own node types from the same stream of paths.
pub trait TreeSink {
    type Output;

    /// Merge one path; an error stops the build.
    fn insert(&mut self, path: &Path) -> Result<(), TreeError>;

    fn finish(self) -> Self::Output;
}

impl TreeSink for TreeNode {
    type Output = TreeNode;

    fn insert(&mut self, path: &Path) -> Result<(), TreeError> {
        TreeNode::insert(self, path)
    }

    fn finish(self) -> TreeNode {
        self
    }
}

/// Feed every path to `sink` in order, then finish it
pub fn build_tree_with<S: TreeSink>(paths: &PathSet, mut sink: S) -> Result<S::Output, TreeError> {
    for path in paths {
        sink.insert(path)?;
    }
    tracing::debug!(paths = paths.len(), "fed paths to tree sink");
    Ok(sink.finish())
}

/// Fold every path into a tree under a synthetic root
pub fn build_tree(paths: &PathSet) -> Result<TreeNode, TreeError> {
    let root = build_tree_with(paths, TreeNode::root())?;
    tracing::debug!(
        paths = paths.len(),
        nodes = root.descendant_count(),
        "built path tree"
    );
    Ok(root)
}
