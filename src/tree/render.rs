//! Indented rendering of a [`TreeNode`]
//!
//! A pre-order walk in child insertion order. Top-level nodes are at depth 0;
//! the synthetic root is never emitted.

use std::fmt::Write;

use super::TreeNode;
use crate::parser::Name;

/// One rendered line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DisplayLine {
    pub depth: usize,
    pub name: Name,
    pub tag: Option<Name>,
    /// Names from the top level down to this node, each preceded by the separator
    pub path: String,
}

/// Controls [`render_text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per depth level
    pub indent: usize,
    /// Print `(tag)` after tagged names
    pub show_tags: bool,
    /// Print the full path after each name
    pub show_paths: bool,
    /// Separator used when building paths
    pub separator: char,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            show_tags: true,
            show_paths: false,
            separator: '/',
        }
    }
}

impl RenderOptions {
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_tags(mut self, show_tags: bool) -> Self {
        self.show_tags = show_tags;
        self
    }

    pub fn with_paths(mut self, show_paths: bool) -> Self {
        self.show_paths = show_paths;
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

/// Flatten the tree into display lines, using `/` in paths
pub fn render(root: &TreeNode) -> Vec<DisplayLine> {
    lines(root, '/')
}

fn lines(root: &TreeNode, separator: char) -> Vec<DisplayLine> {
    let mut out = Vec::with_capacity(root.descendant_count());
    for child in root.children() {
        walk(child, 0, "", separator, &mut out);
    }
    out
}

fn walk(node: &TreeNode, depth: usize, prefix: &str, separator: char, out: &mut Vec<DisplayLine>) {
    let path = format!("{prefix}{separator}{}", node.name());
    out.push(DisplayLine {
        depth,
        name: Name::new(node.name()),
        tag: node.tag().cloned(),
        path: path.clone(),
    });
    for child in node.children() {
        walk(child, depth + 1, &path, separator, out);
    }
}

/// Render the tree as indented text, one node per line
pub fn render_text(root: &TreeNode, options: &RenderOptions) -> String {
    let mut text = String::new();
    for line in lines(root, options.separator) {
        let pad = line.depth * options.indent;
        let _ = write!(text, "{:pad$}{}", "", line.name);
        if options.show_tags {
            if let Some(tag) = &line.tag {
                let _ = write!(text, " ({tag})");
            }
        }
        if options.show_paths {
            let _ = write!(text, " {}", line.path);
        }
        text.push('\n');
    }
    text
}
