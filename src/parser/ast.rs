//! Typed AST for the dotted path grammar
//!
//! ```text
//! Document
//!   └── Node*            one per `.` segment
//!         └── NodeExpression
//!               ├── Plain(name)
//!               ├── Repeat([a|b|c])
//!               ├── TypedPlain({tag} name)
//!               └── TypedRepeat({tag} [a|b|c])
//! ```
//!
//! All types are built once by the parser and read-only afterwards.

use std::fmt;

use smol_str::SmolStr;
use text_size::TextRange;

/// Identifier text. Never empty.
pub type Name = SmolStr;

/// Bracketed alternatives of a node, in declared order
///
/// Always holds at least one alternative. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepeatBlock {
    alternatives: Vec<Name>,
}

impl RepeatBlock {
    pub fn new(first: impl Into<Name>) -> Self {
        Self {
            alternatives: vec![first.into()],
        }
    }

    /// Build from a list of alternatives; `None` if the list is empty.
    pub fn from_alternatives<I, S>(alternatives: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Name>,
    {
        let alternatives: Vec<Name> = alternatives.into_iter().map(Into::into).collect();
        if alternatives.is_empty() {
            None
        } else {
            Some(Self { alternatives })
        }
    }

    pub fn push(&mut self, alternative: impl Into<Name>) {
        self.alternatives.push(alternative.into());
    }

    pub fn alternatives(&self) -> &[Name] {
        &self.alternatives
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl fmt::Display for RepeatBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, alt) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            f.write_str(alt)?;
        }
        f.write_str("]")
    }
}

/// The body of a node after its leading `.`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeExpression {
    Plain(Name),
    Repeat(RepeatBlock),
    TypedPlain { tag: Name, name: Name },
    TypedRepeat { tag: Name, block: RepeatBlock },
}

impl NodeExpression {
    /// The `{tag}` prefix, if any
    pub fn tag(&self) -> Option<&Name> {
        match self {
            Self::Plain(_) | Self::Repeat(_) => None,
            Self::TypedPlain { tag, .. } | Self::TypedRepeat { tag, .. } => Some(tag),
        }
    }

    /// The names this node may take, in declared order
    ///
    /// A singleton for plain nodes, the bracketed list for repeat nodes.
    pub fn alternatives(&self) -> &[Name] {
        match self {
            Self::Plain(name) | Self::TypedPlain { name, .. } => std::slice::from_ref(name),
            Self::Repeat(block) | Self::TypedRepeat { block, .. } => block.alternatives(),
        }
    }

    pub fn is_repeat(&self) -> bool {
        matches!(self, Self::Repeat(_) | Self::TypedRepeat { .. })
    }
}

impl fmt::Display for NodeExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = self.tag() {
            write!(f, "{{{tag}}}")?;
        }
        match self {
            Self::Plain(name) | Self::TypedPlain { name, .. } => f.write_str(name),
            Self::Repeat(block) | Self::TypedRepeat { block, .. } => write!(f, "{block}"),
        }
    }
}

/// One `.`-prefixed segment of the source
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    pub expr: NodeExpression,
    /// Source range from the `.` to the end of the expression
    pub range: TextRange,
}

impl Node {
    pub fn new(expr: NodeExpression, range: TextRange) -> Self {
        Self { expr, range }
    }

    pub fn tag(&self) -> Option<&Name> {
        self.expr.tag()
    }

    pub fn alternatives(&self) -> &[Name] {
        self.expr.alternatives()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.expr)
    }
}

/// A parsed expression: one or more nodes in source order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// `None` if `nodes` is empty.
    pub fn new(nodes: Vec<Node>) -> Option<Self> {
        if nodes.is_empty() {
            None
        } else {
            Some(Self { nodes })
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; a document holds at least one node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Re-emits canonical source text
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            write!(f, "{node}")?;
        }
        Ok(())
    }
}
