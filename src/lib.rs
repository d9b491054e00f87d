//! # dotpath
//!
//! Compiler front end for a terse path-expansion grammar. A dotted expression
//! such as `.usr.[tmp|temp].{file}settings` denotes every concrete path formed
//! by picking one alternative per bracketed group; the crate expands it and
//! folds the result into an indented tree.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! error    → Crate-level Error, compile() pipeline
//!   ↓
//! tree     → Prefix tree of paths, indented rendering
//!   ↓
//! expand   → Cartesian product of alternatives (lazy odometer)
//!   ↓
//! parser   → Logos lexer, recursive-descent parser, AST
//! ```
//!
//! Every stage is a pure function of its input. The library logs through
//! `tracing` and never installs a subscriber.

// ============================================================================
// MODULES (dependency order: parser → expand → tree → error)
// ============================================================================

/// Parser: Logos lexer, recursive-descent parser, AST, diagnostics
pub mod parser;

/// Expander: odometer-ordered Cartesian product of node alternatives
pub mod expand;

/// Tree builder and renderer
pub mod tree;

/// Crate-level error and pipeline
pub mod error;

pub use error::{Error, Result, compile, compile_with, parse_str};
pub use expand::{ExpandError, ExpandOptions, Expansion, Path, PathSet, Segment, expand};
pub use parser::{Document, ErrorCode, parse, tokenize};
pub use tree::{
    DisplayLine, RenderOptions, TreeError, TreeNode, TreeSink, build_tree, build_tree_with, render,
    render_text,
};
