//! Crate-level error and the end-to-end pipeline
//!
//! `compile` runs every stage in order and stops at the first failure.

use thiserror::Error;

use crate::expand::{ExpandError, ExpandOptions, expand_with};
use crate::parser::{Document, ErrorCode, LexError, ParseError, parse, tokenize};
use crate::tree::{TreeError, TreeNode, build_tree};

/// Any error the pipeline can raise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Expand(#[from] ExpandError),

    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Lex(e) => e.code(),
            Self::Parse(e) => e.code(),
            Self::Expand(e) => e.code(),
            Self::Tree(e) => e.code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Tokenize and parse source text
pub fn parse_str(input: &str) -> Result<Document> {
    let tokens = tokenize(input)?;
    Ok(parse(&tokens)?)
}

/// Tokenize, parse, expand and build the tree for `input`
pub fn compile(input: &str) -> Result<TreeNode> {
    compile_with(input, &ExpandOptions::default())
}

/// [`compile`] with expansion limits
pub fn compile_with(input: &str, options: &ExpandOptions) -> Result<TreeNode> {
    let document = parse_str(input)?;
    let paths = expand_with(&document, options)?;
    Ok(build_tree(&paths)?)
}
