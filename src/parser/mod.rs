//! Lexer and recursive-descent parser for the dotted path grammar
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens, terminated by EndOfInput
//!     ↓
//! Parser → Document (Node*)
//! ```

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod errors;
mod lexer;

pub use ast::{Document, Name, Node, NodeExpression, RepeatBlock};
pub use errors::{ErrorCode, LexError, ParseError, ParseErrorKind};
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use parser::parse;

/// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
