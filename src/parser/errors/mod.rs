//! Parser error handling module
//!
//! - Lexical and syntax error types carrying byte offsets
//! - Categorized error codes shared with the expander and tree builder

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{LexError, ParseError, ParseErrorKind};
