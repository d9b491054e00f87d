//! Lexer and parser error types
//!
//! Both are fail-fast: the first problem ends the operation and is
//! reported with its byte offset into the source.

use text_size::TextSize;
use thiserror::Error;

use super::codes::ErrorCode;

fn offset(position: &TextSize) -> u32 {
    u32::from(*position)
}

/// `: expected X`, unless the kind's own message already says it
fn expectation(kind: &ParseErrorKind, expected: &str) -> String {
    let message = kind.code().default_message();
    match message.strip_prefix("expected ") {
        Some(rest) if rest == expected => String::new(),
        _ => format!(": expected {expected}"),
    }
}

/// Errors raised while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Whitespace or any character outside the grammar's alphabet.
    #[error("unexpected character {found:?} at offset {}", offset(.position))]
    UnexpectedCharacter { position: TextSize, found: char },

    /// Offsets are 32-bit, so inputs of 4 GiB or more are refused.
    #[error("input of {len} bytes is too large to tokenize")]
    InputTooLarge { len: usize },
}

impl LexError {
    pub fn position(&self) -> TextSize {
        match self {
            Self::UnexpectedCharacter { position, .. } => *position,
            Self::InputTooLarge { .. } => TextSize::new(0),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnexpectedCharacter { .. } => ErrorCode::E0101,
            Self::InputTooLarge { .. } => ErrorCode::E0102,
        }
    }
}

/// The grammar rule a [`ParseError`] was raised from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The input holds no nodes at all
    EmptyDocument,
    /// A node did not start with `.`
    ExpectedDot,
    /// After `.` and the optional type, neither an identifier nor `[` followed
    ExpectedIdentifierOrBracket,
    /// A repeat block was not closed with `]`
    UnclosedBracket,
    /// `|` was not followed by an identifier
    ExpectedIdentifierAfterPipe,
    /// `{` was not followed by an identifier
    ExpectedTypeName,
    /// A type name was not closed with `}`
    UnclosedTypeTag,
    /// `[` was followed directly by `]`
    EmptyRepeatBlock,
}

impl ParseErrorKind {
    pub fn code(self) -> ErrorCode {
        match self {
            Self::EmptyDocument => ErrorCode::E0201,
            Self::ExpectedDot => ErrorCode::E0202,
            Self::ExpectedIdentifierOrBracket => ErrorCode::E0203,
            Self::UnclosedBracket => ErrorCode::E0204,
            Self::ExpectedIdentifierAfterPipe => ErrorCode::E0205,
            Self::ExpectedTypeName => ErrorCode::E0206,
            Self::UnclosedTypeTag => ErrorCode::E0207,
            Self::EmptyRepeatBlock => ErrorCode::E0208,
        }
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code().default_message())
    }
}

/// A syntax error with location, expectation and the offending token text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "{kind} at offset {}{}, found {found}",
    offset(.position),
    expectation(.kind, .expected)
)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: TextSize,
    pub expected: &'static str,
    pub found: String,
}

impl ParseError {
    pub fn new(
        kind: ParseErrorKind,
        position: TextSize,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            position,
            expected,
            found: found.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }
}
