//! Logos-based lexer for the dotted path grammar
//!
//! The grammar has no trivia: whitespace and every character outside
//! `[A-Za-z0-9.{}\[\]|]` is an error.

use super::errors::LexError;
use logos::Logos;
use text_size::{TextRange, TextSize};

/// Token kinds produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Dot,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Pipe,
    /// Sentinel emitted once after the last real token
    EndOfInput,
    /// A character the grammar does not allow
    Error,
}

impl TokenKind {
    /// Human-readable name used in diagnostics
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Dot => "'.'",
            Self::OpenBrace => "'{'",
            Self::CloseBrace => "'}'",
            Self::OpenBracket => "'['",
            Self::CloseBracket => "']'",
            Self::Pipe => "'|'",
            Self::EndOfInput => "end of input",
            Self::Error => "invalid character",
        }
    }
}

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }

    pub fn is_eoi(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

/// Lexer wrapping the logos-generated tokenizer
///
/// Yields every token, including `Error` tokens for rejected characters,
/// and ends with exactly one `EndOfInput`.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    input_len: TextSize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Offsets saturate at `u32::MAX` for inputs of 4 GiB or more;
    /// [`tokenize`] rejects such inputs up front.
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            input_len: saturating_offset(input.len()),
            finished: false,
        }
    }
}

fn saturating_offset(offset: usize) -> TextSize {
    TextSize::new(u32::try_from(offset).unwrap_or(u32::MAX))
}

/// Length of the input as a `TextSize`, if every offset fits in 32 bits
fn checked_len(len: usize) -> Result<TextSize, LexError> {
    u32::try_from(len)
        .map(TextSize::new)
        .map_err(|_| LexError::InputTooLarge { len })
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(result) = self.inner.next() else {
            self.finished = true;
            return Some(Token {
                kind: TokenKind::EndOfInput,
                text: "",
                offset: self.input_len,
            });
        };

        let text = self.inner.slice();
        let offset = saturating_offset(self.inner.span().start);
        let kind = match result {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };

        tracing::trace!(?kind, text, offset = u32::from(offset), "token");
        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string, failing on the first rejected character
///
/// On success the last element is always the `EndOfInput` sentinel.
/// Inputs of 4 GiB or more fail with [`LexError::InputTooLarge`].
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    checked_len(input.len())?;
    let mut tokens = Vec::new();
    for token in Lexer::new(input) {
        if token.kind == TokenKind::Error {
            let found = token.text.chars().next().unwrap_or('\u{FFFD}');
            return Err(LexError::UnexpectedCharacter {
                position: token.offset,
                found,
            });
        }
        tokens.push(token);
    }
    Ok(tokens)
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    #[regex(r"[A-Za-z0-9]+")]
    Identifier,

    #[token(".")]
    Dot,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("|")]
    Pipe,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Identifier => TokenKind::Identifier,
            LogosToken::Dot => TokenKind::Dot,
            LogosToken::OpenBrace => TokenKind::OpenBrace,
            LogosToken::CloseBrace => TokenKind::CloseBrace,
            LogosToken::OpenBracket => TokenKind::OpenBracket,
            LogosToken::CloseBracket => TokenKind::CloseBracket,
            LogosToken::Pipe => TokenKind::Pipe,
        }
    }
}
