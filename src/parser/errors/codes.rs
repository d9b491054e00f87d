//! Error code definitions for diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid characters)
//! - E02xx: Syntax errors (dots, brackets, type tags)
//! - E03xx: Expansion errors (resource limits)
//! - E04xx: Tree errors (ambiguous merges)

use std::fmt;

/// Error codes for diagnostics
///
/// Each error code represents a specific category of failure,
/// enabling filtering and documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Character outside the grammar's alphabet
    E0101,
    /// Input longer than 32-bit offsets can address
    E0102,

    // =========================================================================
    // E02xx: Syntax errors
    // =========================================================================
    /// Input contains no nodes
    E0201,
    /// Node does not start with `.`
    E0202,
    /// Neither an identifier nor `[` after the node prefix
    E0203,
    /// Unclosed bracket `[`
    E0204,
    /// Missing identifier after `|`
    E0205,
    /// Missing type name inside `{}`
    E0206,
    /// Unclosed type tag `{`
    E0207,
    /// Repeat block with no alternatives
    E0208,

    // =========================================================================
    // E03xx: Expansion errors
    // =========================================================================
    /// Product of alternatives exceeds the configured cap
    E0301,
    /// Product of alternatives does not fit in memory arithmetic
    E0302,

    // =========================================================================
    // E04xx: Tree errors
    // =========================================================================
    /// Same name at the same position with different type tags
    E0401,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            Self::E0206 => "E0206",
            Self::E0207 => "E0207",
            Self::E0208 => "E0208",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0401 => "E0401",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 => "lexical error",
            Self::E0201
            | Self::E0202
            | Self::E0203
            | Self::E0204
            | Self::E0205
            | Self::E0206
            | Self::E0207
            | Self::E0208 => "syntax error",
            Self::E0301 | Self::E0302 => "expansion error",
            Self::E0401 => "tree error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "unexpected character",
            Self::E0102 => "input too large",
            Self::E0201 => "empty document",
            Self::E0202 => "expected '.'",
            Self::E0203 => "expected identifier or '['",
            Self::E0204 => "unclosed bracket",
            Self::E0205 => "expected identifier after '|'",
            Self::E0206 => "expected type name",
            Self::E0207 => "unclosed type tag",
            Self::E0208 => "empty repeat block",
            Self::E0301 => "too many paths",
            Self::E0302 => "path count overflow",
            Self::E0401 => "conflicting type tag",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
