//! Recursive descent parser for the dotted path grammar
//!
//! ```text
//! document        := node+
//! node            := '.' node_expression
//! node_expression := type? (identifier | repeat_block)
//! type            := '{' identifier '}'
//! repeat_block    := '[' identifier repeat_item* ']'
//! repeat_item     := '|' identifier
//! ```
//!
//! The grammar is LL(1): every decision is made on the current token alone,
//! so the parser never backtracks. It stops at the first error.

use super::ast::{Document, Name, Node, NodeExpression, RepeatBlock};
use super::errors::{ParseError, ParseErrorKind};
use super::lexer::{Token, TokenKind};
use text_size::{TextRange, TextSize};

/// Parse a token sequence into a [`Document`]
///
/// The sequence normally ends with `EndOfInput`, as produced by
/// [`tokenize`](super::tokenize); a missing sentinel is treated as end of input.
pub fn parse(tokens: &[Token<'_>]) -> Result<Document, ParseError> {
    let mut parser = Parser::new(tokens);
    let document = parser.parse_document()?;
    tracing::debug!(nodes = document.len(), "parsed document");
    Ok(document)
}

type PResult<T> = Result<T, ParseError>;

/// The parser state
struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    /// End offset of the last consumed token
    last_end: TextSize,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn new(tokens: &'t [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            last_end: TextSize::new(0),
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Token<'a> {
        self.tokens.get(self.pos).copied().unwrap_or(Token {
            kind: TokenKind::EndOfInput,
            text: "",
            offset: self.last_end,
        })
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn at_eoi(&self) -> bool {
        self.at(TokenKind::EndOfInput)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) -> Token<'a> {
        let token = self.current();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        self.last_end = token.range().end();
        token
    }

    fn eat(&mut self, kind: TokenKind) -> Option<Token<'a>> {
        if self.at(kind) { Some(self.bump()) } else { None }
    }

    fn expect(
        &mut self,
        kind: TokenKind,
        error: ParseErrorKind,
        expected: &'static str,
    ) -> PResult<Token<'a>> {
        match self.eat(kind) {
            Some(token) => Ok(token),
            None => Err(self.error(error, expected)),
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&self, kind: ParseErrorKind, expected: &'static str) -> ParseError {
        let token = self.current();
        let found = match token.kind {
            TokenKind::EndOfInput => TokenKind::EndOfInput.display_name().to_string(),
            _ => token.text.to_string(),
        };
        ParseError::new(kind, token.offset, expected, found)
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// document = node+
    fn parse_document(&mut self) -> PResult<Document> {
        if self.at_eoi() {
            return Err(self.error(ParseErrorKind::EmptyDocument, "'.'"));
        }

        let mut nodes = Vec::new();
        while !self.at_eoi() {
            nodes.push(self.parse_node()?);
        }

        Document::new(nodes).ok_or_else(|| self.error(ParseErrorKind::EmptyDocument, "'.'"))
    }

    /// node = '.' node_expression
    fn parse_node(&mut self) -> PResult<Node> {
        let dot = self.expect(TokenKind::Dot, ParseErrorKind::ExpectedDot, "'.'")?;
        let expr = self.parse_node_expression()?;
        let range = TextRange::new(dot.offset, self.last_end);
        Ok(Node::new(expr, range))
    }

    /// node_expression = type? (identifier | repeat_block)
    fn parse_node_expression(&mut self) -> PResult<NodeExpression> {
        let tag = if self.at(TokenKind::OpenBrace) {
            Some(self.parse_type()?)
        } else {
            None
        };

        match self.current().kind {
            TokenKind::Identifier => {
                let name = Name::new(self.bump().text);
                Ok(match tag {
                    Some(tag) => NodeExpression::TypedPlain { tag, name },
                    None => NodeExpression::Plain(name),
                })
            }
            TokenKind::OpenBracket => {
                let block = self.parse_repeat_block()?;
                Ok(match tag {
                    Some(tag) => NodeExpression::TypedRepeat { tag, block },
                    None => NodeExpression::Repeat(block),
                })
            }
            _ => Err(self.error(
                ParseErrorKind::ExpectedIdentifierOrBracket,
                "identifier or '['",
            )),
        }
    }

    /// type = '{' identifier '}'
    fn parse_type(&mut self) -> PResult<Name> {
        self.bump(); // '{'
        let name = self.expect(
            TokenKind::Identifier,
            ParseErrorKind::ExpectedTypeName,
            "type name",
        )?;
        self.expect(TokenKind::CloseBrace, ParseErrorKind::UnclosedTypeTag, "'}'")?;
        Ok(Name::new(name.text))
    }

    /// repeat_block = '[' identifier ('|' identifier)* ']'
    fn parse_repeat_block(&mut self) -> PResult<RepeatBlock> {
        self.bump(); // '['

        let first = match self.current().kind {
            TokenKind::Identifier => self.bump(),
            TokenKind::CloseBracket => {
                return Err(self.error(ParseErrorKind::EmptyRepeatBlock, "identifier"));
            }
            TokenKind::EndOfInput => {
                return Err(self.error(ParseErrorKind::UnclosedBracket, "identifier"));
            }
            _ => {
                return Err(self.error(ParseErrorKind::ExpectedIdentifierOrBracket, "identifier"));
            }
        };
        let mut block = RepeatBlock::new(first.text);

        loop {
            if self.eat(TokenKind::Pipe).is_some() {
                let item = self.expect(
                    TokenKind::Identifier,
                    ParseErrorKind::ExpectedIdentifierAfterPipe,
                    "identifier",
                )?;
                block.push(item.text);
            } else if self.eat(TokenKind::CloseBracket).is_some() {
                return Ok(block);
            } else {
                return Err(self.error(ParseErrorKind::UnclosedBracket, "'|' or ']'"));
            }
        }
    }
}
