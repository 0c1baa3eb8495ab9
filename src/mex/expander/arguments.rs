//! Token cursor and brace-balanced argument reading
//!
//! Each recursive expansion call owns a `TokenCursor` over the text slice
//! it was given. The argument reader consumes one `{...}` group from the
//! cursor: depth is tracked on `OpenBrace`/`CloseBrace` tokens only, so an
//! escaped brace (`\{` or `\}`, one `EscapedSpecial` token) never affects
//! depth and stays verbatim inside the returned text. The closing brace
//! that returns depth to zero is consumed but excluded.
//!
//! Whitespace before the `{` is never skipped: the brace must immediately
//! follow the directive name, uniformly for builtins and user macros.

use crate::mex::error::ExpandError;
use crate::mex::lexer::{scan_with_spans, Token};

/// A read position within one immutable input slice, advanced token by
/// token.
pub struct TokenCursor<'a> {
    source: &'a str,
    tokens: Vec<(Token, logos::Span)>,
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        TokenCursor {
            source,
            tokens: scan_with_spans(source),
            pos: 0,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The next token, without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    /// Consume and return the next token with its span.
    pub fn next(&mut self) -> Option<(Token, logos::Span)> {
        let entry = self.tokens.get(self.pos)?.clone();
        self.pos += 1;
        Some(entry)
    }

    /// Consume the next token only if it equals `expected`, returning its
    /// span.
    pub fn eat(&mut self, expected: &Token) -> Option<logos::Span> {
        match self.tokens.get(self.pos) {
            Some((token, span)) if token == expected => {
                let span = span.clone();
                self.pos += 1;
                Some(span)
            }
            _ => None,
        }
    }

    /// The source text of a span.
    pub fn slice(&self, span: &logos::Span) -> &'a str {
        &self.source[span.start..span.end]
    }
}

/// Read one brace-delimited argument starting at the cursor position.
///
/// Returns `Ok(None)` when the next token is not `{`, meaning "no argument
/// here"; the caller decides whether that is fatal. On success the returned
/// text is the raw source slice between the outer braces and the cursor has
/// advanced past both. Fails with `UnbalancedBrace` when input ends with
/// depth still positive.
pub fn read_argument<'s>(cursor: &mut TokenCursor<'s>) -> Result<Option<&'s str>, ExpandError> {
    let open = match cursor.eat(&Token::OpenBrace) {
        Some(span) => span,
        None => return Ok(None),
    };

    let start = open.end;
    let mut depth = 1usize;

    while let Some((token, span)) = cursor.next() {
        match token {
            Token::OpenBrace => depth += 1,
            Token::CloseBrace => {
                depth -= 1;
                if depth == 0 {
                    return Ok(Some(&cursor.source()[start..span.start]));
                }
            }
            _ => {}
        }
    }

    Err(ExpandError::UnbalancedBrace)
}
