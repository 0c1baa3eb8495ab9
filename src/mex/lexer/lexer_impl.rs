//! Implementation of the mex scanner
//!
//! This module provides convenience functions for tokenizing mex text.
//! The actual tokenization is handled entirely by logos.

use crate::mex::lexer::tokens::Token;
use logos::Logos;

/// Convenience function to tokenize a string and collect all tokens
pub fn scan(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans
pub fn scan_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(scan(""), vec![]);
    }

    #[test]
    fn test_plain_text_is_one_token() {
        assert_eq!(scan("hello world\n"), vec![Token::Text]);
    }

    #[test]
    fn test_mixed_document() {
        let tokens = scan(r"pre\X{arg}post");
        assert_eq!(
            tokens,
            vec![
                Token::Text,
                Token::Directive,
                Token::OpenBrace,
                Token::Text,
                Token::CloseBrace,
                Token::Text,
            ]
        );
    }

    #[test]
    fn test_spans_are_contiguous_and_cover_input() {
        let source = r"a\def{X}{\%}b\";
        let tokens = scan_with_spans(source);

        let mut offset = 0;
        for (_, span) in &tokens {
            assert_eq!(span.start, offset);
            offset = span.end;
        }
        assert_eq!(offset, source.len());
    }

    #[test]
    fn test_spans_slice_back_to_source() {
        let source = r"\greet{world}";
        let tokens = scan_with_spans(source);
        assert_eq!(&source[tokens[0].1.clone()], r"\greet");
        assert_eq!(&source[tokens[2].1.clone()], "world");
    }
}
