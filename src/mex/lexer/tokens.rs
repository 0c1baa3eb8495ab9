//! Token definitions for the mex format
//!
//! This module defines all the tokens the mex scanner can produce. The
//! tokens are defined using the logos derive macro for efficient
//! tokenization. The set is total: every byte of input belongs to exactly
//! one token, so scanning cannot fail and the token slices concatenate back
//! into the original text.
use logos::Logos;

/// All possible tokens in a mex document
#[derive(Logos, Debug, PartialEq, Eq, Clone, serde::Serialize)]
pub enum Token {
    // Backslash followed by one of the five specials: \ { } # %
    #[regex(r"\\[\\{}#%]")]
    EscapedSpecial,

    // Backslash followed by a maximal ASCII alphanumeric run (a directive:
    // builtin or user macro name)
    #[regex(r"\\[a-zA-Z0-9]+")]
    Directive,

    // Backslash followed by any other single character (kept verbatim)
    #[regex(r"\\[^a-zA-Z0-9\\{}#%]")]
    EscapedOther,

    // A lone backslash at end of input
    #[token("\\")]
    Backslash,

    // Argument delimiters (literal outside argument position)
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    // Substitution placeholder (literal outside macro bodies)
    #[token("#")]
    Hash,

    // Text content (catch-all for non-special characters)
    #[regex(r"[^\\{}#]+")]
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mex::lexer::scan;

    #[test]
    fn test_escaped_specials() {
        let mut lexer = Token::lexer(r"\\\{\}\#\%");
        assert_eq!(lexer.next(), Some(Ok(Token::EscapedSpecial)));
        assert_eq!(lexer.slice(), r"\\");
        assert_eq!(lexer.next(), Some(Ok(Token::EscapedSpecial)));
        assert_eq!(lexer.slice(), r"\{");
        assert_eq!(lexer.next(), Some(Ok(Token::EscapedSpecial)));
        assert_eq!(lexer.slice(), r"\}");
        assert_eq!(lexer.next(), Some(Ok(Token::EscapedSpecial)));
        assert_eq!(lexer.slice(), r"\#");
        assert_eq!(lexer.next(), Some(Ok(Token::EscapedSpecial)));
        assert_eq!(lexer.slice(), r"\%");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_directive_takes_maximal_run() {
        let mut lexer = Token::lexer(r"\def2x{");
        assert_eq!(lexer.next(), Some(Ok(Token::Directive)));
        assert_eq!(lexer.slice(), r"\def2x");
        assert_eq!(lexer.next(), Some(Ok(Token::OpenBrace)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_escaped_other() {
        let mut lexer = Token::lexer("\\ x");
        assert_eq!(lexer.next(), Some(Ok(Token::EscapedOther)));
        assert_eq!(lexer.slice(), "\\ ");
        assert_eq!(lexer.next(), Some(Ok(Token::Text)));
        assert_eq!(lexer.slice(), "x");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_escaped_newline_is_escaped_other() {
        let tokens = scan("\\\n");
        assert_eq!(tokens, vec![Token::EscapedOther]);
    }

    #[test]
    fn test_trailing_backslash() {
        let tokens = scan("abc\\");
        assert_eq!(tokens, vec![Token::Text, Token::Backslash]);
    }

    #[test]
    fn test_braces_and_hash() {
        let tokens = scan("{#}");
        assert_eq!(
            tokens,
            vec![Token::OpenBrace, Token::Hash, Token::CloseBrace]
        );
    }

    #[test]
    fn test_text_run_includes_percent_and_whitespace() {
        let mut lexer = Token::lexer("a % b\nc");
        assert_eq!(lexer.next(), Some(Ok(Token::Text)));
        assert_eq!(lexer.slice(), "a % b\nc");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_directive_with_argument() {
        let tokens = scan(r"\def{X}{abc}");
        assert_eq!(
            tokens,
            vec![
                Token::Directive,
                Token::OpenBrace,
                Token::Text,
                Token::CloseBrace,
                Token::OpenBrace,
                Token::Text,
                Token::CloseBrace,
            ]
        );
    }

    #[test]
    fn test_escaped_brace_is_not_a_delimiter_token() {
        let tokens = scan(r"{\{}");
        assert_eq!(
            tokens,
            vec![Token::OpenBrace, Token::EscapedSpecial, Token::CloseBrace]
        );
    }
}
