//! Property-based tests for the mex scanner and expander
//!
//! These ensure the scanner tolerates arbitrary input and that expansion
//! honors its identity and substitution guarantees over generated documents.

use mex::mex::expander::Expander;
use mex::mex::lexer::{scan, scan_with_spans};
use mex::mex::source::{strip_comments, MemoryLoader};
use proptest::prelude::*;

fn expand(source: &str) -> Result<String, mex::mex::error::ExpandError> {
    Expander::new(MemoryLoader::new()).expand(source)
}

proptest! {
    #[test]
    fn test_scan_never_panics(input in any::<String>()) {
        // the token set is total, so any text scans
        let _tokens = scan(&input);
    }

    #[test]
    fn test_spans_tile_the_input(input in any::<String>()) {
        let mut end = 0;
        for (_, span) in scan_with_spans(&input) {
            prop_assert_eq!(span.start, end);
            end = span.end;
        }
        prop_assert_eq!(end, input.len());
    }

    #[test]
    fn test_backslash_free_text_is_identity(input in "[^\\\\]*") {
        prop_assert_eq!(expand(&input).unwrap(), input);
    }

    #[test]
    fn test_define_and_invoke_round_trip(
        name in "[a-z]{1,6}[0-9]",
        pre in "[a-z ]{0,8}",
        post in "[a-z ]{0,8}",
        arg in "[a-z ]{0,8}",
    ) {
        // names end with a digit so they can never collide with a builtin
        let source = format!("\\def{{{}}}{{{}#{}}}\\{}{{{}}}", name, pre, post, name, arg);
        prop_assert_eq!(expand(&source).unwrap(), format!("{}{}{}", pre, arg, post));
    }

    #[test]
    fn test_comment_free_text_survives_stripping(input in "[^%\\\\]*") {
        prop_assert_eq!(strip_comments(&input), input);
    }

    #[test]
    fn test_comments_cut_to_line_end(
        before in "[a-z ]{0,8}",
        comment in "[a-z ]{0,8}",
        after in "[a-z]{0,8}",
    ) {
        let input = format!("{}%{}\n{}", before, comment, after);
        prop_assert_eq!(strip_comments(&input), format!("{}\n{}", before, after));
    }
}
