//! Testing utilities for expansion assertions
//!
//! Most expansion tests want one of three things: expand a snippet in
//! isolation, expand a snippet that `\include`s supporting files, or assert
//! an exact expansion result. These helpers cover all three without any
//! filesystem setup by serving includes from a [`MemoryLoader`].
//!
//! Inputs are treated as full documents: comments are stripped before
//! expansion, exactly as the processor does for files, so a test snippet
//! behaves byte for byte like the same text read from disk.
//!
//! ```rust,ignore
//! use mex::mex::testing::{assert_expands_to, expand_with_files};
//!
//! assert_expands_to(r"\def{X}{[#]}\X{hi}", "[hi]");
//!
//! let output = expand_with_files(
//!     r"\include{defs.mex}\site{}",
//!     &[("defs.mex", r"\def{site}{mex}")],
//! )?;
//! assert_eq!(output, "mex");
//! ```

use crate::mex::error::ExpandError;
use crate::mex::expander::Expander;
use crate::mex::source::{strip_comments, MemoryLoader};

/// Expand `source` against an empty macro table, with no include files
/// available. Any `\include` fails with `FileNotFound`.
pub fn expand_isolated(source: &str) -> Result<String, ExpandError> {
    expand_with_files(source, &[])
}

/// Expand `source` with the given `(path, contents)` pairs served to
/// `\include`. Contents are registered raw and comment-stripped on load,
/// like files on disk.
pub fn expand_with_files(
    source: &str,
    files: &[(&str, &str)],
) -> Result<String, ExpandError> {
    let mut loader = MemoryLoader::new();
    for (path, contents) in files {
        loader.insert(path, contents);
    }
    let mut expander = Expander::new(loader);
    expander.expand(&strip_comments(source))
}

/// Panic unless `source` expands exactly to `expected`.
pub fn assert_expands_to(source: &str, expected: &str) {
    match expand_isolated(source) {
        Ok(output) => assert_eq!(
            output, expected,
            "expansion of {:?} diverged from expectation",
            source
        ),
        Err(err) => panic!("expansion of {:?} failed: {}", source, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_isolated() {
        assert_eq!(expand_isolated("plain").unwrap(), "plain");
    }

    #[test]
    fn test_expand_isolated_strips_comments() {
        assert_eq!(expand_isolated("a % note\nb").unwrap(), "a \nb");
    }

    #[test]
    fn test_expand_with_files_serves_includes() {
        let output = expand_with_files(
            r"\include{defs.mex}\site{}",
            &[("defs.mex", r"\def{site}{mex}")],
        )
        .unwrap();
        assert_eq!(output, "mex");
    }

    #[test]
    fn test_expand_isolated_include_fails() {
        assert_eq!(
            expand_isolated(r"\include{anything.mex}").unwrap_err(),
            ExpandError::FileNotFound {
                path: "anything.mex".to_string()
            }
        );
    }

    #[test]
    fn test_assert_expands_to() {
        assert_expands_to(r"\def{X}{abc}\X{}", "abc");
    }

    #[test]
    #[should_panic(expected = "diverged from expectation")]
    fn test_assert_expands_to_panics_on_mismatch() {
        assert_expands_to("a", "b");
    }
}
