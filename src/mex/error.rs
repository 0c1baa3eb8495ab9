//! Error types for macro expansion
//!
//! One public enum covers every way an expansion pass can fail. All variants
//! are fatal to the run: the first error raised anywhere in the recursion
//! aborts the whole pass, and the driver reports it as the single diagnostic.

use std::fmt;

/// Errors that can occur while expanding a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// `\def` of a name that is already defined.
    DuplicateMacro { name: String },
    /// `\undef` of a name that is not defined.
    UnknownMacro { name: String },
    /// A macro name that is empty, not alphanumeric, or a reserved builtin.
    InvalidName { name: String },
    /// Input ended while an argument's brace depth was still positive.
    UnbalancedBrace,
    /// A builtin invoked with fewer arguments than its fixed count.
    Arity {
        builtin: &'static str,
        expected: usize,
        found: usize,
    },
    /// Invocation of a macro that is not defined.
    UndefinedMacro { name: String },
    /// A user macro invoked without its brace-delimited argument.
    MissingArgument { name: String },
    /// `\include` (or a top-level input) named a file that cannot be read.
    FileNotFound { path: String },
    /// Expansion nested deeper than the configured recursion limit.
    ResourceLimit { limit: usize },
}

impl fmt::Display for ExpandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpandError::DuplicateMacro { name } => {
                write!(f, "Macro '{}' already defined", name)
            }
            ExpandError::UnknownMacro { name } => {
                write!(f, "Cannot undefine '{}' - not defined", name)
            }
            ExpandError::InvalidName { name } => {
                write!(f, "Invalid macro name '{}'", name)
            }
            ExpandError::UnbalancedBrace => {
                write!(f, "Unbalanced braces in argument")
            }
            ExpandError::Arity {
                builtin,
                expected,
                found,
            } => {
                write!(
                    f,
                    "\\{} requires {} arguments, found {}",
                    builtin, expected, found
                )
            }
            ExpandError::UndefinedMacro { name } => {
                write!(f, "Macro '{}' not defined", name)
            }
            ExpandError::MissingArgument { name } => {
                write!(f, "Macro '{}' invoked without an argument", name)
            }
            ExpandError::FileNotFound { path } => {
                write!(f, "Cannot open file '{}'", path)
            }
            ExpandError::ResourceLimit { limit } => {
                write!(f, "Expansion nested deeper than {} levels", limit)
            }
        }
    }
}

impl std::error::Error for ExpandError {}
