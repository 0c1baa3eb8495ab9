//! The expansion engine
//!
//! Depth-first recursive descent over the token stream, no backtracking.
//! Plain tokens stream to the sink verbatim, an escaped special drops its
//! backslash, and a directive either runs a builtin or invokes a macro.
//! Text produced by a builtin branch, an included file, or a macro body is
//! expanded by one nested call; the loop then carries on with the tokens
//! after the call site, so the remainder is processed exactly once.
//!
//! The macro table lives on the [`Expander`] and is shared by every nested
//! call, which is what makes a `\def` executed inside an `\if` branch, an
//! included file, or an `\expandafter` capture visible to the text that
//! follows.

use crate::mex::error::ExpandError;
use crate::mex::expander::arguments::{read_argument, TokenCursor};
use crate::mex::expander::builtins::Builtin;
use crate::mex::expander::sink::Sink;
use crate::mex::lexer::{scan_with_spans, Token};
use crate::mex::macros::MacroTable;
use crate::mex::source::IncludeLoader;

/// Nesting bound applied when none is configured.
///
/// Nesting grows with includes, conditional branches, and macro bodies, so
/// real documents sit far below this; a macro that expands to an invocation
/// of itself or a self-including file runs into the bound instead of
/// exhausting the call stack.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Expands directives in comment-stripped text.
///
/// The expander owns the macro table and a loader that serves `\include`
/// contents. It is reusable: definitions made during one [`expand`] call
/// remain in effect for the next, which lets an embedder preload a prelude
/// before expanding documents against it.
///
/// [`expand`]: Expander::expand
pub struct Expander<L> {
    loader: L,
    macros: MacroTable,
    max_depth: usize,
}

impl<L: IncludeLoader> Expander<L> {
    pub fn new(loader: L) -> Self {
        Expander {
            loader,
            macros: MacroTable::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replace the nesting bound. Mostly useful to tests and embedders
    /// that expand untrusted input.
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = limit;
        self
    }

    pub fn macros(&self) -> &MacroTable {
        &self.macros
    }

    /// Expand `source` to completion and return the accumulated output.
    ///
    /// `source` must already be comment-stripped (see
    /// [`strip_comments`](crate::mex::source::strip_comments)). The first
    /// error anywhere in the recursion aborts the run; nothing of the
    /// partial output is returned.
    pub fn expand(&mut self, source: &str) -> Result<String, ExpandError> {
        let mut output = String::new();
        self.expand_into(source, &mut output, 0)?;
        Ok(output)
    }

    fn expand_into(
        &mut self,
        source: &str,
        sink: &mut dyn Sink,
        depth: usize,
    ) -> Result<(), ExpandError> {
        if depth > self.max_depth {
            return Err(ExpandError::ResourceLimit {
                limit: self.max_depth,
            });
        }

        let mut cursor = TokenCursor::new(source);
        while let Some((token, span)) = cursor.next() {
            match token {
                Token::Text
                | Token::OpenBrace
                | Token::CloseBrace
                | Token::Hash
                | Token::EscapedOther
                | Token::Backslash => sink.write_str(cursor.slice(&span)),
                Token::EscapedSpecial => {
                    // drop the backslash, keep the special
                    sink.write_str(&cursor.slice(&span)[1..]);
                }
                Token::Directive => {
                    let name = &cursor.slice(&span)[1..];
                    match Builtin::from_name(name) {
                        Some(builtin) => self.run_builtin(builtin, &mut cursor, sink, depth)?,
                        None => self.invoke_macro(name, &mut cursor, sink, depth)?,
                    }
                }
            }
        }
        Ok(())
    }

    /// Expand `source` into a fresh capture buffer instead of the caller's
    /// sink. Used where a sub-expansion's result is needed as a value.
    fn expand_to_string(&mut self, source: &str, depth: usize) -> Result<String, ExpandError> {
        let mut captured = String::new();
        self.expand_into(source, &mut captured, depth)?;
        Ok(captured)
    }

    fn run_builtin<'s>(
        &mut self,
        builtin: Builtin,
        cursor: &mut TokenCursor<'s>,
        sink: &mut dyn Sink,
        depth: usize,
    ) -> Result<(), ExpandError> {
        let args = read_builtin_args(builtin, cursor)?;
        match builtin {
            Builtin::Def => {
                ensure_definable_name(args[0])?;
                self.macros.define(args[0], args[1])?;
            }
            Builtin::Undef => {
                self.macros.undefine(args[0])?;
            }
            Builtin::If => {
                // the condition is raw text, never expanded
                let branch = if args[0].is_empty() { args[2] } else { args[1] };
                self.expand_into(branch, sink, depth + 1)?;
            }
            Builtin::IfDef => {
                ensure_testable_name(args[0])?;
                let branch = if self.macros.contains(args[0]) {
                    args[1]
                } else {
                    args[2]
                };
                self.expand_into(branch, sink, depth + 1)?;
            }
            Builtin::Include => {
                let included = self.loader.load(args[0])?;
                self.expand_into(&included, sink, depth + 1)?;
            }
            Builtin::ExpandAfter => {
                // AFTER expands first into a capture; raw BEFORE is
                // prepended and the concatenation runs as a fresh pass
                // into the caller's sink
                let after = self.expand_to_string(args[1], depth + 1)?;
                let mut combined = String::with_capacity(args[0].len() + after.len());
                combined.push_str(args[0]);
                combined.push_str(&after);
                self.expand_into(&combined, sink, depth + 1)?;
            }
        }
        Ok(())
    }

    fn invoke_macro(
        &mut self,
        name: &str,
        cursor: &mut TokenCursor<'_>,
        sink: &mut dyn Sink,
        depth: usize,
    ) -> Result<(), ExpandError> {
        // resolve before reading the argument so an unknown name is
        // reported as such even when no argument follows
        let body = match self.macros.lookup(name) {
            Some(body) => body.to_string(),
            None => {
                return Err(ExpandError::UndefinedMacro {
                    name: name.to_string(),
                })
            }
        };
        let argument = match read_argument(cursor)? {
            Some(text) => text,
            None => {
                return Err(ExpandError::MissingArgument {
                    name: name.to_string(),
                })
            }
        };
        let substituted = substitute(&body, argument);
        self.expand_into(&substituted, sink, depth + 1)
    }
}

fn read_builtin_args<'s>(
    builtin: Builtin,
    cursor: &mut TokenCursor<'s>,
) -> Result<Vec<&'s str>, ExpandError> {
    let mut args = Vec::with_capacity(builtin.arity());
    for found in 0..builtin.arity() {
        match read_argument(cursor)? {
            Some(text) => args.push(text),
            None => {
                return Err(ExpandError::Arity {
                    builtin: builtin.name(),
                    expected: builtin.arity(),
                    found,
                })
            }
        }
    }
    Ok(args)
}

/// A name `\def` accepts: non-empty, entirely alphanumeric, and not one of
/// the builtin names.
fn ensure_definable_name(name: &str) -> Result<(), ExpandError> {
    let alphanumeric = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric());
    if !alphanumeric || Builtin::from_name(name).is_some() {
        return Err(ExpandError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// A name `\ifdef` accepts: alphanumeric. The empty name is allowed and is
/// simply never defined, since `\def` rejects it.
fn ensure_testable_name(name: &str) -> Result<(), ExpandError> {
    if name.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(ExpandError::InvalidName {
            name: name.to_string(),
        })
    }
}

/// Build the invocation text from a macro body in one left-to-right scan.
///
/// An unescaped `#` splices the literal, unexpanded argument; an escaped
/// special drops its backslash; everything else, including `\` followed by
/// an alphanumeric (a directive written in the body), is kept verbatim.
/// The caller expands the result, which is where body directives and any
/// directives assembled by the splice take effect.
fn substitute(body: &str, argument: &str) -> String {
    let mut result = String::with_capacity(body.len() + argument.len());
    for (token, span) in scan_with_spans(body) {
        let slice = &body[span];
        match token {
            Token::Hash => result.push_str(argument),
            Token::EscapedSpecial => result.push_str(&slice[1..]),
            _ => result.push_str(slice),
        }
    }
    result
}
