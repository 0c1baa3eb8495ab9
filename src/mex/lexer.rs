//! Scanner module for the mex format
//!
//! This module contains the tokenization logic for mex documents: the token
//! definitions and the scanner implementation. The token set is total (any
//! text scans without error), so the expansion engine can treat the token
//! stream as a faithful, escape-aware view of the source.
//!
//! Escape handling
//!
//! A backslash binds to exactly one following unit at scan time: one of the
//! five special characters (`\ { } # %`), a maximal alphanumeric run (a
//! directive name), or any single other character. Escape state never
//! persists past that pair, which is what makes brace counting in the
//! argument reader a pure token-level concern: `\{` arrives as one
//! `EscapedSpecial` token and never shows up as an `OpenBrace`.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{scan, scan_with_spans};
pub use tokens::Token;
