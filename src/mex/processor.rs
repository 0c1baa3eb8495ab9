//! Document processing API
//!
//! Ties the pieces together for drivers: gather input (named files or
//! standard input), strip comments, then either expand the document or dump
//! its token stream. Output is accumulated in full and only handed back on
//! success, so a failing run delivers nothing but its diagnostic.

use crate::mex::error::ExpandError;
use crate::mex::expander::Expander;
use crate::mex::lexer::{scan_with_spans, Token};
use crate::mex::source::{strip_comments, FsLoader};
use std::fmt;
use std::fs;
use std::io::{self, Read};

/// What a processing run emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The fully expanded document text.
    Text,
    /// The comment-stripped token stream as pretty-printed JSON.
    Tokens,
}

impl OutputFormat {
    /// Parse a format name as given on the command line.
    pub fn from_name(name: &str) -> Result<Self, ProcessError> {
        match name {
            "text" => Ok(OutputFormat::Text),
            "tokens" => Ok(OutputFormat::Tokens),
            _ => Err(ProcessError::UnknownFormat(name.to_string())),
        }
    }
}

/// Errors that can occur during a processing run.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessError {
    Expand(ExpandError),
    Io(String),
    UnknownFormat(String),
}

impl std::error::Error for ProcessError {}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Expand(err) => write!(f, "{}", err),
            ProcessError::Io(msg) => write!(f, "{}", msg),
            ProcessError::UnknownFormat(name) => write!(f, "Unknown output format '{}'", name),
        }
    }
}

impl From<ExpandError> for ProcessError {
    fn from(err: ExpandError) -> Self {
        ProcessError::Expand(err)
    }
}

/// Read and comment-strip the named files in order, concatenating the
/// results; with no paths, read standard input instead.
///
/// Stripping is applied per file, so a comment at the end of one file never
/// swallows the start of the next, and escape state does not carry across
/// the boundary.
pub fn gather_input(paths: &[String]) -> Result<String, ProcessError> {
    if paths.is_empty() {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .map_err(|e| ProcessError::Io(e.to_string()))?;
        return Ok(strip_comments(&raw));
    }

    let mut document = String::new();
    for path in paths {
        let raw = fs::read_to_string(path).map_err(|_| ExpandError::FileNotFound {
            path: path.clone(),
        })?;
        document.push_str(&strip_comments(&raw));
    }
    Ok(document)
}

/// Process the given input sources end to end.
pub fn process(paths: &[String], format: OutputFormat) -> Result<String, ProcessError> {
    let document = gather_input(paths)?;
    process_text(&document, format)
}

/// Expand or tokenize already comment-stripped text.
pub fn process_text(document: &str, format: OutputFormat) -> Result<String, ProcessError> {
    match format {
        OutputFormat::Text => {
            let mut expander = Expander::new(FsLoader);
            Ok(expander.expand(document)?)
        }
        OutputFormat::Tokens => {
            let records = token_records(document);
            serde_json::to_string_pretty(&records).map_err(|e| ProcessError::Io(e.to_string()))
        }
    }
}

/// One token of the document together with its source text.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TokenRecord {
    pub kind: Token,
    pub text: String,
}

/// Tokenize `document` for the `tokens` output format.
pub fn token_records(document: &str) -> Vec<TokenRecord> {
    scan_with_spans(document)
        .into_iter()
        .map(|(kind, span)| TokenRecord {
            kind,
            text: document[span].to_string(),
        })
        .collect()
}
