//! Input acquisition: comment stripping and include loading
//!
//! Every piece of text the engine sees, top-level sources and `\include`d
//! files alike, is comment-stripped first, under one rule: an unescaped
//! `%` starts a comment running to end of line; the terminating newline is
//! kept, and any run of spaces/tabs at the start of the next line is
//! dropped. Whether a `%` is escaped is decided by parity: a `%` preceded
//! by an odd run of backslashes is literal (`\%` survives stripping and
//! expands to a percent later; `\\%` ends the escape pair, so the `%`
//! opens a comment).

use crate::mex::error::ExpandError;
use std::collections::HashMap;
use std::fs;

/// Remove comments from raw document text.
pub fn strip_comments(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    let mut backslash_run = 0usize;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                backslash_run += 1;
                cleaned.push(c);
            }
            '%' if backslash_run % 2 == 0 => {
                let mut saw_newline = false;
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        saw_newline = true;
                        break;
                    }
                }
                if saw_newline {
                    cleaned.push('\n');
                    while let Some(&next) = chars.peek() {
                        if next == ' ' || next == '\t' {
                            chars.next();
                        } else {
                            break;
                        }
                    }
                }
                backslash_run = 0;
            }
            _ => {
                backslash_run = 0;
                cleaned.push(c);
            }
        }
    }

    cleaned
}

/// Source of comment-stripped file contents for `\include`.
///
/// The engine never touches the filesystem directly; it asks its loader.
/// This keeps the engine embeddable and lets tests serve includes from
/// memory.
pub trait IncludeLoader {
    /// Return the comment-stripped contents registered or stored under
    /// `path`, or `FileNotFound` when it cannot be read.
    fn load(&self, path: &str) -> Result<String, ExpandError>;
}

/// Loads includes from the filesystem, resolving paths as given (relative
/// paths are relative to the working directory).
#[derive(Debug, Clone, Default)]
pub struct FsLoader;

impl IncludeLoader for FsLoader {
    fn load(&self, path: &str) -> Result<String, ExpandError> {
        let raw = fs::read_to_string(path).map_err(|_| ExpandError::FileNotFound {
            path: path.to_string(),
        })?;
        Ok(strip_comments(&raw))
    }
}

/// Serves includes from an in-memory registry of raw texts, for tests and
/// embedding. Contents are stored raw and stripped on every load, so a
/// registered file behaves exactly like one read from disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    files: HashMap<String, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        MemoryLoader {
            files: HashMap::new(),
        }
    }

    /// Register raw (unstripped) contents under `path`.
    pub fn insert(&mut self, path: &str, contents: &str) {
        self.files.insert(path.to_string(), contents.to_string());
    }
}

impl IncludeLoader for MemoryLoader {
    fn load(&self, path: &str) -> Result<String, ExpandError> {
        match self.files.get(path) {
            Some(raw) => Ok(strip_comments(raw)),
            None => Err(ExpandError::FileNotFound {
                path: path.to_string(),
            }),
        }
    }
}
