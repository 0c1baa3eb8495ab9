//! Macro table for user-defined macros
//!
//! The table owns the name → raw body mapping mutated by `\def` and
//! `\undef` during an expansion pass. Bodies are stored raw and unexpanded;
//! substitution happens at invocation time. The table enforces only
//! uniqueness of names; validating the shape of a name (alphanumeric,
//! not a reserved builtin) is the expander's duty.

use crate::mex::error::ExpandError;
use std::collections::HashMap;

/// Mapping of macro name to raw, unexpanded body text.
///
/// No two entries ever share a name, and no ordering is guaranteed. The
/// table starts empty and lives as long as its expander, so definitions
/// survive across documents expanded by the same instance.
#[derive(Debug, Clone, Default)]
pub struct MacroTable {
    entries: HashMap<String, String>,
}

impl MacroTable {
    pub fn new() -> Self {
        MacroTable {
            entries: HashMap::new(),
        }
    }

    /// Insert a new macro. Fails if `name` is already defined.
    pub fn define(&mut self, name: &str, body: &str) -> Result<(), ExpandError> {
        if self.entries.contains_key(name) {
            return Err(ExpandError::DuplicateMacro {
                name: name.to_string(),
            });
        }
        self.entries.insert(name.to_string(), body.to_string());
        Ok(())
    }

    /// Remove a macro. Fails if `name` is not defined.
    pub fn undefine(&mut self, name: &str) -> Result<(), ExpandError> {
        match self.entries.remove(name) {
            Some(_) => Ok(()),
            None => Err(ExpandError::UnknownMacro {
                name: name.to_string(),
            }),
        }
    }

    /// Look up the raw body for `name`. Absence is not an error here; the
    /// caller decides what a missing name means.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|body| body.as_str())
    }

    /// Whether `name` is currently defined (the `\ifdef` test).
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
