//! The six built-in control forms
//!
//! Builtins are resolved by name before any argument is read; each has a
//! fixed argument count. Their names are reserved: `\def` can never define
//! a macro with one of these names.

/// The closed set of built-in control forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Def,
    Undef,
    If,
    IfDef,
    Include,
    ExpandAfter,
}

impl Builtin {
    /// Resolve a directive name to a builtin, or `None` for a user macro.
    pub fn from_name(name: &str) -> Option<Builtin> {
        match name {
            "def" => Some(Builtin::Def),
            "undef" => Some(Builtin::Undef),
            "if" => Some(Builtin::If),
            "ifdef" => Some(Builtin::IfDef),
            "include" => Some(Builtin::Include),
            "expandafter" => Some(Builtin::ExpandAfter),
            _ => None,
        }
    }

    /// The directive name, as written after the backslash.
    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Def => "def",
            Builtin::Undef => "undef",
            Builtin::If => "if",
            Builtin::IfDef => "ifdef",
            Builtin::Include => "include",
            Builtin::ExpandAfter => "expandafter",
        }
    }

    /// The fixed number of brace-delimited arguments this form consumes.
    pub fn arity(&self) -> usize {
        match self {
            Builtin::Def => 2,
            Builtin::Undef => 1,
            Builtin::If => 3,
            Builtin::IfDef => 3,
            Builtin::Include => 1,
            Builtin::ExpandAfter => 2,
        }
    }
}
