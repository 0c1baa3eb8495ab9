//! Macro expansion
//!
//! [`engine::Expander`] walks the token stream produced by
//! [`crate::mex::lexer`]: arguments are read by [`arguments`], builtins are
//! enumerated by [`builtins`], and output flows through the [`sink::Sink`]
//! abstraction so the same recursion serves both the visible result and
//! captured sub-expansions.

pub mod arguments;
pub mod builtins;
pub mod engine;
pub mod sink;

pub use arguments::{read_argument, TokenCursor};
pub use builtins::Builtin;
pub use engine::{Expander, DEFAULT_MAX_DEPTH};
pub use sink::Sink;
