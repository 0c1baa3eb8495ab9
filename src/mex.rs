//! Main module for mex library functionality

pub mod error;
pub mod expander;
pub mod lexer;
pub mod macros;
pub mod processor;
pub mod source;
pub mod testing;
