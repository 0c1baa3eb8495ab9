//! # mex
//!
//! A macro expander for the mex format.
//!
//! mex documents are plain text with TeX-flavored directives: `\def{X}{body}`
//! binds a macro, `\X{arg}` invokes it with `#` in the body standing for the
//! argument, and `\if`, `\ifdef`, `\include`, and `\expandafter` control what
//! gets expanded. Everything else passes through verbatim.
//!
//! ## Testing
//!
//! For expansion-test helpers, see the [testing module](mex::testing).

pub mod mex;
