//! Lexer module.
//!
//! The lexer implementation is split by token family:
//! - `core` - Lexer struct, dispatch and error reporting
//! - `identifier` - Identifiers and keywords
//! - `number` - Numeric literals
//! - `string` - String and character literals
//! - `comment` - Line comments
//! - `operator` - Operators, delimiters and illegal scalars

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
