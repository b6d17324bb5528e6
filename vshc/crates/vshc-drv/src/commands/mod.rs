//! Command modules for the vshc driver.
//!
//! Each subcommand lives in its own file and exposes an args struct plus a
//! `run_*` function.

pub mod lex;
pub mod tables;

pub use lex::{run_lex, LexArgs};
pub use tables::{run_keywords, run_precedence};
