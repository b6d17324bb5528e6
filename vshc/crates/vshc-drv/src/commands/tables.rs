//! `keywords` and `precedence` commands.
//!
//! Both print a published table from the lexer, one entry per line.

use std::io::Write;

use vshc_lex::{keywords, precedence_table};

use crate::error::Result;

/// Prints `spelling -> Kind` for every keyword, in table order.
pub fn run_keywords<W: Write>(out: &mut W) -> Result<()> {
    for (spelling, kind) in keywords() {
        writeln!(out, "{:<12} -> {}", spelling, kind.name())?;
    }
    Ok(())
}

/// Prints `Kind power` for every operator with a binding power, weakest
/// first.
pub fn run_precedence<W: Write>(out: &mut W) -> Result<()> {
    for (kind, power) in precedence_table() {
        writeln!(out, "{:<13} {}", kind.name(), power)?;
    }
    Ok(())
}
