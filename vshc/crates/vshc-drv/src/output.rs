//! Token listing formats.

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use vshc_lex::{Token, TokenKind};

use crate::commands::lex::LexedFile;
use crate::error::Result;

/// How `vshc lex` prints tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token kind name per line
    #[default]
    Kinds,
    /// `file:line:column  Kind  "lexeme"` per line
    Detailed,
    /// A JSON array of token objects
    Json,
}

/// One token as serialized by the JSON format.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    file: &'a str,
    kind: &'static str,
    lexeme: &'a str,
    line: u32,
    column: u32,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            file: token.file(),
            kind: token.kind().name(),
            lexeme: token.lexeme(),
            line: token.line(),
            column: token.column(),
        }
    }
}

/// Writes the tokens of every file, in order, in `format`.
///
/// Comment tokens are skipped unless `emit_comments` is set.
pub fn write_tokens<W: Write>(
    out: &mut W,
    files: &[LexedFile],
    format: OutputFormat,
    emit_comments: bool,
) -> Result<()> {
    let tokens = files
        .iter()
        .flat_map(|file| file.tokens.iter())
        .filter(|token| emit_comments || token.kind() != TokenKind::Comment);

    match format {
        OutputFormat::Kinds => {
            for token in tokens {
                writeln!(out, "{}", token.kind())?;
            }
        },
        OutputFormat::Detailed => {
            for token in tokens {
                writeln!(
                    out,
                    "{}:{}:{}  {}  {:?}",
                    token.file(),
                    token.line(),
                    token.column(),
                    token.kind(),
                    token.lexeme()
                )?;
            }
        },
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens.map(TokenRecord::from).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    Ok(())
}
