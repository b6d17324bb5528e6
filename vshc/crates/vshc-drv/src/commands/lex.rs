//! Lex command implementation.
//!
//! Loads every input file, tokenizes the files in parallel, prints the
//! tokens in argument order and then renders all diagnostics to stderr.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, warn};
use vshc_lex::Token;
use vshc_util::{Diagnostic, Handler, SourceFile, SourceMap};

use crate::config::worker_count;
use crate::error::{DriverError, Result};
use crate::output::{write_tokens, OutputFormat};
use crate::report::write_diagnostic;

/// Arguments for the lex command.
#[derive(Debug, Clone)]
pub struct LexArgs {
    /// Source files, in output order.
    pub files: Vec<PathBuf>,
    /// Token listing format.
    pub format: OutputFormat,
    /// Include comment tokens in the listing.
    pub emit_comments: bool,
    /// Worker threads; 0 means one per CPU.
    pub jobs: usize,
    /// Colored diagnostics.
    pub color: bool,
}

/// The result of tokenizing one file.
#[derive(Debug)]
pub struct LexedFile {
    /// The file that was tokenized.
    pub file: Arc<SourceFile>,
    /// Every token, ending with EOF.
    pub tokens: Vec<Token>,
    /// Diagnostics reported while tokenizing.
    pub diagnostics: Vec<Diagnostic>,
}

impl LexedFile {
    /// Number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.level.is_error())
            .count()
    }
}

/// Execute the lex command.
pub fn run_lex(args: LexArgs) -> Result<()> {
    let start_time = Instant::now();

    let mut source_map = SourceMap::new();
    for path in &args.files {
        source_map.load(path)?;
    }
    let files: Vec<Arc<SourceFile>> = source_map.iter().cloned().collect();

    let lexed = lex_files(&files, args.jobs);

    let mut stdout = BufWriter::new(io::stdout().lock());
    write_tokens(&mut stdout, &lexed, args.format, args.emit_comments)?;
    stdout.flush()?;

    let mut stderr = io::stderr().lock();
    for lexed_file in &lexed {
        for diagnostic in &lexed_file.diagnostics {
            write_diagnostic(&mut stderr, diagnostic, &lexed_file.file, args.color)?;
        }
    }

    let count: usize = lexed.iter().map(LexedFile::error_count).sum();
    debug!(
        files = lexed.len(),
        errors = count,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "lexing finished"
    );

    if count > 0 {
        return Err(DriverError::LexicalErrors { count });
    }
    Ok(())
}

/// Tokenizes `files` on a pool of `jobs` workers, keeping input order.
///
/// Each file gets its own lexer and handler; nothing is shared between
/// runs. A single file is tokenized on the calling thread, as is every file
/// if the pool cannot be started.
pub fn lex_files(files: &[Arc<SourceFile>], jobs: usize) -> Vec<LexedFile> {
    if files.len() <= 1 {
        return files.iter().map(lex_source).collect();
    }

    let threads = worker_count(jobs).min(files.len());
    debug!(files = files.len(), threads, "lexing in parallel");
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map(|pool| pool.install(|| files.par_iter().map(lex_source).collect::<Vec<_>>()))
        .unwrap_or_else(|e| {
            warn!("failed to create thread pool ({e}), lexing sequentially");
            files.iter().map(lex_source).collect()
        })
}

/// Tokenizes one file with a fresh handler.
pub fn lex_source(file: &Arc<SourceFile>) -> LexedFile {
    let handler = Handler::new();
    let tokens = vshc_lex::tokenize(file.content(), file.name(), &handler);
    LexedFile {
        file: Arc::clone(file),
        tokens,
        diagnostics: handler.take_diagnostics(),
    }
}
