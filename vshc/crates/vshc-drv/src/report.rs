//! Diagnostic rendering for the terminal.

use std::io::{self, Write};

use vshc_util::{Diagnostic, SourceFile, SourceSnippet};

/// Writes `diagnostic` with the offending line of `file` underlined.
///
/// Notes and help lines follow the snippet. `color` wraps the level name in
/// its ANSI color.
pub fn write_diagnostic<W: Write>(
    out: &mut W,
    diagnostic: &Diagnostic,
    file: &SourceFile,
    color: bool,
) -> io::Result<()> {
    let span = diagnostic.span;
    let level = if color {
        format!(
            "\x1b[1;{}m{}\x1b[0m",
            diagnostic.level.color_code(),
            diagnostic.level
        )
    } else {
        diagnostic.level.to_string()
    };
    let code = diagnostic
        .code
        .map(|code| format!("[{code}]"))
        .unwrap_or_default();

    writeln!(
        out,
        "{}:{}:{}: {}{}: {}",
        diagnostic.file, span.line, span.column, level, code, diagnostic.message
    )?;

    if let Ok(line) = file.line_text(span.line as usize) {
        writeln!(out, "{}", SourceSnippet::for_span(line, span))?;
    }
    for note in &diagnostic.notes {
        writeln!(out, "    = note: {note}")?;
    }
    for help in &diagnostic.helps {
        writeln!(out, "    = help: {help}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vshc_util::{DiagnosticCode, Span};

    fn render(diagnostic: &Diagnostic, source: &str, color: bool) -> String {
        let file = SourceFile::new(0, "t.vs", source);
        let mut out = Vec::new();
        write_diagnostic(&mut out, diagnostic, &file, color).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_rendering() {
        let diagnostic = Diagnostic::error("illegal character '@'", "t.vs", Span::new(8, 9, 1, 9))
            .with_code(DiagnosticCode::E_LEX_ILLEGAL_CHARACTER);
        let text = render(&diagnostic, "var x = @;", false);
        assert_eq!(
            text,
            "t.vs:1:9: error[E0101]: illegal character '@'\n  1 | var x = @;\n    |         ^\n"
        );
    }

    #[test]
    fn test_help_lines() {
        let diagnostic = Diagnostic::error("illegal character '&'", "t.vs", Span::new(2, 3, 1, 3))
            .with_help("logical and is written `&&`");
        let text = render(&diagnostic, "a & b", false);
        assert!(text.ends_with("    = help: logical and is written `&&`\n"));
    }

    #[test]
    fn test_colored_level() {
        let diagnostic = Diagnostic::error("unterminated string literal", "t.vs", Span::new(0, 3, 1, 1));
        let text = render(&diagnostic, "\"ab", true);
        assert!(text.contains("\x1b[1;31merror\x1b[0m: unterminated string literal"));
    }

    #[test]
    fn test_missing_line_skips_snippet() {
        let diagnostic = Diagnostic::error("unterminated string literal", "t.vs", Span::new(0, 1, 7, 1));
        let text = render(&diagnostic, "x", false);
        assert_eq!(text.lines().count(), 1);
    }
}
