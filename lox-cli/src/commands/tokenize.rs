//! The `lox tokenize` command.
//! `lox tokenize` 命令。

use std::fs;
use std::io::{self, BufWriter, IsTerminal, Write};

use lox_diagnostic::{Diagnostic, write_plain, write_report};
use lox_lexer::{Token, scan};
use tracing::debug;

use crate::Format;
use crate::error::CliError;
use crate::output;

/// Scan a file and print its tokens.
/// 扫描文件并打印其 token。
pub fn run(file: &str, format: Format, verbose: bool) -> Result<(), CliError> {
    let source = fs::read(file).map_err(|source| CliError::Read {
        path: file.to_string(),
        source,
    })?;
    debug!(file, bytes = source.len(), "read source");

    let result = scan(&source);

    report(&source, file, result.diagnostics(), format)?;
    print_tokens(io::stdout().lock(), result.tokens())?;

    if verbose {
        for line in result.diagnostics().iter().filter_map(explain) {
            output::info(&line);
        }
        output::info(&format!(
            "{} token(s), {} error(s)",
            result.tokens().len(),
            result.diagnostics().len()
        ));
    }

    if result.had_error() {
        return Err(CliError::Lexical {
            count: result.diagnostics().len(),
        });
    }
    Ok(())
}

/// Write one `KIND LEXEME LITERAL` line per token.
pub fn print_tokens<W: Write>(out: W, tokens: &[Token]) -> Result<(), CliError> {
    let mut out = BufWriter::new(out);
    for token in tokens {
        writeln!(out, "{token}")?;
    }
    out.flush()?;
    Ok(())
}

/// One-line explanation of a diagnostic's error code, e.g.
/// `line 1: E0001 unexpected character in input`.
pub fn explain(diagnostic: &Diagnostic) -> Option<String> {
    let code = diagnostic.code?;
    Some(format!(
        "line {}: {} {}",
        diagnostic.line,
        code.as_str(),
        code.description()
    ))
}

fn report(
    source: &[u8],
    file: &str,
    diagnostics: &[Diagnostic],
    format: Format,
) -> Result<(), CliError> {
    let stderr = io::stderr();
    let color = stderr.is_terminal();
    let mut err = stderr.lock();

    for diagnostic in diagnostics {
        match format {
            Format::Plain => write_plain(&mut err, diagnostic)?,
            Format::Pretty => write_report(&mut err, source, file, diagnostic, color)?,
        }
    }
    Ok(())
}
