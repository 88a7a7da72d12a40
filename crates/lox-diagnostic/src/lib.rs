//! Diagnostic and error reporting for Lox.
//! Lox 的诊断和错误报告。
//!
//! Diagnostics render either as the one-line `[line N] Error: ...` form or as
//! an ariadne report with source context.
//! 诊断信息可以渲染为单行 `[line N] Error: ...` 形式，或带源码上下文的 ariadne 报告。

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, Label, Severity};

use std::io::{self, Write};

use ariadne::{ColorGenerator, Config, Label as AriadneLabel, Report, ReportKind, Source};
use thiserror::Error;

/// Errors raised while writing diagnostics out.
#[derive(Debug, Error)]
pub enum DiagnosticError {
    #[error("failed to write diagnostic: {0}")]
    Io(#[from] io::Error),
}

/// The one-line form, `[line N] Error: <message>`.
pub fn render_plain(diagnostic: &Diagnostic) -> String {
    diagnostic.to_string()
}

/// Write the one-line form of `diagnostic` followed by a newline.
pub fn write_plain<W: Write>(out: &mut W, diagnostic: &Diagnostic) -> Result<(), DiagnosticError> {
    writeln!(out, "{}", render_plain(diagnostic))?;
    Ok(())
}

/// Write an ariadne report for `diagnostic` to `out`.
/// 将诊断信息以 ariadne 报告形式写入 `out`。
///
/// The scanner works on single bytes, so the source is widened byte-for-char
/// to keep ariadne's character offsets equal to our byte offsets.
pub fn write_report<W: Write>(
    out: W,
    source: &[u8],
    filename: &str,
    diagnostic: &Diagnostic,
    color: bool,
) -> Result<(), DiagnosticError> {
    let kind = match diagnostic.severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
        Severity::Note => ReportKind::Advice,
    };

    let mut colors = ColorGenerator::new();
    let mut report = Report::build(kind, filename, usize::from(diagnostic.span.start))
        .with_config(Config::default().with_color(color))
        .with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    for label in &diagnostic.labels {
        let ariadne_label = AriadneLabel::new((filename, label.span.range()))
            .with_message(&label.message)
            .with_color(colors.next());
        report = report.with_label(ariadne_label);
    }

    for note in &diagnostic.notes {
        report = report.with_note(note);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    let text: String = source.iter().map(|&b| b as char).collect();
    report.finish().write((filename, Source::from(text)), out)?;
    Ok(())
}

/// Render a diagnostic to stderr as an ariadne report.
/// 将诊断信息渲染到标准错误输出。
pub fn emit(source: &[u8], filename: &str, diagnostic: &Diagnostic) -> Result<(), DiagnosticError> {
    write_report(io::stderr().lock(), source, filename, diagnostic, true)
}
