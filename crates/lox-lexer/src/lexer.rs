//! The Lox scanner.
//! Lox 词法扫描器。

use std::ops::ControlFlow;

use crate::cursor::Cursor;
use crate::number::canonical_number;
use crate::token::{Literal, Token, TokenKind};
use lox_common::{Line, Span};
use lox_diagnostic::{Diagnostic, ErrorCode, Label};
use tracing::{debug, trace};

/// Scan `source` in one pass.
/// 对整个源代码进行一次扫描。
pub fn scan(source: &[u8]) -> ScanResult {
    Scanner::new(source).scan()
}

/// Tokens and lexical diagnostics produced by one scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl ScanResult {
    /// Tokens in source order; the last one is always `EOF`.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// True if any lexical error was reported.
    pub fn had_error(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn into_parts(self) -> (Vec<Token>, Vec<Diagnostic>) {
        (self.tokens, self.diagnostics)
    }
}

/// The Lox scanner.
/// Lox 词法扫描器。
///
/// Converts a byte buffer into tokens, recording diagnostics as it goes.
/// Unexpected characters are skipped; an unterminated string ends the scan.
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src [u8]) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Scan the entire source, then append the `EOF` token.
    pub fn scan(mut self) -> ScanResult {
        while !self.cursor.at_end() {
            if self.scan_token().is_break() {
                break;
            }
        }

        self.tokens.push(Token::eof(self.cursor.line(), self.cursor.pos()));

        debug!(
            tokens = self.tokens.len(),
            errors = self.diagnostics.len(),
            "scan finished"
        );

        ScanResult {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    /// Consume one lexeme (or skip whitespace/comment). `Break` halts the scan.
    fn scan_token(&mut self) -> ControlFlow<()> {
        let start = self.cursor.pos();
        let line = self.cursor.line();

        let Some(byte) = self.cursor.advance() else {
            return ControlFlow::Break(());
        };

        let (kind, literal) = match byte {
            b' ' | b'\t' | b'\n' => return ControlFlow::Continue(()),

            b'"' => match self.string(start) {
                Some(literal) => (TokenKind::String, Some(literal)),
                None => {
                    self.error_unterminated_string(start, line);
                    return ControlFlow::Break(());
                }
            },

            b'0'..=b'9' => (TokenKind::Number, Some(self.number(start))),

            b'a'..=b'z' | b'A'..=b'Z' | b'_' => (self.identifier(start), None),

            b'=' if self.cursor.eat(b'=') => (TokenKind::EqualEqual, None),
            b'!' if self.cursor.eat(b'=') => (TokenKind::BangEqual, None),
            b'<' if self.cursor.eat(b'=') => (TokenKind::LessEqual, None),
            b'>' if self.cursor.eat(b'=') => (TokenKind::GreaterEqual, None),

            // Line comment; the newline is left for the next iteration.
            b'/' if self.cursor.eat(b'/') => {
                self.cursor.eat_while(|b| b != b'\n');
                return ControlFlow::Continue(());
            }

            _ => match TokenKind::single_char(byte) {
                Some(kind) => (kind, None),
                None => {
                    self.error_unexpected_char(byte, start, line);
                    return ControlFlow::Continue(());
                }
            },
        };

        let lexeme = String::from_utf8_lossy(self.cursor.slice(start)).into_owned();
        let span = Span::from_usize(start, self.cursor.pos());
        self.tokens.push(Token::new(kind, lexeme, literal, line, span));
        ControlFlow::Continue(())
    }

    /// Scan the rest of a string literal after its opening quote.
    /// Returns `None` if input ends before the closing quote.
    fn string(&mut self, start: usize) -> Option<Literal> {
        self.cursor.eat_while(|b| b != b'"');
        if !self.cursor.eat(b'"') {
            return None;
        }

        let quoted = self.cursor.slice(start);
        let contents = &quoted[1..quoted.len() - 1];
        Some(Literal::Str(String::from_utf8_lossy(contents).into_owned()))
    }

    /// Scan the rest of a number literal after its first digit.
    fn number(&mut self, start: usize) -> Literal {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        // A fraction needs at least one digit after the point.
        if self.cursor.peek() == Some(b'.')
            && self.cursor.peek_next().is_some_and(|b| b.is_ascii_digit())
        {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        let text = String::from_utf8_lossy(self.cursor.slice(start));
        Literal::Number(canonical_number(&text))
    }

    /// Scan the rest of an identifier or keyword after its first byte.
    fn identifier(&mut self, start: usize) -> TokenKind {
        self.cursor.eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');

        let text = String::from_utf8_lossy(self.cursor.slice(start));
        TokenKind::keyword(&text).unwrap_or(TokenKind::Identifier)
    }

    fn error_unexpected_char(&mut self, byte: u8, start: usize, line: Line) {
        trace!(%line, byte, "unexpected character");

        let shown = if byte.is_ascii() {
            char::from(byte).to_string()
        } else {
            format!("\\x{byte:02X}")
        };
        let span = Span::from_usize(start, self.cursor.pos());
        self.diagnostics.push(
            Diagnostic::error(line, span, format!("Unexpected character: {shown}"))
                .with_code(ErrorCode::UnexpectedCharacter)
                .with_label(Label::new(span, "unexpected character here")),
        );
    }

    fn error_unterminated_string(&mut self, start: usize, line: Line) {
        trace!(%line, "unterminated string");

        let code = ErrorCode::UnterminatedString;
        let mut diagnostic = Diagnostic::error(
            line,
            Span::from_usize(start, self.cursor.pos()),
            "Unterminated string.",
        )
        .with_code(code)
        .with_label(Label::new(Span::from_usize(start, start + 1), "string starts here"));
        if let Some(help) = code.suggestion() {
            diagnostic = diagnostic.with_help(help);
        }
        self.diagnostics.push(diagnostic);
    }
}
