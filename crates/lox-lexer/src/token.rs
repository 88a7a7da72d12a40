//! Token definitions for Lox.

use std::fmt;

use lox_common::{Line, Span};

/// A token with its source text, decoded literal, and position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text; empty for `EOF`.
    pub lexeme: String,
    pub literal: Option<Literal>,
    /// Line on which the lexeme starts.
    pub line: Line,
    pub span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        line: Line,
        span: Span,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }

    /// The end-of-input marker at byte `pos`.
    pub fn eof(line: Line, pos: usize) -> Self {
        Self::new(TokenKind::Eof, "", None, line, Span::point(pos))
    }
}

/// Renders `KIND LEXEME LITERAL`, with `null` for an absent literal.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(literal) => write!(f, "{literal}"),
            None => f.write_str("null"),
        }
    }
}

/// The decoded value of a literal token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// String contents without the surrounding quotes.
    Str(String),
    /// Canonical decimal text, e.g. `100.0`.
    Number(String),
}

impl Literal {
    /// Numeric value of a number literal.
    pub fn value(&self) -> Option<f64> {
        match self {
            Literal::Number(text) => text.parse().ok(),
            Literal::Str(_) => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) | Literal::Number(s) => f.write_str(s),
        }
    }
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,  // (
    RightParen, // )
    LeftBrace,  // {
    RightBrace, // }
    Comma,      // ,
    Dot,        // .
    Minus,      // -
    Plus,       // +
    Semicolon,  // ;
    Slash,      // /
    Star,       // *

    // One or two character tokens
    Bang,         // !
    BangEqual,    // !=
    Equal,        // =
    EqualEqual,   // ==
    Greater,      // >
    GreaterEqual, // >=
    Less,         // <
    LessEqual,    // <=

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Returns true if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::For
                | TokenKind::Fun
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }

    /// Returns the keyword for an identifier, if any.
    pub fn keyword(s: &str) -> Option<TokenKind> {
        match s {
            "and" => Some(TokenKind::And),
            "class" => Some(TokenKind::Class),
            "else" => Some(TokenKind::Else),
            "false" => Some(TokenKind::False),
            "for" => Some(TokenKind::For),
            "fun" => Some(TokenKind::Fun),
            "if" => Some(TokenKind::If),
            "nil" => Some(TokenKind::Nil),
            "or" => Some(TokenKind::Or),
            "print" => Some(TokenKind::Print),
            "return" => Some(TokenKind::Return),
            "super" => Some(TokenKind::Super),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            "var" => Some(TokenKind::Var),
            "while" => Some(TokenKind::While),
            _ => None,
        }
    }

    /// Returns the token formed by `byte` on its own, if any.
    pub fn single_char(byte: u8) -> Option<TokenKind> {
        match byte {
            b'(' => Some(TokenKind::LeftParen),
            b')' => Some(TokenKind::RightParen),
            b'{' => Some(TokenKind::LeftBrace),
            b'}' => Some(TokenKind::RightBrace),
            b',' => Some(TokenKind::Comma),
            b'.' => Some(TokenKind::Dot),
            b'-' => Some(TokenKind::Minus),
            b'+' => Some(TokenKind::Plus),
            b';' => Some(TokenKind::Semicolon),
            b'*' => Some(TokenKind::Star),
            b'/' => Some(TokenKind::Slash),
            b'!' => Some(TokenKind::Bang),
            b'=' => Some(TokenKind::Equal),
            b'<' => Some(TokenKind::Less),
            b'>' => Some(TokenKind::Greater),
            _ => None,
        }
    }

    /// The printed name, e.g. `LEFT_PAREN`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::For => "FOR",
            TokenKind::Fun => "FUN",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_round_trip_through_names() {
        for word in [
            "and", "class", "else", "false", "for", "fun", "if", "nil", "or", "print", "return",
            "super", "this", "true", "var", "while",
        ] {
            let kind = TokenKind::keyword(word).unwrap();
            assert!(kind.is_keyword());
            assert_eq!(kind.name(), word.to_ascii_uppercase());
        }
        assert_eq!(TokenKind::keyword("While"), None);
    }

    #[test]
    fn eof_renders_with_empty_lexeme() {
        assert_eq!(Token::eof(Line::FIRST, 0).to_string(), "EOF  null");
    }

    #[test]
    fn literal_rendering() {
        let token = Token::new(
            TokenKind::Number,
            "100",
            Some(Literal::Number("100.0".into())),
            Line::FIRST,
            Span::from_usize(0, 3),
        );
        assert_eq!(token.to_string(), "NUMBER 100 100.0");
        assert_eq!(token.literal.as_ref().and_then(Literal::value), Some(100.0));
        assert_eq!(Literal::Str("hi".into()).value(), None);
    }

    #[test]
    fn single_char_table() {
        assert_eq!(TokenKind::single_char(b'*'), Some(TokenKind::Star));
        assert_eq!(TokenKind::single_char(b'<'), Some(TokenKind::Less));
        assert_eq!(TokenKind::single_char(b'@'), None);
    }
}
