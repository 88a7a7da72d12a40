//! Lexical analysis for Lox.
//! Lox 词法分析模块。
//!
//! This crate provides the scanner that converts source bytes into tokens.
//! 本 crate 提供词法扫描器，将源代码字节转换为 token 序列。

mod cursor;
mod lexer;
mod number;
mod token;

pub use cursor::Cursor;
pub use lexer::{ScanResult, Scanner, scan};
pub use number::canonical_number;
pub use token::{Literal, Token, TokenKind};
