//! Common data structures for Lox.
//!
//! This crate provides the source-position types used across the toolchain:
//! - `Span`: byte range of a lexeme or diagnostic
//! - `Line`: 1-based line number used in `[line N]` reports

mod line;
mod span;

pub use line::Line;
pub use span::{BytePos, Span};
