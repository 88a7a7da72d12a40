//! Byte cursor with one byte of lookahead beyond the current one.
//! 带前瞻的字节游标。

use lox_common::Line;

/// A forward-only cursor over the source bytes.
///
/// The line counter is bumped after a `\n` is consumed, so a newline belongs
/// to the line it terminates.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src [u8],
    pos: usize,
    line: Line,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src [u8]) -> Self {
        Self {
            source,
            pos: 0,
            line: Line::FIRST,
        }
    }

    /// The byte at the cursor, if any.
    pub fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    /// The byte after the one at the cursor, if any.
    pub fn peek_next(&self) -> Option<u8> {
        self.source.get(self.pos + 1).copied()
    }

    /// Consume and return the byte at the cursor.
    pub fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        if byte == b'\n' {
            self.line = self.line.next();
        }
        Some(byte)
    }

    /// Consume the byte at the cursor only if it equals `expected`.
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume bytes while `pred` holds.
    pub fn eat_while(&mut self, mut pred: impl FnMut(u8) -> bool) {
        while let Some(byte) = self.peek() {
            if !pred(byte) {
                break;
            }
            self.advance();
        }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn line(&self) -> Line {
        self.line
    }

    /// The bytes consumed since `start`.
    pub fn slice(&self, start: usize) -> &'src [u8] {
        let source: &'src [u8] = self.source;
        &source[start..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_consume() {
        let cursor = Cursor::new(b"ab");
        assert_eq!(cursor.peek(), Some(b'a'));
        assert_eq!(cursor.peek_next(), Some(b'b'));
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn advance_to_end() {
        let mut cursor = Cursor::new(b"ab");
        assert_eq!(cursor.advance(), Some(b'a'));
        assert_eq!(cursor.advance(), Some(b'b'));
        assert!(cursor.at_end());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.peek_next(), None);
        assert_eq!(cursor.pos(), 2);
    }

    #[test]
    fn newline_bumps_line_after_consumption() {
        let mut cursor = Cursor::new(b"a\nb");
        cursor.advance();
        assert_eq!(cursor.line(), Line(1));
        cursor.advance();
        assert_eq!(cursor.line(), Line(2));
    }

    #[test]
    fn eat_is_conditional() {
        let mut cursor = Cursor::new(b"=x");
        assert!(!cursor.eat(b'x'));
        assert!(cursor.eat(b'='));
        assert_eq!(cursor.peek(), Some(b'x'));
    }

    #[test]
    fn eat_while_and_slice() {
        let mut cursor = Cursor::new(b"123abc");
        cursor.eat_while(|b| b.is_ascii_digit());
        assert_eq!(cursor.slice(0), b"123");
        assert_eq!(cursor.peek(), Some(b'a'));
    }

    #[test]
    fn empty_source_is_at_end() {
        let cursor = Cursor::new(b"");
        assert!(cursor.at_end());
        assert_eq!(cursor.line(), Line::FIRST);
    }
}
