//! Integration tests for lox-common crate.

use lox_common::{BytePos, Line, Span};

#[test]
fn test_span_merge() {
    let a = Span::from_usize(10, 20);
    let b = Span::from_usize(15, 30);
    let merged = a.merge(b);
    assert_eq!(merged.start.0, 10);
    assert_eq!(merged.end.0, 30);
}

#[test]
fn test_span_len() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.len(), 10);
}

#[test]
fn test_span_range_slices_source() {
    let source = b"print x;";
    let span = Span::from_usize(6, 7);
    assert_eq!(&source[span.range()], b"x");
}

#[test]
fn test_byte_pos_conversions() {
    let pos = BytePos::from(42usize);
    assert_eq!(pos, BytePos(42));
    assert_eq!(usize::from(pos), 42);
    assert!(BytePos::ZERO < pos);
}

#[test]
fn test_span_debug() {
    assert_eq!(format!("{:?}", Span::from_usize(3, 9)), "3..9");
    assert_eq!(Span::DUMMY, Span::point(0));
}

#[test]
fn test_line_ordering() {
    let mut line = Line::FIRST;
    for _ in 0..4 {
        line = line.next();
    }
    assert_eq!(line, Line(5));
    assert_eq!(format!("[line {line}]"), "[line 5]");
    assert_eq!(format!("{line:?}"), "Line(5)");
}
