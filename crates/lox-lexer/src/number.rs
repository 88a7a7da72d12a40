//! Canonical rendering of number literals.

/// Render the decimal text of a number literal in canonical form.
///
/// Leading zeros of the integer part and trailing zeros of the fraction are
/// dropped; whole numbers always keep a single `.0`.
///
/// ```
/// use lox_lexer::canonical_number;
///
/// assert_eq!(canonical_number("100"), "100.0");
/// assert_eq!(canonical_number("3.140000"), "3.14");
/// assert_eq!(canonical_number("200.00"), "200.0");
/// ```
pub fn canonical_number(text: &str) -> String {
    let (int, frac) = match text.split_once('.') {
        Some((int, frac)) => (int, frac.trim_end_matches('0')),
        None => (text, ""),
    };

    let int = int.trim_start_matches('0');
    let int = if int.is_empty() { "0" } else { int };

    if frac.is_empty() {
        format!("{int}.0")
    } else {
        format!("{int}.{frac}")
    }
}
