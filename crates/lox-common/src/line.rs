//! Line number tracking.

use std::fmt;

/// A 1-based line number in source code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line(pub u32);

impl Line {
    pub const FIRST: Line = Line(1);

    /// The line following this one.
    pub fn next(self) -> Line {
        Line(self.0 + 1)
    }
}

impl Default for Line {
    fn default() -> Self {
        Line::FIRST
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({})", self.0)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
