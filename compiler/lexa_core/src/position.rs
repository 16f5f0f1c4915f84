//! Source positions.

use std::fmt;

/// 1-based line/column of the first character of a lexeme.
///
/// Both components are always `>= 1`; the only way to build one from raw
/// numbers is [`Position::new`], which rejects zero.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Position {
    line: u32,
    column: u32,
}

impl Position {
    /// The position of the first character of any text.
    pub const START: Position = Position { line: 1, column: 1 };

    /// Create a position, returning `None` if either component is zero.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Option<Self> {
        if line == 0 || column == 0 {
            None
        } else {
            Some(Position { line, column })
        }
    }

    #[inline]
    pub const fn line(self) -> u32 {
        self.line
    }

    #[inline]
    pub const fn column(self) -> u32 {
        self.column
    }

    /// First column of the next line.
    #[inline]
    pub(crate) const fn next_line(self) -> Self {
        Position {
            line: self.line.saturating_add(1),
            column: 1,
        }
    }

    /// Same line, one column further.
    #[inline]
    pub(crate) const fn next_column(self) -> Self {
        Position {
            line: self.line,
            column: self.column.saturating_add(1),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
