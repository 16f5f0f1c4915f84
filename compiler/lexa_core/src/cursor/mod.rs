//! Character cursor over an immutable source text.
//!
//! The cursor walks a `&str` one `char` at a time and keeps the 1-based
//! [`Position`] of the *next* unread character. It is [`Copy`]: recognizers
//! look ahead by copying the cursor and advancing the copy, so lookahead never
//! disturbs the caller's state.
//!
//! # Line Breaks
//!
//! `\r`, `\n` and the pair `\r\n` each count as exactly one line break. The
//! pair is consumed by two [`bump`](CharCursor::bump) calls, but only the
//! `\r` moves to the next line; the `\n` that immediately follows it leaves
//! the position untouched (column stays 1).
//!
//! # Units
//!
//! Lengths and indices exposed by the cursor are in characters, not bytes.
//! The byte offset is tracked internally so slicing stays O(1).

use crate::Position;

/// Copyable scanning cursor with position tracking.
///
/// EOF is represented by `None` from [`peek`](Self::peek),
/// [`peek_nth`](Self::peek_nth) and [`bump`](Self::bump); no operation panics.
#[derive(Clone, Copy, Debug)]
pub struct CharCursor<'a> {
    /// The full source text.
    text: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
    /// Character offset of the next unread character.
    index: usize,
    /// Position of the next unread character.
    position: Position,
    /// `true` when the last consumed character was `\r`.
    after_cr: bool,
}

impl<'a> CharCursor<'a> {
    /// Create a cursor at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            index: 0,
            position: Position::START,
            after_cr: false,
        }
    }

    /// The character under the cursor, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character `k` positions ahead (`peek_nth(0) == peek()`).
    #[inline]
    pub fn peek_nth(&self, k: usize) -> Option<char> {
        self.rest().chars().nth(k)
    }

    /// Consume one character and update the position.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        self.index += 1;
        match c {
            '\r' => {
                self.position = self.position.next_line();
                self.after_cr = true;
            }
            '\n' => {
                // Second half of CRLF: the break was already counted.
                if !self.after_cr {
                    self.position = self.position.next_line();
                }
                self.after_cr = false;
            }
            _ => {
                self.position = self.position.next_column();
                self.after_cr = false;
            }
        }
        Some(c)
    }

    /// Consume up to `n` characters, stopping at EOF.
    ///
    /// Returns the number of characters actually consumed.
    pub fn advance_n(&mut self, n: usize) -> usize {
        let mut consumed = 0;
        while consumed < n && self.bump().is_some() {
            consumed += 1;
        }
        consumed
    }

    /// Returns `true` when every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Position of the next unread character.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// 0-based character offset of the next unread character.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The unread remainder of the text.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Returns `true` if the unread text starts with `s`.
    ///
    /// An empty `s` never matches: empty delimiters are not delimiters.
    #[inline]
    pub fn starts_with(&self, s: &str) -> bool {
        !s.is_empty() && self.rest().starts_with(s)
    }

    /// Source text between `start` (an earlier copy of this cursor) and the
    /// current point.
    ///
    /// # Contract
    ///
    /// `start` must be a snapshot of this cursor over the same text, taken
    /// at or before the current point. Violations return an empty string.
    pub fn slice_from(&self, start: &CharCursor<'a>) -> &'a str {
        self.text.get(start.pos..self.pos).unwrap_or_default()
    }

    /// Character distance from the cursor to the next occurrence of `needle`,
    /// or `None` if it does not occur in the unread text.
    ///
    /// Uses `memchr::memmem` on the UTF-8 bytes; a match of a non-empty
    /// UTF-8 needle always lands on a character boundary.
    pub fn char_offset_of(&self, needle: &str) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        let rest = self.rest();
        let byte_offset = memchr::memmem::find(rest.as_bytes(), needle.as_bytes())?;
        Some(rest[..byte_offset].chars().count())
    }

    /// Character distance from the cursor to the next `\r` or `\n`, or to
    /// EOF when the rest of the text has no line break.
    pub fn chars_until_line_break(&self) -> usize {
        let rest = self.rest();
        let end = memchr::memchr2(b'\r', b'\n', rest.as_bytes()).unwrap_or(rest.len());
        rest[..end].chars().count()
    }
}
