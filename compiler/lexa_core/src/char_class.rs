//! Character classes of the base alphabet.
//!
//! The base alphabet is deliberately small: ASCII letters, ASCII digits,
//! space, CR, LF and the double quote. Everything else becomes part of the
//! alphabet only by appearing in a configured symbol or comment delimiter.
//! Tab is *not* whitespace here.

/// `A`-`Z` or `a`-`z`.
#[inline]
pub const fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// `0`-`9`.
#[inline]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Space, `\r` or `\n`: the only whitespace the engine skips.
#[inline]
pub const fn is_space_or_newline(c: char) -> bool {
    matches!(c, ' ' | '\r' | '\n')
}

/// The string delimiter `"`.
#[inline]
pub const fn is_quote(c: char) -> bool {
    c == '"'
}

/// Letter, digit, skippable whitespace or quote.
#[inline]
pub const fn is_base_alphabet(c: char) -> bool {
    is_letter(c) || is_digit(c) || is_space_or_newline(c) || is_quote(c)
}
