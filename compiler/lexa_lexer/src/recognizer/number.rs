use lexa_core::{char_class, CharCursor};

use super::{digits_from, lexeme_at, Recognition, Scanner};
use crate::LexErrorKind;

/// `digits . digits`.
///
/// Digits and a dot with no digit after it is a malformed decimal spanning
/// the digits and the dot. Digits without a dot are left to [`number`].
pub fn decimal(_scanner: &Scanner, cursor: &CharCursor<'_>) -> Recognition {
    let whole = digits_from(cursor, 0);
    if whole == 0 || cursor.peek_nth(whole) != Some('.') {
        return Recognition::NoMatch;
    }
    let fraction = digits_from(cursor, whole + 1);
    if fraction == 0 {
        let len = whole + 1;
        return Recognition::MatchWithError {
            len,
            kind: LexErrorKind::MalformedDecimal,
            lexeme: lexeme_at(cursor, len),
        };
    }
    Recognition::Match {
        len: whole + 1 + fraction,
    }
}

/// A run of digits.
///
/// A letter right after the digits makes it a malformed number spanning
/// the digits and that one letter.
pub fn number(_scanner: &Scanner, cursor: &CharCursor<'_>) -> Recognition {
    let digits = digits_from(cursor, 0);
    if digits == 0 {
        return Recognition::NoMatch;
    }
    if cursor.peek_nth(digits).is_some_and(char_class::is_letter) {
        let len = digits + 1;
        return Recognition::MatchWithError {
            len,
            kind: LexErrorKind::MalformedInteger,
            lexeme: lexeme_at(cursor, len),
        };
    }
    Recognition::Match { len: digits }
}
