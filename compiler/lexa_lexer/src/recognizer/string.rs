use lexa_core::{char_class, CharCursor};

use super::{Recognition, Scanner};
use crate::LexErrorKind;

/// `"` ... `"`, both quotes included.
///
/// The body may hold any character of the alphabet, line breaks included.
/// The first character outside it ends the attempt: it is consumed with
/// the error but left out of the reported text.
pub fn string(scanner: &Scanner, cursor: &CharCursor<'_>) -> Recognition {
    if !cursor.peek().is_some_and(char_class::is_quote) {
        return Recognition::NoMatch;
    }
    let mut scan = *cursor;
    scan.bump();
    let mut len = 1;
    loop {
        let before = scan;
        match scan.bump() {
            None => {
                return Recognition::MatchWithError {
                    len,
                    kind: LexErrorKind::UnterminatedString,
                    lexeme: "\"".to_owned(),
                };
            }
            Some(c) if char_class::is_quote(c) => return Recognition::Match { len: len + 1 },
            Some(c) if !scanner.alphabet().allows_in_string(c) => {
                return Recognition::MatchWithError {
                    len: len + 1,
                    kind: LexErrorKind::StringAlphabetViolation,
                    lexeme: before.slice_from(cursor).to_owned(),
                };
            }
            Some(_) => len += 1,
        }
    }
}
