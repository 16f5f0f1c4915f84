use lexa_core::CharCursor;

use super::{Recognition, Scanner};
use crate::LexErrorKind;

/// Line prefix through (excluding) the next line break or EOF.
pub fn line_comment(scanner: &Scanner, cursor: &CharCursor<'_>) -> Recognition {
    let prefix = scanner.comments().line();
    if !cursor.starts_with(prefix) {
        return Recognition::NoMatch;
    }
    let mut body = *cursor;
    let prefix_len = body.advance_n(prefix.chars().count());
    Recognition::Match {
        len: prefix_len + body.chars_until_line_break(),
    }
}

/// Opening delimiter through the first closing delimiter after it.
///
/// The search for the close starts after the whole opening delimiter, so
/// with `/*` and `*/` the text `/*/` is unterminated. Without a close the
/// comment runs to EOF and is reported by its opening delimiter.
pub fn block_comment(scanner: &Scanner, cursor: &CharCursor<'_>) -> Recognition {
    let open = scanner.comments().block_start();
    if !cursor.starts_with(open) {
        return Recognition::NoMatch;
    }
    let close = scanner.comments().block_end();
    let mut body = *cursor;
    let open_len = body.advance_n(open.chars().count());
    match body.char_offset_of(close) {
        Some(offset) => Recognition::Match {
            len: open_len + offset + close.chars().count(),
        },
        None => Recognition::MatchWithError {
            len: open_len + body.rest().chars().count(),
            kind: LexErrorKind::UnterminatedBlockComment,
            lexeme: open.to_owned(),
        },
    }
}
