use lexa_core::{char_class, CharCursor};

use super::{Recognition, Scanner};

/// A letter followed by letters or digits.
///
/// Reserved words are recognized here too; the engine classifies them.
pub fn identifier(_scanner: &Scanner, cursor: &CharCursor<'_>) -> Recognition {
    let mut chars = cursor.rest().chars();
    if !chars.next().is_some_and(char_class::is_letter) {
        return Recognition::NoMatch;
    }
    let tail = chars
        .take_while(|&c| char_class::is_letter(c) || char_class::is_digit(c))
        .count();
    Recognition::Match { len: 1 + tail }
}
