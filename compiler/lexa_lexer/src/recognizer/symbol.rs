use lexa_core::CharCursor;

use super::{Recognition, Scanner};
use crate::table::SymbolTable;

fn longest(table: &SymbolTable, cursor: &CharCursor<'_>) -> Recognition {
    table
        .longest_match(cursor)
        .map_or(Recognition::NoMatch, |symbol| Recognition::Match {
            len: symbol.chars().count(),
        })
}

pub fn operator(scanner: &Scanner, cursor: &CharCursor<'_>) -> Recognition {
    longest(scanner.operators(), cursor)
}

pub fn punctuation(scanner: &Scanner, cursor: &CharCursor<'_>) -> Recognition {
    longest(scanner.punctuation(), cursor)
}

pub fn grouping(scanner: &Scanner, cursor: &CharCursor<'_>) -> Recognition {
    longest(scanner.grouping(), cursor)
}
