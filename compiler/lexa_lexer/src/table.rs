//! Symbol and reserved-word tables.
//!
//! A [`SymbolTable`] holds one configured category (operators, punctuation
//! or grouping) sorted longest-first, so the first symbol that matches at
//! the cursor is also the longest one. Declaration order only breaks ties
//! between symbols of equal length, and two distinct symbols of equal
//! length cannot both match at the same point.

use std::fmt;

use lexa_core::CharCursor;
use rustc_hash::FxHashSet;

/// A symbol table was given an empty string.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct EmptySymbol;

impl fmt::Display for EmptySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("symbol tables cannot contain the empty string")
    }
}

impl std::error::Error for EmptySymbol {}

/// Configured symbols of one category with longest-match lookup.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    /// Distinct symbols, longest first.
    symbols: Vec<String>,
    /// First character of every symbol, to reject most positions quickly.
    first_chars: FxHashSet<char>,
    /// Length in characters of the longest symbol.
    max_len: usize,
}

impl SymbolTable {
    /// Build a table, rejecting empty symbols.
    pub fn new<I, S>(symbols: I) -> Result<Self, EmptySymbol>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        if symbols.iter().any(String::is_empty) {
            return Err(EmptySymbol);
        }
        Ok(Self::from_symbols(symbols))
    }

    /// Build from a category of a validated configuration.
    pub(crate) fn from_validated(symbols: &[String]) -> Self {
        Self::from_symbols(symbols.iter().filter(|s| !s.is_empty()).cloned().collect())
    }

    fn from_symbols(symbols: Vec<String>) -> Self {
        let mut seen = FxHashSet::default();
        let mut symbols: Vec<String> = symbols
            .into_iter()
            .filter(|s| seen.insert(s.clone()))
            .collect();
        // Stable: equal lengths keep declaration order.
        symbols.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
        let first_chars = symbols.iter().filter_map(|s| s.chars().next()).collect();
        let max_len = symbols.first().map_or(0, |s| s.chars().count());
        SymbolTable {
            symbols,
            first_chars,
            max_len,
        }
    }

    /// Longest symbol the unread text starts with, without consuming.
    pub fn longest_match<'t>(&'t self, cursor: &CharCursor<'_>) -> Option<&'t str> {
        let first = cursor.peek()?;
        if !self.first_chars.contains(&first) {
            return None;
        }
        self.symbols
            .iter()
            .find(|s| cursor.starts_with(s))
            .map(String::as_str)
    }

    /// Exact membership.
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }

    /// Symbols, longest first.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Length in characters of the longest symbol (0 when empty).
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Case-sensitive set of reserved words.
#[derive(Clone, Debug, Default)]
pub struct ReservedWords {
    words: FxHashSet<String>,
}

impl ReservedWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ReservedWords {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive membership. No prefix matching.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests;
