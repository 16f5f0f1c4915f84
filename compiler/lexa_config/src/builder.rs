//! Validating builder for [`LexerConfig`].

use rustc_hash::FxHashSet;

use crate::{
    CommentDelimiterKind, CommentDelimiters, ConfigError, ConfigErrors, LexerConfig, SymbolSet,
};

/// Collects configuration entries and validates them in [`build`](Self::build).
///
/// Entries are trimmed; validation happens only at the end so that every
/// problem is reported together.
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    reserved_words: Vec<String>,
    operators: Vec<String>,
    punctuation: Vec<String>,
    grouping: Vec<String>,
    line_comment: Option<String>,
    block_start: Option<String>,
    block_end: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn reserved_word(mut self, word: impl Into<String>) -> Self {
        self.reserved_words.push(word.into());
        self
    }

    #[must_use]
    pub fn reserved_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_words.extend(words.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn operator(mut self, symbol: impl Into<String>) -> Self {
        self.operators.push(symbol.into());
        self
    }

    #[must_use]
    pub fn operators<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operators.extend(symbols.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn punctuation(mut self, symbol: impl Into<String>) -> Self {
        self.punctuation.push(symbol.into());
        self
    }

    #[must_use]
    pub fn punctuations<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.punctuation.extend(symbols.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn grouping(mut self, symbol: impl Into<String>) -> Self {
        self.grouping.push(symbol.into());
        self
    }

    #[must_use]
    pub fn groupings<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grouping.extend(symbols.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn line_comment(mut self, prefix: impl Into<String>) -> Self {
        self.line_comment = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn block_comment(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.block_start = Some(start.into());
        self.block_end = Some(end.into());
        self
    }

    /// Set the delimiters that are present, leaving the rest unset.
    pub(crate) fn comment_parts(
        mut self,
        line: Option<String>,
        block_start: Option<String>,
        block_end: Option<String>,
    ) -> Self {
        self.line_comment = line;
        self.block_start = block_start;
        self.block_end = block_end;
        self
    }

    /// Validate everything and produce the immutable configuration.
    pub fn build(self) -> Result<LexerConfig, ConfigErrors> {
        let mut errors = Vec::new();

        let reserved_words = normalize_set(self.reserved_words, SymbolSet::ReservedWords, &mut errors);
        let operators = normalize_set(self.operators, SymbolSet::Operators, &mut errors);
        let punctuation = normalize_set(self.punctuation, SymbolSet::Punctuation, &mut errors);
        let grouping = normalize_set(self.grouping, SymbolSet::Grouping, &mut errors);

        let line = normalize_delimiter(self.line_comment, CommentDelimiterKind::Line, &mut errors);
        let block_start =
            normalize_delimiter(self.block_start, CommentDelimiterKind::BlockStart, &mut errors);
        let block_end =
            normalize_delimiter(self.block_end, CommentDelimiterKind::BlockEnd, &mut errors);

        let symbol_sets = [
            (SymbolSet::Operators, &operators),
            (SymbolSet::Punctuation, &punctuation),
            (SymbolSet::Grouping, &grouping),
        ];
        check_disjoint(&symbol_sets, &mut errors);

        if let Some(errors) = ConfigErrors::from_vec(errors) {
            return Err(errors);
        }

        Ok(LexerConfig {
            reserved_words,
            operators,
            punctuation,
            grouping,
            comments: CommentDelimiters {
                line,
                block_start,
                block_end,
            },
        })
    }
}

/// Trim every entry, drop duplicates (first occurrence wins) and record a
/// single `EmptySymbol` if any entry was blank.
fn normalize_set(entries: Vec<String>, set: SymbolSet, errors: &mut Vec<ConfigError>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::with_capacity(entries.len());
    let mut has_blank = false;
    for entry in entries {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            has_blank = true;
            continue;
        }
        if seen.insert(trimmed.to_owned()) {
            out.push(trimmed.to_owned());
        }
    }
    if has_blank {
        errors.push(ConfigError::EmptySymbol { set });
    }
    out
}

/// The trimmed delimiter, or an empty string after recording a
/// `MissingCommentDelimiter`.
fn normalize_delimiter(
    delimiter: Option<String>,
    which: CommentDelimiterKind,
    errors: &mut Vec<ConfigError>,
) -> String {
    match delimiter.as_deref().map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_owned(),
        _ => {
            errors.push(ConfigError::MissingCommentDelimiter { which });
            String::new()
        }
    }
}

/// Report each symbol shared by two of the symbol categories, once per pair.
fn check_disjoint(sets: &[(SymbolSet, &Vec<String>); 3], errors: &mut Vec<ConfigError>) {
    for (i, (first, first_symbols)) in sets.iter().enumerate() {
        for (second, second_symbols) in &sets[i + 1..] {
            let lookup: FxHashSet<&str> = second_symbols.iter().map(String::as_str).collect();
            for symbol in first_symbols.iter().filter(|s| lookup.contains(s.as_str())) {
                errors.push(ConfigError::DuplicateSymbol {
                    symbol: symbol.clone(),
                    first: *first,
                    second: *second,
                });
            }
        }
    }
}
