//! Alphabet and error-recovery policies.

use lexa_config::LexerConfig;
use lexa_core::{char_class, CharCursor, Position};
use rustc_hash::FxHashSet;

use crate::table::SymbolTable;
use crate::{LexError, LexErrorKind};

/// Decides which characters belong to the configured language.
///
/// The alphabet is the base classes (letters, digits, space/CR/LF, `"`)
/// plus every character of every configured symbol and comment delimiter.
/// Both views are precomputed at construction.
#[derive(Clone, Debug)]
pub struct AlphabetPolicy {
    /// Characters contributed by the configuration.
    symbol_chars: FxHashSet<char>,
    /// Every operator, punctuation and grouping symbol plus all three
    /// comment delimiters, for start-of-lexeme checks.
    lexeme_starts: SymbolTable,
}

impl AlphabetPolicy {
    pub fn new(config: &LexerConfig) -> Self {
        let comments = config.comments();
        let starts: Vec<String> = config
            .operators()
            .iter()
            .chain(config.punctuation())
            .chain(config.grouping())
            .cloned()
            .chain(
                [comments.line(), comments.block_start(), comments.block_end()]
                    .map(str::to_owned),
            )
            .collect();
        AlphabetPolicy {
            symbol_chars: config.symbol_chars(),
            lexeme_starts: SymbolTable::from_validated(&starts),
        }
    }

    /// Whether `c` may appear inside a string literal.
    ///
    /// Checked one character at a time: a character is allowed if it occurs
    /// anywhere in the configuration, even when the surrounding text does
    /// not form a configured symbol.
    #[inline]
    pub fn allows_in_string(&self, c: char) -> bool {
        char_class::is_base_alphabet(c) || self.symbol_chars.contains(&c)
    }

    /// Whether the character under the cursor could start any lexeme.
    ///
    /// EOF is allowed: there is nothing to report.
    pub fn is_allowed_at(&self, cursor: &CharCursor<'_>) -> bool {
        let Some(c) = cursor.peek() else {
            return true;
        };
        char_class::is_base_alphabet(c) || self.lexeme_starts.longest_match(cursor).is_some()
    }
}

/// Builds error records for malformed input.
pub struct ErrorRecoveryPolicy;

impl ErrorRecoveryPolicy {
    /// Error record for a span of `len` characters starting at `position`,
    /// reported as `text`.
    #[cold]
    pub fn build_lex_error(
        text: impl Into<String>,
        position: Position,
        kind: LexErrorKind,
        len: usize,
    ) -> LexError {
        let text = text.into();
        tracing::trace!(%position, ?kind, len, text = %text, "lexical error");
        LexError {
            text,
            position,
            kind,
            len,
        }
    }
}
