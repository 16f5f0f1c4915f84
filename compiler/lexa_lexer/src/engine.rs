//! The lexer engine: drives the recognizers over a whole text.
//!
//! # Algorithm
//!
//! At each position, after skipping spaces and line breaks:
//!
//! 1. A dangling block-comment close is an error spanning the delimiter.
//! 2. Otherwise the recognizers are tried in priority order and the first
//!    match wins. Comments are dropped, malformed matches become errors,
//!    everything else becomes a token.
//! 3. If nothing matched, a character outside the alphabet is an error of
//!    one character; anything else is skipped.
//!
//! Every iteration consumes at least one character, so a scan is linear in
//! the text length times the cost of one recognizer pass.

use std::fmt;

use lexa_config::LexerConfig;
use lexa_core::{char_class, CharCursor, Position};

use crate::policy::ErrorRecoveryPolicy;
use crate::recognizer::{self, automaton, Category, Recognition, RecognizeFn, Scanner};
use crate::{LexError, LexErrorKind, Token, TokenType};

/// How identifiers and numerics are recognized.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ScanStrategy {
    /// Hand-written loops.
    #[default]
    HandWritten,
    /// The generic automaton runner. Produces identical results.
    Automaton,
}

/// Tokens and errors of one scan, each in source order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct LexResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// No lexical errors at all.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Token>, Vec<LexError>) {
        (self.tokens, self.errors)
    }
}

/// Configured lexer.
///
/// Built once per configuration and stateless between calls: every
/// [`analyze`](Self::analyze) starts from scratch, so one engine can be
/// shared across threads.
#[derive(Clone)]
pub struct LexerEngine {
    scanner: Scanner,
    recognizers: &'static [(Category, RecognizeFn)],
    strategy: ScanStrategy,
}

impl fmt::Debug for LexerEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexerEngine")
            .field("scanner", &self.scanner)
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

impl LexerEngine {
    pub fn new(config: &LexerConfig) -> Self {
        Self::with_strategy(config, ScanStrategy::default())
    }

    pub fn with_strategy(config: &LexerConfig, strategy: ScanStrategy) -> Self {
        let strategy = match strategy {
            ScanStrategy::Automaton => match automaton::automata() {
                Ok(_) => ScanStrategy::Automaton,
                Err(err) => {
                    tracing::warn!(%err, "automata unavailable, using hand-written recognizers");
                    ScanStrategy::HandWritten
                }
            },
            ScanStrategy::HandWritten => ScanStrategy::HandWritten,
        };
        let recognizers: &'static [(Category, RecognizeFn)] = match strategy {
            ScanStrategy::HandWritten => &recognizer::HAND_WRITTEN,
            ScanStrategy::Automaton => &recognizer::AUTOMATON,
        };
        let scanner = Scanner::new(config);
        tracing::debug!(
            reserved_words = scanner.reserved_words().len(),
            operators = scanner.operators().len(),
            punctuation = scanner.punctuation().len(),
            grouping = scanner.grouping().len(),
            ?strategy,
            "lexer engine ready"
        );
        LexerEngine {
            scanner,
            recognizers,
            strategy,
        }
    }

    pub fn strategy(&self) -> ScanStrategy {
        self.strategy
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Scan `text` completely.
    ///
    /// Never fails: malformed input shows up in [`LexResult::errors`] and
    /// scanning resumes right after it.
    #[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
    pub fn analyze(&self, text: &str) -> LexResult {
        let mut cursor = CharCursor::new(text);
        let mut result = LexResult::default();

        while let Some(c) = cursor.peek() {
            if char_class::is_space_or_newline(c) {
                cursor.bump();
                continue;
            }
            let start = cursor;
            let position = cursor.position();

            let close = self.scanner.comments().block_end();
            if cursor.starts_with(close) {
                let len = cursor.advance_n(close.chars().count());
                result.errors.push(ErrorRecoveryPolicy::build_lex_error(
                    close,
                    position,
                    LexErrorKind::DanglingBlockCloseDelimiter,
                    len,
                ));
                continue;
            }

            match self.recognize(&cursor) {
                Some((category, Recognition::Match { len })) => {
                    cursor.advance_n(len.max(1));
                    let lexeme = cursor.slice_from(&start);
                    if let Some(kind) = self.token_type(category, lexeme) {
                        result.tokens.push(Token::new(kind, lexeme, position));
                    }
                }
                Some((_, Recognition::MatchWithError { len, kind, lexeme })) => {
                    let consumed = cursor.advance_n(len.max(1));
                    result.errors.push(ErrorRecoveryPolicy::build_lex_error(
                        lexeme, position, kind, consumed,
                    ));
                }
                Some((_, Recognition::NoMatch)) | None => {
                    self.recover(&mut cursor, position, &mut result.errors);
                }
            }
        }

        tracing::debug!(
            tokens = result.tokens.len(),
            errors = result.errors.len(),
            "scan finished"
        );
        result
    }

    /// First recognizer that matches at the cursor.
    fn recognize(&self, cursor: &CharCursor<'_>) -> Option<(Category, Recognition)> {
        self.recognizers.iter().find_map(|(category, recognize)| {
            let recognition = recognize(&self.scanner, cursor);
            recognition.is_match().then_some((*category, recognition))
        })
    }

    /// Token type for a well-formed match; `None` for comments.
    fn token_type(&self, category: Category, lexeme: &str) -> Option<TokenType> {
        let kind = match category {
            Category::LineComment | Category::BlockComment => return None,
            Category::String => TokenType::String,
            Category::Decimal => TokenType::Decimal,
            Category::Number => TokenType::Number,
            Category::Identifier if self.scanner.reserved_words().contains(lexeme) => {
                TokenType::ReservedWord
            }
            Category::Identifier => TokenType::Identifier,
            Category::Operator => TokenType::Operator,
            Category::Punctuation => TokenType::Punctuation,
            Category::Grouping => TokenType::Grouping,
        };
        Some(kind)
    }

    /// Nothing matched: report the character if it is outside the alphabet,
    /// then step over it.
    fn recover(&self, cursor: &mut CharCursor<'_>, position: Position, errors: &mut Vec<LexError>) {
        let allowed = self.scanner.alphabet().is_allowed_at(cursor);
        let start = *cursor;
        let consumed = cursor.advance_n(1);
        if !allowed {
            errors.push(ErrorRecoveryPolicy::build_lex_error(
                cursor.slice_from(&start),
                position,
                LexErrorKind::AlphabetViolation,
                consumed,
            ));
        }
    }
}

/// Scan `text` with a one-off engine for `config`.
pub fn analyze(config: &LexerConfig, text: &str) -> LexResult {
    LexerEngine::new(config).analyze(text)
}

#[cfg(test)]
mod tests;
